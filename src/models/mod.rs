mod criteria;
mod seed;
mod vendor;

pub use criteria::{FilterCriteria, SortOrder, StatusFilter, TypeFilter};
pub use seed::seed_vendors;
pub use vendor::{Vendor, VendorForm, VendorId, MAX_RATING, MIN_RATING};
