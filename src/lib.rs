pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{Error, Result, ValidationError};
pub use models::{FilterCriteria, SortOrder, StatusFilter, TypeFilter, Vendor, VendorForm};
pub use services::{Notice, Notifier, VendorService};
pub use storage::{FileStorage, MemoryStorage, Storage, VendorRepository};
