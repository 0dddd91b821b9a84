pub mod hours;
pub mod time;

pub use hours::{validate_hours, HoursRange};
pub use time::{Clock, FixedClock, SystemClock};
