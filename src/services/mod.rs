pub mod notify;
pub mod query;
pub mod vendor;

pub use notify::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use vendor::VendorService;
