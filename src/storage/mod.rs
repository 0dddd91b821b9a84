pub mod file;
pub mod json;
pub mod memory;

pub use file::FileStorage;
pub use json::VendorRepository;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A string-valued key-value store, the way a browser's local storage is
/// one. Every `set` replaces the whole value.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
