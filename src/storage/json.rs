use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::Storage;
use crate::error::Result;
use crate::models::{seed_vendors, Vendor};

/// Where a loaded collection came from.
#[derive(Debug)]
pub(crate) enum Loaded {
    Stored(Vec<Vendor>),
    /// Slot absent: seed data, safe to write.
    Fresh(Vec<Vendor>),
    /// Slot present but unreadable: seed data that must not replace it.
    Fallback(Vec<Vendor>),
}

impl Loaded {
    pub(crate) fn is_fresh(&self) -> bool {
        matches!(self, Loaded::Fresh(_))
    }

    pub(crate) fn into_vendors(self) -> Vec<Vendor> {
        match self {
            Loaded::Stored(vendors) | Loaded::Fresh(vendors) | Loaded::Fallback(vendors) => vendors,
        }
    }
}

/// Reads and writes the whole vendor collection as one JSON array in a
/// single storage slot.
///
/// An absent slot means the collection was never initialized and yields the
/// seed data. A slot holding `[]` is an emptied collection and stays empty.
/// A slot that cannot be read or decoded also yields the seed data; that
/// failure is logged, not returned, and the slot is left as it was.
pub struct VendorRepository<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> VendorRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self, now: DateTime<Utc>) -> Vec<Vendor> {
        self.read(now).into_vendors()
    }

    /// Like `load`, but says whether the seed stood in for stored data.
    pub(crate) fn read(&self, now: DateTime<Utc>) -> Loaded {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key = %self.key, "Storage slot is empty, using seed vendors");
                return Loaded::Fresh(seed_vendors(now));
            }
            Err(e) => {
                warn!(error = %e, key = %self.key, "Failed to read storage slot, using seed vendors");
                return Loaded::Fallback(seed_vendors(now));
            }
        };

        match serde_json::from_str::<Vec<Vendor>>(&raw) {
            Ok(vendors) => {
                debug!(key = %self.key, count = vendors.len(), "Loaded vendors");
                Loaded::Stored(vendors)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    key = %self.key,
                    line = e.line(),
                    column = e.column(),
                    "Stored vendors are not valid, using seed vendors"
                );
                Loaded::Fallback(seed_vendors(now))
            }
        }
    }

    /// Replaces the slot with the full collection.
    pub fn save(&mut self, vendors: &[Vendor]) -> Result<()> {
        let json = serde_json::to_string(vendors)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = vendors.len(), "Saved vendors");
        Ok(())
    }

    /// Drops the slot; the next `load` starts from the seed again.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        info!(key = %self.key, "Cleared storage slot");
        Ok(())
    }
}
