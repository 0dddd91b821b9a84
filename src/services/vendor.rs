use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{FilterCriteria, SortOrder, Vendor, VendorForm, VendorId};
use crate::services::notify::{LogNotifier, Notice, Notifier};
use crate::services::query;
use crate::storage::{Storage, VendorRepository};
use crate::utils::time::{Clock, SystemClock};

/// Owns the vendor collection. Every successful mutation is written through
/// to the repository before it becomes visible.
pub struct VendorService<S: Storage> {
    repository: VendorRepository<S>,
    vendors: Vec<Vendor>,
    pending_delete: Option<VendorId>,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
}

impl<S: Storage> VendorService<S> {
    pub fn new(repository: VendorRepository<S>) -> Self {
        Self::with_parts(repository, SystemClock, LogNotifier)
    }

    pub fn with_parts(
        mut repository: VendorRepository<S>,
        clock: impl Clock + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let loaded = repository.read(clock.now_utc());
        let seeded = loaded.is_fresh();
        let vendors = loaded.into_vendors();

        // Seed ids are random, so pin them down before anyone refers to one.
        // An unreadable slot is left alone until the next mutation.
        if seeded {
            if let Err(e) = repository.save(&vendors) {
                warn!(error = %e, "Failed to persist seed vendors");
            }
        }

        info!(count = vendors.len(), seeded = seeded, "Vendor store ready");

        Self {
            repository,
            vendors,
            pending_delete: None,
            clock: Box::new(clock),
            notifier: Box::new(notifier),
        }
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn get(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    pub fn repository(&self) -> &VendorRepository<S> {
        &self.repository
    }

    /// Creates a vendor when `edit_target` is `None`, otherwise updates it.
    pub fn submit(&mut self, form: &VendorForm, edit_target: Option<&VendorId>) -> Result<Vendor> {
        match edit_target {
            Some(id) => self.update(id, form),
            None => self.create(form),
        }
    }

    /// Adds a vendor at the front of the collection with a new id and the
    /// current instant as `reported_at`.
    pub fn create(&mut self, form: &VendorForm) -> Result<Vendor> {
        form.validate()?;

        let vendor = Vendor::from_form(form, self.clock.now_utc());
        let mut candidate = Vec::with_capacity(self.vendors.len() + 1);
        candidate.push(vendor.clone());
        candidate.extend(self.vendors.iter().cloned());

        self.commit(candidate, Notice::Added)?;
        info!(vendor_id = %vendor.id, name = %vendor.name, "Vendor added");
        Ok(vendor)
    }

    /// Overwrites the form fields of vendor `id` in place. Its id and
    /// `reported_at` are kept, and so is its position.
    pub fn update(&mut self, id: &VendorId, form: &VendorForm) -> Result<Vendor> {
        form.validate()?;

        let current = self.get(id).ok_or_else(|| Error::NotFound(id.clone()))?;
        let updated = current.apply_form(form);
        let candidate = self
            .vendors
            .iter()
            .map(|v| if &v.id == id { updated.clone() } else { v.clone() })
            .collect();

        self.commit(candidate, Notice::Updated)?;
        info!(vendor_id = %id, name = %updated.name, "Vendor updated");
        Ok(updated)
    }

    /// First step of a delete: marks `id` and returns it for confirmation.
    pub fn request_delete(&mut self, id: &VendorId) -> Result<&Vendor> {
        let index = self
            .vendors
            .iter()
            .position(|v| &v.id == id)
            .ok_or_else(|| Error::NotFound(id.clone()))?;
        self.pending_delete = Some(id.clone());
        Ok(&self.vendors[index])
    }

    pub fn pending_delete(&self) -> Option<&Vendor> {
        self.pending_delete.as_ref().and_then(|id| self.get(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step of a delete: removes the marked vendor.
    pub fn confirm_delete(&mut self) -> Result<Vendor> {
        let id = self.pending_delete.take().ok_or(Error::NoPendingDelete)?;
        let removed = self.get(&id).cloned().ok_or_else(|| Error::NotFound(id.clone()))?;
        let candidate = self.vendors.iter().filter(|v| v.id != id).cloned().collect();

        self.commit(candidate, Notice::Deleted)?;
        info!(vendor_id = %id, name = %removed.name, "Vendor deleted");
        Ok(removed)
    }

    /// Filtered and sorted view, judged against the clock's time of day.
    pub fn view(&self, criteria: &FilterCriteria, order: SortOrder) -> Vec<Vendor> {
        query::derive_view(&self.vendors, criteria, order, self.clock.local_time())
    }

    pub fn is_open(&self, vendor: &Vendor) -> bool {
        query::is_open(&vendor.hours, self.clock.local_time())
    }

    pub fn status_label(&self, vendor: &Vendor) -> &'static str {
        query::open_status_label(&vendor.hours, self.clock.local_time())
    }

    /// Options for the type selector.
    pub fn types(&self) -> Vec<String> {
        query::distinct_types(&self.vendors)
    }

    /// Clears the persistence slot and starts over from the seed.
    pub fn reset(&mut self) -> Result<()> {
        self.repository.clear()?;
        let vendors = self.repository.load(self.clock.now_utc());
        self.repository.save(&vendors)?;
        self.vendors = vendors;
        self.pending_delete = None;
        Ok(())
    }

    fn commit(&mut self, candidate: Vec<Vendor>, notice: Notice) -> Result<()> {
        if let Err(e) = self.repository.save(&candidate) {
            warn!(error = %e, "Failed to save vendors");
            self.notifier
                .notify(&Notice::Failed(format!("Could not save vendors: {}", e)));
            return Err(e);
        }
        self.vendors = candidate;
        self.notifier.notify(&notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::services::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;
    use crate::utils::time::FixedClock;
    use chrono::{NaiveTime, TimeZone, Utc};

    const KEY: &str = "streetFoodVendors";

    /// Slot that rejects every write.
    struct ReadOnlyStorage(MemoryStorage);

    impl Storage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(
            Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        )
    }

    fn service() -> (VendorService<MemoryStorage>, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let repo = VendorRepository::new(MemoryStorage::new(), KEY);
        (VendorService::with_parts(repo, clock(), notifier.clone()), notifier)
    }

    fn form(name: &str, hours: &str) -> VendorForm {
        VendorForm {
            name: name.to_string(),
            vendor_type: "Dosai".to_string(),
            location: "Big Temple, Thanjavur".to_string(),
            hours: hours.to_string(),
            menu: String::new(),
            rating: None,
        }
    }

    #[test]
    fn first_start_persists_seed() {
        let (service, _) = service();
        assert_eq!(service.vendors().len(), 12);
        let stored = service.repository().storage().get(KEY).unwrap();
        assert!(stored.is_some());
    }

    #[test]
    fn create_prepends_and_notifies() {
        let (mut service, notifier) = service();
        let vendor = service.create(&form("Night Dosai", "6 PM - 11 PM").with_rating(4)).unwrap();

        assert_eq!(service.vendors()[0], vendor);
        assert_eq!(vendor.reported_at, clock().instant);
        assert_eq!(vendor.rating, 4);
        assert_eq!(service.vendors().len(), 13);
        assert_eq!(notifier.notices(), vec![Notice::Added]);
        assert_eq!(service.repository().load(clock().instant)[0], vendor);
    }

    #[test]
    fn invalid_hours_leave_collection_untouched() {
        let (mut service, notifier) = service();
        let before = service.repository().storage().get(KEY).unwrap();

        let err = service.create(&form("No Dash", "11AM3PM")).unwrap_err();

        assert!(matches!(err, Error::Validation(ValidationError::InvalidHours)));
        assert_eq!(err.to_string(), "Hours must be in format '11 AM - 3 PM'");
        assert_eq!(service.vendors().len(), 12);
        assert_eq!(service.repository().storage().get(KEY).unwrap(), before);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn update_keeps_id_timestamp_and_position() {
        let (mut service, notifier) = service();
        let target = service.vendors()[3].clone();

        let mut edit = VendorForm::from_vendor(&target);
        edit.name = "Murugan Idli Kadai".to_string();
        let updated = service.submit(&edit, Some(&target.id)).unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.reported_at, target.reported_at);
        assert_eq!(service.vendors()[3].name, "Murugan Idli Kadai");
        assert_eq!(service.vendors().len(), 12);
        assert_eq!(notifier.notices(), vec![Notice::Updated]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (mut service, _) = service();
        let id = VendorId::from("missing");
        let err = service.update(&id, &form("Ghost", "7 AM - 9 AM")).unwrap_err();
        assert!(matches!(err, Error::NotFound(missing) if missing == id));
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut service, notifier) = service();
        let id = service.vendors()[0].id.clone();

        assert!(matches!(service.confirm_delete(), Err(Error::NoPendingDelete)));

        service.request_delete(&id).unwrap();
        service.cancel_delete();
        assert!(matches!(service.confirm_delete(), Err(Error::NoPendingDelete)));
        assert_eq!(service.vendors().len(), 12);

        service.request_delete(&id).unwrap();
        assert_eq!(service.pending_delete().map(|v| &v.id), Some(&id));
        let removed = service.confirm_delete().unwrap();

        assert_eq!(removed.id, id);
        assert!(service.get(&id).is_none());
        assert!(service.pending_delete().is_none());
        assert_eq!(notifier.notices(), vec![Notice::Deleted]);
    }

    #[test]
    fn readded_vendor_gets_new_id() {
        let (mut service, _) = service();
        let original = service.create(&form("Twice", "7 AM - 9 AM")).unwrap();
        service.request_delete(&original.id).unwrap();
        service.confirm_delete().unwrap();
        let again = service.create(&form("Twice", "7 AM - 9 AM")).unwrap();
        assert_ne!(again.id, original.id);
    }

    #[test]
    fn failed_write_keeps_collection_and_reports() {
        let notifier = RecordingNotifier::new();
        let mut storage = MemoryStorage::new();
        storage.set(KEY, "[]").unwrap();
        let repo = VendorRepository::new(ReadOnlyStorage(storage), KEY);
        let mut service = VendorService::with_parts(repo, clock(), notifier.clone());

        let err = service.create(&form("Lost", "7 AM - 9 AM")).unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert!(service.vendors().is_empty());
        assert!(notifier.notices()[0].is_failure());
    }

    #[test]
    fn view_and_types_follow_collection() {
        let (mut service, _) = service();
        service.create(&form("Noon Dosai", "11 AM - 3 PM")).unwrap();

        let criteria = FilterCriteria {
            search: "noon".to_string(),
            ..FilterCriteria::default()
        };
        let view = service.view(&criteria, SortOrder::Desc);
        assert_eq!(view.len(), 1);
        assert!(service.is_open(&view[0]));
        assert_eq!(service.status_label(&view[0]), "Open");
        assert!(service.types().contains(&"Dosai".to_string()));
    }

    #[test]
    fn reset_restores_seed() {
        let (mut service, _) = service();
        let ids: Vec<VendorId> = service.vendors().iter().map(|v| v.id.clone()).collect();
        for id in ids {
            service.request_delete(&id).unwrap();
            service.confirm_delete().unwrap();
        }
        assert!(service.vendors().is_empty());

        service.reset().unwrap();
        assert_eq!(service.vendors().len(), 12);
    }
}
