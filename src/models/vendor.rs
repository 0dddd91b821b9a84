use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::utils::hours::validate_hours;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Opaque vendor identity. New ids are v4 UUIDs, but any string (or number)
/// already in storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VendorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for VendorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VendorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => VendorId(text),
            RawId::Number(number) => VendorId(number.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    #[serde(rename = "type")]
    pub vendor_type: String,
    pub location: String,
    pub hours: String,
    #[serde(default)]
    pub menu: String,
    /// 1-5, or 0 when not yet rated.
    #[serde(default)]
    pub rating: u8,
    #[serde(with = "crate::utils::time::iso_millis")]
    pub reported_at: DateTime<Utc>,
}

impl Vendor {
    /// Builds a fresh record from a validated form.
    pub(crate) fn from_form(form: &VendorForm, reported_at: DateTime<Utc>) -> Self {
        Self {
            id: VendorId::generate(),
            name: form.name.clone(),
            vendor_type: form.vendor_type.clone(),
            location: form.location.clone(),
            hours: form.hours.clone(),
            menu: form.menu.clone(),
            rating: form.rating_or(0),
            reported_at,
        }
    }

    /// Overlays the submitted fields. `id` and `reported_at` are kept.
    pub(crate) fn apply_form(&self, form: &VendorForm) -> Self {
        Self {
            id: self.id.clone(),
            name: form.name.clone(),
            vendor_type: form.vendor_type.clone(),
            location: form.location.clone(),
            hours: form.hours.clone(),
            menu: form.menu.clone(),
            rating: form.rating_or(self.rating),
            reported_at: self.reported_at,
        }
    }
}

/// What the add/edit form submits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorForm {
    pub name: String,
    pub vendor_type: String,
    pub location: String,
    pub hours: String,
    pub menu: String,
    pub rating: Option<u8>,
}

impl VendorForm {
    /// Pre-fills the form with a vendor's current values, as the edit
    /// surface does.
    pub fn from_vendor(vendor: &Vendor) -> Self {
        Self {
            name: vendor.name.clone(),
            vendor_type: vendor.vendor_type.clone(),
            location: vendor.location.clone(),
            hours: vendor.hours.clone(),
            menu: vendor.menu.clone(),
            rating: Some(vendor.rating).filter(|r| is_valid_rating(i64::from(*r))),
        }
    }

    /// Out-of-range input is dropped and the previous value stays.
    pub fn set_rating(&mut self, value: i64) {
        if is_valid_rating(value) {
            self.rating = u8::try_from(value).ok();
        }
    }

    pub fn with_rating(mut self, value: i64) -> Self {
        self.set_rating(value);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Name"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField("Location"));
        }
        if self.hours.trim().is_empty() {
            return Err(ValidationError::MissingField("Hours"));
        }
        if !validate_hours(&self.hours) {
            return Err(ValidationError::InvalidHours);
        }
        Ok(())
    }

    fn rating_or(&self, fallback: u8) -> u8 {
        self.rating
            .filter(|r| is_valid_rating(i64::from(*r)))
            .unwrap_or(fallback)
    }
}

fn is_valid_rating(value: i64) -> bool {
    (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value)
}
