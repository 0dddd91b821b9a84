//! Derived view of the vendor collection: open/closed status, filtering,
//! searching and ordering. Everything here is a pure function of its inputs.

use chrono::NaiveTime;
use std::collections::HashSet;

use crate::models::{FilterCriteria, SortOrder, Vendor};
use crate::utils::hours::HoursRange;

/// Whether `hours` contains `now`. Unparseable hours are never open.
pub fn is_open(hours: &str, now: NaiveTime) -> bool {
    HoursRange::parse(hours).is_some_and(|range| range.contains(now))
}

pub fn open_status_label(hours: &str, now: NaiveTime) -> &'static str {
    if is_open(hours, now) { "Open" } else { "Closed" }
}

pub fn matches(vendor: &Vendor, criteria: &FilterCriteria, now: NaiveTime) -> bool {
    criteria.vendor_type.matches(&vendor.vendor_type)
        && criteria.status.matches(is_open(&vendor.hours, now))
        && matches_search(vendor, &criteria.search)
}

fn matches_search(vendor: &Vendor, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    vendor.name.to_lowercase().contains(&needle) || vendor.location.to_lowercase().contains(&needle)
}

pub fn filter(vendors: &[Vendor], criteria: &FilterCriteria, now: NaiveTime) -> Vec<Vendor> {
    vendors
        .iter()
        .filter(|v| matches(v, criteria, now))
        .cloned()
        .collect()
}

/// Orders by `reported_at`. Ties keep their relative order.
pub fn sort(vendors: &mut [Vendor], order: SortOrder) {
    match order {
        SortOrder::Desc => vendors.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Asc => vendors.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
}

pub fn derive_view(
    vendors: &[Vendor],
    criteria: &FilterCriteria,
    order: SortOrder,
    now: NaiveTime,
) -> Vec<Vendor> {
    let mut view = filter(vendors, criteria, now);
    sort(&mut view, order);
    view
}

/// Non-blank vendor types, first appearance first, each once.
pub fn distinct_types(vendors: &[Vendor]) -> Vec<String> {
    let mut seen = HashSet::new();
    vendors
        .iter()
        .map(|v| v.vendor_type.as_str())
        .filter(|t| !t.trim().is_empty())
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}
