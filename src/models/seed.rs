use chrono::{DateTime, Duration, TimeZone, Utc};
use super::vendor::{Vendor, VendorId};

// name, type, location, hours, menu
const SAMPLES: [(&str, &str, &str, &str, &str); 12] = [
    ("Coimbatore Thatu Vadai", "Thatu Vadai", "Gandhipuram, Coimbatore", "4 PM - 9 PM", "Spicy Thatu Vadai, Butter Thatu Vadai"),
    ("Kanyakumari Banana Chips", "Banana Chips", "Beach Road, Kanyakumari", "10 AM - 8 PM", "Salted Banana Chips, Masala Banana Chips"),
    ("Kumar's Kothu Parotta", "Kothu Parotta", "Anna Nagar, Chennai", "6 PM - 12 AM", "Egg Kothu Parotta, Chicken Kothu Parotta"),
    ("Murugan Idli Shop", "Idli, Dosa", "T. Nagar, Chennai", "7 AM - 10 PM", "Ghee Idli, Podi Dosa, Filter Coffee"),
    ("Madurai Jigarthanda", "Jigarthanda", "West Masi Street, Madurai", "10 AM - 11 PM", "Regular Jigarthanda, Special Jigarthanda"),
    ("Kari Dosa Kadai", "Kari Dosa", "Goripalayam, Madurai", "6 PM - 11 PM", "Mutton Kari Dosa, Chicken Kari Dosa"),
    ("Coimbatore Thatu Vadai", "Thatu Vadai", "Gandhipuram, Coimbatore", "4 PM - 9 PM", "Spicy Thatu Vadai, Butter Thatu Vadai"),
    ("Kanyakumari Banana Chips", "Banana Chips", "Beach Road, Kanyakumari", "10 AM - 8 PM", "Salted Banana Chips, Masala Banana Chips"),
    ("Thanjavur Thalaiyatti Dosai", "Dosai", "Big Temple, Thanjavur", "7 AM - 10 PM", "Ghee Roast, Pesarattu"),
    ("Chettinad Kuzhi Paniyaram", "Paniyaram", "Karaikudi, Tamil Nadu", "5 PM - 10 PM", "Sweet Paniyaram, Spicy Paniyaram"),
    ("Vellore Bun Parotta", "Bun Parotta", "Gandhi Nagar, Vellore", "6 PM - 11 PM", "Bun Parotta with Salna"),
    ("Salem Egg Kalakki", "Kalakki", "Four Roads, Salem", "6 PM - 12 AM", "Egg Kalakki, Masala Kalakki"),
];

const SEED_RATING: u8 = 3;

/// The sample collection used when the slot has never been written or holds
/// unreadable data. Ids are fresh on every call.
pub fn seed_vendors(now: DateTime<Utc>) -> Vec<Vendor> {
    let fixed_base = Utc
        .with_ymd_and_hms(2025, 3, 6, 14, 0, 0)
        .single()
        .unwrap_or(now);

    SAMPLES
        .iter()
        .enumerate()
        .map(|(index, (name, vendor_type, location, hours, menu))| {
            let reported_at = match index {
                0 => now,
                1 => now - Duration::hours(1),
                n => fixed_base + Duration::minutes(10 * (n as i64 - 2)),
            };

            Vendor {
                id: VendorId::generate(),
                name: (*name).to_string(),
                vendor_type: (*vendor_type).to_string(),
                location: (*location).to_string(),
                hours: (*hours).to_string(),
                menu: (*menu).to_string(),
                rating: SEED_RATING,
                reported_at,
            }
        })
        .collect()
}
