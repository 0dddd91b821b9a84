use chrono::NaiveTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::utils::time::fractional_hours;

static HOURS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})(?::([0-9]{2}))?\s*(AM|PM)\s*-\s*([0-9]{1,2})(?::([0-9]{2}))?\s*(AM|PM)$")
        .expect("hours pattern is valid")
});

/// True iff `text`, trimmed, reads like `11 AM - 3 PM` or `7:30am-10pm`.
/// Purely syntactic: an opening time after the closing time still passes.
pub fn validate_hours(text: &str) -> bool {
    HOURS_PATTERN.is_match(text.trim())
}

/// Opening and closing time of day, in fractional hours since midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursRange {
    pub open: f64,
    pub close: f64,
}

impl HoursRange {
    pub fn parse(text: &str) -> Option<Self> {
        let caps = HOURS_PATTERN.captures(text.trim())?;
        Some(Self {
            open: to_hours(&caps, 1, 2, 3)?,
            close: to_hours(&caps, 4, 5, 6)?,
        })
    }

    /// Inclusive on both ends. A range crossing midnight (open > close)
    /// never contains anything.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let now = fractional_hours(time);
        now >= self.open && now <= self.close
    }
}

fn to_hours(caps: &Captures<'_>, hour: usize, minute: usize, meridiem: usize) -> Option<f64> {
    let mut h: u32 = caps.get(hour)?.as_str().parse().ok()?;
    let m: u32 = match caps.get(minute) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let pm = caps.get(meridiem)?.as_str().eq_ignore_ascii_case("PM");

    if pm && h < 12 {
        h += 12;
    }
    if !pm && h == 12 {
        h = 0;
    }

    Some(f64::from(h) + f64::from(m) / 60.0)
}
