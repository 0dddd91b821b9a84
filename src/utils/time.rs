use chrono::{DateTime, Local, NaiveTime, Timelike, Utc};

/// Source of "now" for timestamps and open/closed status.
pub trait Clock {
    /// Instant used for `reportedAt` on new vendors.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Wall-clock time of day the open/closed status is judged against.
    fn local_time(&self) -> NaiveTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock pinned to one instant and one time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub instant: DateTime<Utc>,
    pub time_of_day: NaiveTime,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, time_of_day: NaiveTime) -> Self {
        Self { instant, time_of_day }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    fn local_time(&self) -> NaiveTime {
        self.time_of_day
    }
}

/// Time of day as fractional hours since midnight. Seconds are ignored.
pub fn fractional_hours(time: NaiveTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Serde helpers for `reportedAt`: ISO-8601 UTC, millisecond precision, `Z`
/// suffix (`2025-03-06T14:00:00.000Z`).
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
