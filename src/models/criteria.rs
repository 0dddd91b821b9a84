use std::fmt;
use std::str::FromStr;

/// Which vendor types the derived view keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `Vendor::vendor_type`.
    Exact(String),
}

impl TypeFilter {
    pub fn matches(&self, vendor_type: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Exact(wanted) => wanted == vendor_type,
        }
    }
}

impl From<&str> for TypeFilter {
    fn from(value: &str) -> Self {
        if value == "all" {
            TypeFilter::All
        } else {
            TypeFilter::Exact(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn matches(self, is_open: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => is_open,
            StatusFilter::Closed => !is_open,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "open" => Ok(StatusFilter::Open),
            "closed" => Ok(StatusFilter::Closed),
            other => Err(format!("unknown status filter '{other}' (expected all, open or closed)")),
        }
    }
}

/// Ordering of the derived view by `reportedAt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Desc => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Desc => "Newest",
            SortOrder::Asc => "Oldest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desc" => Ok(SortOrder::Desc),
            "asc" => Ok(SortOrder::Asc),
            other => Err(format!("unknown sort order '{other}' (expected desc or asc)")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Desc => f.write_str("desc"),
            SortOrder::Asc => f.write_str("asc"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub vendor_type: TypeFilter,
    pub status: StatusFilter,
    /// Case-insensitive substring of name or location. Empty matches all.
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_all_is_keyword() {
        assert_eq!(TypeFilter::from("all"), TypeFilter::All);
        assert_eq!(TypeFilter::from("Dosai"), TypeFilter::Exact("Dosai".to_string()));
        assert!(!TypeFilter::from("Dosai").matches("dosai"));
    }

    #[test]
    fn status_and_order_parse() {
        assert_eq!("Open".parse::<StatusFilter>(), Ok(StatusFilter::Open));
        assert_eq!("closed".parse::<StatusFilter>(), Ok(StatusFilter::Closed));
        assert!("shut".parse::<StatusFilter>().is_err());
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn toggle_flips_order() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggle(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggle().label(), "Newest");
        assert_eq!(SortOrder::Desc.toggle().to_string(), "asc");
    }
}
