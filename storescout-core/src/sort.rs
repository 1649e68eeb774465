use serde::{Deserialize, Serialize};

/// Review sort order, as exposed to callers.
///
/// Each storefront speaks its own sort vocabulary; the fetchers translate
/// this enum into the wire value so format churn stays out of the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent reviews first
    #[default]
    Newest,
    /// Sorted by star rating
    Rating,
    /// Most helpful / most voted-on reviews first
    Helpfulness,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Rating => write!(f, "rating"),
            SortOrder::Helpfulness => write!(f, "helpfulness"),
        }
    }
}

/// Error returned when a sort order fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrderParseError(pub String);

impl std::fmt::Display for SortOrderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown sort order '{}' (expected: newest, rating, helpfulness)",
            self.0
        )
    }
}

impl std::error::Error for SortOrderParseError {}

impl std::str::FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "rating" => Ok(SortOrder::Rating),
            "helpfulness" | "helpful" => Ok(SortOrder::Helpfulness),
            _ => Err(SortOrderParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_orders() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("rating".parse::<SortOrder>().unwrap(), SortOrder::Rating);
        assert_eq!(
            "helpfulness".parse::<SortOrder>().unwrap(),
            SortOrder::Helpfulness
        );
        assert_eq!(
            "Helpful".parse::<SortOrder>().unwrap(),
            SortOrder::Helpfulness
        );
    }

    #[test]
    fn test_parse_unknown_sort() {
        assert!("oldest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_default_is_newest() {
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }
}
