use serde::{Deserialize, Serialize};

use crate::matching::normalize::slugify;

/// Canonical identifier for a region in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(pub String);

impl Slug {
    /// Wrap an existing slug without normalizing it
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Derive the slug for a display name
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name).into_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a region
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionType {
    Continent,
    Subregion,
    /// No category given in the catalog
    #[default]
    Unspecified,
    Other(String),
}

impl RegionType {
    /// Parse a region type tag, in any casing
    pub fn parse(s: &str) -> Self {
        match &*slugify(s) {
            "continent" => Self::Continent,
            "subregion" => Self::Subregion,
            "" | "unspecified" => Self::Unspecified,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Continent => "continent",
            Self::Subregion => "subregion",
            Self::Unspecified => "unspecified",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for RegionType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<RegionType> for String {
    fn from(region_type: RegionType) -> Self {
        region_type.as_str().to_string()
    }
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a search hit matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized query equals the region slug
    Exact,
    /// Query with separators removed equals the region name with separators removed
    Compact,
    /// Query matches an initials-abbreviated form of the region name
    Abbreviation,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Compact => write!(f, "compact"),
            Self::Abbreviation => write!(f, "abbreviation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_name() {
        assert_eq!(Slug::from_name("Oceania").as_str(), "oceania");
        assert_eq!(Slug::from_name("North America").as_str(), "north_america");
    }

    #[test]
    fn test_region_type_parse() {
        assert_eq!(RegionType::parse("continent"), RegionType::Continent);
        assert_eq!(RegionType::parse("Subregion"), RegionType::Subregion);
        assert_eq!(RegionType::parse(""), RegionType::Unspecified);
        assert_eq!(
            RegionType::parse("Trade Bloc"),
            RegionType::Other("trade_bloc".to_string())
        );
    }

    #[test]
    fn test_region_type_serde() {
        let json = serde_json::to_string(&RegionType::Continent).unwrap();
        assert_eq!(json, "\"continent\"");

        let parsed: RegionType = serde_json::from_str("\"subregion\"").unwrap();
        assert_eq!(parsed, RegionType::Subregion);
    }

    #[test]
    fn test_match_kind_ordering() {
        assert!(MatchKind::Exact < MatchKind::Compact);
        assert!(MatchKind::Compact < MatchKind::Abbreviation);
    }
}
