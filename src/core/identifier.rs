use thiserror::Error;

use crate::core::country::Country;
use crate::core::region::Region;
use crate::core::types::Slug;

/// Accepted inputs for operations that identify a region
pub const REGION_INPUTS: &str = "a string, slug, or region";

/// Accepted inputs for operations that identify a country
pub const COUNTRY_INPUTS: &str = "a string, slug, or country";

/// Errors raised for malformed lookup input.
///
/// Absence of a match is never an error; it is reported as `None`,
/// `false`, or an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("\"{operation}\" requires {accepted}; got {found}")]
    InvalidArgument {
        operation: &'static str,
        accepted: &'static str,
        found: &'static str,
    },
}

impl LookupError {
    pub(crate) fn invalid(
        operation: &'static str,
        accepted: &'static str,
        value: &Identifier<'_>,
    ) -> Self {
        Self::InvalidArgument {
            operation,
            accepted,
            found: value.kind(),
        }
    }
}

/// An entity whose identity is a single canonical key
pub trait Identity {
    /// The slug of a region or the code of a country
    fn identity_key(&self) -> &str;
}

/// Any value a caller may use to identify a region or country
#[derive(Debug, Clone, Copy)]
pub enum Identifier<'a> {
    /// No value was supplied
    Missing,
    /// Free-form text in any casing, spacing, or punctuation
    Name(&'a str),
    /// A pre-normalized slug or code
    Slug(&'a Slug),
    /// An already resolved region
    Region(&'a Region),
    /// An already resolved country
    Country(&'a Country),
}

impl Identifier<'_> {
    /// Short description used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "nil",
            Self::Name(_) => "a string",
            Self::Slug(_) => "a slug",
            Self::Region(_) => "a region",
            Self::Country(_) => "a country",
        }
    }

    /// The textual form of name and slug inputs
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Name(s) => Some(*s),
            Self::Slug(slug) => Some(slug.as_str()),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(s: &'a str) -> Self {
        Self::Name(s)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(s: &'a String) -> Self {
        Self::Name(s.as_str())
    }
}

impl<'a> From<&'a Slug> for Identifier<'a> {
    fn from(slug: &'a Slug) -> Self {
        Self::Slug(slug)
    }
}

impl<'a> From<&'a Region> for Identifier<'a> {
    fn from(region: &'a Region) -> Self {
        Self::Region(region)
    }
}

impl<'a> From<&'a Country> for Identifier<'a> {
    fn from(country: &'a Country) -> Self {
        Self::Country(country)
    }
}

impl<'a, T: Into<Identifier<'a>>> From<Option<T>> for Identifier<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
