//! Core data types for region lookup.
//!
//! - [`Region`]: A named region with its member country codes
//! - [`Country`]: A country referenced by its two-letter code
//! - [`Slug`], [`RegionType`], [`MatchKind`]: Identifier and classification types
//! - [`Identifier`]: The shapes of input accepted wherever an entity is expected
//!
//! ## Identifiers
//!
//! Lookups accept any of:
//!
//! | Input              | Example                        |
//! |--------------------|--------------------------------|
//! | Free-form name     | `"N. America"`, `"NORTH AMERICA"` |
//! | Slug               | `Slug::new("north_america")`   |
//! | Region handle      | `&region`                      |
//! | Country handle     | `&country`                     |
//!
//! A missing value (`None`) is accepted at the type level so that callers can
//! forward optional input, and is reported as [`LookupError::InvalidArgument`].
//!
//! [`Region`]: region::Region
//! [`Country`]: country::Country
//! [`Slug`]: types::Slug
//! [`RegionType`]: types::RegionType
//! [`MatchKind`]: types::MatchKind
//! [`Identifier`]: identifier::Identifier
//! [`LookupError::InvalidArgument`]: identifier::LookupError::InvalidArgument

pub mod country;
pub mod identifier;
pub mod region;
pub mod types;
