//! # regionite
//!
//! A library for resolving geographic regions from free-form identifiers.
//!
//! Region names reach programs in many shapes: "North America", "NORTH
//! AMERICA", `north_america`, "N. America", "namerica". `regionite` reduces
//! all of them to a canonical slug and resolves it against a fixed catalog of
//! regions, each made up of a set of countries.
//!
//! ## Features
//!
//! - **Normalized lookup**: Case, spacing, underscores, and punctuation are ignored
//! - **Abbreviations**: "N. America" and "namerica" resolve to North America
//! - **Deterministic search**: Ranked by match kind, ties in catalog order
//! - **Country membership**: Test membership by code, name, or country handle
//! - **Typed input**: Names, slugs, and resolved handles share one [`Identifier`] type
//!
//! ## Example
//!
//! ```rust
//! use regionite::{Catalog, Resolver};
//!
//! // Load the embedded catalog of regions and countries
//! let catalog = Catalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! let region = resolver.resolve("north america").unwrap().unwrap();
//! assert_eq!(region.slug.as_str(), "north_america");
//! assert!(region.contains(&catalog, "United States").unwrap());
//!
//! for country in region.countries(&catalog) {
//!     println!("{}: {}", country.code, country.name);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Region and country catalog storage and indexing
//! - [`core`]: Region, country, slug, and identifier types
//! - [`matching`]: Normalization, resolution, and search
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{Catalog, CatalogError};
pub use crate::core::country::Country;
pub use crate::core::identifier::{Identifier, Identity, LookupError};
pub use crate::core::region::Region;
pub use crate::core::types::*;
pub use crate::matching::engine::{MatchingConfig, Resolver, SearchHit};
