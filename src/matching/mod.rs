//! Identifier normalization, region resolution, and search.
//!
//! - [`Resolver`]: Main entry point for `resolve`, `is_region`, and `search`
//! - [`MatchingConfig`]: Whether `resolve` may fall back to compact and
//!   abbreviated names
//! - [`normalize`](normalize::normalize): Canonical slug and compact keys for
//!   free-form input
//!
//! ## Matching Algorithm
//!
//! Input is reduced to a slug (`"N. America"` → `n_america`) and a compact
//! key (`namerica`), then matched in order against:
//!
//! 1. **Slug**: the region slug derived from its name
//! 2. **Compact name**: the slug with separators removed (`northamerica`)
//! 3. **Abbreviation**: leading-word initials plus the remaining words
//!    (`namerica`)
//!
//! There is no substring or edit-distance matching, so results are
//! deterministic and typos do not match.
//!
//! ## Example
//!
//! ```rust
//! use regionite::{Catalog, Resolver};
//!
//! let catalog = Catalog::load_embedded().unwrap();
//! let resolver = Resolver::new(&catalog);
//!
//! let region = resolver.resolve("N. America").unwrap().unwrap();
//! assert_eq!(region.slug.as_str(), "north_america");
//!
//! for region in resolver.search("s. asia").unwrap() {
//!     println!("{}", region.name);
//! }
//! ```

pub mod engine;
pub mod normalize;

pub use engine::{MatchingConfig, Resolver, SearchHit};
