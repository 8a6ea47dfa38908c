//! Region and country catalog storage and indexing.
//!
//! The catalog holds the known regions, each with its member country codes,
//! and the countries those codes refer to. An embedded catalog is compiled
//! into the library and validated by the build script; custom catalogs of the
//! same JSON shape can be loaded from files.
//!
//! ## Embedded Catalog
//!
//! - **Continents**: Africa, Asia, Europe, North America, South America,
//!   Oceania, Antarctica
//! - **Subregions**: Central America, Caribbean, the four parts of Europe,
//!   Middle East, North and Sub-Saharan Africa, Central/East/South/Southeast
//!   Asia, Australia and New Zealand
//!
//! ## Example
//!
//! ```rust
//! use regionite::Catalog;
//!
//! let catalog = Catalog::load_embedded().unwrap();
//!
//! for (name, slug) in catalog.names_and_slugs() {
//!     println!("{name}: {slug}");
//! }
//!
//! let north_america = catalog.get("north_america").unwrap();
//! assert_eq!(north_america.name, "North America");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use regionite::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = Catalog::load_from_file(Path::new("my_regions.json")).unwrap();
//! ```

pub mod index;
pub mod store;
