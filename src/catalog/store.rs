use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::catalog::index::KeyIndex;
use crate::core::country::Country;
use crate::core::region::Region;
use crate::core::types::Slug;
use crate::matching::normalize::{normalize, NormalizedKey};
use crate::utils::validation::normalize_country_code;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Region '{name}' has no letters or digits to derive a slug from")]
    EmptySlug { name: String },

    #[error("Region '{name}' duplicates slug '{slug}'")]
    DuplicateSlug { slug: Slug, name: String },

    #[error("Invalid country code '{code}' in {context}")]
    InvalidCountryCode { code: String, context: String },

    #[error("Country code '{0}' is declared more than once")]
    DuplicateCountryCode(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub regions: Vec<Region>,
    pub countries: Vec<Country>,
}

/// The region and country catalog with lookup indexes.
///
/// Built once and read-only afterwards; lookups borrow it.
#[derive(Debug, Default)]
pub struct Catalog {
    /// All regions in declaration order
    regions: Vec<Region>,

    /// All countries in declaration order
    countries: Vec<Country>,

    /// Index: region slug -> index in regions vec
    slug_to_index: HashMap<Slug, usize>,

    /// Index: compact and abbreviated keys -> region indices
    keys: KeyIndex,

    /// Index: country code -> index in countries vec
    code_to_country: HashMap<String, usize>,

    /// Index: country name slug -> index in countries vec
    country_slug_to_index: HashMap<String, usize>,

    /// Index: country name compact key -> index in countries vec
    country_compact_to_index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/regions.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Build a catalog from already parsed records
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for country in data.countries {
            catalog.add_country(country)?;
        }
        for mut region in data.regions {
            region.rebuild_derived();
            catalog.add_region(region)?;
        }

        tracing::debug!(
            regions = catalog.regions.len(),
            countries = catalog.countries.len(),
            "Loaded region catalog"
        );

        Ok(catalog)
    }

    /// Add a country to the catalog
    pub fn add_country(&mut self, mut country: Country) -> Result<(), CatalogError> {
        let code = normalize_country_code(&country.code).ok_or_else(|| {
            CatalogError::InvalidCountryCode {
                code: country.code.clone(),
                context: format!("country '{}'", country.name),
            }
        })?;
        if self.code_to_country.contains_key(&code) {
            return Err(CatalogError::DuplicateCountryCode(code));
        }
        country.code = code;

        let index = self.countries.len();
        self.code_to_country.insert(country.code.clone(), index);

        let key = normalize(&country.name);
        self.country_compact_to_index.entry(key.compact).or_insert(index);
        self.country_slug_to_index
            .entry(key.slug.into_owned())
            .or_insert(index);

        self.countries.push(country);
        Ok(())
    }

    /// Add a region to the catalog.
    ///
    /// The region's slug must already be derived (see [`Region::rebuild_derived`]).
    pub fn add_region(&mut self, region: Region) -> Result<(), CatalogError> {
        if region.slug.as_str().is_empty() {
            return Err(CatalogError::EmptySlug {
                name: region.name.clone(),
            });
        }
        if self.slug_to_index.contains_key(&region.slug) {
            return Err(CatalogError::DuplicateSlug {
                slug: region.slug.clone(),
                name: region.name.clone(),
            });
        }
        if let Some(code) = region
            .country_codes
            .iter()
            .find(|code| normalize_country_code(code).is_none())
        {
            return Err(CatalogError::InvalidCountryCode {
                code: code.clone(),
                context: format!("region '{}'", region.name),
            });
        }

        let index = self.regions.len();
        self.slug_to_index.insert(region.slug.clone(), index);
        self.keys.insert(index, &region);
        self.regions.push(region);
        Ok(())
    }

    /// Get a region by its exact slug
    pub fn get(&self, slug: &str) -> Option<&Region> {
        self.index_of(slug).map(|idx| &self.regions[idx])
    }

    /// Position of a region in declaration order, by exact slug
    pub fn index_of(&self, slug: &str) -> Option<usize> {
        self.slug_to_index.get(slug).copied()
    }

    /// All regions in declaration order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Display names of all regions in declaration order
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    /// Slugs of all regions in declaration order
    pub fn region_slugs(&self) -> Vec<&Slug> {
        self.regions.iter().map(|r| &r.slug).collect()
    }

    /// Display name to slug pairs in declaration order
    pub fn names_and_slugs(&self) -> impl Iterator<Item = (&str, &Slug)> + '_ {
        self.regions.iter().map(|r| (r.name.as_str(), &r.slug))
    }

    /// Compact and abbreviation key index over the regions
    pub fn keys(&self) -> &KeyIndex {
        &self.keys
    }

    /// All countries in declaration order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Get a country by its two-letter code, in any case
    pub fn country(&self, code: &str) -> Option<&Country> {
        let code = normalize_country_code(code)?;
        self.code_to_country
            .get(&code)
            .map(|&idx| &self.countries[idx])
    }

    /// Find a country by code or by name in any casing, spacing, or punctuation
    pub fn find_country(&self, text: &str) -> Option<&Country> {
        self.find_country_by_key(&normalize(text))
    }

    /// The member code a country identifier refers to.
    ///
    /// Anything shaped like a two-letter code is taken as a code even if the
    /// catalog has no such country; otherwise the text is matched against
    /// country names.
    pub fn country_code_for(&self, text: &str) -> Option<String> {
        let key = normalize(text);
        if let Some(code) = normalize_country_code(&key.slug) {
            return Some(code);
        }
        self.find_country_by_key(&key).map(|c| c.code.clone())
    }

    fn find_country_by_key(&self, key: &NormalizedKey<'_>) -> Option<&Country> {
        if let Some(country) = self.country(&key.slug) {
            return Some(country);
        }
        self.country_slug_to_index
            .get(&*key.slug)
            .or_else(|| self.country_compact_to_index.get(&key.compact))
            .map(|&idx| &self.countries[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            regions: self.regions.clone(),
            countries: self.countries.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of regions in catalog
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if catalog has no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RegionType;

    fn small_data() -> CatalogData {
        CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: None,
            regions: vec![
                Region::new("North America", ["us", "ca", "mx"]).with_type(RegionType::Continent),
                Region::new("Oceania", ["au"]),
            ],
            countries: vec![
                Country::new("us", "United States"),
                Country::new("ca", "Canada"),
                Country::new("mx", "Mexico"),
                Country::new("au", "Australia"),
            ],
        }
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = Catalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.countries().is_empty());
    }

    #[test]
    fn test_catalog_get_by_slug() {
        let catalog = Catalog::load_embedded().unwrap();

        let region = catalog.get("north_america");
        assert!(region.is_some());
        let region = region.unwrap();
        assert_eq!(region.name, "North America");
        assert_eq!(region.region_type, RegionType::Continent);
        assert!(region.codes().iter().any(|c| c == "us"));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = Catalog::load_embedded().unwrap();
        assert!(catalog.get("atlantis").is_none());
        assert!(catalog.get("North America").is_none());
    }

    #[test]
    fn test_enumeration_in_declaration_order() {
        let catalog = Catalog::from_data(small_data()).unwrap();

        assert_eq!(catalog.region_names(), ["North America", "Oceania"]);
        let slugs: Vec<&str> = catalog.region_slugs().iter().map(|s| s.as_str()).collect();
        assert_eq!(slugs, ["north_america", "oceania"]);

        let pairs: Vec<(&str, &str)> = catalog
            .names_and_slugs()
            .map(|(name, slug)| (name, slug.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("North America", "north_america"), ("Oceania", "oceania")]
        );
        assert_eq!(catalog.regions()[1].name, "Oceania");
    }

    #[test]
    fn test_from_json_derives_slugs() {
        let json = r#"{
            "version": "1.0.0",
            "regions": [{ "name": "Middle East", "country_codes": ["IL", "jo"] }],
            "countries": [
                { "code": "il", "name": "Israel" },
                { "code": "jo", "name": "Jordan" }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let region = catalog.get("middle_east").unwrap();

        assert_eq!(region.region_type, RegionType::Unspecified);
        assert_eq!(region.codes(), ["il", "jo"]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut data = small_data();
        data.regions.push(Region::new("north-america", ["us"]));

        let err = Catalog::from_data(data).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_punctuation_only_name_rejected() {
        let json = r#"{
            "version": "1.0.0",
            "regions": [
                {"name": "...", "country_codes": []},
                {"name": "Oceania", "country_codes": []}
            ],
            "countries": []
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySlug { ref name } if name == "..."));
        assert!(err.to_string().contains("'...'"));
    }

    #[test]
    fn test_invalid_country_code_rejected() {
        let mut data = small_data();
        data.countries.push(Country::new("usa", "United States of America"));

        let err = Catalog::from_data(data).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCountryCode { .. }));

        let mut data = small_data();
        data.regions.push(Region::new("Bad Region", ["u1"]));
        assert!(Catalog::from_data(data).is_err());
    }

    #[test]
    fn test_duplicate_country_rejected() {
        let mut data = small_data();
        data.countries.push(Country::new("US", "America"));

        let err = Catalog::from_data(data).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCountryCode(code) if code == "us"));
    }

    #[test]
    fn test_find_country() {
        let catalog = Catalog::from_data(small_data()).unwrap();

        assert_eq!(catalog.country("US").unwrap().name, "United States");
        assert_eq!(catalog.find_country("united states").unwrap().code, "us");
        assert_eq!(catalog.find_country("United_States").unwrap().code, "us");
        assert_eq!(catalog.find_country("unitedstates").unwrap().code, "us");
        assert_eq!(catalog.find_country("mx").unwrap().name, "Mexico");
        assert!(catalog.find_country("atlantis").is_none());
    }

    #[test]
    fn test_country_code_for() {
        let catalog = Catalog::from_data(small_data()).unwrap();

        assert_eq!(catalog.country_code_for("Canada"), Some("ca".to_string()));
        assert_eq!(catalog.country_code_for("GB"), Some("gb".to_string()));
        assert_eq!(catalog.country_code_for("atlantis"), None);
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = Catalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("north_america"));

        let reloaded = Catalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.region_names(), catalog.region_names());
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
