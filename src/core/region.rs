use serde::{Deserialize, Serialize};

use crate::catalog::store::Catalog;
use crate::core::country::Country;
use crate::core::identifier::{Identifier, Identity, LookupError, COUNTRY_INPUTS};
use crate::core::types::{RegionType, Slug};

const CONTAINS: &str = "Region::contains";

/// A named geographic region made up of countries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Human-readable display name
    pub name: String,

    /// Canonical identifier derived from the name (populated on load)
    #[serde(default, skip_deserializing)]
    pub slug: Slug,

    /// Category of region
    #[serde(rename = "type", default)]
    pub region_type: RegionType,

    /// Lowercase two-letter codes of member countries, in declared order
    #[serde(default)]
    pub country_codes: Vec<String>,
}

impl Region {
    pub fn new<I, S>(name: impl Into<String>, country_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut region = Self {
            name: name.into(),
            slug: Slug::default(),
            region_type: RegionType::Unspecified,
            country_codes: country_codes
                .into_iter()
                .map(|code| code.as_ref().to_string())
                .collect(),
        };
        region.rebuild_derived();
        region
    }

    #[must_use]
    pub fn with_type(mut self, region_type: RegionType) -> Self {
        self.region_type = region_type;
        self
    }

    /// Recompute the slug and lowercase the member codes after loading
    /// or modifying the name
    pub fn rebuild_derived(&mut self) {
        self.slug = Slug::from_name(&self.name);
        for code in &mut self.country_codes {
            *code = code.trim().to_ascii_lowercase();
        }
    }

    /// Member country codes in declared order
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.country_codes
    }

    /// Member countries materialized from the catalog.
    ///
    /// Codes without a catalog entry are skipped.
    #[must_use]
    pub fn countries<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Country> {
        self.country_codes
            .iter()
            .filter_map(|code| {
                let country = catalog.country(code);
                if country.is_none() {
                    tracing::debug!(region = %self.slug, code = %code, "country code not in catalog");
                }
                country
            })
            .collect()
    }

    /// Check whether a country is a member of this region.
    ///
    /// The country may be given by code, by name in any casing or spacing,
    /// or as a resolved [`Country`]. Unknown countries are not members.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidArgument`] for a missing value or a
    /// region passed where a country is expected.
    pub fn contains<'v>(
        &self,
        catalog: &Catalog,
        value: impl Into<Identifier<'v>>,
    ) -> Result<bool, LookupError> {
        let value = value.into();
        let code = match value {
            Identifier::Country(country) => country.identity_key().to_ascii_lowercase(),
            Identifier::Name(_) | Identifier::Slug(_) => {
                let text = value.text().unwrap_or_default();
                match catalog.country_code_for(text) {
                    Some(code) => code,
                    None => return Ok(false),
                }
            }
            Identifier::Missing | Identifier::Region(_) => {
                return Err(LookupError::invalid(CONTAINS, COUNTRY_INPUTS, &value));
            }
        };

        Ok(self.country_codes.iter().any(|c| *c == code))
    }
}

impl Identity for Region {
    fn identity_key(&self) -> &str {
        self.slug.as_str()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    #[test]
    fn test_slug_derived_from_name() {
        assert_eq!(Region::new("Oceania", ["au"]).slug.as_str(), "oceania");
        assert_eq!(
            Region::new("North America", ["us", "ca", "mexico"]).slug.as_str(),
            "north_america"
        );
    }

    #[test]
    fn test_name_and_type() {
        let region = Region::new("North America", ["us", "ca", "mx"]);
        assert_eq!(region.name, "North America");
        assert_eq!(region.region_type, RegionType::Unspecified);

        let region = Region::new("North America", Vec::<String>::new())
            .with_type(RegionType::Continent);
        assert_eq!(region.region_type, RegionType::Continent);
        assert_eq!(region.region_type.as_str(), "continent");
    }

    #[test]
    fn test_codes_in_declared_order() {
        let region = Region::new("North America", ["us", "ca", "mx"]);
        assert_eq!(region.codes(), ["us", "ca", "mx"]);
        assert!(region.codes().iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_codes_are_lowercased() {
        let region = Region::new("North America", ["US", " Ca"]);
        assert_eq!(region.codes(), ["us", "ca"]);
    }

    #[test]
    fn test_countries_materialized() {
        let catalog = catalog();
        let region = Region::new("North America", ["us"]);
        let countries = region.countries(&catalog);

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].code, "us");
        assert_eq!(countries[0].name, "United States");
    }

    #[test]
    fn test_countries_skips_unknown_codes() {
        let catalog = catalog();
        let region = Region::new("Somewhere", ["us", "zz", "ca"]);
        let codes: Vec<_> = region
            .countries(&catalog)
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, ["us", "ca"]);
    }

    #[test]
    fn test_contains_name_variants() {
        let catalog = catalog();
        let region = Region::new("North America", ["us"]);

        for name in ["united states", "UNITED STATES", "United States", "united_states"] {
            assert!(region.contains(&catalog, name).unwrap(), "name: {name}");
        }
        assert!(region.contains(&catalog, &Slug::new("us")).unwrap());
        assert!(region.contains(&catalog, "US").unwrap());
    }

    #[test]
    fn test_contains_country_object() {
        let catalog = catalog();
        let region = Region::new("North America", ["us"]);
        let country = Country::new("us", "United States");
        assert!(region.contains(&catalog, &country).unwrap());
    }

    #[test]
    fn test_contains_non_member() {
        let catalog = catalog();
        let region = Region::new("North America", ["us"]);
        assert!(!region.contains(&catalog, &Slug::new("gb")).unwrap());
        assert!(!region.contains(&catalog, "Canada").unwrap());
        assert!(!region.contains(&catalog, "atlantis").unwrap());
    }

    #[test]
    fn test_contains_rejects_regions_and_missing() {
        let catalog = catalog();
        let region = Region::new("North America", ["us"]);
        let other = Region::new("Europe", ["gb"]);

        let err = region.contains(&catalog, &other).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"Region::contains\" requires a string, slug, or country; got a region"
        );
        assert!(region.contains(&catalog, None::<&str>).is_err());
    }
}
