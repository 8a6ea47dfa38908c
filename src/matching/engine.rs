use crate::catalog::index::CandidateFinder;
use crate::catalog::store::Catalog;
use crate::core::identifier::{Identifier, Identity, LookupError, REGION_INPUTS};
use crate::core::region::Region;
use crate::core::types::MatchKind;
use crate::matching::normalize::normalize;

const RESOLVE: &str = "Region::resolve";
const IS_REGION: &str = "Region::is_region";
const SEARCH: &str = "Region::search";

/// A region found by [`Resolver::search_hits`]
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    /// The matched region
    pub region: &'a Region,

    /// How the query matched it
    pub kind: MatchKind,
}

/// Configuration for the resolver
#[derive(Debug, Clone, Copy)]
pub struct MatchingConfig {
    /// Let `resolve` fall back to compact and abbreviated names when the
    /// slug has no exact match
    pub compact_fallback: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            compact_fallback: true,
        }
    }
}

impl MatchingConfig {
    /// Resolve by exact slug only
    #[must_use]
    pub fn strict() -> Self {
        Self {
            compact_fallback: false,
        }
    }
}

/// Resolves identifiers to regions in a catalog
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    config: MatchingConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with default configuration
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a resolver with custom configuration
    pub fn with_config(catalog: &'a Catalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Resolve an identifier to a single region.
    ///
    /// A region handle resolves to the catalog entry with the same slug.
    /// Names and slugs are normalized and matched against region slugs,
    /// then (unless configured strict) against compact and abbreviated
    /// names. No match is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidArgument`] for a missing value or a
    /// country handle.
    pub fn resolve<'v>(
        &self,
        value: impl Into<Identifier<'v>>,
    ) -> Result<Option<&'a Region>, LookupError> {
        let value = value.into();
        match value {
            Identifier::Region(region) => Ok(self.catalog.get(region.identity_key())),
            Identifier::Name(_) | Identifier::Slug(_) => {
                Ok(self.resolve_text(value.text().unwrap_or_default()))
            }
            Identifier::Missing | Identifier::Country(_) => {
                Err(LookupError::invalid(RESOLVE, REGION_INPUTS, &value))
            }
        }
    }

    /// Check whether an identifier names a region.
    ///
    /// Unlike [`Resolver::resolve`], a country handle is simply not a region.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidArgument`] for a missing value.
    pub fn is_region<'v>(&self, value: impl Into<Identifier<'v>>) -> Result<bool, LookupError> {
        let value = value.into();
        match value {
            Identifier::Missing => Err(LookupError::invalid(IS_REGION, REGION_INPUTS, &value)),
            Identifier::Country(_) => Ok(false),
            _ => Ok(self.resolve(value)?.is_some()),
        }
    }

    /// Find all regions matching an identifier, best first.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidArgument`] for a missing value or a
    /// country handle.
    pub fn search<'v>(
        &self,
        value: impl Into<Identifier<'v>>,
    ) -> Result<Vec<&'a Region>, LookupError> {
        Ok(self
            .search_hits(value)?
            .into_iter()
            .map(|hit| hit.region)
            .collect())
    }

    /// Find all regions matching an identifier along with how each matched.
    ///
    /// Exact slug matches rank first, then compact names, then
    /// abbreviations; ties keep declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidArgument`] for a missing value or a
    /// country handle.
    pub fn search_hits<'v>(
        &self,
        value: impl Into<Identifier<'v>>,
    ) -> Result<Vec<SearchHit<'a>>, LookupError> {
        let value = value.into();
        let text = match value {
            Identifier::Region(region) => {
                return Ok(self
                    .catalog
                    .get(region.identity_key())
                    .map(|region| SearchHit {
                        region,
                        kind: MatchKind::Exact,
                    })
                    .into_iter()
                    .collect());
            }
            Identifier::Name(_) | Identifier::Slug(_) => value.text().unwrap_or_default(),
            Identifier::Missing | Identifier::Country(_) => {
                return Err(LookupError::invalid(SEARCH, REGION_INPUTS, &value));
            }
        };

        let key = normalize(text);
        let finder = CandidateFinder::new(self.catalog);
        let regions = self.catalog.regions();
        let hits: Vec<SearchHit<'a>> = finder
            .find_candidates(&key)
            .into_iter()
            .map(|(idx, kind)| SearchHit {
                region: &regions[idx],
                kind,
            })
            .collect();

        tracing::debug!(query = text, hits = hits.len(), "Region search");
        Ok(hits)
    }

    fn resolve_text(&self, text: &str) -> Option<&'a Region> {
        let key = normalize(text);
        let finder = CandidateFinder::new(self.catalog);

        let index = if self.config.compact_fallback {
            finder.find_candidates(&key).first().map(|&(idx, _)| idx)
        } else {
            finder.find_exact(&key)
        };

        let region = index.map(|idx| &self.catalog.regions()[idx]);
        tracing::debug!(
            query = text,
            slug = %key.slug,
            resolved = region.map(|r| r.slug.as_str()),
            "Region lookup"
        );
        region
    }
}
