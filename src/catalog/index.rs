use std::collections::{HashMap, HashSet};

use crate::core::region::Region;
use crate::core::types::MatchKind;
use crate::matching::normalize::{abbreviations, compact, NormalizedKey};

use super::store::Catalog;

/// Precomputed compact and abbreviated keys for every region.
///
/// Indices are pushed in declaration order, so every posting list is sorted.
#[derive(Debug, Default)]
pub struct KeyIndex {
    /// Index: compact name (`northamerica`) -> region indices
    compact_to_regions: HashMap<String, Vec<usize>>,

    /// Index: abbreviated name (`namerica`) -> region indices
    abbreviation_to_regions: HashMap<String, Vec<usize>>,
}

impl KeyIndex {
    /// Index the keys of the region at `index`
    pub fn insert(&mut self, index: usize, region: &Region) {
        let slug = region.slug.as_str();

        push_unique(self.compact_to_regions.entry(compact(slug)).or_default(), index);
        for key in abbreviations(slug) {
            push_unique(self.abbreviation_to_regions.entry(key).or_default(), index);
        }
    }

    /// Regions whose compact name equals the key
    pub fn compact_matches(&self, key: &str) -> &[usize] {
        self.compact_to_regions
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Regions with an abbreviated form equal to the key
    pub fn abbreviation_matches(&self, key: &str) -> &[usize] {
        self.abbreviation_to_regions
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn push_unique(indices: &mut Vec<usize>, index: usize) {
    if indices.last() != Some(&index) {
        indices.push(index);
    }
}

/// Finds regions that might match a normalized query
pub struct CandidateFinder<'a> {
    catalog: &'a Catalog,
}

impl<'a> CandidateFinder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Find the region whose slug equals the normalized query
    pub fn find_exact(&self, key: &NormalizedKey<'_>) -> Option<usize> {
        if key.is_empty() {
            return None;
        }
        self.catalog.index_of(&key.slug)
    }

    /// Find all candidate regions, best first.
    ///
    /// Exact slug matches come first, then compact-name matches, then
    /// abbreviation matches; within each kind, declaration order. A region
    /// is reported once, under its best kind.
    pub fn find_candidates(&self, key: &NormalizedKey<'_>) -> Vec<(usize, MatchKind)> {
        if key.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<usize> = HashSet::new();
        let mut result = Vec::new();

        if let Some(idx) = self.find_exact(key) {
            seen.insert(idx);
            result.push((idx, MatchKind::Exact));
        }

        let keys = self.catalog.keys();
        let groups = [
            (keys.compact_matches(&key.compact), MatchKind::Compact),
            (keys.abbreviation_matches(&key.compact), MatchKind::Abbreviation),
        ];

        for (indices, kind) in groups {
            for &idx in indices {
                if seen.insert(idx) {
                    result.push((idx, kind));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize;

    fn names(catalog: &Catalog, candidates: &[(usize, MatchKind)]) -> Vec<String> {
        candidates
            .iter()
            .map(|&(idx, _)| catalog.regions()[idx].name.clone())
            .collect()
    }

    #[test]
    fn test_key_index_entries() {
        let mut index = KeyIndex::default();
        index.insert(0, &Region::new("North America", ["us"]));
        index.insert(1, &Region::new("Oceania", ["au"]));

        assert_eq!(index.compact_matches("northamerica"), [0]);
        assert_eq!(index.compact_matches("oceania"), [1]);
        assert_eq!(index.abbreviation_matches("namerica"), [0]);
        assert!(index.abbreviation_matches("oceania").is_empty());
        assert!(index.compact_matches("north_america").is_empty());
    }

    #[test]
    fn test_find_candidates_exact_first() {
        let catalog = Catalog::load_embedded().unwrap();
        let finder = CandidateFinder::new(&catalog);

        let candidates = finder.find_candidates(&normalize("North America"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].1, MatchKind::Exact);
        assert_eq!(names(&catalog, &candidates), ["North America"]);
    }

    #[test]
    fn test_find_candidates_compact_and_abbreviation() {
        let catalog = Catalog::load_embedded().unwrap();
        let finder = CandidateFinder::new(&catalog);

        let compact = finder.find_candidates(&normalize("northamerica"));
        assert_eq!(compact.len(), 1);
        assert_eq!(compact[0].1, MatchKind::Compact);

        let abbreviated = finder.find_candidates(&normalize("n. america"));
        assert_eq!(abbreviated.len(), 1);
        assert_eq!(abbreviated[0].1, MatchKind::Abbreviation);
        assert_eq!(names(&catalog, &abbreviated), ["North America"]);
    }

    #[test]
    fn test_find_candidates_shared_abbreviation_in_declaration_order() {
        let catalog = Catalog::load_embedded().unwrap();
        let finder = CandidateFinder::new(&catalog);

        // "South Asia" and "Southeast Asia" both abbreviate to "sasia"
        let candidates = finder.find_candidates(&normalize("s. asia"));
        assert_eq!(names(&catalog, &candidates), ["South Asia", "Southeast Asia"]);
        assert!(candidates.iter().all(|&(_, kind)| kind == MatchKind::Abbreviation));
    }

    #[test]
    fn test_find_candidates_empty_query() {
        let catalog = Catalog::load_embedded().unwrap();
        let finder = CandidateFinder::new(&catalog);
        assert!(finder.find_candidates(&normalize("  ...  ")).is_empty());
        assert_eq!(finder.find_exact(&normalize("?!")), None);
    }
}
