//! Free-text address lookup over the parcel catalog.
//!
//! Matching is an approximate substring search on the `address` field only:
//! case-insensitive, but diacritics are compared literally. A catalog entry
//! qualifies when `distance / query length <= threshold`, and qualifying
//! entries are ranked by ascending edit distance.

use std::rc::Rc;

use log::debug;
use parcel_catalog::{Catalog, CatalogEntry};
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::matching::{match_key, substring_distance};

/// Catalog index used when a committed query matches nothing.
pub const FALLBACK_INDEX: usize = 0;

/// One ranked catalog entry for a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    /// Index into the catalog
    pub index: usize,
    /// Edit distance between the query and the closest substring of the address
    pub distance: usize,
    /// `distance` divided by the query length, in `[0, 1]`
    pub score: f64,
    /// The whole address equals the query, ignoring case
    pub exact: bool,
}

/// Outcome of a committed search.
///
/// There is no variant for an empty query. Empty or whitespace-only text is a
/// no-op reported as `Err(ResolveError::NoQueryText)` (or
/// `SelectionError::NoQueryText` from the controller); callers treat it as
/// "nothing to show" and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// Best-ranked entry above the threshold
    Matched { index: usize, distance: usize },
    /// Nothing qualified; the default parcel is substituted
    Fallback { index: usize },
}

impl Resolution {
    pub fn index(&self) -> usize {
        match *self {
            Resolution::Matched { index, .. } | Resolution::Fallback { index } => index,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

/// Fuzzy matcher over a fixed catalog.
///
/// Built once by the composition root and handed the catalog it searches;
/// there is no shared global instance.
///
/// ```rust
/// use std::rc::Rc;
/// use parcel_catalog::Catalog;
/// use parcel_core::{AddressResolver, ResolverConfig};
///
/// let catalog = Rc::new(Catalog::embedded().unwrap());
/// let resolver = AddressResolver::new(catalog, ResolverConfig::default());
/// assert_eq!(resolver.resolve("Quang Trung").unwrap().index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AddressResolver {
    catalog: Rc<Catalog>,
    config: ResolverConfig,
    keys: Vec<Vec<char>>,
}

impl AddressResolver {
    pub fn new(catalog: Rc<Catalog>, config: ResolverConfig) -> Self {
        let keys = catalog
            .iter()
            .map(|entry| match_key(&entry.record.address))
            .collect();
        Self {
            catalog,
            config,
            keys,
        }
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Every qualifying entry, best first.
    ///
    /// Ordered by distance, then exact whole-address matches, then catalog
    /// index. Empty or whitespace-only queries match nothing.
    pub fn rank(&self, query: &str) -> Vec<Match> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let pattern = match_key(query);
        let pattern_len = pattern.len() as f64;

        let mut matches: Vec<Match> = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(index, key)| {
                let distance = substring_distance(key, &pattern);
                let score = distance as f64 / pattern_len;
                (score <= self.config.threshold).then(|| Match {
                    index,
                    distance,
                    score,
                    exact: *key == pattern,
                })
            })
            .collect();

        matches.sort_by_key(|m| (m.distance, !m.exact, m.index));
        matches
    }

    /// Autocomplete mode: at most `suggestion_limit` matches, best first.
    pub fn suggest(&self, query: &str) -> Vec<Match> {
        let mut matches = self.rank(query);
        matches.truncate(self.config.suggestion_limit);
        matches
    }

    /// Commit mode: the single best match, or the fallback parcel when
    /// nothing qualifies.
    pub fn resolve(&self, query: &str) -> Result<Resolution, ResolveError> {
        if query.trim().is_empty() {
            return Err(ResolveError::NoQueryText);
        }
        if self.catalog.is_empty() {
            return Err(ResolveError::EmptyCatalog);
        }

        let resolution = match self.rank(query).first() {
            Some(best) => Resolution::Matched {
                index: best.index,
                distance: best.distance,
            },
            None => Resolution::Fallback {
                index: FALLBACK_INDEX,
            },
        };
        debug!("resolver: {:?} -> {:?}", query.trim(), resolution);
        Ok(resolution)
    }

    /// Catalog entry for a match.
    pub fn entry(&self, m: &Match) -> Option<&CatalogEntry> {
        self.catalog.get(m.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, embedded};

    fn resolver() -> AddressResolver {
        AddressResolver::new(embedded(), ResolverConfig::default())
    }

    #[test]
    fn exact_address_resolves_to_its_index() {
        let resolver = resolver();
        let addresses: Vec<String> = resolver
            .catalog()
            .addresses()
            .iter()
            .map(|a| a.to_string())
            .collect();
        for (i, address) in addresses.iter().enumerate() {
            assert_eq!(resolver.resolve(address).unwrap().index(), i);
            assert_eq!(resolver.resolve(&address.to_uppercase()).unwrap().index(), i);
            assert_eq!(resolver.resolve(&address.to_lowercase()).unwrap().index(), i);
        }
    }

    #[test]
    fn partial_address_resolves() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve("Quang Trung").unwrap(),
            Resolution::Matched {
                index: 1,
                distance: 0
            }
        );
        assert_eq!(resolver.resolve("hàng bông").unwrap().index(), 2);
        assert_eq!(resolver.resolve("  Nguyễn Văn Cừ ").unwrap().index(), 0);
    }

    #[test]
    fn typo_still_matches() {
        let resolver = resolver();
        let resolution = resolver.resolve("Quang Trng").unwrap();
        assert_eq!(
            resolution,
            Resolution::Matched {
                index: 1,
                distance: 1
            }
        );
    }

    #[test]
    fn no_match_falls_back_to_first_entry() {
        let resolver = resolver();
        let resolution = resolver.resolve("zzz-nonexistent-zzz").unwrap();
        assert_eq!(resolution, Resolution::Fallback { index: 0 });
        assert!(resolution.is_fallback());
    }

    #[test]
    fn empty_query() {
        let resolver = resolver();
        assert!(resolver.suggest("").is_empty());
        assert!(resolver.suggest("   ").is_empty());
        assert_eq!(resolver.resolve(""), Err(ResolveError::NoQueryText));
        assert_eq!(resolver.resolve(" \t"), Err(ResolveError::NoQueryText));
    }

    #[test]
    fn empty_catalog_has_no_fallback() {
        let resolver = AddressResolver::new(catalog(&[]), ResolverConfig::default());
        assert_eq!(resolver.resolve("Quang Trung"), Err(ResolveError::EmptyCatalog));
        assert!(resolver.suggest("Quang Trung").is_empty());
    }

    #[test]
    fn suggest_is_limited_and_sorted() {
        let addresses = [
            "1 Lê Lợi, Quận 1",
            "2 Lê Lai, Quận 1",
            "3 Lê Lợi, Quận 3",
            "4 Lê Lộc, Quận 4",
            "5 Lê Lợi, Quận 5",
            "6 Lê Lợi, Quận 6",
            "7 Lê Lợi, Quận 7",
        ];
        let resolver = AddressResolver::new(catalog(&addresses), ResolverConfig::default());
        let suggestions = resolver.suggest("Lê Lợi");
        assert_eq!(suggestions.len(), 5);
        for pair in suggestions.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        // Exact substrings first, in catalog order.
        assert_eq!(suggestions[0].index, 0);
        assert_eq!(suggestions[0].distance, 0);
        assert_eq!(suggestions[1].index, 2);
    }

    #[test]
    fn suggest_respects_configured_limit() {
        let config = ResolverConfig::new(0.4, 2).unwrap();
        let resolver = AddressResolver::new(embedded(), config);
        assert!(resolver.suggest("Hà Nội").len() <= 2);
        assert_eq!(resolver.suggest("Hà Nội").len(), 2);
    }

    #[test]
    fn whole_address_match_wins_ties() {
        let resolver = AddressResolver::new(
            catalog(&["12 Hàng Bạc, Hà Nội", "12 Hàng Bạc"]),
            ResolverConfig::default(),
        );
        let ranked = resolver.rank("12 hàng bạc");
        assert_eq!(ranked[0].index, 1);
        assert!(ranked[0].exact);
        assert_eq!(ranked[1].index, 0);
        assert_eq!(ranked[1].distance, 0);
    }

    #[test]
    fn zero_threshold_requires_exact_substring() {
        let config = ResolverConfig::new(0.0, 5).unwrap();
        let resolver = AddressResolver::new(embedded(), config);
        assert!(resolver.suggest("Quang Trng").is_empty());
        assert_eq!(resolver.suggest("Quang Trung").len(), 1);
    }

    #[test]
    fn entry_returns_catalog_record() {
        let resolver = resolver();
        let m = resolver.suggest("Hoàn Kiếm")[0];
        let entry = resolver.entry(&m).unwrap();
        assert_eq!(entry.record.lot_number, "503");
    }
}
