use std::collections::BTreeMap;

use crate::core::traits::TraitSet;

use super::store::FungusCatalog;

/// Finds candidate records that might match a query
pub struct CandidateFinder<'a> {
    catalog: &'a FungusCatalog,
}

impl<'a> CandidateFinder<'a> {
    pub fn new(catalog: &'a FungusCatalog) -> Self {
        Self { catalog }
    }

    /// Count trait-value hits per record.
    ///
    /// Returns (position, hits) pairs in ascending catalog position. Records
    /// sharing no specified trait value with the query are absent.
    pub fn count_hits(&self, query: &TraitSet) -> Vec<(usize, u32)> {
        let mut hits: BTreeMap<usize, u32> = BTreeMap::new();

        for (t, value) in query.specified() {
            for &idx in self.catalog.positions_with(t, value) {
                *hits.entry(idx).or_default() += 1;
            }
        }

        hits.into_iter().collect()
    }

    /// Positions of records sharing at least one specified trait value with the query
    pub fn find_candidates(&self, query: &TraitSet) -> Vec<usize> {
        self.count_hits(query)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect()
    }
}
