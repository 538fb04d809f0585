use serde::Serialize;

use crate::core::fungus::FungusRecord;
use crate::core::traits::{Trait, TraitSet};

/// How well a record agrees with a query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    /// Number of trait dimensions that matched, one point each
    pub score: u32,

    /// Dimensions that contributed a point, in dimension order
    pub matched: Vec<Trait>,
}

impl MatchScore {
    /// Score a record against a query.
    ///
    /// A dimension earns a point only when both values are non-empty and equal.
    /// An unspecified value on either side is ignored.
    #[must_use]
    pub fn calculate(query: &TraitSet, record: &FungusRecord) -> Self {
        let matched: Vec<Trait> = query
            .specified()
            .filter(|&(t, value)| record.traits.get(t) == value)
            .map(|(t, _)| t)
            .collect();

        Self {
            score: count_to_u32(matched.len()),
            matched,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.score == 0
    }
}

/// Trait dimensions are a small fixed set, so the count always fits
#[inline]
fn count_to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Edibility;

    fn destroying_angel() -> FungusRecord {
        FungusRecord::new("Amanita", "Bisporigera", Edibility::DeadlyToxic).with_traits(
            TraitSet::new()
                .with_spore_print_color("white")
                .with_hymenium("gills"),
        )
    }

    #[test]
    fn test_each_matching_dimension_scores_one() {
        let record = destroying_angel();

        let q = TraitSet::new().with_spore_print_color("white");
        assert_eq!(MatchScore::calculate(&q, &record).score, 1);

        let q = q.with_hymenium("gills");
        let score = MatchScore::calculate(&q, &record);
        assert_eq!(score.score, 2);
        assert_eq!(score.matched, vec![Trait::SporePrintColor, Trait::Hymenium]);
    }

    #[test]
    fn test_mismatch_does_not_penalize() {
        let record = destroying_angel();
        let q = TraitSet::new()
            .with_spore_print_color("brown")
            .with_hymenium("gills");
        let score = MatchScore::calculate(&q, &record);
        assert_eq!(score.score, 1);
        assert_eq!(score.matched, vec![Trait::Hymenium]);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let score = MatchScore::calculate(&TraitSet::new(), &destroying_angel());
        assert!(score.is_zero());
        assert!(score.matched.is_empty());
    }

    #[test]
    fn test_empty_record_trait_never_matches() {
        let record = FungusRecord::new("Test Shroom", "Three", Edibility::Inedible)
            .with_traits(TraitSet::new().with_hymenium("ridges"));

        // Both sides empty on spore print color: still no point
        let q = TraitSet::new().with_hymenium("gills");
        assert!(MatchScore::calculate(&q, &record).is_zero());
    }

    #[test]
    fn test_comparison_is_exact() {
        let record = destroying_angel();
        let q = TraitSet::new().with_spore_print_color("White");
        assert!(MatchScore::calculate(&q, &record).is_zero());
    }
}
