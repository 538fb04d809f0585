use crate::catalog::index::CandidateFinder;
use crate::catalog::store::FungusCatalog;
use crate::core::fungus::FungusRecord;
use crate::core::traits::TraitSet;
use crate::matching::scoring::MatchScore;

/// Result of matching a query against the catalog
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a FungusRecord,

    /// Match score details
    pub score: MatchScore,
}

impl<'a> MatchResult<'a> {
    pub fn new(record: &'a FungusRecord, query: &TraitSet) -> Self {
        Self {
            record,
            score: MatchScore::calculate(query, record),
        }
    }
}

/// Default minimum score for including a record in results
pub const DEFAULT_MIN_SCORE: u32 = 1;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Minimum score for including matches in results (never below 1)
    pub min_score: u32,
    /// Maximum number of results to return after ranking
    pub limit: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: None,
        }
    }
}

impl MatchingConfig {
    /// The threshold actually applied; zero-score records are always excluded
    #[must_use]
    pub fn effective_min_score(&self) -> u32 {
        self.min_score.max(1)
    }
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    catalog: &'a FungusCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a FungusCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a FungusCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Find matching records, highest score first.
    ///
    /// Records with equal scores keep their catalog order.
    pub fn find_matches(&self, query: &TraitSet) -> Vec<MatchResult<'a>> {
        let catalog = self.catalog;
        // Candidates come back in ascending catalog position
        let candidates = CandidateFinder::new(catalog).find_candidates(query);

        let min_score = self.config.effective_min_score();
        let mut results: Vec<MatchResult<'a>> = candidates
            .into_iter()
            .map(|idx| MatchResult::new(&catalog.records()[idx], query))
            .filter(|r| r.score.score >= min_score)
            .collect();

        sort_by_score(&mut results);

        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }

        tracing::debug!(
            catalog = catalog.len(),
            matches = results.len(),
            top_score = results.first().map_or(0, |r| r.score.score),
            "Ranked catalog against query"
        );

        results
    }

    /// Find the single best match
    #[must_use]
    pub fn find_best_match(&self, query: &TraitSet) -> Option<MatchResult<'a>> {
        self.find_matches(query).into_iter().next()
    }
}

/// Rank any ordered sequence of records against a query.
///
/// Records scoring zero are dropped; the rest are ordered by descending score,
/// with ties kept in input order. Pure and total: an empty query or an empty
/// slice yields an empty result.
#[must_use]
pub fn rank<'a>(query: &TraitSet, records: &'a [FungusRecord]) -> Vec<&'a FungusRecord> {
    let mut results: Vec<MatchResult<'a>> = records
        .iter()
        .map(|record| MatchResult::new(record, query))
        .filter(|r| !r.score.is_zero())
        .collect();

    sort_by_score(&mut results);

    results.into_iter().map(|r| r.record).collect()
}

/// Sort by score descending. `sort_by` is stable, so ties keep their input order.
fn sort_by_score(results: &mut [MatchResult<'_>]) {
    results.sort_by(|a, b| b.score.score.cmp(&a.score.score));
}
