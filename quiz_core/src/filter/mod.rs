//! Candidate Filter - maps a partial set of answers to the surviving characters.
//!
//! Filtering runs in two passes:
//! 1. **Base pass**: each character is checked against every answered
//!    question, in script order, stopping at the first mismatch
//! 2. **Overrides**: if a narrative override fires for the answers, the
//!    survivors of the base pass are cut down to the characters it names
//!
//! The filter is pure and total. An answer set nothing agrees with yields an
//! empty result, never an error.

mod overrides;

pub use overrides::*;

use character_catalog::{Catalog, Character};
use tracing::debug;

use crate::script::{AnswerSet, Question, QUESTIONS};

/// Check a character against every answered question in `script`.
///
/// Unanswered questions impose no constraint.
pub fn passes_base(character: &Character, answers: &AnswerSet, script: &[Question]) -> bool {
    script.iter().all(|question| match answers.get(question.key) {
        Some(answer) => character.matches(question.key, answer),
        None => true,
    })
}

/// Filter the catalog with the default script and the builtin overrides.
pub fn filter<'c>(catalog: &'c Catalog, answers: &AnswerSet) -> Vec<&'c Character> {
    CandidateFilter::with_defaults().apply(catalog, answers)
}

/// The candidate filter with its override policy.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    script: &'static [Question],
    policy: OverridePolicy,
}

impl CandidateFilter {
    /// Create a filter over the quiz script with the given overrides.
    pub fn new(policy: OverridePolicy) -> Self {
        Self {
            script: QUESTIONS,
            policy,
        }
    }

    /// Create a filter with the builtin overrides.
    pub fn with_defaults() -> Self {
        Self::new(OverridePolicy::builtin())
    }

    pub fn policy(&self) -> &OverridePolicy {
        &self.policy
    }

    /// Run the base pass only.
    pub fn base_candidates<'c>(&self, catalog: &'c Catalog, answers: &AnswerSet) -> Vec<&'c Character> {
        catalog
            .iter()
            .filter(|character| passes_base(character, answers, self.script))
            .collect()
    }

    /// Compute the surviving candidates, in catalog order.
    pub fn apply<'c>(&self, catalog: &'c Catalog, answers: &AnswerSet) -> Vec<&'c Character> {
        if answers.is_empty() {
            return catalog.iter().collect();
        }

        let base = self.base_candidates(catalog, answers);
        let base_count = base.len();
        let candidates = self.policy.apply(answers, base);

        debug!(
            answers = answers.len(),
            base = base_count,
            candidates = candidates.len(),
            "filtered catalog"
        );
        candidates
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
