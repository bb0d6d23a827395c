use crate::models::{Profile, Role, ScoredCandidate, ComparisonResult, RecommendationWeights, UnitSet};
use crate::core::{
    explain::explain_match,
    scoring::{mentor_relevance, student_relevance},
    units::{compare_units, jaccard_percentage},
};

/// Result size used when the caller does not ask for one
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks mentors for students and students for mentors
///
/// # Ranking
/// 1. Score every candidate by shared units plus the role bonus
/// 2. Order by score (descending), then candidate id, then input order
/// 3. Truncate to the limit and attach a reason to each survivor
///
/// Stateless apart from the weights, so clones are cheap and can be shared
/// freely between workers.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: RecommendationWeights,
}

type RelevanceFn = fn(&Profile, &Profile, &RecommendationWeights) -> (u32, Vec<String>);

impl Recommender {
    pub fn new(weights: RecommendationWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RecommendationWeights::default(),
        }
    }

    pub fn weights(&self) -> &RecommendationWeights {
        &self.weights
    }

    /// Rank mentors for a student
    ///
    /// Each mentor scores 10 per unit shared with the student plus a flat
    /// bonus when they list any expertise area (default weights).
    ///
    /// # Arguments
    /// * `student` - The requesting student
    /// * `candidates` - Mentor pool, already normalized by the caller
    /// * `limit` - Maximum number of mentors to return
    ///
    /// # Returns
    /// At most `limit` candidates, best first. Empty when the pool is empty.
    pub fn rank_mentors_for_student(
        &self,
        student: &Profile,
        candidates: &[Profile],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        self.rank(student, candidates, limit, mentor_relevance)
    }

    /// Rank students for a mentor
    ///
    /// Each student scores 10 per unit shared with the mentor plus a flat
    /// bonus when they have written academic goals (default weights).
    ///
    /// # Arguments
    /// * `mentor` - The requesting mentor
    /// * `candidates` - Student pool, already normalized by the caller
    /// * `limit` - Maximum number of students to return
    ///
    /// # Returns
    /// At most `limit` candidates, best first. Empty when the pool is empty.
    pub fn rank_students_for_mentor(
        &self,
        mentor: &Profile,
        candidates: &[Profile],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        self.rank(mentor, candidates, limit, student_relevance)
    }

    /// Rank the counterpart pool for the requester's role
    ///
    /// # Arguments
    /// * `requester` - A student (ranked against mentors) or a mentor
    ///   (ranked against students)
    /// * `candidates` - Pool of the counterpart role
    /// * `limit` - Maximum number of candidates to return
    ///
    /// # Returns
    /// The ranking from `rank_mentors_for_student` or `rank_students_for_mentor`.
    pub fn recommend(
        &self,
        requester: &Profile,
        candidates: &[Profile],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        match requester.role {
            Role::Student => self.rank_mentors_for_student(requester, candidates, limit),
            Role::Mentor => self.rank_students_for_mentor(requester, candidates, limit),
        }
    }

    /// Explain why `candidate` suits `requester`
    ///
    /// # Arguments
    /// * `requester` - The user the suggestion is shown to
    /// * `candidate` - The suggested mentor or student
    ///
    /// # Returns
    /// A one-line reason; shared units take priority over expertise, goals
    /// and interests.
    pub fn explain_match(&self, requester: &Profile, candidate: &Profile) -> String {
        explain_match(requester, candidate)
    }

    /// Compare two unit sets
    ///
    /// # Returns
    /// The shared units, the units only in each set and the Jaccard
    /// compatibility percentage (0 when both sets are empty).
    pub fn compare_units(&self, units_a: &UnitSet, units_b: &UnitSet) -> ComparisonResult {
        compare_units(units_a, units_b)
    }

    fn rank(
        &self,
        requester: &Profile,
        candidates: &[Profile],
        limit: usize,
        relevance: RelevanceFn,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<(&Profile, u32, Vec<String>)> = candidates
            .iter()
            .map(|candidate| {
                let (score, shared) = relevance(requester, candidate, &self.weights);
                (candidate, score, shared)
            })
            .collect();

        // Stable: equal score and id keep input order
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id.cmp(&b.0.id)));
        scored.truncate(limit);

        tracing::trace!(
            "Ranked {} of {} candidates for {} ({})",
            scored.len(),
            candidates.len(),
            requester.id,
            requester.role
        );

        scored
            .into_iter()
            .map(|(candidate, score, shared_units)| ScoredCandidate {
                reason: explain_match(requester, candidate),
                compatibility: jaccard_percentage(&requester.units, &candidate.units),
                profile: candidate.clone(),
                score,
                shared_units,
            })
            .collect()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
