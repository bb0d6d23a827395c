use crate::models::{Profile, RecommendationWeights};
use crate::core::units::shared_units;

/// Relevance of a mentor to a student
///
/// Scoring formula:
/// score = shared_units * shared_unit_weight
///       + expertise_bonus    # mentor lists any expertise area
///
/// Returns the score together with the shared units.
pub fn mentor_relevance(
    student: &Profile,
    mentor: &Profile,
    weights: &RecommendationWeights,
) -> (u32, Vec<String>) {
    let shared = shared_units(&mentor.units, &student.units);
    let subject_score = unit_score(shared.len(), weights);
    let expertise_score = if mentor.has_expertise() {
        weights.expertise_bonus
    } else {
        0
    };

    (subject_score.saturating_add(expertise_score), shared)
}

/// Relevance of a student to a mentor
///
/// Scoring formula:
/// score = shared_units * shared_unit_weight
///       + goals_bonus        # student wrote down academic goals
pub fn student_relevance(
    mentor: &Profile,
    student: &Profile,
    weights: &RecommendationWeights,
) -> (u32, Vec<String>) {
    let shared = shared_units(&student.units, &mentor.units);
    let subject_score = unit_score(shared.len(), weights);
    let goal_score = if student.goals().is_some() {
        weights.goals_bonus
    } else {
        0
    };

    (subject_score.saturating_add(goal_score), shared)
}

#[inline]
fn unit_score(shared_count: usize, weights: &RecommendationWeights) -> u32 {
    let count = u32::try_from(shared_count).unwrap_or(u32::MAX);
    count.saturating_mul(weights.shared_unit)
}
