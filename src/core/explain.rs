use crate::models::{Profile, Role};
use crate::core::units::shared_units;

/// Number of items named before collapsing the rest into "and N more"
const MAX_EXAMPLES: usize = 2;

const MENTOR_FALLBACK: &str = "Recommended based on your academic interests";
const STUDENT_FALLBACK: &str = "Looking for guidance in your areas of expertise";

/// Human-readable reason for suggesting `candidate` to `requester`
///
/// Rules are tried in order and the first that applies wins:
/// 1. Shared units
/// 2. Mentor expertise areas / student academic goals
/// 3. Student areas of interest
/// 4. Generic fallback
pub fn explain_match(requester: &Profile, candidate: &Profile) -> String {
    let shared = shared_units(&candidate.units, &requester.units);

    match candidate.role {
        Role::Mentor => explain_mentor(requester, candidate, &shared),
        Role::Student => explain_student(requester, candidate, &shared),
    }
}

fn explain_mentor(requester: &Profile, mentor: &Profile, shared: &[String]) -> String {
    if !shared.is_empty() {
        return format!(
            "Teaches {} of your units: {}",
            shared.len(),
            summarize(shared)
        );
    }

    if mentor.has_expertise() {
        return format!(
            "Expertise in {}{}",
            summarize(&mentor.expertise_areas),
            relevance_suffix(requester)
        );
    }

    MENTOR_FALLBACK.to_string()
}

fn explain_student(requester: &Profile, student: &Profile, shared: &[String]) -> String {
    if !shared.is_empty() {
        return format!(
            "Studying {} of your units: {}",
            shared.len(),
            summarize(shared)
        );
    }

    if let Some(goals) = student.goals() {
        return format!("Academic goals: {}{}", goals, relevance_suffix(requester));
    }

    if student.has_interests() {
        return format!(
            "Interested in {}{}",
            summarize(&student.areas_of_interest),
            relevance_suffix(requester)
        );
    }

    STUDENT_FALLBACK.to_string()
}

/// " - relevant for X, Y" using the requester's own units, empty when they have none
fn relevance_suffix(requester: &Profile) -> String {
    if requester.units.is_empty() {
        return String::new();
    }

    let examples: Vec<&str> = requester
        .units
        .iter()
        .take(MAX_EXAMPLES)
        .map(String::as_str)
        .collect();

    format!(" - relevant for {}", examples.join(", "))
}

/// "A", "A, B" or "A, B and N more"
fn summarize(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(MAX_EXAMPLES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > MAX_EXAMPLES {
        format!("{} and {} more", shown, items.len() - MAX_EXAMPLES)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_units_with_overflow() {
        let student = Profile::student("s1", "Sam").with_units(["FIT2004", "FIT2014", "FIT2099"]);
        let mentor = Profile::mentor("m1", "Mia")
            .with_units(["FIT2004", "FIT2014", "FIT2099", "FIT3171"])
            .with_expertise(["Algorithms"]);

        let reason = explain_match(&student, &mentor);

        assert_eq!(reason, "Teaches 3 of your units: FIT2004, FIT2014 and 1 more");
    }

    #[test]
    fn test_shared_units_without_overflow() {
        let mentor = Profile::mentor("m1", "Mia").with_units(["FIT2004"]);
        let student = Profile::student("s1", "Sam")
            .with_units(["FIT2004"])
            .with_academic_goals("Pass");

        assert_eq!(explain_match(&mentor, &student), "Studying 1 of your units: FIT2004");
    }

    #[test]
    fn test_mentor_expertise_with_requester_units() {
        let student = Profile::student("s1", "Sam").with_units(["FIT1045", "FIT1008", "FIT2004"]);
        let mentor = Profile::mentor("m1", "Mia").with_expertise(["Algorithms", "Databases", "Networks"]);

        let reason = explain_match(&student, &mentor);

        assert_eq!(
            reason,
            "Expertise in Algorithms, Databases and 1 more - relevant for FIT1008, FIT1045"
        );
    }

    #[test]
    fn test_mentor_expertise_without_requester_units() {
        let student = Profile::student("s1", "Sam");
        let mentor = Profile::mentor("m1", "Mia").with_expertise(["Algorithms"]);

        assert_eq!(explain_match(&student, &mentor), "Expertise in Algorithms");
    }

    #[test]
    fn test_student_goals_then_interests() {
        let mentor = Profile::mentor("m1", "Mia").with_units(["FIT3171"]);
        let student = Profile::student("s1", "Sam")
            .with_academic_goals("Get into honours")
            .with_interests(["AI"]);

        assert_eq!(
            explain_match(&mentor, &student),
            "Academic goals: Get into honours - relevant for FIT3171"
        );

        let student = Profile::student("s1", "Sam").with_interests(["AI", "Security"]);
        assert_eq!(
            explain_match(&mentor, &student),
            "Interested in AI, Security - relevant for FIT3171"
        );
    }

    #[test]
    fn test_fallbacks() {
        let mentor = Profile::mentor("m1", "Mia");
        let student = Profile::student("s1", "Sam");

        assert_eq!(explain_match(&student, &mentor), MENTOR_FALLBACK);
        assert_eq!(explain_match(&mentor, &student), STUDENT_FALLBACK);
    }
}
