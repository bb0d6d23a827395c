use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered set of unit codes (e.g. `FIT2004`)
pub type UnitSet = BTreeSet<String>;

/// Which side of the mentoring relationship a profile is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Student,
}

impl Role {
    /// The role a user of this role is matched against
    pub fn counterpart(self) -> Role {
        match self {
            Role::Mentor => Role::Student,
            Role::Student => Role::Mentor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Mentor => "mentor",
            Role::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mentor or student profile as seen by the scorer
///
/// Mentors list the units they teach, students the units they take; both land
/// in `units`. Lists absent from the source document default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
    #[serde(default, alias = "unitsTaken", alias = "unitsTaught")]
    pub units: UnitSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Vec<String>,
    #[serde(rename = "academicGoals", default, skip_serializing_if = "Option::is_none")]
    pub academic_goals: Option<String>,
    #[serde(rename = "areasOfInterest", default)]
    pub areas_of_interest: Vec<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            units: UnitSet::new(),
            bio: None,
            expertise_areas: Vec::new(),
            academic_goals: None,
            areas_of_interest: Vec::new(),
        }
    }

    pub fn mentor(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Mentor)
    }

    pub fn student(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Student)
    }

    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units = units.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expertise<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expertise_areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_academic_goals(mut self, goals: impl Into<String>) -> Self {
        self.academic_goals = Some(goals.into());
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas_of_interest = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Academic goals, `None` when absent or empty
    pub fn goals(&self) -> Option<&str> {
        self.academic_goals.as_deref().filter(|g| !g.is_empty())
    }

    pub fn has_expertise(&self) -> bool {
        !self.expertise_areas.is_empty()
    }

    pub fn has_interests(&self) -> bool {
        !self.areas_of_interest.is_empty()
    }
}

/// Candidate ranked for a requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub profile: Profile,
    pub score: u32,
    pub reason: String,
    #[serde(rename = "sharedUnits")]
    pub shared_units: Vec<String>,
    /// Jaccard percentage between requester and candidate units, display only
    pub compatibility: f64,
}

/// Outcome of comparing two unit sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub shared: UnitSet,
    #[serde(rename = "onlyA")]
    pub only_a: UnitSet,
    #[serde(rename = "onlyB")]
    pub only_b: UnitSet,
    pub compatibility: f64,
}

/// Relevance weights
///
/// The defaults give 10 points per shared unit plus a flat 5 point bonus for
/// mentors with expertise areas or students with academic goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationWeights {
    pub shared_unit: u32,
    pub expertise_bonus: u32,
    pub goals_bonus: u32,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            shared_unit: 10,
            expertise_bonus: 5,
            goals_bonus: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_source_aliases() {
        let json = r#"{
            "id": "m1",
            "role": "mentor",
            "unitsTaught": ["FIT2004", "FIT2004", "FIT1008"],
            "expertiseAreas": ["Algorithms"]
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.role, Role::Mentor);
        assert_eq!(profile.units.len(), 2);
        assert!(profile.name.is_empty());
        assert!(profile.areas_of_interest.is_empty());
        assert!(profile.academic_goals.is_none());
    }

    #[test]
    fn test_only_empty_goals_are_absent() {
        let profile = Profile::student("s1", "Sam").with_academic_goals("");
        assert_eq!(profile.goals(), None);

        let profile = Profile::student("s1", "Sam").with_academic_goals("   ");
        assert_eq!(profile.goals(), Some("   "));

        let profile = Profile::student("s1", "Sam").with_academic_goals("Pass FIT2004");
        assert_eq!(profile.goals(), Some("Pass FIT2004"));
    }

    #[test]
    fn test_role_counterpart() {
        assert_eq!(Role::Mentor.counterpart(), Role::Student);
        assert_eq!(Role::Student.counterpart(), Role::Mentor);
        assert_eq!(Role::Student.to_string(), "student");
    }

    #[test]
    fn test_default_weights() {
        let weights = RecommendationWeights::default();
        assert_eq!(weights.shared_unit, 10);
        assert_eq!(weights.expertise_bonus, 5);
        assert_eq!(weights.goals_bonus, 5);
    }
}
