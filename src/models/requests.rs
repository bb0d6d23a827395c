use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Profile, UnitSet};

/// Request to rank candidates for a requester
///
/// When `candidates` is omitted the pool is loaded from the profile directory.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(custom(function = "validate_requester"))]
    pub requester: Profile,
    #[serde(default)]
    pub candidates: Option<Vec<Profile>>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to explain why a candidate was suggested
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplainRequest {
    #[validate(custom(function = "validate_requester"))]
    pub requester: Profile,
    pub candidate: Profile,
}

/// Request to compare two unit sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareUnitsRequest {
    #[serde(rename = "unitsA", default)]
    pub units_a: UnitSet,
    #[serde(rename = "unitsB", default)]
    pub units_b: UnitSet,
}

fn validate_requester(requester: &Profile) -> Result<(), ValidationError> {
    if requester.id.trim().is_empty() {
        return Err(ValidationError::new("requester_id_empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_request_defaults() {
        let json = r#"{"requester": {"id": "s1", "role": "student"}}"#;
        let req: RankRequest = serde_json::from_str(json).unwrap();

        assert!(req.candidates.is_none());
        assert!(req.limit.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rank_request_rejects_zero_limit_and_blank_id() {
        let json = r#"{"requester": {"id": " ", "role": "student"}, "limit": 0}"#;
        let req: RankRequest = serde_json::from_str(json).unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("limit"));
        assert!(fields.contains_key("requester"));
    }
}
