use crate::core::units::normalize_units;
use crate::models::{Profile, Role};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the profile directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Collection IDs in the document store
#[derive(Debug, Clone)]
pub struct DirectoryCollections {
    pub mentors: String,
    pub students: String,
}

impl DirectoryCollections {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Mentor => &self.mentors,
            Role::Student => &self.students,
        }
    }
}

/// Read-only client for the profile document store
///
/// Loads whole mentor or student pools and normalizes every document into a
/// [`Profile`] before it reaches the scorer.
pub struct ProfileDirectory {
    base_url: String,
    api_key: Option<String>,
    client: Client,
    collections: DirectoryCollections,
}

/// Raw document as stored upstream; every field may be missing
#[derive(Debug, Deserialize)]
struct ProfileDocument {
    id: Option<String>,
    #[serde(rename = "userId")]
    user_id: Option<String>,
    #[serde(rename = "$id")]
    document_id: Option<String>,
    name: Option<String>,
    #[serde(alias = "unitsTaken", alias = "unitsTaught")]
    units: Option<Vec<String>>,
    bio: Option<String>,
    #[serde(rename = "expertiseAreas")]
    expertise_areas: Option<Vec<String>>,
    #[serde(rename = "academicGoals")]
    academic_goals: Option<String>,
    #[serde(rename = "areasOfInterest")]
    areas_of_interest: Option<Vec<String>>,
}

impl ProfileDocument {
    fn into_profile(self, role: Role) -> Option<Profile> {
        // The application-level user id wins over the store's document id
        let id = self
            .user_id
            .or(self.id)
            .or(self.document_id)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())?;

        Some(normalize_profile(Profile {
            id,
            name: self.name.unwrap_or_default(),
            role,
            units: self.units.unwrap_or_default().into_iter().collect(),
            bio: self.bio,
            expertise_areas: self.expertise_areas.unwrap_or_default(),
            academic_goals: self.academic_goals,
            areas_of_interest: self.areas_of_interest.unwrap_or_default(),
        }))
    }
}

/// Clean up a profile before it reaches the scorer
///
/// Trims units, list entries, bio and academic goals. Blank entries are
/// dropped, blank text fields become `None` and list duplicates collapse.
pub fn normalize_profile(profile: Profile) -> Profile {
    Profile {
        id: profile.id.trim().to_string(),
        name: profile.name.trim().to_string(),
        role: profile.role,
        units: normalize_units(&profile.units),
        bio: normalize_text(profile.bio),
        expertise_areas: normalize_list(profile.expertise_areas),
        academic_goals: normalize_text(profile.academic_goals),
        areas_of_interest: normalize_list(profile.areas_of_interest),
    }
}

fn normalize_text(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Trim, drop blanks and duplicates while keeping first-seen order
fn normalize_list(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}

impl ProfileDirectory {
    /// Create a new directory client
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        collections: DirectoryCollections,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            collections,
        })
    }

    /// Fetch every profile of the given role
    pub async fn list_profiles(&self, role: Role) -> Result<Vec<Profile>, DirectoryError> {
        let url = format!(
            "{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(self.collections.for_role(role))
        );

        tracing::debug!("Fetching {} pool from: {}", role, url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch {} pool: {} - {}", role, status, body);
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch {} profiles: {}",
                role, status
            )));
        }

        let json: Value = response.json().await?;

        parse_documents(&json, role)
    }
}

/// Turn a `{"documents": [...]}` payload into profiles of one role
///
/// Accepts bare profile objects or `{ "id", "data": {...} }` envelopes. Documents
/// without an id are skipped.
fn parse_documents(json: &Value, role: Role) -> Result<Vec<Profile>, DirectoryError> {
    let documents = json
        .get("documents")
        .and_then(|d| d.as_array())
        .ok_or_else(|| DirectoryError::InvalidResponse("Missing documents array".into()))?;

    let mut profiles = Vec::with_capacity(documents.len());
    let mut skipped = 0usize;

    for doc in documents {
        let parsed = match doc.get("data") {
            Some(data) => {
                let mut inner: ProfileDocument = match serde_json::from_value(data.clone()) {
                    Ok(inner) => inner,
                    Err(e) => {
                        tracing::warn!("Skipping malformed {} document: {}", role, e);
                        skipped += 1;
                        continue;
                    }
                };
                if inner.document_id.is_none() {
                    inner.document_id = envelope_id(doc);
                }
                inner
            }
            None => match serde_json::from_value(doc.clone()) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Skipping malformed {} document: {}", role, e);
                    skipped += 1;
                    continue;
                }
            },
        };

        match parsed.into_profile(role) {
            Some(profile) => profiles.push(profile),
            None => {
                tracing::warn!("Skipping {} document without an id", role);
                skipped += 1;
            }
        }
    }

    tracing::debug!("Loaded {} {} profiles ({} skipped)", profiles.len(), role, skipped);

    Ok(profiles)
}

fn envelope_id(doc: &Value) -> Option<String> {
    doc.get("id")
        .or_else(|| doc.get("$id"))
        .and_then(|id| id.as_str())
        .map(str::to_string)
}
