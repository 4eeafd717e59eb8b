//! Profile model for storage and rendering.

use serde::{Deserialize, Serialize};

/// Identifier of the one profile this deployment stores.
pub const PROFILE_ID: i64 = 1;

/// The single user profile, as stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Always [`PROFILE_ID`]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub interests: String,
}

impl Default for Profile {
    /// Empty profile, rendered before the first save.
    fn default() -> Self {
        Self {
            user_id: PROFILE_ID,
            name: String::new(),
            email: String::new(),
            interests: String::new(),
        }
    }
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        interests: impl Into<String>,
    ) -> Self {
        Self {
            user_id: PROFILE_ID,
            name: name.into(),
            email: email.into(),
            interests: interests.into(),
        }
    }

    /// Copy of this profile with the identifier forced to [`PROFILE_ID`].
    pub fn pinned(&self) -> Self {
        Self {
            user_id: PROFILE_ID,
            ..self.clone()
        }
    }
}

/// Form body posted by the profile page.
///
/// Absent fields decode as empty strings; nothing is validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub interests: String,
}

impl From<ProfileForm> for Profile {
    fn from(form: ProfileForm) -> Self {
        Profile::new(form.name, form.email, form.interests)
    }
}

/// What an upsert did to the stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Modified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_conversion_pins_identifier() {
        let form = ProfileForm {
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            interests: "math".to_string(),
        };
        let profile = Profile::from(form);
        assert_eq!(profile, Profile::new("Ada", "a@x.com", "math"));
        assert_eq!(profile.user_id, PROFILE_ID);
    }

    #[test]
    fn test_pinned_overrides_identifier() {
        let mut profile = Profile::new("Ada", "", "");
        profile.user_id = 42;
        assert_eq!(profile.pinned().user_id, PROFILE_ID);
        assert_eq!(profile.pinned().name, "Ada");
    }

    #[test]
    fn test_document_shape() {
        let json = serde_json::to_value(Profile::new("Ada", "a@x.com", "math")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": 1,
                "name": "Ada",
                "email": "a@x.com",
                "interests": "math"
            })
        );
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UpsertOutcome::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(
            serde_json::to_string(&UpsertOutcome::Modified).unwrap(),
            "\"modified\""
        );
    }
}
