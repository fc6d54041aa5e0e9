use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Identity of the signed-in shopper, cached in the browser's local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl SessionRecord {
    /// Returns `None` when the username is blank; a stored session always names someone.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Option<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return None;
        }
        Some(Self {
            username,
            email: email.into(),
        })
    }

    pub fn avatar_letter(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_missing_optional_fields() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"success":false}"#).expect("minimal login response");
        assert!(!parsed.success);
        assert_eq!(parsed.message, None);
        assert_eq!(parsed.username, None);
    }

    #[test]
    fn login_response_accepts_profile_extras() {
        let parsed: LoginResponse = serde_json::from_str(
            r#"{"success":true,"message":"Welcome back, ana!","username":"ana","email":"ana@x.com","phone":"","address":""}"#,
        )
        .expect("full login response");
        assert_eq!(parsed.username.as_deref(), Some("ana"));
        assert_eq!(parsed.phone.as_deref(), Some(""));
    }

    #[test]
    fn session_record_serializes_to_stored_shape() {
        let record = SessionRecord::new("ana", "ana@x.com").expect("valid record");
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"username":"ana","email":"ana@x.com"}"#);
    }

    #[test]
    fn blank_username_is_not_a_session() {
        assert!(SessionRecord::new("  ", "x@y.z").is_none());
    }

    #[test]
    fn avatar_letter_is_uppercased_first_char() {
        let record = SessionRecord::new("ana", "").expect("valid record");
        assert_eq!(record.avatar_letter(), "A");
        let record = SessionRecord::new("ébène", "").expect("valid record");
        assert_eq!(record.avatar_letter(), "É");
    }
}
