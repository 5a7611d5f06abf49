use serde::{Deserialize, Serialize};

/// Departments a video can be filed under (the "subject" dimension).
pub const SUBJECTS: [&str; 3] = ["CSE", "AI-DS", "ECE"];

/// Semester labels offered by the upload form and the browse filter.
pub const SEMESTERS: [&str; 8] = [
    "1-Odd", "1-even", "2-Odd", "2-even", "3-Odd", "3-even", "4-Odd", "4-even",
];

/// One video row as served by the backend. Fields the filter pipeline reads
/// are optional with defaults so a row with missing metadata degrades to
/// "matches nothing" instead of failing the whole fetched batch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub uploader_id: String,
}

/// A user profile row. Only the uploader-facing fields the client renders.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Display name fallback chain: full name, then the local part of the
    /// email address, then "Unknown".
    pub fn display_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref() {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }
        if let Some(email) = self.email.as_deref() {
            if let Some(local) = email.split('@').next() {
                if !local.is_empty() {
                    return local.to_string();
                }
            }
        }
        "Unknown".to_string()
    }
}

/// A top-level comment under a video.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        let profile = Profile {
            id: "u1".to_string(),
            full_name: Some("Asha Rao".to_string()),
            email: Some("asha.rao@example.edu".to_string()),
            avatar_url: None,
        };
        assert_eq!(profile.display_name(), "Asha Rao");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let profile = Profile {
            id: "u2".to_string(),
            full_name: Some("   ".to_string()),
            email: Some("ravi_k@example.edu".to_string()),
            avatar_url: None,
        };
        assert_eq!(profile.display_name(), "ravi_k");
    }

    #[test]
    fn display_name_defaults_to_unknown() {
        assert_eq!(Profile::default().display_name(), "Unknown");
    }

    #[test]
    fn video_rows_with_missing_metadata_still_deserialize() {
        let row: Video = serde_json::from_str(r#"{"id":"v1"}"#).unwrap();
        assert_eq!(row.id, "v1");
        assert_eq!(row.title, "");
        assert_eq!(row.subject, None);
        assert_eq!(row.views, 0);
    }
}
