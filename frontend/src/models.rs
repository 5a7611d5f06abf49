use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the auth endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An auth session, persisted to localStorage so reloads stay signed in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Insert payload for a new video row.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewVideo {
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub topic: Option<String>,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub uploader_id: String,
}

/// Insert payload for a new top-level comment.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewComment {
    pub video_id: String,
    pub user_id: String,
    pub content: String,
}

/// Insert payload for a profile row created on first visit.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
}
