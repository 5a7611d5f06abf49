pub mod auth;
pub mod comments;
pub mod profiles;
pub mod uploads;
pub mod videos;

use crate::env_variable_utils::{API_BASE_URL, API_KEY};

pub fn rest_url(path_and_query: &str) -> String {
    format!("{}/rest/v1/{}", &*API_BASE_URL, path_and_query)
}

pub fn auth_url(path_and_query: &str) -> String {
    format!("{}/auth/v1/{}", &*API_BASE_URL, path_and_query)
}

pub fn storage_url(path: &str) -> String {
    format!("{}/storage/v1/{}", &*API_BASE_URL, path)
}

/// Bearer token for data requests: the signed-in user's access token when
/// a session exists, the anonymous API key otherwise.
pub fn bearer_token() -> String {
    auth::current_session()
        .map(|session| session.access_token)
        .unwrap_or_else(|| API_KEY.clone())
}
