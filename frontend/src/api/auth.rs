use crate::api::auth_url;
use crate::config::SESSION_KEY;
use crate::env_variable_utils::API_KEY;
use crate::models::Session;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Serialize)]
struct Credentials {
    email: String,
    password: String,
}

// Auth endpoints report failures as a JSON body rather than plain text.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

pub fn current_session() -> Option<Session> {
    let raw = window()
        .and_then(|w| w.local_storage().ok())
        .and_then(|s| s.and_then(|storage| storage.get_item(SESSION_KEY).ok()))
        .flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn store_session(session: &Session) -> Result<(), String> {
    let encoded =
        serde_json::to_string(session).map_err(|e| format!("Failed to encode session: {}", e))?;
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .set_item(SESSION_KEY, &encoded)
                .map_err(|_| "Failed to store session".to_string())?;
        }
    }
    Ok(())
}

pub fn clear_session() -> Result<(), String> {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .remove_item(SESSION_KEY)
                .map_err(|_| "Failed to remove session".to_string())?;
        }
    }
    Ok(())
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let url = auth_url("token?grant_type=password");
    let body = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .header("apikey", &*API_KEY)
        .json(&body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Session>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(auth_error(response).await)
    }
}

/// Registers a new account. Returns the session when the backend signs the
/// user straight in, `None` when email confirmation is still pending.
pub async fn sign_up(email: &str, password: &str) -> Result<Option<Session>, String> {
    let url = auth_url("signup");
    let body = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .header("apikey", &*API_KEY)
        .json(&body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response).await);
    }

    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("JSON parse error: {}", e))?;

    if value.get("access_token").is_some() {
        serde_json::from_value::<Session>(value)
            .map(Some)
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Ok(None)
    }
}

/// Revokes the session server-side, then drops the local copy. The local
/// copy goes away even when the revoke request cannot be delivered.
pub async fn sign_out() -> Result<(), String> {
    if let Some(session) = current_session() {
        let url = auth_url("logout");
        let result = Request::post(&url)
            .header("apikey", &*API_KEY)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await;

        if let Err(e) = result {
            log::warn!("Logout request failed, clearing the local session anyway: {}", e);
        }
    }
    clear_session()
}

// Prefer the structured error message, fall back to the HTTP status.
async fn auth_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<AuthErrorBody>().await {
        Ok(body) => body
            .error_description
            .or(body.msg)
            .unwrap_or_else(|| format!("HTTP error: {}", status)),
        Err(_) => format!("HTTP error: {}", status),
    }
}
