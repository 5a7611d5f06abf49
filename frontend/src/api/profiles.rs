use crate::api::{bearer_token, rest_url};
use crate::env_variable_utils::API_KEY;
use crate::models::NewProfile;
use catalog::Profile;
use gloo_net::http::Request;
use std::collections::HashMap;

async fn fetch_rows(url: &str) -> Result<Vec<Profile>, String> {
    let response = Request::get(url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", bearer_token()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Profile>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

/// Resolves uploader ids to display names for the cards and the filter
/// pipeline. Ids without a profile row are simply absent from the map.
pub async fn fetch_display_names(user_ids: &[String]) -> Result<HashMap<String, String>, String> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let url = rest_url(&format!(
        "profiles?select=id,full_name,email&id=in.{}",
        urlencoding::encode(&format!("({})", user_ids.join(",")))
    ));

    let profiles = fetch_rows(&url).await?;
    Ok(profiles
        .into_iter()
        .map(|profile| {
            let name = profile.display_name();
            (profile.id, name)
        })
        .collect())
}

pub async fn fetch_profile(user_id: &str) -> Result<Option<Profile>, String> {
    let url = rest_url(&format!(
        "profiles?select=*&id=eq.{}&limit=1",
        urlencoding::encode(user_id)
    ));
    Ok(fetch_rows(&url).await?.into_iter().next())
}

pub async fn create_profile(profile: &NewProfile, access_token: &str) -> Result<(), String> {
    let url = rest_url("profiles");

    let response = Request::post(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Prefer", "return=minimal")
        .json(profile)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn update_full_name(
    user_id: &str,
    full_name: &str,
    access_token: &str,
) -> Result<(), String> {
    let body = serde_json::json!({ "full_name": full_name });
    patch_profile(user_id, &body, access_token).await
}

pub async fn update_avatar_url(
    user_id: &str,
    avatar_url: &str,
    access_token: &str,
) -> Result<(), String> {
    let body = serde_json::json!({ "avatar_url": avatar_url });
    patch_profile(user_id, &body, access_token).await
}

async fn patch_profile(
    user_id: &str,
    body: &serde_json::Value,
    access_token: &str,
) -> Result<(), String> {
    let url = rest_url(&format!("profiles?id=eq.{}", urlencoding::encode(user_id)));

    let response = Request::patch(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Prefer", "return=minimal")
        .json(body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
