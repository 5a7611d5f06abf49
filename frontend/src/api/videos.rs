use crate::api::{bearer_token, rest_url};
use crate::env_variable_utils::API_KEY;
use crate::models::NewVideo;
use catalog::Video;
use gloo_net::http::Request;

async fn fetch_rows(url: &str) -> Result<Vec<Video>, String> {
    let response = Request::get(url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", bearer_token()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Video>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

/// Newest videos first, capped for the home page.
pub async fn fetch_recent(limit: usize) -> Result<Vec<Video>, String> {
    let url = rest_url(&format!(
        "videos?select=*&order=created_at.desc&limit={}",
        limit
    ));
    fetch_rows(&url).await
}

/// The whole catalog, newest first. Filtering happens client-side.
pub async fn fetch_catalog() -> Result<Vec<Video>, String> {
    let url = rest_url("videos?select=*&order=created_at.desc");
    fetch_rows(&url).await
}

pub async fn fetch_by_ids(ids: &[String]) -> Result<Vec<Video>, String> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let url = rest_url(&format!(
        "videos?select=*&id=in.{}&order=created_at.desc",
        urlencoding::encode(&format!("({})", ids.join(",")))
    ));
    fetch_rows(&url).await
}

pub async fn fetch_by_uploader(uploader_id: &str) -> Result<Vec<Video>, String> {
    let url = rest_url(&format!(
        "videos?select=*&uploader_id=eq.{}&order=created_at.desc",
        urlencoding::encode(uploader_id)
    ));
    fetch_rows(&url).await
}

pub async fn fetch_video(video_id: &str) -> Result<Video, String> {
    let url = rest_url(&format!(
        "videos?select=*&id=eq.{}&limit=1",
        urlencoding::encode(video_id)
    ));
    fetch_rows(&url)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| "Video not found".to_string())
}

pub async fn insert(video: &NewVideo, access_token: &str) -> Result<(), String> {
    let url = rest_url("videos");

    let response = Request::post(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Prefer", "return=minimal")
        .json(video)
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

pub async fn delete(video_id: &str, access_token: &str) -> Result<(), String> {
    let url = rest_url(&format!("videos?id=eq.{}", urlencoding::encode(video_id)));

    let response = Request::delete(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

/// Bumps the view counter through a database function. Fire-and-forget:
/// a failed count must never block playback, so errors only hit the log.
pub async fn increment_views(video_id: &str) {
    let url = rest_url("rpc/increment_video_views");
    let body = serde_json::json!({ "video_id": video_id });

    let request = match Request::post(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", bearer_token()))
        .json(&body)
    {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Failed to build view-count request: {}", e);
            return;
        }
    };

    match request.send().await {
        Ok(response) if !response.ok() => {
            log::warn!("View count update failed: HTTP {}", response.status());
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("View count update failed: {}", e);
        }
    }
}
