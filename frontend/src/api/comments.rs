use crate::api::{bearer_token, rest_url};
use crate::env_variable_utils::API_KEY;
use crate::models::NewComment;
use catalog::Comment;
use gloo_net::http::Request;

/// Top-level comments for a video, newest first. Replies are rows with a
/// parent set and are excluded here.
pub async fn fetch_for_video(video_id: &str) -> Result<Vec<Comment>, String> {
    let url = rest_url(&format!(
        "comments?select=*&video_id=eq.{}&parent_comment_id=is.null&order=created_at.desc",
        urlencoding::encode(video_id)
    ));

    let response = Request::get(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", bearer_token()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Comment>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn post(comment: &NewComment, access_token: &str) -> Result<(), String> {
    let url = rest_url("comments");

    let response = Request::post(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Prefer", "return=minimal")
        .json(comment)
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
