use crate::api::storage_url;
use crate::env_variable_utils::API_KEY;
use gloo_net::http::Request;
use web_sys::File;

/// Uploads a file into a storage bucket under the given object path.
/// `upsert` lets a retry overwrite a half-written object instead of
/// failing on the name collision.
pub async fn upload_file(
    bucket: &str,
    path: &str,
    file: &File,
    upsert: bool,
    access_token: &str,
) -> Result<(), String> {
    let url = storage_url(&format!("object/{}/{}", bucket, path));

    let mut builder = Request::post(&url)
        .header("apikey", &*API_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("cache-control", "max-age=3600");

    let content_type = file.type_();
    if !content_type.is_empty() {
        builder = builder.header("Content-Type", &content_type);
    }
    if upsert {
        builder = builder.header("x-upsert", "true");
    }

    let response = builder
        .body(file.clone())
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

/// Public URL an uploaded object is served from. Buckets are public, so
/// this is a pure string build with no request behind it.
pub fn public_url(bucket: &str, path: &str) -> String {
    storage_url(&format!("object/public/{}/{}", bucket, path))
}

pub async fn remove_file(bucket: &str, path: &str, access_token: &str) -> Result<(), String> {
    let url = storage_url(&format!("object/{}/{}", bucket, path));

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

/// Extension of an uploaded file name, used to build the object path.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or("bin")
        .to_lowercase()
}
