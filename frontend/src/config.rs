/// localStorage key the signed-in session is persisted under.
pub const SESSION_KEY: &str = "auth_session";

/// Storage buckets the client uploads into.
pub const VIDEO_BUCKET: &str = "videos";
pub const AVATAR_BUCKET: &str = "avatars";

/// Upload limits enforced client-side before any bytes leave the browser.
pub const MAX_THUMBNAIL_BYTES: f64 = 5.0 * 1024.0 * 1024.0;
pub const MAX_AVATAR_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

/// Image types accepted for thumbnails and avatars.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// How many videos the home page shows.
pub const RECENT_VIDEOS_LIMIT: usize = 12;
