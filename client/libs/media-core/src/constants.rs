//! Media constraints

/// Maximum image file size (10 MB)
pub const MAX_IMAGE_SIZE: i64 = 10 * 1024 * 1024;

/// Maximum video file size (500 MB)
pub const MAX_VIDEO_SIZE: i64 = 500 * 1024 * 1024;

/// Allowed image file extensions
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Allowed video file extensions
pub const ALLOWED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];
