//! Media kind inference and pre-upload validation

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mime::Mime;

use error_types::{ClientError, Result};

use crate::constants::{
    ALLOWED_IMAGE_EXTENSIONS, ALLOWED_VIDEO_EXTENSIONS, MAX_IMAGE_SIZE, MAX_VIDEO_SIZE,
};

/// Media category, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let ext = extension(file_name)?;
        if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(MediaKind::Image)
        } else if ALLOWED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Ok(MediaKind::Video)
        } else {
            Err(ClientError::Validation(format!(
                "unsupported media extension: {}",
                ext
            )))
        }
    }

    pub fn max_size(&self) -> i64 {
        match self {
            MediaKind::Image => MAX_IMAGE_SIZE,
            MediaKind::Video => MAX_VIDEO_SIZE,
        }
    }
}

/// Lower-cased extension of a file name
pub fn extension(file_name: &str) -> Result<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| {
            ClientError::Validation(format!("file name has no extension: {}", file_name))
        })
}

/// MIME type for an allowed media file
pub fn content_type(file_name: &str) -> Result<Mime> {
    let ext = extension(file_name)?;
    let raw = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        other => {
            return Err(ClientError::Validation(format!(
                "unsupported media extension: {}",
                other
            )))
        }
    };
    raw.parse::<Mime>()
        .map_err(|e| ClientError::Validation(format!("invalid mime type {}: {}", raw, e)))
}

/// Enforce the extension allowlist and per-kind size cap
pub fn validate(file_name: &str, len: usize) -> Result<MediaKind> {
    let kind = MediaKind::from_file_name(file_name)?;
    if len as i64 > kind.max_size() {
        return Err(ClientError::Validation(format!(
            "{} exceeds the {} byte limit ({} bytes)",
            file_name,
            kind.max_size(),
            len
        )));
    }
    Ok(kind)
}

/// Encode file bytes as a base64 data URI
pub fn to_data_uri(file_name: &str, bytes: &[u8]) -> Result<String> {
    let mime = content_type(file_name)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
