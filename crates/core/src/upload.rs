//! Image upload rules: accepted content types, size cap, stored file naming
//! and the public-path sanitiser used when serving uploads back.

use crate::error::CoreError;

/// Largest accepted upload in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Sub-directory of the upload root that track images are written to.
pub const TRACK_UPLOAD_SUBDIR: &str = "tracks";

/// Accepted MIME types and the extension used when the client filename has none.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/webp", ".webp"),
    ("image/svg+xml", ".svg"),
];

/// Validate an upload's content type and size, returning the default
/// extension for the type.
pub fn validate_upload(content_type: &str, size: usize) -> Result<&'static str, CoreError> {
    let ext = ALLOWED_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            CoreError::Validation("Invalid file type. Allowed: JPEG, PNG, WebP, SVG".to_string())
        })?;
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(
            "File too large. Maximum size is 10MB".to_string(),
        ));
    }
    Ok(ext)
}

/// Pick the stored file's extension: the client filename's extension when it
/// has one, otherwise the default for the content type.
pub fn stored_extension(file_name: Option<&str>, default_ext: &str) -> String {
    file_name
        .and_then(|n| std::path::Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_else(|| default_ext.to_string())
}

/// Validate a track image link: an absolute `http(s)` URL or an absolute
/// path on this server (such as one returned by the upload endpoint).
pub fn validate_image_url(raw: &str) -> Result<(), CoreError> {
    let raw = raw.trim();
    let invalid = || CoreError::Validation("Invalid image URL".to_string());
    if raw.is_empty() {
        return Err(invalid());
    }
    if raw.starts_with('/') && !raw.starts_with("//") {
        return Ok(());
    }
    let parsed = url::Url::parse(raw).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Strip `..` sequences and leading slashes from a requested upload path.
pub fn sanitize_upload_path(path: &str) -> String {
    let mut cleaned = path.to_string();
    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", "");
    }
    cleaned.trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_image_types() {
        assert!(validate_upload("text/plain", 10).is_err());
        assert!(validate_upload("image/gif", 10).is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn extension_from_filename_or_type() {
        assert_eq!(stored_extension(Some("photo.JPEG"), ".jpg"), ".jpeg");
        assert_eq!(stored_extension(Some("photo"), ".jpg"), ".jpg");
        assert_eq!(stored_extension(None, ".webp"), ".webp");
        assert_eq!(validate_upload("image/svg+xml", 1).unwrap(), ".svg");
    }

    #[test]
    fn image_urls() {
        assert!(validate_image_url("https://example.com/a.jpg").is_ok());
        assert!(validate_image_url("/uploads/tracks/a.jpg").is_ok());
        assert!(validate_image_url("not a url").is_err());
        assert!(validate_image_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_image_url("//evil.com/a.jpg").is_err());
        assert!(validate_image_url("").is_err());
    }

    #[test]
    fn sanitizes_traversal() {
        assert_eq!(sanitize_upload_path("tracks/a.jpg"), "tracks/a.jpg");
        assert_eq!(sanitize_upload_path("../../etc/passwd"), "etc/passwd");
        assert_eq!(sanitize_upload_path("/tracks/a.png"), "tracks/a.png");
        assert!(!sanitize_upload_path("tracks/...../x").contains(".."));
    }
}
