//! Upload acceptance policy
//!
//! Decides whether an uploaded file may be stored, based on its declared
//! MIME type and its size. Storage itself is the caller's concern.

use thiserror::Error;

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted by default, with the extension stored files get
pub const DEFAULT_ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File is empty")]
    Empty,

    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Missing content type")]
    MissingContentType,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_bytes: usize,
    allowed: Vec<(String, String)>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl UploadPolicy {
    /// Default image allow-list with a custom size ceiling
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            allowed: DEFAULT_ALLOWED_TYPES
                .iter()
                .map(|(mime, ext)| (mime.to_string(), ext.to_string()))
                .collect(),
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Accept or reject a file; on success returns the extension to store it under
    pub fn validate(&self, content_type: Option<&str>, size: usize) -> Result<&str, UploadError> {
        if size == 0 {
            return Err(UploadError::Empty);
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }

        let content_type = content_type.ok_or(UploadError::MissingContentType)?;
        // Ignore parameters such as "; charset=..."
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        self.allowed
            .iter()
            .find(|(allowed, _)| *allowed == mime)
            .map(|(_, ext)| ext.as_str())
            .ok_or(UploadError::UnsupportedType(content_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_images() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.validate(Some("image/jpeg"), 1024), Ok("jpg"));
        assert_eq!(policy.validate(Some("image/png"), 1024), Ok("png"));
        assert_eq!(policy.validate(Some("IMAGE/GIF; foo=bar"), 1024), Ok("gif"));
    }

    #[test]
    fn test_rejects_other_types() {
        let policy = UploadPolicy::default();
        assert_eq!(
            policy.validate(Some("application/pdf"), 1024),
            Err(UploadError::UnsupportedType("application/pdf".into()))
        );
        assert_eq!(policy.validate(None, 1024), Err(UploadError::MissingContentType));
    }

    #[test]
    fn test_size_ceiling() {
        let policy = UploadPolicy::default();
        assert!(policy.validate(Some("image/png"), DEFAULT_MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            policy.validate(Some("image/png"), DEFAULT_MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge {
                size: DEFAULT_MAX_UPLOAD_BYTES + 1,
                max: DEFAULT_MAX_UPLOAD_BYTES
            })
        );
        assert_eq!(policy.validate(Some("image/png"), 0), Err(UploadError::Empty));

        let small = UploadPolicy::new(10);
        assert!(small.validate(Some("image/png"), 11).is_err());
        assert_eq!(small.max_bytes(), 10);
    }
}
