//! Accepted document file types.
//!
//! These must match the MIME types the upload surface offers; documents of
//! any other type are rejected before a gateway call is made.

/// Set of accepted document MIME types.
pub const ACCEPTED_FILE_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// Returns `true` if the given MIME type is accepted for upload.
pub fn is_accepted_file_type(content_type: &str) -> bool {
    ACCEPTED_FILE_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_file_types() {
        assert!(is_accepted_file_type("application/pdf"));
        assert!(is_accepted_file_type("image/jpeg"));
        assert!(is_accepted_file_type("image/png"));
    }

    #[test]
    fn test_rejected_file_types() {
        assert!(!is_accepted_file_type("image/gif"));
        assert!(!is_accepted_file_type("text/plain"));
        assert!(!is_accepted_file_type(""));
        assert!(!is_accepted_file_type("APPLICATION/PDF"));
    }
}
