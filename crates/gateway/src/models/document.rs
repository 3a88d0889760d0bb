//! Document entity model and the upload input blob.

use estate_core::types::{DocumentId, PropertyId, Timestamp};
use serde::{Deserialize, Serialize};

/// A file attached to exactly one property for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub file_name: String,
    /// Declared MIME type, e.g. `"application/pdf"`.
    pub file_type: String,
    /// Resolvable reference to the file's bytes.
    pub file_url: String,
    pub uploaded_at: Timestamp,
    /// The owning property; always matches the property that embeds this
    /// document.
    pub property_id: PropertyId,
}

impl Document {
    /// Returns `true` for PDF documents.
    pub fn is_pdf(&self) -> bool {
        self.file_type.contains("pdf")
    }

    /// Returns `true` for image documents (JPEG, PNG).
    pub fn is_image(&self) -> bool {
        self.file_type.contains("image")
    }
}

/// An uploaded file as handed over by the upload surface: declared name,
/// declared MIME type, and the raw bytes.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}
