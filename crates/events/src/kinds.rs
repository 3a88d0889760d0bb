//! Well-known event kind name constants.
//!
//! These must match the `kind` values published by the stores and matched
//! on by subscribers; a presentation layer re-renders its list on
//! `property.*` kinds and its detail view on `document.*` kinds.

/// The property list was replaced by a fetch.
pub const PROPERTIES_FETCHED: &str = "properties.fetched";

/// A property was created and appended to the list.
pub const PROPERTY_CREATED: &str = "property.created";

/// A property's fields were patched in place.
pub const PROPERTY_UPDATED: &str = "property.updated";

/// A property was removed from the list.
pub const PROPERTY_DELETED: &str = "property.deleted";

/// One or more documents were uploaded and attached to a property.
pub const DOCUMENTS_UPLOADED: &str = "documents.uploaded";

/// A document was removed from its owning property.
pub const DOCUMENT_DELETED: &str = "document.deleted";

/// An informational user-facing notice.
pub const NOTICE_INFO: &str = "notice.info";

/// An error user-facing notice.
pub const NOTICE_ERROR: &str = "notice.error";
