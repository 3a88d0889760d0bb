/// Property identifiers are UUIDs assigned by the backend at creation.
pub type PropertyId = uuid::Uuid;

/// Document identifiers are UUIDs, unique across the whole document space
/// (not just per property).
pub type DocumentId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
