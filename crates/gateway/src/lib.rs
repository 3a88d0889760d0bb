//! Persistence boundary for the estate workspace.
//!
//! [`Gateway`] is the abstract contract every backend must satisfy; the
//! [`mock`] module provides the in-memory implementation with simulated
//! latency. Stores talk to persistence exclusively through this trait, so a
//! real database/object-store backend can be swapped in without touching
//! the state layer.

use async_trait::async_trait;
use estate_core::error::GatewayError;
use estate_core::types::{DocumentId, PropertyId};

use crate::models::document::{Document, FileUpload};
use crate::models::property::{CreateProperty, Property, UpdateProperty};

pub mod mock;
pub mod models;

/// Backend persistence contract for properties and documents.
///
/// All calls are asynchronous and may suspend the caller; failure is
/// reported as an opaque [`GatewayError`] with no retry performed here.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch every property, in creation order, with documents embedded.
    async fn list_properties(&self) -> Result<Vec<Property>, GatewayError>;

    /// Fetch a single property by id.
    async fn get_property(&self, id: PropertyId) -> Result<Option<Property>, GatewayError>;

    /// Create a property. The backend assigns a fresh unique id and an
    /// empty document collection.
    async fn create_property(&self, input: &CreateProperty) -> Result<Property, GatewayError>;

    /// Shallow-merge the given fields into the property. Returns `None`
    /// when no property with that id exists.
    async fn update_property(
        &self,
        id: PropertyId,
        patch: &UpdateProperty,
    ) -> Result<Option<Property>, GatewayError>;

    /// Remove a property. Returns `false` when absent.
    async fn delete_property(&self, id: PropertyId) -> Result<bool, GatewayError>;

    /// Attach the given files to one property, in input order. Each file
    /// receives a fresh document id, an upload timestamp, and a resolvable
    /// file URL.
    async fn upload_documents(
        &self,
        property_id: PropertyId,
        files: Vec<FileUpload>,
    ) -> Result<Vec<Document>, GatewayError>;

    /// Fetch the document collection of one property. Unknown property ids
    /// yield an empty collection.
    async fn get_documents(&self, property_id: PropertyId) -> Result<Vec<Document>, GatewayError>;

    /// Remove a document, searching the full document space rather than a
    /// single property. Returns `false` when no such document exists.
    async fn delete_document(&self, document_id: DocumentId) -> Result<bool, GatewayError>;
}
