//! Upload and delete operations scoped to a single property.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use estate_core::files::is_accepted_file_type;
use estate_core::types::{DocumentId, PropertyId};
use estate_events::{kinds, EventBus, Notice, StoreEvent};
use estate_gateway::models::document::{Document, FileUpload};
use estate_gateway::Gateway;
use serde_json::json;

use crate::error::{StoreError, StoreResult};
use crate::properties::PropertyStore;

/// Document operations bound to one property.
///
/// Each instance owns its own `uploading`/`deleting` flags, so detail views
/// of different properties never contend on a shared progress indicator.
/// Obtained via [`PropertyStore::documents`].
pub struct DocumentOps {
    store: Arc<PropertyStore>,
    gateway: Arc<dyn Gateway>,
    bus: Arc<EventBus>,
    property_id: PropertyId,
    uploading: AtomicBool,
    deleting: Mutex<Option<DocumentId>>,
}

impl DocumentOps {
    pub(crate) fn new(
        store: Arc<PropertyStore>,
        gateway: Arc<dyn Gateway>,
        bus: Arc<EventBus>,
        property_id: PropertyId,
    ) -> Self {
        Self {
            store,
            gateway,
            bus,
            property_id,
            uploading: AtomicBool::new(false),
            deleting: Mutex::new(None),
        }
    }

    /// The property this instance is bound to.
    pub fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// `true` while an upload is in flight.
    pub fn uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }

    /// The id of the document currently being deleted, if any. Only that
    /// document's UI should show a pending state.
    pub fn deleting(&self) -> Option<DocumentId> {
        *self.deleting.lock().expect("deleting flag lock poisoned")
    }

    /// Upload the given files and attach them to the bound property, in
    /// input order.
    ///
    /// Unsupported MIME types are rejected before any gateway call. On
    /// failure no partial document set is retained. The resolved documents
    /// are appended to the latest list state, so two overlapping uploads to
    /// the same property both land.
    pub async fn upload(&self, files: Vec<FileUpload>) -> StoreResult<Vec<Document>> {
        if let Some(file) = files.iter().find(|f| !is_accepted_file_type(&f.content_type)) {
            return Err(StoreError::InvalidInput(format!(
                "unsupported file type: {} ({})",
                file.content_type, file.file_name
            )));
        }

        let count = files.len();
        self.uploading.store(true, Ordering::SeqCst);
        let result = self.gateway.upload_documents(self.property_id, files).await;
        self.uploading.store(false, Ordering::SeqCst);

        match result {
            Ok(documents) => {
                self.store.apply_uploaded(self.property_id, &documents);

                tracing::info!(
                    property_id = %self.property_id,
                    count = documents.len(),
                    "documents uploaded"
                );
                self.bus.publish(
                    StoreEvent::new(kinds::DOCUMENTS_UPLOADED)
                        .with_property(self.property_id)
                        .with_payload(json!({ "count": documents.len() })),
                );
                self.bus.publish(Notice::info(
                    "Success",
                    format!("{count} document(s) uploaded successfully"),
                ));
                Ok(documents)
            }
            Err(error) => {
                tracing::error!(
                    property_id = %self.property_id,
                    error = %error,
                    "document upload failed"
                );
                self.bus
                    .publish(Notice::error("Error", "Failed to upload documents"));
                Err(StoreError::UploadFailed(error))
            }
        }
    }

    /// Delete a document by id, searching the backend's full document
    /// space rather than just the bound property.
    ///
    /// Returns `Ok(false)` when no such document exists. The `deleting`
    /// flag holds the target id while the call is in flight and settles
    /// back to `None` on success and failure alike.
    pub async fn delete(&self, document_id: DocumentId) -> StoreResult<bool> {
        self.set_deleting(Some(document_id));
        let result = self.gateway.delete_document(document_id).await;
        self.set_deleting(None);

        match result {
            Ok(true) => {
                let owner = self.store.apply_document_removed(document_id);

                tracing::info!(document_id = %document_id, "document deleted");
                let mut event =
                    StoreEvent::new(kinds::DOCUMENT_DELETED).with_document(document_id);
                if let Some(owner) = owner {
                    event = event.with_property(owner);
                }
                self.bus.publish(event);
                self.bus
                    .publish(Notice::info("Success", "Document deleted successfully"));
                Ok(true)
            }
            Ok(false) => {
                tracing::warn!(document_id = %document_id, "delete target not found");
                Ok(false)
            }
            Err(error) => {
                tracing::error!(document_id = %document_id, error = %error, "document delete failed");
                self.bus
                    .publish(Notice::error("Error", "Failed to delete document"));
                Err(StoreError::DocumentDeleteFailed(error))
            }
        }
    }

    fn set_deleting(&self, value: Option<DocumentId>) {
        *self.deleting.lock().expect("deleting flag lock poisoned") = value;
    }
}
