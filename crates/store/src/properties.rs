//! The authoritative in-memory property list and its CRUD operations.

use std::sync::{Arc, Mutex, MutexGuard};

use estate_core::types::{DocumentId, PropertyId};
use estate_events::{kinds, EventBus, Notice, StoreEvent};
use estate_gateway::models::document::Document;
use estate_gateway::models::property::{CreateProperty, Property, UpdateProperty};
use estate_gateway::Gateway;
use serde_json::json;
use validator::Validate;

use crate::documents::DocumentOps;
use crate::error::{StoreError, StoreResult};
use crate::selection::Selection;

struct ListState {
    properties: Vec<Property>,
    loading: bool,
    error: Option<String>,
    selection: Selection,
}

/// Client-side authoritative cache of all properties.
///
/// Constructed once with an injected gateway and event bus, then shared via
/// `Arc`. State lives behind a mutex that is only ever locked between
/// suspension points: every mutation is applied to the latest known state
/// at resolution time, never to a snapshot captured when the call was
/// issued, so overlapping operations cannot lose each other's updates.
///
/// The selection (open detail view) is part of the guarded state and is
/// re-derived inside the same critical section as each list mutation, so a
/// caller can never observe the list and the open snapshot disagreeing.
pub struct PropertyStore {
    gateway: Arc<dyn Gateway>,
    bus: Arc<EventBus>,
    state: Mutex<ListState>,
}

impl PropertyStore {
    pub fn new(gateway: Arc<dyn Gateway>, bus: Arc<EventBus>) -> Self {
        Self {
            gateway,
            bus,
            state: Mutex::new(ListState {
                properties: Vec::new(),
                loading: false,
                error: None,
                selection: Selection::default(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Entity CRUD
    // -----------------------------------------------------------------------

    /// Replace the whole list with the backend's current state.
    ///
    /// The loading flag is set for the duration of the call. On failure the
    /// previous list is left untouched and an error message is recorded.
    ///
    /// Concurrent fetches are not de-duplicated: whichever response
    /// resolves last overwrites the list.
    pub async fn fetch_all(&self) -> StoreResult<Vec<Property>> {
        {
            let mut guard = self.guard();
            guard.loading = true;
            guard.error = None;
        }

        let result = self.gateway.list_properties().await;

        let mut guard = self.guard();
        let state = &mut *guard;
        state.loading = false;
        match result {
            Ok(properties) => {
                state.properties = properties.clone();
                state.selection.refresh(&state.properties);
                drop(guard);

                tracing::info!(count = properties.len(), "fetched property list");
                self.bus.publish(
                    StoreEvent::new(kinds::PROPERTIES_FETCHED)
                        .with_payload(json!({ "count": properties.len() })),
                );
                Ok(properties)
            }
            Err(error) => {
                state.error = Some("Failed to fetch properties".into());
                drop(guard);

                tracing::error!(error = %error, "property fetch failed");
                self.bus
                    .publish(Notice::error("Error", "Failed to load properties"));
                Err(StoreError::FetchFailed(error))
            }
        }
    }

    /// Create a property and append it to the end of the list.
    ///
    /// The backend assigns the id and an empty document collection. On
    /// failure the list is unchanged.
    pub async fn create(&self, input: CreateProperty) -> StoreResult<Property> {
        input
            .validate()
            .map_err(|errors| StoreError::InvalidInput(errors.to_string()))?;

        match self.gateway.create_property(&input).await {
            Ok(property) => {
                let mut guard = self.guard();
                let state = &mut *guard;
                state.properties.push(property.clone());
                state.selection.refresh(&state.properties);
                drop(guard);

                tracing::info!(property_id = %property.id, "property created");
                self.bus
                    .publish(StoreEvent::new(kinds::PROPERTY_CREATED).with_property(property.id));
                self.bus
                    .publish(Notice::info("Success", "Property created successfully"));
                Ok(property)
            }
            Err(error) => {
                tracing::error!(error = %error, "property creation failed");
                self.bus
                    .publish(Notice::error("Error", "Failed to create property"));
                Err(StoreError::CreateFailed(error))
            }
        }
    }

    /// Shallow-merge the given fields into the matching property.
    ///
    /// Returns `Ok(None)` when no property with that id exists. On success
    /// the list entry is replaced in place, preserving its position, and
    /// the open detail snapshot is refreshed if it is the same property.
    pub async fn update(
        &self,
        id: PropertyId,
        patch: UpdateProperty,
    ) -> StoreResult<Option<Property>> {
        match self.gateway.update_property(id, &patch).await {
            Ok(Some(updated)) => {
                let mut guard = self.guard();
                let state = &mut *guard;
                if let Some(entry) = state.properties.iter_mut().find(|p| p.id == id) {
                    *entry = updated.clone();
                }
                state.selection.refresh(&state.properties);
                drop(guard);

                tracing::info!(property_id = %id, "property updated");
                self.bus
                    .publish(StoreEvent::new(kinds::PROPERTY_UPDATED).with_property(id));
                self.bus
                    .publish(Notice::info("Success", "Property updated successfully"));
                Ok(Some(updated))
            }
            Ok(None) => {
                tracing::warn!(property_id = %id, "update target not found");
                Ok(None)
            }
            Err(error) => {
                tracing::error!(property_id = %id, error = %error, "property update failed");
                self.bus
                    .publish(Notice::error("Error", "Failed to update property"));
                Err(StoreError::UpdateFailed(error))
            }
        }
    }

    /// Remove a property. Returns `Ok(false)` when absent; removal is
    /// atomic from the caller's perspective.
    ///
    /// Deleting the open property transitions the selection back to List.
    pub async fn delete(&self, id: PropertyId) -> StoreResult<bool> {
        match self.gateway.delete_property(id).await {
            Ok(true) => {
                let mut guard = self.guard();
                let state = &mut *guard;
                state.properties.retain(|p| p.id != id);
                state.selection.refresh(&state.properties);
                drop(guard);

                tracing::info!(property_id = %id, "property deleted");
                self.bus
                    .publish(StoreEvent::new(kinds::PROPERTY_DELETED).with_property(id));
                self.bus
                    .publish(Notice::info("Success", "Property deleted successfully"));
                Ok(true)
            }
            Ok(false) => {
                tracing::warn!(property_id = %id, "delete target not found");
                Ok(false)
            }
            Err(error) => {
                tracing::error!(property_id = %id, error = %error, "property delete failed");
                self.bus
                    .publish(Notice::error("Error", "Failed to delete property"));
                Err(StoreError::DeleteFailed(error))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// Current list snapshot, in creation order.
    pub fn properties(&self) -> Vec<Property> {
        self.guard().properties.clone()
    }

    /// `true` while a list fetch is in flight.
    pub fn loading(&self) -> bool {
        self.guard().loading
    }

    /// The last fetch error message, if the most recent fetch failed.
    pub fn error(&self) -> Option<String> {
        self.guard().error.clone()
    }

    // -----------------------------------------------------------------------
    // Selection (detail view)
    // -----------------------------------------------------------------------

    /// Open a property in detail view, recording its current snapshot.
    /// Returns `None` (and stays in List state) for unknown ids.
    pub fn open_detail(&self, id: PropertyId) -> Option<Property> {
        let mut guard = self.guard();
        let state = &mut *guard;
        state.selection.open(id, &state.properties)
    }

    /// Return from detail view to the list.
    pub fn close_detail(&self) {
        self.guard().selection.close();
    }

    /// The open property's snapshot, if a detail view is open.
    pub fn selected(&self) -> Option<Property> {
        self.guard().selection.current().cloned()
    }

    // -----------------------------------------------------------------------
    // Document application (called by DocumentOps)
    // -----------------------------------------------------------------------

    /// Bind document operations to one property.
    pub fn documents(self: &Arc<Self>, property_id: PropertyId) -> DocumentOps {
        DocumentOps::new(
            Arc::clone(self),
            self.gateway.clone(),
            self.bus.clone(),
            property_id,
        )
    }

    /// Append freshly uploaded documents to their property's collection.
    ///
    /// Applied against the latest list state, so a snapshot taken when the
    /// upload was issued cannot clobber documents that landed meanwhile.
    pub(crate) fn apply_uploaded(&self, property_id: PropertyId, documents: &[Document]) {
        let mut guard = self.guard();
        let state = &mut *guard;
        if let Some(property) = state.properties.iter_mut().find(|p| p.id == property_id) {
            property.documents.extend(documents.iter().cloned());
        }
        state.selection.refresh(&state.properties);
    }

    /// Remove a document from whichever property holds it. Returns the
    /// owner's id when the document was present locally.
    pub(crate) fn apply_document_removed(&self, document_id: DocumentId) -> Option<PropertyId> {
        let mut guard = self.guard();
        let state = &mut *guard;
        let owner = state
            .properties
            .iter_mut()
            .find(|p| p.has_document(document_id))
            .map(|property| {
                property.documents.retain(|d| d.id != document_id);
                property.id
            });
        state.selection.refresh(&state.properties);
        owner
    }

    fn guard(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().expect("store state lock poisoned")
    }
}
