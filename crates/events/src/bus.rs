//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`StoreEvent`]s. It is
//! shared via `Arc<EventBus>` across the stores and any number of
//! subscribing views.

use chrono::{DateTime, Utc};
use estate_core::types::{DocumentId, PropertyId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// StoreEvent
// ---------------------------------------------------------------------------

/// A state mutation (or notice) that subscribers should react to.
///
/// Constructed via [`StoreEvent::new`] and enriched with the builder
/// methods [`with_property`](StoreEvent::with_property),
/// [`with_document`](StoreEvent::with_document), and
/// [`with_payload`](StoreEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Dot-separated event kind, e.g. `"property.created"`.
    pub kind: String,

    /// The property the event concerns, if any.
    pub property_id: Option<PropertyId>,

    /// The document the event concerns, if any.
    pub document_id: Option<DocumentId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was published (UTC).
    pub timestamp: DateTime<Utc>,
}

impl StoreEvent {
    /// Create a new event with only the required `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            property_id: None,
            document_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the concerned property.
    pub fn with_property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    /// Attach the concerned document.
    pub fn with_document(mut self, document_id: DocumentId) -> Self {
        self.document_id = Some(document_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`StoreEvent`].
///
/// # Usage
///
/// ```rust
/// use estate_events::bus::{EventBus, StoreEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(StoreEvent::new("property.created"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: StoreEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
