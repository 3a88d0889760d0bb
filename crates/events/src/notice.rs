//! User-facing notifications, carried on the event bus as notice events.
//!
//! Stores publish a success notice after each completed mutation and an
//! error notice for every surfaced failure; the presentation layer renders
//! them however it likes (toast, status bar, log line).

use serde_json::json;

use crate::bus::StoreEvent;
use crate::kinds;

/// A decoded notice event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Notice {
    /// Build an informational notice event.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> StoreEvent {
        StoreEvent::new(kinds::NOTICE_INFO)
            .with_payload(json!({ "title": title.into(), "body": body.into() }))
    }

    /// Build an error notice event.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> StoreEvent {
        StoreEvent::new(kinds::NOTICE_ERROR)
            .with_payload(json!({ "title": title.into(), "body": body.into() }))
    }

    /// Decode a notice from a bus event; `None` for non-notice kinds.
    pub fn from_event(event: &StoreEvent) -> Option<Self> {
        let severity = match event.kind.as_str() {
            kinds::NOTICE_INFO => Severity::Info,
            kinds::NOTICE_ERROR => Severity::Error,
            _ => return None,
        };
        Some(Self {
            severity,
            title: event.payload["title"].as_str().unwrap_or_default().to_string(),
            body: event.payload["body"].as_str().unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_notice_round_trips() {
        let event = Notice::info("Success", "Property created successfully");
        let notice = Notice::from_event(&event).expect("notice kind");
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.body, "Property created successfully");
    }

    #[test]
    fn error_notice_round_trips() {
        let event = Notice::error("Error", "Failed to load properties");
        let notice = Notice::from_event(&event).expect("notice kind");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn non_notice_events_decode_to_none() {
        let event = StoreEvent::new(kinds::PROPERTY_CREATED);
        assert!(Notice::from_event(&event).is_none());
    }
}
