//! Selection state machine: which property, if any, is open in detail view.
//!
//! Two states: List (nothing open) and Detail (one property open, cached as
//! a full snapshot). The snapshot is never mutated independently; every
//! transition re-derives it from the authoritative property list, so the
//! detail view and the list can never disagree about the same property.

use estate_core::types::PropertyId;
use estate_gateway::models::property::Property;

/// The open-property reference driving the detail view.
#[derive(Debug, Default)]
pub struct Selection {
    open: Option<Property>,
}

impl Selection {
    /// List → Detail: record the property's current snapshot from the
    /// authoritative list. Stays in List (returns `None`) for unknown ids.
    pub fn open(&mut self, id: PropertyId, properties: &[Property]) -> Option<Property> {
        self.open = properties.iter().find(|p| p.id == id).cloned();
        self.open.clone()
    }

    /// Detail → List: clear the open reference.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Detail → Detail: re-derive the open snapshot from the list by id
    /// lookup. Transitions to List when the open property no longer exists.
    pub fn refresh(&mut self, properties: &[Property]) {
        if let Some(open) = &self.open {
            self.open = properties.iter().find(|p| p.id == open.id).cloned();
        }
    }

    /// The currently open property, if any.
    pub fn current(&self) -> Option<&Property> {
        self.open.as_ref()
    }

    /// `true` while a property is open in detail view.
    pub fn is_detail(&self) -> bool {
        self.open.is_some()
    }
}
