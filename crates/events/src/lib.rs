//! In-process eventing for the estate workspace.
//!
//! Stores publish a [`StoreEvent`](bus::StoreEvent) on the shared
//! [`EventBus`](bus::EventBus) after every mutation, so dependent views can
//! re-render without polling. User-facing notifications travel the same bus
//! as notice events (see [`notice`]).

pub mod bus;
pub mod kinds;
pub mod notice;

pub use bus::{EventBus, StoreEvent};
pub use notice::{Notice, Severity};
