//! Client-side state engine for the property portfolio.
//!
//! [`PropertyStore`] holds the authoritative in-memory property list and
//! runs all property CRUD against the injected backend gateway.
//! [`DocumentOps`] performs uploads and deletes scoped to one property with
//! its own progress flags. [`Selection`] keeps the open detail snapshot
//! identical to the master list entry after every mutation.
//!
//! All state changes are announced on the shared event bus, success and
//! failure alike, so dependent views re-render without polling.

pub mod documents;
pub mod error;
pub mod properties;
pub mod selection;

pub use documents::DocumentOps;
pub use error::{StoreError, StoreResult};
pub use properties::PropertyStore;
pub use selection::Selection;
