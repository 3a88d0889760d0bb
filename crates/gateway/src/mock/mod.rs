//! In-memory mock backend.
//!
//! [`MockGateway`] simulates the persistence layer: an owned property list
//! seeded with a sample portfolio, per-operation artificial latency, an
//! in-memory blob store behind `mock://` URLs, and one-shot failure
//! injection for exercising error paths in tests.

mod gateway;
mod latency;
mod seed;

pub use gateway::{GatewayOp, MockGateway};
pub use latency::LatencyProfile;
pub use seed::sample_portfolio;
