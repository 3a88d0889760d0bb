//! Shared primitives for the estate workspace: id and timestamp aliases,
//! the backend gateway error type, and accepted document file types.

pub mod error;
pub mod files;
pub mod types;
