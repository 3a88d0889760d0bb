//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct
//! - Input DTOs for creation (required fields, validated) and patching
//!   (all `Option` fields)

pub mod document;
pub mod property;
