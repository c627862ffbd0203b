//! Core layout vocabulary
//!
//! - `revision`: revision numbers and validated walk ranges
//! - `row`: the per-row layout products handed to renderers (columns, edges,
//!   color tags)

pub mod revision;
pub mod row;
