//! Plumbing commands (low-level output)
//!
//! ## Commands
//!
//! - `rows`: Dump raw row geometry, one line per revision, for scripts and
//!   tests that care about columns and edges rather than pictures

pub mod rows;
