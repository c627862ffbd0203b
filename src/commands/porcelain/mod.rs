//! Porcelain commands (user-facing output)
//!
//! ## Commands
//!
//! - `render`: Draw the walked history as a commit graph

pub mod render;
