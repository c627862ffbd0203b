//! Text rendering of graph rows
//!
//! - `cell`: direction flags for link-line cells and their glyph tables
//! - `ascii`: the two-line-per-row renderer producing the final graph text

pub mod ascii;
pub mod cell;
