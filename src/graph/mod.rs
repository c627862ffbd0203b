//! Graph layout engine
//!
//! The `grapher` submodule walks revision numbers backward and assigns every
//! revision a column, a color and the edges connecting it to the row below.

pub mod grapher;
