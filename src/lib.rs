//! revgraph - incremental layout of revision DAGs as text commit graphs
//!
//! The crate walks a revision history backward (highest revision number
//! first) and assigns every revision a column, a color and the edges that
//! connect it to the rows below. Layout is computed lazily, one row per
//! iteration, so callers can render a window of a large history without
//! paying for the rest.
//!
//! ## Architecture
//!
//! - `domain`: revision numbers, walk ranges and the per-row layout products
//! - `graph`: the column-assignment engine ([`graph::grapher::RevisionGrapher`])
//! - `dag`: the textual DAG description format used to feed the engine
//! - `render`: turns rows into box-drawing or ASCII art
//! - `commands`: porcelain/plumbing command implementations for the binary
//! - `term`: adapter paging command output through `minus`

pub mod commands;
pub mod dag;
pub mod domain;
pub mod graph;
pub mod render;
pub mod term;

use clap::ValueEnum;

/// When graph lanes are colorized with ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal
    #[default]
    Auto,
    /// Always emit ANSI colors, even when piped
    Always,
    /// Never emit ANSI colors
    Never,
}

impl ColorMode {
    /// Applies the mode to the process-wide color switch. `Auto` leaves the
    /// terminal detection built into `colored` in charge.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Character set used for graph drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GlyphSet {
    /// Box-drawing characters (`●`, `│`, `╭`, `╯`, ...)
    #[default]
    Unicode,
    /// Plain ASCII (`o`, `|`, `/`, `\`, `+`)
    Ascii,
}
