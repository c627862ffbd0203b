use crate::domain::revision::Revision;
use derive_new::new;
use std::fmt;

/// Identity of one lane's line in the rendered graph.
///
/// Tags are handed out in allocation order and never reused within a walk.
/// A lane keeps its tag for as long as its line runs, so renderers can map
/// tags onto a finite palette and a branch keeps a stable color from the row
/// that opened it down to the row where it merges away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTag(usize);

impl ColorTag {
    pub(crate) const fn new(index: usize) -> Self {
        ColorTag(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line segment between the current row and the row below it.
///
/// `from` indexes the columns of the current row, `to` the columns of the
/// next row. The segment is drawn with the color of the lane it runs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub color: ColorTag,
}

/// Layout of a single revision: everything a renderer needs to draw one row
/// and connect it to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRow {
    /// The revision this row stands for
    pub revision: Revision,
    /// Column the revision's node is drawn in
    pub column: usize,
    /// Color of the lane the revision sits on
    pub color: ColorTag,
    /// Segments connecting this row's columns to the next row's columns
    pub edges: Vec<GraphEdge>,
    /// Parents reported for the revision, duplicates collapsed
    pub parents: Vec<Revision>,
}

impl GraphRow {
    /// Number of live columns at this row. Every column other than the
    /// node's own carries exactly one continuation edge, so the width can be
    /// read back off the row itself.
    pub fn column_count(&self) -> usize {
        let widest_edge = self.edges.iter().map(|edge| edge.from + 1).max();

        widest_edge.unwrap_or(0).max(self.column + 1)
    }

    /// Number of live columns going into the next row.
    pub fn next_column_count(&self) -> usize {
        self.edges
            .iter()
            .map(|edge| edge.to + 1)
            .max()
            .unwrap_or(0)
    }
}
