//! Revision graph layout
//!
//! This module implements the column-assignment engine behind the graph
//! renderer. It walks revision numbers backward, highest first, and lays out
//! one row per revision, keeping just enough state between rows to know
//! which columns are taken and which color each line is drawn with.
//!
//! ## Algorithm Overview
//!
//! The engine keeps an ordered list of lanes, one per revision that has been
//! referenced as a parent but not visited yet. For every revision walked:
//!
//! 1. Find the revision's lane. If nothing referenced it so far, it is the
//!    head of a line nobody has seen and it opens a new lane at the right
//!    edge of the graph.
//! 2. The lane's position is the row's column.
//! 3. Parents without a lane of their own are spliced into exactly that
//!    position, lowest revision number first. Columns to either side never
//!    shift, and a sole new parent inherits its child's column, which keeps
//!    straight-line history in a single column.
//! 4. One edge is emitted for every surviving lane, plus one edge from the
//!    acting revision to each of its parents' lanes.
//!
//! Colors follow the lanes. A lone admitted parent keeps its child's color,
//! every further admitted parent and every new head gets a fresh color tag.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let range = RevisionRange::new(Revision::new(120), Revision::new(80))?;
//! let grapher = RevisionGrapher::new(range, |revision| {
//!     // Your function to load a revision's parents
//!     store.parents_of(revision)
//! });
//!
//! for row in grapher {
//!     let row = row?;
//!     println!("{} sits in column {}", row.revision, row.column);
//! }
//! ```
//!
//! Layout is lazy. Nothing is computed until the iterator is advanced, and
//! the cost of a row depends only on the number of live lanes, so rendering
//! a window of a huge history stays cheap.

use crate::domain::revision::{Revision, RevisionRange};
use crate::domain::row::{ColorTag, GraphEdge, GraphRow};
use anyhow::Context;
use derive_new::new;
use log::{debug, trace};

/// One live lane: a revision whose line still has to reach rows below, plus
/// the color its segments are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
struct Lane {
    revision: Revision,
    color: ColorTag,
}

/// Lays out revision rows while walking history from `start` down to `stop`.
///
/// The grapher is generic over the function that loads a revision's parents,
/// so it works against any storage backend. Parents must carry numbers
/// strictly below the revision that names them; at most the first occurrence
/// of a duplicated parent is kept.
///
/// A grapher is a one-shot iterator over `anyhow::Result<GraphRow>`. Every
/// revision in the range yields exactly one row, connected or not. A failed
/// parent lookup yields the error once and ends the walk; rows produced
/// before the failure remain valid.
///
/// # Type Parameters
///
/// * `ParentsFn` - A function that takes a revision and returns its parents,
///   or an empty vector for roots.
pub struct RevisionGrapher<ParentsFn>
where
    ParentsFn: Fn(Revision) -> anyhow::Result<Vec<Revision>>,
{
    /// Function to load the parents of any given revision
    parents_of: ParentsFn,
    stop: Revision,
    /// Next revision to lay out; `None` once the walk is exhausted or failed
    cursor: Option<Revision>,
    lanes: Vec<Lane>,
    colors_handed_out: usize,
}

impl<ParentsFn> RevisionGrapher<ParentsFn>
where
    ParentsFn: Fn(Revision) -> anyhow::Result<Vec<Revision>>,
{
    /// Creates an engine walking `range.start()` down to `range.stop()`,
    /// both inclusive. No parent is loaded before the first iteration.
    pub fn new(range: RevisionRange, parents_of: ParentsFn) -> Self {
        Self {
            parents_of,
            stop: range.stop(),
            cursor: Some(range.start()),
            lanes: Vec::new(),
            colors_handed_out: 0,
        }
    }

    fn step(&mut self, curr: Revision) -> anyhow::Result<GraphRow> {
        // Work on copies so a failing parent lookup leaves the walk state
        // exactly as it was before the step.
        let mut lanes = self.lanes.clone();
        let mut colors_handed_out = self.colors_handed_out;

        let column = match position_of(&lanes, curr) {
            Some(column) => column,
            None => {
                // Nothing referenced this revision yet: it heads a line of
                // its own in the next free column.
                let color = fresh_color(&mut colors_handed_out);
                trace!("revision {curr} opens a head lane with color {color}");
                lanes.push(Lane::new(curr, color));
                lanes.len() - 1
            }
        };
        let color = lanes[column].color;

        let parents = dedup_keeping_order(
            (self.parents_of)(curr)
                .with_context(|| format!("failed to load parents of revision {curr}"))?,
        );

        // Parents without a lane take over the acting revision's slot,
        // lowest revision number first.
        let mut admitted = parents
            .iter()
            .copied()
            .filter(|parent| position_of(&lanes, *parent).is_none())
            .collect::<Vec<_>>();
        admitted.sort_unstable();

        let admitted_lanes = admitted
            .iter()
            .enumerate()
            .map(|(index, &parent)| {
                // The first admitted parent continues the child's line, any
                // further one starts a branch of its own.
                let lane_color = if index == 0 {
                    color
                } else {
                    fresh_color(&mut colors_handed_out)
                };
                Lane::new(parent, lane_color)
            })
            .collect::<Vec<_>>();

        let mut next_lanes = lanes.clone();
        next_lanes.splice(column..=column, admitted_lanes);

        let mut edges = Vec::new();
        for (from, lane) in lanes.iter().enumerate() {
            if lane.revision == curr {
                for parent in &parents {
                    if let Some(to) = position_of(&next_lanes, *parent) {
                        edges.push(GraphEdge::new(from, to, next_lanes[to].color));
                    }
                }
            } else if let Some(to) = position_of(&next_lanes, lane.revision) {
                edges.push(GraphEdge::new(from, to, next_lanes[to].color));
            }
        }

        trace!(
            "row {curr}: column {column}, {} edge(s), {} lane(s) continue",
            edges.len(),
            next_lanes.len()
        );

        self.lanes = next_lanes;
        self.colors_handed_out = colors_handed_out;

        Ok(GraphRow {
            revision: curr,
            column,
            color,
            edges,
            parents,
        })
    }
}

impl<ParentsFn> Iterator for RevisionGrapher<ParentsFn>
where
    ParentsFn: Fn(Revision) -> anyhow::Result<Vec<Revision>>,
{
    type Item = anyhow::Result<GraphRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.cursor?;

        match self.step(curr) {
            Ok(row) => {
                self.cursor = if curr == self.stop {
                    None
                } else {
                    Some(Revision::new(curr.number() - 1))
                };
                Some(Ok(row))
            }
            Err(error) => {
                debug!("walk aborted at revision {curr}: {error:#}");
                self.cursor = None;
                Some(Err(error))
            }
        }
    }
}

fn fresh_color(handed_out: &mut usize) -> ColorTag {
    let tag = ColorTag::new(*handed_out);
    *handed_out += 1;
    tag
}

fn position_of(lanes: &[Lane], revision: Revision) -> Option<usize> {
    lanes.iter().position(|lane| lane.revision == revision)
}

fn dedup_keeping_order(mut parents: Vec<Revision>) -> Vec<Revision> {
    let mut seen = Vec::with_capacity(parents.len());
    parents.retain(|parent| {
        if seen.contains(parent) {
            false
        } else {
            seen.push(*parent);
            true
        }
    });
    parents
}
