//! Command implementations
//!
//! This module contains the command implementations behind the binary,
//! organized into two categories:
//!
//! - `plumbing`: Low-level commands with stable line-based output (rows)
//! - `porcelain`: User-facing commands producing the rendered graph (render)
//!
//! Both hang off [`GraphView`], which couples the loaded DAG description
//! with the writer output goes to.

use crate::dag::dag_file::DagFile;
use crate::domain::revision::{Revision, RevisionRange};
use anyhow::Context;
use std::cell::{RefCell, RefMut};

pub mod plumbing;
pub mod porcelain;

/// A loaded DAG description plus the sink command output is written to.
///
/// The writer is injected so tests can capture output instead of printing
/// it, and so the binary can swap in a pager for long graphs.
pub struct GraphView {
    dag: DagFile,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl GraphView {
    pub fn new(dag: DagFile, writer: Box<dyn std::io::Write>) -> Self {
        GraphView {
            dag,
            writer: RefCell::new(writer),
        }
    }

    pub fn dag(&self) -> &DagFile {
        &self.dag
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Resolves the walk bounds shared by all commands: `start` falls back
    /// to the highest defined revision, and the range is validated.
    pub(crate) fn walk_range(
        &self,
        start: Option<Revision>,
        stop: Revision,
    ) -> anyhow::Result<RevisionRange> {
        let start = start
            .or_else(|| self.dag.max_revision())
            .context("the DAG describes no revisions; pass --start explicitly")?;

        Ok(RevisionRange::new(start, stop)?)
    }
}
