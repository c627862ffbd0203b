//! Parser for textual DAG descriptions
//!
//! A description lists one revision per line, highest numbers conventionally
//! first, each with its parents and an optional label:
//!
//! ```text
//! # a feature branch merged back into the trunk
//! 5: 3 4 "merge feature"
//! 4: 3
//! 3: 2
//! 2: 1
//! 1: 0
//! 0:
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Parents must be
//! numerically below the revision that names them, and a revision may be
//! defined at most once. Revisions that never appear on the left-hand side
//! simply have no parents; a walk shows them as disconnected heads.

use crate::dag::DAG_LINE_REGEX;
use crate::domain::revision::Revision;
use anyhow::{Context, bail};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// An in-memory revision DAG parsed from a textual description.
#[derive(Debug, Clone, Default)]
pub struct DagFile {
    parents: HashMap<Revision, Vec<Revision>>,
    labels: HashMap<Revision, String>,
    max_revision: Option<Revision>,
}

impl DagFile {
    /// Parses a whole description. Errors carry the one-based line number of
    /// the offending line.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let line_regex = regex::Regex::new(DAG_LINE_REGEX)?;
        let mut dag = DagFile::default();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let captures = line_regex
                .captures(line)
                .with_context(|| format!("malformed DAG line {line_number}: {raw:?}"))?;

            let revision = captures[1]
                .parse::<Revision>()
                .with_context(|| format!("revision number out of range on line {line_number}"))?;

            let mut parents = Vec::new();
            for token in captures[2].split_whitespace() {
                let parent = token.parse::<Revision>().with_context(|| {
                    format!("parent number out of range on line {line_number}")
                })?;

                if parent >= revision {
                    bail!(
                        "parent {parent} of revision {revision} must be numerically below it (line {line_number})"
                    );
                }
                parents.push(parent);
            }
            if parents.len() > 2 {
                bail!("revision {revision} lists more than two parents (line {line_number})");
            }

            if dag.parents.insert(revision, parents).is_some() {
                bail!("revision {revision} is defined more than once (line {line_number})");
            }
            if let Some(label) = captures.get(3) {
                dag.labels.insert(revision, label.as_str().to_string());
            }

            dag.max_revision = Some(dag.max_revision.map_or(revision, |max| max.max(revision)));
        }

        debug!("parsed DAG with {} defined revision(s)", dag.parents.len());

        Ok(dag)
    }

    /// Reads and parses a description from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read DAG file {}", path.display()))?;

        Self::parse(&text)
    }

    /// Parents of `revision`, empty for revisions the description never
    /// defines.
    pub fn parents_of(&self, revision: Revision) -> Vec<Revision> {
        self.parents.get(&revision).cloned().unwrap_or_default()
    }

    pub fn label(&self, revision: Revision) -> Option<&str> {
        self.labels.get(&revision).map(String::as_str)
    }

    /// Highest revision number defined by the description, the natural walk
    /// start.
    pub fn max_revision(&self) -> Option<Revision> {
        self.max_revision
    }

    pub fn revision_count(&self) -> usize {
        self.parents.len()
    }
}
