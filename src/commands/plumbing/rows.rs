use crate::commands::GraphView;
use crate::domain::revision::Revision;
use crate::domain::row::GraphRow;
use crate::graph::grapher::RevisionGrapher;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct RowsOptions {
    /// Walk start; defaults to the highest revision the DAG defines
    pub start: Option<Revision>,
    /// Lowest revision to walk down to, inclusive
    pub stop: Revision,
}

impl GraphView {
    /// Dumps raw row geometry, one line per revision:
    ///
    /// ```text
    /// 5 col=0 color=0 parents=3,4 edges=0->0@0,0->1@1
    /// ```
    ///
    /// `-` stands for an empty parent or edge list. The format is stable so
    /// scripts and tests can assert on columns and edges directly.
    pub fn rows(&self, opts: &RowsOptions) -> anyhow::Result<()> {
        let range = self.walk_range(opts.start, opts.stop)?;

        let grapher = RevisionGrapher::new(range, |revision| Ok(self.dag().parents_of(revision)));
        for row in grapher {
            writeln!(self.writer(), "{}", row_line(&row?))?;
        }

        Ok(())
    }
}

fn row_line(row: &GraphRow) -> String {
    let parents = if row.parents.is_empty() {
        "-".to_string()
    } else {
        row.parents
            .iter()
            .map(Revision::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };
    let edges = if row.edges.is_empty() {
        "-".to_string()
    } else {
        row.edges
            .iter()
            .map(|edge| format!("{}->{}@{}", edge.from, edge.to, edge.color))
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "{} col={} color={} parents={} edges={}",
        row.revision, row.column, row.color, parents, edges
    )
}
