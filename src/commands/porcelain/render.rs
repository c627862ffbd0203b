use crate::GlyphSet;
use crate::commands::GraphView;
use crate::domain::revision::Revision;
use crate::graph::grapher::RevisionGrapher;
use crate::render::ascii::AsciiGraph;
use log::debug;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Walk start; defaults to the highest revision the DAG defines
    pub start: Option<Revision>,
    /// Lowest revision to walk down to, inclusive
    pub stop: Revision,
    pub glyphs: GlyphSet,
}

impl GraphView {
    /// Renders the walked range as a commit graph. Rows are laid out and
    /// written one by one, so a window of a large history costs only the
    /// rows it shows.
    pub fn render(&self, opts: &RenderOptions) -> anyhow::Result<()> {
        let range = self.walk_range(opts.start, opts.stop)?;
        debug!(
            "rendering revisions {} down to {}",
            range.start(),
            range.stop()
        );

        let grapher = RevisionGrapher::new(range, |revision| Ok(self.dag().parents_of(revision)));
        let mut graph = AsciiGraph::new(opts.glyphs);

        for row in grapher {
            let row = row?;
            for line in graph.render_row(&row, self.dag().label(row.revision)) {
                writeln!(self.writer(), "{line}")?;
            }
        }
        if let Some(closing) = graph.finish() {
            writeln!(self.writer(), "{closing}")?;
        }

        Ok(())
    }
}
