//! Two-line-per-row graph rendering
//!
//! Every layout row becomes a node line, showing the revision's glyph among
//! the lanes passing by, and a link line wiring it to the row below. Rows
//! are rendered as they come out of the walk, so output can be streamed.
//! The only state carried across rows is the set of lanes continuing below
//! the most recent one, which is needed to close the graph.

use crate::GlyphSet;
use crate::domain::row::{ColorTag, GraphRow};
use crate::render::cell::LinkCell;
use colored::{Color, Colorize};

/// Palette the lane color tags cycle through.
pub const LANE_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Terminal color assigned to a lane's color tag.
pub fn lane_color(tag: ColorTag) -> Color {
    LANE_PALETTE[tag.index() % LANE_PALETTE.len()]
}

fn paint(text: &str, tag: ColorTag) -> String {
    text.color(lane_color(tag)).to_string()
}

/// Streams layout rows into graph text.
///
/// Columns are two characters wide: the column's glyph plus a filler that
/// horizontal runs pass through. Whether anything is colorized is decided by
/// the process-wide `colored` switch, so piped output stays plain unless
/// explicitly forced.
pub struct AsciiGraph {
    glyphs: GlyphSet,
    /// Colors of the lanes continuing below the last rendered row
    trailing: Vec<Option<ColorTag>>,
}

impl AsciiGraph {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self {
            glyphs,
            trailing: Vec::new(),
        }
    }

    /// Renders one row: the node line and, when anything continues below
    /// it, the link line. `label` is appended after the revision number.
    pub fn render_row(&mut self, row: &GraphRow, label: Option<&str>) -> Vec<String> {
        let mut lines = vec![self.node_line(row, label)];
        if let Some(links) = self.link_line(row) {
            lines.push(links);
        }

        self.trailing = continuing_lanes(row);

        lines
    }

    /// Closing line for lanes running past the bottom of the walked range,
    /// or `None` when the graph bottomed out on its own.
    pub fn finish(&self) -> Option<String> {
        if self.trailing.is_empty() {
            return None;
        }

        let mut line = String::new();
        for color in &self.trailing {
            match color {
                Some(tag) => line.push_str(&paint("~", *tag)),
                None => line.push('~'),
            }
            line.push(' ');
        }

        Some(line.trim_end().to_string())
    }

    fn node_line(&self, row: &GraphRow, label: Option<&str>) -> String {
        let mut line = String::new();
        for column in 0..row.column_count() {
            if column == row.column {
                line.push_str(&paint(&self.glyphs.node().to_string(), row.color));
            } else if let Some(edge) = row.edges.iter().find(|edge| edge.from == column) {
                line.push_str(&paint(&self.glyphs.vertical().to_string(), edge.color));
            } else {
                line.push(' ');
            }
            line.push(' ');
        }

        line.push_str(&paint(&row.revision.to_string(), row.color));
        if let Some(label) = label {
            line.push(' ');
            line.push_str(label);
        }

        line
    }

    fn link_line(&self, row: &GraphRow) -> Option<String> {
        if row.edges.is_empty() {
            return None;
        }

        let width = row.column_count().max(row.next_column_count());
        let mut cells = vec![LinkCell::empty(); width];
        let mut cell_colors: Vec<Option<ColorTag>> = vec![None; width];
        let mut gap_colors: Vec<Option<ColorTag>> = vec![None; width.saturating_sub(1)];

        for edge in &row.edges {
            if edge.from == edge.to {
                cells[edge.from] |= LinkCell::VERTICAL;
                cell_colors[edge.from].get_or_insert(edge.color);
                continue;
            }

            if edge.from < edge.to {
                cells[edge.from] |= LinkCell::UP | LinkCell::RIGHT;
                cells[edge.to] |= LinkCell::DOWN | LinkCell::LEFT;
            } else {
                cells[edge.from] |= LinkCell::UP | LinkCell::LEFT;
                cells[edge.to] |= LinkCell::DOWN | LinkCell::RIGHT;
            }

            let leftmost = edge.from.min(edge.to);
            let rightmost = edge.from.max(edge.to);
            for cell in cells.iter_mut().take(rightmost).skip(leftmost + 1) {
                *cell |= LinkCell::HORIZONTAL;
            }
            for color in cell_colors.iter_mut().take(rightmost + 1).skip(leftmost) {
                color.get_or_insert(edge.color);
            }
            for gap in gap_colors.iter_mut().take(rightmost).skip(leftmost) {
                gap.get_or_insert(edge.color);
            }
        }

        let mut line = String::new();
        for (column, cell) in cells.iter().enumerate() {
            let glyph = cell.glyph(self.glyphs);
            match cell_colors[column] {
                Some(tag) if glyph != ' ' => line.push_str(&paint(&glyph.to_string(), tag)),
                _ => line.push(glyph),
            }
            if column + 1 < width {
                match gap_colors[column] {
                    Some(tag) => {
                        line.push_str(&paint(&self.glyphs.horizontal().to_string(), tag))
                    }
                    None => line.push(' '),
                }
            }
        }

        Some(line.trim_end().to_string())
    }
}

/// Color of every column still occupied below `row`, in column order.
fn continuing_lanes(row: &GraphRow) -> Vec<Option<ColorTag>> {
    let mut colors = vec![None; row.next_column_count()];
    for edge in &row.edges {
        colors[edge.to].get_or_insert(edge.color);
    }

    colors
}
