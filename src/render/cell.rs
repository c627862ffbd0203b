//! Link-line cells and glyph tables
//!
//! Between two node lines the renderer draws one link line. Every cell of it
//! accumulates the directions of the edge segments crossing it, and the
//! final direction set picks the glyph. Merging flags instead of drawing
//! edges one by one is what turns a crossing of two lines into `┼` rather
//! than whichever line was drawn last.

use crate::GlyphSet;
use bitflags::bitflags;

bitflags! {
    /// Directions entering one link-line cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LinkCell: u8 {
        const UP = 0b0001;
        const DOWN = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl LinkCell {
    /// Glyph for this direction set in the given character set.
    pub fn glyph(self, glyphs: GlyphSet) -> char {
        match glyphs {
            GlyphSet::Unicode => self.box_glyph(),
            GlyphSet::Ascii => self.ascii_glyph(),
        }
    }

    fn box_glyph(self) -> char {
        let up = self.contains(LinkCell::UP);
        let down = self.contains(LinkCell::DOWN);
        let left = self.contains(LinkCell::LEFT);
        let right = self.contains(LinkCell::RIGHT);

        match (up, down, left, right) {
            (false, false, false, false) => ' ',
            (true, true, false, false) => '│',
            (false, false, true, true) => '─',
            (true, false, true, false) => '╯',
            (true, false, false, true) => '╰',
            (false, true, true, false) => '╮',
            (false, true, false, true) => '╭',
            (true, true, true, false) => '┤',
            (true, true, false, true) => '├',
            (false, true, true, true) => '┬',
            (true, false, true, true) => '┴',
            (true, true, true, true) => '┼',
            // Dangling stubs only occur on malformed rows; still give them ink.
            (true, false, false, false) | (false, true, false, false) => '│',
            (false, false, true, false) | (false, false, false, true) => '─',
        }
    }

    fn ascii_glyph(self) -> char {
        let up = self.contains(LinkCell::UP);
        let down = self.contains(LinkCell::DOWN);
        let left = self.contains(LinkCell::LEFT);
        let right = self.contains(LinkCell::RIGHT);

        match (up, down, left, right) {
            (false, false, false, false) => ' ',
            (true, true, false, false)
            | (true, false, false, false)
            | (false, true, false, false) => '|',
            (false, false, _, _) => '-',
            // Diagonals read top-to-bottom: `/` leans left going down.
            (true, false, true, false) | (false, true, false, true) => '/',
            (true, false, false, true) | (false, true, true, false) => '\\',
            _ => '+',
        }
    }
}

impl GlyphSet {
    /// Glyph marking a revision's node.
    pub(crate) fn node(self) -> char {
        match self {
            GlyphSet::Unicode => '●',
            GlyphSet::Ascii => 'o',
        }
    }

    /// Glyph for a lane passing straight through a node line.
    pub(crate) fn vertical(self) -> char {
        match self {
            GlyphSet::Unicode => '│',
            GlyphSet::Ascii => '|',
        }
    }

    /// Filler drawn between two cells a horizontal run crosses.
    pub(crate) fn horizontal(self) -> char {
        match self {
            GlyphSet::Unicode => '─',
            GlyphSet::Ascii => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn straight_runs_use_line_glyphs() {
        assert_eq!(LinkCell::VERTICAL.glyph(GlyphSet::Unicode), '│');
        assert_eq!(LinkCell::VERTICAL.glyph(GlyphSet::Ascii), '|');
        assert_eq!(LinkCell::HORIZONTAL.glyph(GlyphSet::Unicode), '─');
        assert_eq!(LinkCell::HORIZONTAL.glyph(GlyphSet::Ascii), '-');
        assert_eq!(LinkCell::empty().glyph(GlyphSet::Unicode), ' ');
    }

    #[test]
    fn corners_follow_the_turn_direction() {
        let down_right = LinkCell::DOWN | LinkCell::RIGHT;
        let down_left = LinkCell::DOWN | LinkCell::LEFT;
        let up_right = LinkCell::UP | LinkCell::RIGHT;
        let up_left = LinkCell::UP | LinkCell::LEFT;

        assert_eq!(down_right.glyph(GlyphSet::Unicode), '╭');
        assert_eq!(down_left.glyph(GlyphSet::Unicode), '╮');
        assert_eq!(up_right.glyph(GlyphSet::Unicode), '╰');
        assert_eq!(up_left.glyph(GlyphSet::Unicode), '╯');

        assert_eq!(down_right.glyph(GlyphSet::Ascii), '/');
        assert_eq!(down_left.glyph(GlyphSet::Ascii), '\\');
        assert_eq!(up_right.glyph(GlyphSet::Ascii), '\\');
        assert_eq!(up_left.glyph(GlyphSet::Ascii), '/');
    }

    #[test]
    fn junctions_merge_their_directions() {
        let fork = LinkCell::VERTICAL | LinkCell::RIGHT;
        let join = LinkCell::VERTICAL | LinkCell::LEFT;
        let cross = LinkCell::VERTICAL | LinkCell::HORIZONTAL;

        assert_eq!(fork.glyph(GlyphSet::Unicode), '├');
        assert_eq!(join.glyph(GlyphSet::Unicode), '┤');
        assert_eq!(cross.glyph(GlyphSet::Unicode), '┼');

        assert_eq!(fork.glyph(GlyphSet::Ascii), '+');
        assert_eq!(join.glyph(GlyphSet::Ascii), '+');
        assert_eq!(cross.glyph(GlyphSet::Ascii), '+');
    }
}
