//! Frame around the surface.

use crate::fb::FrameBuffer;
use crate::types::Attr;

/// Glyphs for each side and corner of the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderParams {
    pub left: char,
    pub right: char,
    pub top: char,
    pub bottom: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl Default for BorderParams {
    fn default() -> Self {
        Self {
            left: '│',
            right: '│',
            top: '─',
            bottom: '─',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
        }
    }
}

impl BorderParams {
    /// Box-drawing border with plain `|` sides.
    pub fn with_bar_sides() -> Self {
        Self {
            left: '|',
            right: '|',
            ..Self::default()
        }
    }
}

/// Draw `params` along the outermost rows and columns of `fb`.
pub fn draw_border(fb: &mut FrameBuffer, params: &BorderParams) {
    let w = fb.width();
    let h = fb.height();
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (w - 1, h - 1);

    for x in 1..right {
        fb.put_char(x, 0, params.top, Attr::Normal);
        fb.put_char(x, bottom, params.bottom, Attr::Normal);
    }
    for y in 1..bottom {
        fb.put_char(0, y, params.left, Attr::Normal);
        fb.put_char(right, y, params.right, Attr::Normal);
    }
    fb.put_char(0, 0, params.top_left, Attr::Normal);
    fb.put_char(right, 0, params.top_right, Attr::Normal);
    fb.put_char(0, bottom, params.bottom_left, Attr::Normal);
    fb.put_char(right, bottom, params.bottom_right, Attr::Normal);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_corners_and_sides() {
        let mut fb = FrameBuffer::new(4, 3);
        draw_border(&mut fb, &BorderParams::with_bar_sides());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "|  |");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn tiny_surfaces_are_left_alone() {
        let mut fb = FrameBuffer::new(1, 5);
        draw_border(&mut fb, &BorderParams::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }
}
