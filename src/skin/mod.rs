//! Interchangeable ways of drawing the board
mod blocky;
mod rounded;
pub(crate) use self::blocky::Blocky;
pub(crate) use self::rounded::Rounded;
use crate::consts;
use crate::game::{Snapshot, Tile};
use enum_dispatch::enum_dispatch;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::BorderType,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A strategy for turning a game snapshot into cells.  Skins only decide how
/// things look; where things are comes entirely from the snapshot.
#[enum_dispatch]
pub(crate) trait Skin {
    /// The border to draw around the board
    fn border_type(&self) -> BorderType;

    /// Draw the board's contents onto `canvas`, which covers exactly the
    /// board's tiles
    fn paint(&self, snapshot: &Snapshot<'_>, canvas: &mut Canvas<'_>);
}

#[enum_dispatch(Skin)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum AnySkin {
    Blocky,
    Rounded,
}

impl From<SkinName> for AnySkin {
    fn from(name: SkinName) -> AnySkin {
        match name {
            SkinName::Blocky => Blocky.into(),
            SkinName::Rounded => Rounded.into(),
        }
    }
}

/// The name by which a skin is selected in the configuration file and on the
/// command line
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SkinName {
    /// High-contrast square blocks on black
    #[default]
    Blocky,

    /// Soft rounded segments on a grassy background, with a face on the
    /// snake's head
    Rounded,
}

impl fmt::Display for SkinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkinName::Blocky => "blocky",
            SkinName::Rounded => "rounded",
        };
        f.pad(name)
    }
}

impl FromStr for SkinName {
    type Err = ParseSkinError;

    fn from_str(s: &str) -> Result<SkinName, ParseSkinError> {
        match s {
            "blocky" => Ok(SkinName::Blocky),
            "rounded" => Ok(SkinName::Rounded),
            _ => Err(ParseSkinError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown skin {0:?}; expected \"blocky\" or \"rounded\"")]
pub(crate) struct ParseSkinError(String);

/// The area of a buffer on which a board is drawn, addressed in tiles.  Each
/// tile is [`TILE_WIDTH`][consts::TILE_WIDTH] cells wide and one cell tall.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer) -> Canvas<'a> {
        Canvas { area, buf }
    }

    /// Apply `style` to the whole board
    pub(crate) fn fill(&mut self, style: Style) {
        self.buf.set_style(self.area, style);
    }

    /// Draw the two halves of `glyph` in the cells for `tile`.  Tiles lying
    /// outside the canvas are skipped.
    pub(crate) fn draw_tile(&mut self, tile: Tile, glyph: [char; 2], style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(tile.x), u16::try_from(tile.y)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::TILE_WIDTH)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (dx, symbol) in (0..consts::TILE_WIDTH).zip(glyph) {
            let Some(pos) = x.checked_add(dx).map(|x| Position::new(x, y)) else {
                return;
            };
            if !self.area.contains(pos) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_char(symbol);
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn draw_tile_uses_two_cells() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(Rect::new(1, 1, 8, 2), &mut buf);
        canvas.draw_tile(Tile::new(2, 1), ['<', '>'], Style::new().fg(Color::Red));
        assert_eq!(buf[(5, 2)].symbol(), "<");
        assert_eq!(buf[(6, 2)].symbol(), ">");
        assert_eq!(buf[(5, 2)].fg, Color::Red);
        assert_eq!(buf[(4, 2)].symbol(), " ");
    }

    #[test]
    fn draw_tile_clips_to_canvas() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(Rect::new(0, 0, 4, 2), &mut buf);
        canvas.draw_tile(Tile::new(2, 0), ['x', 'x'], Style::new());
        canvas.draw_tile(Tile::new(0, 2), ['x', 'x'], Style::new());
        canvas.draw_tile(Tile::new(-1, 0), ['x', 'x'], Style::new());
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn skin_names() {
        for name in [SkinName::Blocky, SkinName::Rounded] {
            assert_eq!(name.to_string().parse::<SkinName>(), Ok(name));
        }
        assert!("plaid".parse::<SkinName>().is_err());
        assert_eq!(AnySkin::from(SkinName::Rounded), AnySkin::Rounded(Rounded));
    }
}
