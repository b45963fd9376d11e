use super::{Canvas, Skin};
use crate::game::{Lifecycle, Snapshot};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

/// Retro pixel blocks: a bright head, a dark yellow body, and a dark red
/// apple on black.  Each block stops just short of the next one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Blocky;

const BLOCK: [char; 2] = ['█', '▉'];

const BACKGROUND_STYLE: Style = Style::new().bg(Color::Black);

const HEAD_STYLE: Style = Style::new().fg(Color::Rgb(0x3a, 0xff, 0x3a));

const BODY_STYLE: Style = Style::new().fg(Color::Rgb(0xc7, 0xb9, 0x48));

const APPLE_STYLE: Style = Style::new().fg(Color::Rgb(0xb0, 0x30, 0x30));

/// Style for the head once it has crashed
const CRASH_STYLE: Style = Style::new()
    .fg(Color::Rgb(0xff, 0x00, 0x00))
    .add_modifier(Modifier::SLOW_BLINK);

impl Skin for Blocky {
    fn border_type(&self) -> BorderType {
        BorderType::Thick
    }

    fn paint(&self, snapshot: &Snapshot<'_>, canvas: &mut Canvas<'_>) {
        canvas.fill(BACKGROUND_STYLE);
        if let Some(apple) = snapshot.apple {
            canvas.draw_tile(apple, BLOCK, APPLE_STYLE);
        }
        let mut segments = snapshot.snake.segments();
        let head = segments.next();
        for tile in segments {
            canvas.draw_tile(tile, BLOCK, BODY_STYLE);
        }
        // Draw the head last so that a crash is drawn on top of whatever it
        // hit
        if let Some(head) = head {
            let style = if snapshot.state == Lifecycle::Dead {
                CRASH_STYLE
            } else {
                HEAD_STYLE
            };
            canvas.draw_tile(head, BLOCK, style);
        }
    }
}
