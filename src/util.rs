use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::error::Error;

/// Return a `Rect` of (at most) the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

/// Return the largest number of tiles per side of a board that fits on a
/// screen of the given size, but no fewer than
/// [`MIN_TILE_COUNT`][consts::MIN_TILE_COUNT]
pub(crate) fn tile_count_for(screen: Size) -> u16 {
    let across = screen.width.saturating_sub(2) / consts::TILE_WIDTH;
    let down = screen.height.saturating_sub(consts::SCREEN_CHROME_HEIGHT);
    across.min(down).max(consts::MIN_TILE_COUNT)
}

/// Render an error and each of its sources, separated by colons
pub(crate) fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(e) = source {
        msg.push_str(": ");
        msg.push_str(&e.to_string());
        source = e.source();
    }
    msg
}
