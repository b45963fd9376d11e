use crate::consts;
use crate::game::{Lifecycle, Snapshot};
use crate::paused::Paused;
use crate::skin::{AnySkin, Canvas, Skin};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Everything shown while a game is on screen: the status bar, the board as
/// painted by the current skin, and any messages or menus on top
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GameScreen<'a> {
    snapshot: Snapshot<'a>,
    skin: AnySkin,
    pause_menu: Paused,
}

impl<'a> GameScreen<'a> {
    pub(crate) fn new(snapshot: Snapshot<'a>, skin: AnySkin, pause_menu: Paused) -> GameScreen<'a> {
        GameScreen {
            snapshot,
            skin,
            pause_menu,
        }
    }

    fn status_line(&self) -> Line<'static> {
        Line::styled(
            format!(
                " Score: {}   Highscore: {}   Speed: {:.2} (×{:.2})",
                self.snapshot.score,
                self.snapshot.high_score,
                self.snapshot.ticks_per_second(),
                self.snapshot.multiplier,
            ),
            consts::STATUS_BAR_STYLE,
        )
    }
}

impl Widget for GameScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.status_line().render(status_area, buf);

        let tiles = self.snapshot.tile_count;
        let block_size = Size {
            width: tiles.saturating_mul(consts::TILE_WIDTH).saturating_add(2),
            height: tiles.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered()
            .border_type(self.skin.border_type())
            .render(block_area, buf);
        let mut canvas = Canvas::new(block_area.inner(Margin::new(1, 1)), buf);
        self.skin.paint(&self.snapshot, &mut canvas);

        match self.snapshot.state {
            Lifecycle::Running => (),
            Lifecycle::Ready => {
                Line::from_iter([
                    Span::raw(" Start ("),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg1_area, buf);
            }
            Lifecycle::Paused => {
                let pause_area = center_rect(
                    area,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                self.pause_menu.render(pause_area, buf);
            }
            Lifecycle::Dead | Lifecycle::Won => {
                let banner = if self.snapshot.state == Lifecycle::Won {
                    " — YOU WIN —"
                } else {
                    " — GAME OVER —"
                };
                Span::from(banner).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}
