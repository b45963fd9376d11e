use crate::command::Command;
use crate::consts;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying a pause menu pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(crate) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(crate) const WIDTH: u16 = 19;

    /// Create a new `Paused`
    pub(crate) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<PauseOpt> {
        match cmd {
            Command::Pause => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::Q | Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            Command::Left | Command::Right => (),
        }
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum PauseOpt {
    /// Unpause/resume the game
    Resume,

    /// Start the game over
    Restart,

    /// Quit the application
    Quit,
}

impl PauseOpt {
    fn min() -> PauseOpt {
        PauseOpt::from_usize(0)
    }

    fn max() -> PauseOpt {
        PauseOpt::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<PauseOpt> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| PauseOpt::from_usize(i))
    }

    fn prev(self) -> Option<PauseOpt> {
        self.into_usize().checked_sub(1).map(PauseOpt::from_usize)
    }

    fn iter() -> impl Iterator<Item = PauseOpt> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Render the option as a `Line` for display in the pause menu.  If
    /// `selected` is `true`, this option is the currently-selected/active one.
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        let (label, key) = match self {
            PauseOpt::Resume => ("Resume (", "Esc"),
            PauseOpt::Restart => ("Restart (", "r"),
            PauseOpt::Quit => ("Quit (", "q"),
        };
        line.push_span(label);
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ─────┐
     * │ » Resume (Esc)  │
     * │   Restart (r)   │
     * │   Quit (q)      │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_resumes() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_command(Command::Pause), Some(PauseOpt::Resume));
    }

    #[test]
    fn navigate_and_choose() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Restart));
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.handle_command(Command::Down), None);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Quit));
        assert_eq!(paused.handle_command(Command::Next), None);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Resume));
        assert_eq!(paused.handle_command(Command::Prev), None);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Quit));
        assert_eq!(paused.handle_command(Command::Home), None);
        assert_eq!(paused.handle_command(Command::Up), None);
        assert_eq!(paused.handle_command(Command::Enter), Some(PauseOpt::Resume));
    }

    #[test]
    fn render() {
        let area = Rect::new(0, 0, Paused::WIDTH, Paused::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Paused::new().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── PAUSED ─────┐",
            "│ » Resume (Esc)  │",
            "│   Restart (r)   │",
            "│   Quit (q)      │",
            "└─────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(12, 1, 3, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(2, 1, 15, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(13, 2, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(10, 3, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
