use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Pause,
    Home,
    End,
    Next,
    Prev,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (m, KeyCode::Char(c)) if normal_modifiers.contains(m) => Command::from_char(c),
            _ => None,
        }
    }

    /// Letter keys are also accepted in their positions on a Russian ЙЦУКЕН
    /// layout, so that the game can be played without switching layouts.
    fn from_char(c: char) -> Option<Command> {
        match c {
            'w' | 'k' | 'ц' => Some(Command::Up),
            's' | 'j' | 'ы' => Some(Command::Down),
            'a' | 'h' | 'ф' => Some(Command::Left),
            'd' | 'l' | 'в' => Some(Command::Right),
            'p' | '`' | '~' | 'ё' | 'Ё' => Some(Command::Pause),
            'r' | 'к' => Some(Command::R),
            'q' | 'й' => Some(Command::Q),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), Some(Command::Up))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE), Some(Command::Up))]
    #[case(KeyEvent::new(KeyCode::Char('ц'), KeyModifiers::NONE), Some(Command::Up))]
    #[case(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE), Some(Command::Down))]
    #[case(KeyEvent::new(KeyCode::Char('ф'), KeyModifiers::NONE), Some(Command::Left))]
    #[case(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE), Some(Command::Right))]
    #[case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), Some(Command::Pause))]
    #[case(KeyEvent::new(KeyCode::Char('`'), KeyModifiers::NONE), Some(Command::Pause))]
    #[case(KeyEvent::new(KeyCode::Char('~'), KeyModifiers::SHIFT), Some(Command::Pause))]
    #[case(KeyEvent::new(KeyCode::Char('Ё'), KeyModifiers::SHIFT), Some(Command::Pause))]
    #[case(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), Some(Command::R))]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), Some(Command::Q))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL), None)]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
