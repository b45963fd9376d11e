use crate::game::GameEvent;
use std::fmt;
use std::io::Write;

/// Sounds that accompany game events
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    Eat,
    Death,
}

impl Cue {
    pub(crate) fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::Ate { .. } => Some(Cue::Eat),
            GameEvent::Died { .. } => Some(Cue::Death),
            GameEvent::Scored { .. } | GameEvent::Won { .. } => None,
        }
    }
}

/// Something that can play sound cues.  Playback is fire-and-forget: a cue
/// that cannot be played is dropped.
pub(crate) trait Sounds: fmt::Debug {
    fn play(&mut self, cue: Cue);
}

/// Play cues by ringing the terminal bell
#[derive(Debug)]
pub(crate) struct TerminalBell<W> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub(crate) fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write + fmt::Debug> Sounds for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        // A death gets a double ring so it can be told apart from eating
        let bells: &[u8] = match cue {
            Cue::Eat => b"\x07",
            Cue::Death => b"\x07\x07",
        };
        if let Err(e) = self.out.write_all(bells).and_then(|()| self.out.flush()) {
            log::debug!("Failed to ring terminal bell: {e}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mute;

impl Sounds for Mute {
    fn play(&mut self, _cue: Cue) {}
}
