use crate::audio::{Cue, Sounds};
use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{Direction, Game, GameEvent, Grid, Intent, Lifecycle};
use crate::highscores::HighScoreStore;
use crate::paused::{PauseOpt, Paused};
use crate::screen::GameScreen;
use crate::skin::AnySkin;
use crate::ticker::Ticker;
use crate::util::tile_count_for;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;
use std::time::Instant;

/// The running program: a single game plus everything needed to drive it in
/// real time and show it in the terminal
#[derive(Debug)]
pub(crate) struct App {
    game: Game<Box<dyn HighScoreStore>>,
    ticker: Ticker,
    skin: AnySkin,
    sounds: Box<dyn Sounds>,
    pause_menu: Paused,

    /// Fixed board size from the configuration, if any
    tile_count: Option<u16>,

    /// Size of the terminal as of the last draw
    screen_size: Size,

    quitting: bool,
}

impl App {
    pub(crate) fn new(
        config: &GameConfig,
        store: Box<dyn HighScoreStore>,
        sounds: Box<dyn Sounds>,
        screen_size: Size,
    ) -> App {
        let grid = board_for(config.tile_count, screen_size);
        App {
            game: Game::new(grid, config.base_interval(), store),
            ticker: Ticker::new(),
            skin: config.skin.into(),
            sounds,
            pause_menu: Paused::new(),
            tile_count: config.tile_count,
            screen_size,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| {
            self.screen_size = frame.area().as_size();
            frame.render_widget(
                GameScreen::new(self.game.snapshot(), self.skin, self.pause_menu),
                frame.area(),
            );
        })?;
        Ok(())
    }

    /// Wait for either the next input event or, if the game is running, the
    /// next tick, whichever comes first
    fn process_input(&mut self) -> io::Result<()> {
        if self.game.state() == Lifecycle::Running {
            let now = Instant::now();
            let deadline = self.ticker.deadline(now, self.game.tick_interval());
            if poll(deadline.saturating_duration_since(now))? {
                self.handle_event(read()?);
            } else {
                self.tick();
            }
        } else {
            self.ticker.stop();
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        let mut interval = self.game.tick_interval();
        for event in self.game.tick() {
            if let Some(cue) = Cue::for_event(&event) {
                self.sounds.play(cue);
            }
            match event {
                GameEvent::Ate { tile } => log::trace!("Apple eaten at ({}, {})", tile.x, tile.y),
                // Replacing the deadline here means a speed-up takes effect
                // on the very next move
                GameEvent::Scored { interval: next, .. } => interval = next,
                GameEvent::Died {
                    score,
                    new_high_score,
                } => {
                    if new_high_score {
                        log::info!("New high score: {score}");
                    }
                }
                GameEvent::Won { score } => log::debug!("Board cleared with score {score}"),
            }
        }
        self.ticker.reschedule(Instant::now(), interval);
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.game.state() == Lifecycle::Running {
                self.pause();
            }
        } else if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match self.game.state() {
            Lifecycle::Running => match cmd {
                Command::Quit => self.quitting = true,
                Command::Up => self.game.handle(Intent::Turn(Direction::Up)),
                Command::Down => self.game.handle(Intent::Turn(Direction::Down)),
                Command::Left => self.game.handle(Intent::Turn(Direction::Left)),
                Command::Right => self.game.handle(Intent::Turn(Direction::Right)),
                Command::Pause => self.pause(),
                Command::R => self.start(),
                _ => (),
            },
            Lifecycle::Paused => match self.pause_menu.handle_command(cmd) {
                Some(PauseOpt::Resume) => self.game.handle(Intent::TogglePause),
                Some(PauseOpt::Restart) => self.start(),
                Some(PauseOpt::Quit) => self.quitting = true,
                None => (),
            },
            Lifecycle::Ready | Lifecycle::Dead | Lifecycle::Won => match cmd {
                Command::Enter | Command::R => self.start(),
                Command::Q | Command::Quit => self.quitting = true,
                _ => (),
            },
        }
    }

    fn pause(&mut self) {
        self.pause_menu = Paused::new();
        self.game.handle(Intent::TogglePause);
    }

    fn start(&mut self) {
        self.game.start(board_for(self.tile_count, self.screen_size));
        self.ticker.stop();
    }
}

/// Return the board to play on: the configured size if there is one,
/// otherwise the largest board that fits on the screen
fn board_for(tile_count: Option<u16>, screen_size: Size) -> Grid {
    Grid::new(tile_count.unwrap_or_else(|| tile_count_for(screen_size)))
}
