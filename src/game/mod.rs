mod apple;
mod direction;
mod grid;
mod score;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, Tile};
use self::score::ScoreBoard;
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::highscores::HighScoreStore;
use rand::Rng;
use std::time::Duration;

/// A single game of snake: the board, the snake, the apple, the score, and
/// the lifecycle state tying them together.
///
/// The game does no timekeeping of its own; the caller is expected to call
/// [`Game::tick()`] every [`Game::tick_interval()`] while the game is
/// running.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<S, R = rand::rngs::ThreadRng> {
    rng: R,
    store: S,
    grid: Grid,
    snake: Snake,
    apple: Option<Tile>,
    scores: ScoreBoard,
    state: Lifecycle,
}

impl<S: HighScoreStore> Game<S, rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid, base_interval: Duration, store: S) -> Self {
        Game::new_with_rng(grid, base_interval, store, rand::rng())
    }
}

impl<S: HighScoreStore, R: Rng> Game<S, R> {
    /// Create a game in the `Ready` state.  The snake and apple are laid out
    /// so that there is something to show, but nothing moves until
    /// [`Game::start()`] is called.
    pub(crate) fn new_with_rng(grid: Grid, base_interval: Duration, store: S, mut rng: R) -> Self {
        let high_score = store.get(consts::HIGH_SCORE_KEY);
        let snake = Snake::new(grid.origin(), Direction::Right);
        let apple = apple::spawn(&mut rng, grid, &snake);
        Game {
            rng,
            store,
            grid,
            snake,
            apple,
            scores: ScoreBoard::new(base_interval, high_score),
            state: Lifecycle::Ready,
        }
    }

    /// Start a fresh game on a board of the given size.  This is accepted in
    /// every state.
    pub(crate) fn start(&mut self, grid: Grid) {
        self.grid = grid;
        self.snake = Snake::new(grid.origin(), Direction::Right);
        self.scores.reset(self.store.get(consts::HIGH_SCORE_KEY));
        self.apple = apple::spawn(&mut self.rng, grid, &self.snake);
        self.state = Lifecycle::Running;
        log::info!(
            "Starting game on {n}×{n} board",
            n = grid.tile_count()
        );
    }

    /// Apply an intent from the player.  Intents that make no sense in the
    /// current state are ignored; in particular, turns requested while paused
    /// are discarded.
    pub(crate) fn handle(&mut self, intent: Intent) {
        match (self.state, intent) {
            (Lifecycle::Running, Intent::Turn(direction)) => {
                if !self.snake.turn(direction) {
                    log::trace!("Ignoring request to reverse into the neck");
                }
            }
            (Lifecycle::Running, Intent::TogglePause) => self.state = Lifecycle::Paused,
            (Lifecycle::Paused, Intent::TogglePause) => self.state = Lifecycle::Running,
            _ => (),
        }
    }

    /// Advance the game by one tick and return what happened.  Does nothing
    /// unless the game is running.
    pub(crate) fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state != Lifecycle::Running {
            return events;
        }
        let next = self.snake.propose_head();
        // The tail still counts as occupied even though it would move out of
        // the way on this tick.
        if !self.grid.in_bounds(next) || self.grid.is_occupied(next, &self.snake) {
            self.state = Lifecycle::Dead;
            let new_high_score = self.scores.on_death(&mut self.store);
            log::info!(
                "Snake died at {next:?} with score {}{}",
                self.scores.score(),
                if new_high_score { " (new high score)" } else { "" }
            );
            events.push(GameEvent::Died {
                score: self.scores.score(),
                new_high_score,
            });
            return events;
        }
        let eat = self.apple == Some(next);
        self.snake.advance(eat);
        if eat {
            events.push(GameEvent::Ate { tile: next });
            let (score, interval) = self.scores.on_eat();
            self.scores.refresh_high_score(self.store.get(consts::HIGH_SCORE_KEY));
            log::debug!("Score is now {score}; tick interval is {interval:?}");
            events.push(GameEvent::Scored { score, interval });
            self.apple = apple::spawn(&mut self.rng, self.grid, &self.snake);
            if self.apple.is_none() {
                self.state = Lifecycle::Won;
                self.scores.on_death(&mut self.store);
                log::info!("Snake filled the board with score {score}");
                events.push(GameEvent::Won { score });
            }
        }
        events
    }
}

impl<S, R> Game<S, R> {
    pub(crate) fn state(&self) -> Lifecycle {
        self.state
    }

    /// The delay that should elapse before the next tick
    pub(crate) fn tick_interval(&self) -> Duration {
        self.scores.interval()
    }

    /// Return a read-only view of the game for drawing
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            apple: self.apple,
            state: self.state,
            tile_count: self.grid.tile_count(),
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            interval: self.scores.interval(),
            multiplier: self.scores.multiplier(),
        }
    }
}

/// The lifecycle of a game.  `Dead` and `Won` are terminal until the game is
/// restarted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Lifecycle {
    Ready,
    Running,
    Paused,
    Dead,
    /// The snake has filled the board and there is nowhere left to put an
    /// apple.
    Won,
}

/// Something the player wants the game to do
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    Turn(Direction),
    TogglePause,
}

/// Notable things that happen during a tick, for the benefit of sound and
/// display
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Ate { tile: Tile },
    Scored { score: u32, interval: Duration },
    Died { score: u32, new_high_score: bool },
    Won { score: u32 },
}

/// Everything a skin needs in order to draw a game
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) snake: &'a Snake,
    pub(crate) apple: Option<Tile>,
    pub(crate) state: Lifecycle,
    pub(crate) tile_count: u16,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) interval: Duration,
    pub(crate) multiplier: f64,
}

impl Snapshot<'_> {
    /// Speed in ticks per second
    pub(crate) fn ticks_per_second(&self) -> f64 {
        1.0 / self.interval.as_secs_f64()
    }
}
