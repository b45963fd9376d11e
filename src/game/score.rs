use crate::consts;
use crate::highscores::HighScoreStore;
use crate::util::error_chain;
use std::time::Duration;

/// Score, speed, and high score bookkeeping for a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ScoreBoard {
    score: u32,
    high_score: u32,
    base_interval: Duration,
    interval: Duration,
}

impl ScoreBoard {
    pub(crate) fn new(base_interval: Duration, high_score: u32) -> ScoreBoard {
        ScoreBoard {
            score: 0,
            high_score,
            base_interval,
            interval: tick_interval(base_interval, 0),
        }
    }

    /// Zero the score and restore the base interval for a new game
    pub(crate) fn reset(&mut self, high_score: u32) {
        *self = ScoreBoard::new(self.base_interval, high_score.max(self.high_score));
    }

    /// Pick up a high score recorded in the store since it was last read
    pub(crate) fn refresh_high_score(&mut self, stored: u32) {
        self.high_score = self.high_score.max(stored);
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The delay between ticks at the current score
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn multiplier(&self) -> f64 {
        speed_multiplier(self.score)
    }

    /// Award the points for an apple and recompute the tick interval.  Returns
    /// the new score and interval.
    pub(crate) fn on_eat(&mut self) -> (u32, Duration) {
        self.score = self.score.saturating_add(consts::APPLE_POINTS);
        self.interval = tick_interval(self.base_interval, self.score);
        (self.score, self.interval)
    }

    /// Record the final score of a game in `store` if it beats the stored high
    /// score.  Returns `true` if it did.
    ///
    /// A failure to save is logged and otherwise ignored; the in-memory high
    /// score is updated either way.
    pub(crate) fn on_death<S: HighScoreStore + ?Sized>(&mut self, store: &mut S) -> bool {
        let previous = store.get(consts::HIGH_SCORE_KEY);
        if self.score > previous {
            if let Err(e) = store.set(consts::HIGH_SCORE_KEY, self.score) {
                log::warn!("{}", error_chain(&e));
            }
            self.high_score = self.score;
            true
        } else {
            self.high_score = self.high_score.max(previous);
            false
        }
    }
}

/// Number of completed speed steps at `score`
fn speed_steps(score: u32) -> u32 {
    score / consts::POINTS_PER_SPEED_STEP
}

/// The factor by which the snake is faster at `score` than at the start:
/// `1 + floor(score / 100) × 0.25`
pub(crate) fn speed_multiplier(score: u32) -> f64 {
    1.0 + f64::from(speed_steps(score)) / f64::from(consts::SPEED_STEP_DIVISOR)
}

/// The delay between ticks at `score`, i.e., `base / speed_multiplier(score)`
pub(crate) fn tick_interval(base: Duration, score: u32) -> Duration {
    let divisor = consts::SPEED_STEP_DIVISOR.saturating_add(speed_steps(score));
    (base.saturating_mul(consts::SPEED_STEP_DIVISOR) / divisor).max(consts::MIN_TICK_INTERVAL)
}
