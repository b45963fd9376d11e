//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Time between movements of the snake before any apples have been eaten
pub(crate) const BASE_TICK_INTERVAL: Duration = Duration::from_millis(120);

/// The tick interval never drops below this, however high the score
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Points awarded for each apple eaten
pub(crate) const APPLE_POINTS: u32 = 10;

/// Every this many points, the snake speeds up by one step
pub(crate) const POINTS_PER_SPEED_STEP: u32 = 100;

/// Each speed step adds `1 / SPEED_STEP_DIVISOR` to the speed multiplier.
///
/// The tick interval is `base * SPEED_STEP_DIVISOR / (SPEED_STEP_DIVISOR +
/// steps)`, which keeps the arithmetic exact.
pub(crate) const SPEED_STEP_DIVISOR: u32 = 4;

/// Tile at which the snake starts, if the board is big enough to contain it
pub(crate) const SNAKE_ORIGIN: (i32, i32) = (10, 10);

/// Smallest supported number of tiles along each side of the board
pub(crate) const MIN_TILE_COUNT: u16 = 4;

/// Number of random samples to try when placing an apple before falling back
/// to choosing among the free tiles directly
pub(crate) const APPLE_SPAWN_ATTEMPTS: usize = 64;

/// Key under which the high score is persisted
pub(crate) const HIGH_SCORE_KEY: &str = "neosnake-highscore";

/// Number of terminal columns used to draw a single tile
pub(crate) const TILE_WIDTH: u16 = 2;

/// Number of terminal rows taken up by everything on the game screen other
/// than the board's tiles: the status bar, the board's border, and two lines
/// of messages
pub(crate) const SCREEN_CHROME_HEIGHT: u16 = 5;

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
