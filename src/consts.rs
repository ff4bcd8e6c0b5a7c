//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Board width in board-pixel coordinates
pub(crate) const BOARD_WIDTH: i32 = 800;

/// Board height in board-pixel coordinates
pub(crate) const BOARD_HEIGHT: i32 = 400;

/// Snake length at the start of every session
pub(crate) const INITIAL_SNAKE_LENGTH: i32 = 5;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.  The height must fit the tallest board the size presets
/// can produce (27 rows at unit 15, plus the border and three text lines).
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 32,
};

/// Glyph for the snake's body segments
pub(crate) const SNAKE_BODY_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Text drawn across the middle of the board when a session ends
pub(crate) const GAME_OVER_TEXT: &str = "Game Over";

/// Style for the board background
pub(crate) const BOARD_STYLE: Style = Style::new().bg(Color::White);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Rgb(0x00, 0x33, 0x66));

/// Style patched over each body segment as its border
pub(crate) const SNAKE_BORDER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Cyan);

/// Style for [`GAME_OVER_TEXT`]
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);

/// Style for the score line at the top of the screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
