use super::{Canvas, Skin};
use crate::game::{Direction, Snapshot};
use ratatui::{
    style::{Color, Style},
    widgets::BorderType,
};

/// Soft rounded segments on a grassy background.  The head wears a face that
/// looks the way the snake is going.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Rounded;

const SEGMENT: [char; 2] = ['◖', '◗'];

const BACKGROUND_STYLE: Style = Style::new().bg(Color::Rgb(0x8b, 0xa8, 0x68));

const HEAD_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Rgb(0x2f, 0x8f, 0x2f));

const BODY_STYLE: Style = Style::new().fg(Color::Rgb(0x4f, 0x6b, 0x32));

const APPLE_STYLE: Style = Style::new().fg(Color::Rgb(0x9c, 0x4a, 0x4a));

/// The eyes are drawn on the side of the head facing `direction`
fn face(direction: Direction) -> [char; 2] {
    match direction {
        Direction::Up => ['˙', '˙'],
        Direction::Down => ['.', '.'],
        Direction::Left => [':', ' '],
        Direction::Right => [' ', ':'],
    }
}

impl Skin for Rounded {
    fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    fn paint(&self, snapshot: &Snapshot<'_>, canvas: &mut Canvas<'_>) {
        canvas.fill(BACKGROUND_STYLE);
        if let Some(apple) = snapshot.apple {
            canvas.draw_tile(apple, SEGMENT, APPLE_STYLE);
        }
        for tile in snapshot.snake.segments().skip(1) {
            canvas.draw_tile(tile, SEGMENT, BODY_STYLE);
        }
        canvas.draw_tile(
            snapshot.snake.head(),
            face(snapshot.snake.direction()),
            HEAD_STYLE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Lifecycle, Snake, Tile};
    use ratatui::{buffer::Buffer, layout::Rect};
    use rstest::rstest;
    use std::time::Duration;

    fn paint_snake(snake: &Snake) -> Buffer {
        let snapshot = Snapshot {
            snake,
            apple: Some(Tile::new(3, 3)),
            state: Lifecycle::Running,
            tile_count: 4,
            score: 0,
            high_score: 0,
            interval: Duration::from_millis(120),
            multiplier: 1.0,
        };
        let area = Rect::new(0, 0, 8, 4);
        let mut buffer = Buffer::empty(area);
        Rounded.paint(&snapshot, &mut Canvas::new(area, &mut buffer));
        buffer
    }

    #[test]
    fn paint() {
        let snake = Snake::from_segments(
            [Tile::new(1, 0), Tile::new(1, 1), Tile::new(1, 2)],
            Direction::Up,
        );
        let buffer = paint_snake(&snake);
        let area = Rect::new(0, 0, 8, 4);
        let mut expected = Buffer::with_lines([
            "  ˙˙    ",
            "  ◖◗    ",
            "  ◖◗    ",
            "      ◖◗",
        ]);
        expected.set_style(area, BACKGROUND_STYLE);
        expected.set_style(Rect::new(2, 0, 2, 1), HEAD_STYLE);
        expected.set_style(Rect::new(2, 1, 2, 2), BODY_STYLE);
        expected.set_style(Rect::new(6, 3, 2, 1), APPLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[rstest]
    #[case(Direction::Up, "˙", "˙")]
    #[case(Direction::Down, ".", ".")]
    #[case(Direction::Left, ":", " ")]
    #[case(Direction::Right, " ", ":")]
    fn face_follows_direction(
        #[case] direction: Direction,
        #[case] left: &str,
        #[case] right: &str,
    ) {
        let snake = Snake::new(Tile::new(0, 0), direction);
        let buffer = paint_snake(&snake);
        assert_eq!(buffer[(0, 0)].symbol(), left);
        assert_eq!(buffer[(1, 0)].symbol(), right);
        assert_eq!(buffer[(0, 0)].bg, Color::Rgb(0x2f, 0x8f, 0x2f));
    }
}
