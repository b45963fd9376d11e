use super::direction::Direction;
use super::grid::Tile;
use std::collections::VecDeque;

/// The snake: where its segments are and which way it is heading.
///
/// The head is kept apart from the rest of the body so that a snake always has
/// at least one segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Tile,

    /// The positions of the rest of the snake, starting with the neck and
    /// ending with the tail
    body: VecDeque<Tile>,

    /// The direction in which the snake moved on the most recent tick
    direction: Direction,

    /// The direction in which the snake will move on the next tick
    pending: Direction,
}

impl Snake {
    /// Create a new single-segment snake at `head` facing in `direction`
    pub(crate) fn new(head: Tile, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            direction,
            pending: direction,
        }
    }

    /// Create a snake from its segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Tile>>(
        segments: I,
        direction: Direction,
    ) -> Snake {
        let mut iter = segments.into_iter();
        let head = iter.next().expect("snake should have at least one segment");
        Snake {
            head,
            body: iter.collect(),
            direction,
            pending: direction,
        }
    }

    pub(crate) fn head(&self) -> Tile {
        self.head
    }

    /// The direction the snake last moved in, which is the way it is facing
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction that will be used on the next tick
    #[cfg(test)]
    pub(crate) fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Tile> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn occupies(&self, tile: Tile) -> bool {
        self.head == tile || self.body.contains(&tile)
    }

    /// Request that the snake move in `direction` on the next tick.
    ///
    /// Requests to reverse the direction committed by the last tick are
    /// rejected, as they would steer the head into the neck.  Any other
    /// request replaces whatever was requested before.  Returns whether the
    /// request was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            false
        } else {
            self.pending = direction;
            true
        }
    }

    /// Return the tile the head will move to on the next tick
    pub(crate) fn propose_head(&self) -> Tile {
        self.head.step(self.pending)
    }

    /// Move the snake one tile forwards in the pending direction.  If `eat` is
    /// true, the tail is kept and the snake grows by one segment.
    pub(crate) fn advance(&mut self, eat: bool) {
        let new_head = self.propose_head();
        self.direction = self.pending;
        self.body.push_front(self.head);
        self.head = new_head;
        if !eat {
            let _ = self.body.pop_back();
        }
        debug_assert!(
            !self.body.contains(&self.head),
            "snake advanced onto its own body"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn advance_without_eating_keeps_length() {
        let mut snake = Snake::from_segments(
            [Tile::new(5, 5), Tile::new(4, 5), Tile::new(3, 5)],
            Direction::Right,
        );
        snake.advance(false);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Tile::new(6, 5), Tile::new(5, 5), Tile::new(4, 5)]
        );
    }

    #[test]
    fn advance_with_eating_grows() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right);
        snake.advance(true);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Tile::new(6, 5), Tile::new(5, 5)]
        );
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::from_segments([Tile::new(5, 5), Tile::new(4, 5)], Direction::Right);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.propose_head(), Tile::new(6, 5));
        snake.advance(false);
        assert_eq!(snake.head(), Tile::new(6, 5));
    }

    #[test]
    fn single_segment_cannot_reverse_either() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Up);
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn turn_is_applied_on_next_advance() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.direction(), Direction::Right);
        snake.advance(false);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Tile::new(5, 4));
    }

    #[test]
    fn later_request_wins() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert!(snake.turn(Direction::Down));
        snake.advance(false);
        assert_eq!(snake.head(), Tile::new(5, 6));
    }

    #[test]
    fn reversal_is_checked_against_committed_direction() {
        // Up is queued, but the snake is still moving Right, so Left is a
        // reversal and must not replace it.
        let mut snake = Snake::from_segments([Tile::new(5, 5), Tile::new(4, 5)], Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn segments_stay_unique_while_winding() {
        let mut snake = Snake::new(Tile::new(5, 5), Direction::Right);
        let turns = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
            Direction::Up,
            Direction::Right,
        ];
        for (i, &d) in turns.iter().enumerate() {
            snake.turn(d);
            snake.advance(i % 2 == 0);
            let unique = snake.segments().collect::<HashSet<_>>();
            assert_eq!(unique.len(), snake.len());
        }
    }

    #[test]
    fn occupies_every_segment() {
        let snake = Snake::from_segments(
            [Tile::new(2, 2), Tile::new(2, 3), Tile::new(3, 3)],
            Direction::Up,
        );
        assert!(snake.occupies(Tile::new(2, 2)));
        assert!(snake.occupies(Tile::new(3, 3)));
        assert!(!snake.occupies(Tile::new(3, 2)));
    }
}
