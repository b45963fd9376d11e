use super::direction::Direction;
use super::snake::Snake;
use crate::consts;

/// A single cell of the board, addressed by column `x` and row `y`.
///
/// Coordinates are signed so that a step off the edge of the board can be
/// represented and rejected by [`Grid::in_bounds()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Tile {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Tile {
    pub(crate) const fn new(x: i32, y: i32) -> Tile {
        Tile { x, y }
    }

    /// Return the neighboring tile in `direction`.  No wraparound is applied.
    pub(crate) fn step(self, direction: Direction) -> Tile {
        let (dx, dy) = direction.vector();
        Tile {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A square board of `tile_count × tile_count` tiles
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    tile_count: u16,
}

impl Grid {
    /// Create a grid with `tile_count` tiles per side.  Counts below
    /// [`MIN_TILE_COUNT`][consts::MIN_TILE_COUNT] are raised to it.
    pub(crate) fn new(tile_count: u16) -> Grid {
        Grid {
            tile_count: tile_count.max(consts::MIN_TILE_COUNT),
        }
    }

    pub(crate) fn tile_count(self) -> u16 {
        self.tile_count
    }

    /// Total number of tiles on the board
    pub(crate) fn area(self) -> usize {
        usize::from(self.tile_count) * usize::from(self.tile_count)
    }

    pub(crate) fn in_bounds(self, tile: Tile) -> bool {
        let range = 0..i32::from(self.tile_count);
        range.contains(&tile.x) && range.contains(&tile.y)
    }

    pub(crate) fn is_occupied(self, tile: Tile, snake: &Snake) -> bool {
        snake.occupies(tile)
    }

    /// Iterate over every tile on the board in row-major order
    pub(crate) fn tiles(self) -> impl Iterator<Item = Tile> {
        let n = i32::from(self.tile_count);
        (0..n).flat_map(move |y| (0..n).map(move |x| Tile::new(x, y)))
    }

    /// The tile on which a new snake is placed.  This is the fixed
    /// [`SNAKE_ORIGIN`][consts::SNAKE_ORIGIN] unless the board is too small
    /// to contain it, in which case the center of the board is used.
    pub(crate) fn origin(self) -> Tile {
        let (x, y) = consts::SNAKE_ORIGIN;
        let origin = Tile::new(x, y);
        if self.in_bounds(origin) {
            origin
        } else {
            let mid = i32::from(self.tile_count / 2);
            Tile::new(mid, mid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Tile::new(0, 0), true)]
    #[case(Tile::new(19, 19), true)]
    #[case(Tile::new(19, 0), true)]
    #[case(Tile::new(20, 5), false)]
    #[case(Tile::new(5, 20), false)]
    #[case(Tile::new(-1, 5), false)]
    #[case(Tile::new(5, -1), false)]
    fn test_in_bounds(#[case] tile: Tile, #[case] r: bool) {
        assert_eq!(Grid::new(20).in_bounds(tile), r);
    }

    #[test]
    fn is_occupied() {
        let snake = Snake::from_segments(
            [Tile::new(3, 3), Tile::new(2, 3), Tile::new(2, 4)],
            Direction::Right,
        );
        let grid = Grid::new(10);
        assert!(grid.is_occupied(Tile::new(3, 3), &snake));
        assert!(grid.is_occupied(Tile::new(2, 4), &snake));
        assert!(!grid.is_occupied(Tile::new(4, 3), &snake));
    }

    #[test]
    fn tiles_cover_board() {
        let grid = Grid::new(5);
        let tiles = grid.tiles().collect::<Vec<_>>();
        assert_eq!(tiles.len(), grid.area());
        assert!(tiles.iter().all(|&t| grid.in_bounds(t)));
        assert_eq!(tiles.first(), Some(&Tile::new(0, 0)));
        assert_eq!(tiles.last(), Some(&Tile::new(4, 4)));
    }

    #[test]
    fn tiny_counts_are_raised() {
        assert_eq!(Grid::new(0).tile_count(), consts::MIN_TILE_COUNT);
    }

    #[rstest]
    #[case(20, Tile::new(10, 10))]
    #[case(11, Tile::new(10, 10))]
    #[case(10, Tile::new(5, 5))]
    #[case(7, Tile::new(3, 3))]
    fn test_origin(#[case] tile_count: u16, #[case] origin: Tile) {
        assert_eq!(Grid::new(tile_count).origin(), origin);
    }

    #[test]
    fn step_has_no_wraparound() {
        assert_eq!(Tile::new(0, 4).step(Direction::Left), Tile::new(-1, 4));
        assert_eq!(Tile::new(4, 0).step(Direction::Up), Tile::new(4, -1));
        assert_eq!(Tile::new(4, 4).step(Direction::Down), Tile::new(4, 5));
    }
}
