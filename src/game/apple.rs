use super::grid::{Grid, Tile};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// Pick a tile uniformly at random from those not occupied by `snake`.
///
/// Random tiles are sampled until a free one turns up.  If that takes too
/// many attempts (the board is nearly full), a free tile is instead chosen
/// directly from the list of free tiles.  Returns `None` if the snake covers
/// the whole board.
pub(crate) fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Tile> {
    if snake.len() >= grid.area() {
        return None;
    }
    let n = i32::from(grid.tile_count());
    for _ in 0..consts::APPLE_SPAWN_ATTEMPTS {
        let tile = Tile::new(rng.random_range(0..n), rng.random_range(0..n));
        if !grid.is_occupied(tile, snake) {
            return Some(tile);
        }
    }
    grid.tiles()
        .filter(|&tile| !grid.is_occupied(tile, snake))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_lands_on_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = Snake::from_segments(
            [
                Tile::new(0, 0),
                Tile::new(1, 0),
                Tile::new(2, 0),
                Tile::new(3, 0),
                Tile::new(3, 1),
            ],
            Direction::Left,
        );
        let grid = Grid::new(6);
        for _ in 0..200 {
            let apple = spawn(&mut rng, grid, &snake).unwrap();
            assert!(grid.in_bounds(apple));
            assert!(!snake.occupies(apple));
        }
    }

    #[test]
    fn full_board_is_exhausted() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(4);
        let snake = Snake::from_segments(serpentine(grid), Direction::Right);
        assert_eq!(snake.len(), grid.area());
        assert_eq!(spawn(&mut rng, grid, &snake), None);
    }

    #[test]
    fn last_free_tile_is_found() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(4);
        let mut tiles = serpentine(grid);
        let last = tiles.pop().unwrap();
        let snake = Snake::from_segments(tiles, Direction::Right);
        for _ in 0..20 {
            assert_eq!(spawn(&mut rng, grid, &snake), Some(last));
        }
    }

    /// Every tile on the board in an order where each tile is adjacent to the
    /// one before it
    fn serpentine(grid: Grid) -> Vec<Tile> {
        let n = i32::from(grid.tile_count());
        (0..n)
            .flat_map(|y| {
                let row = (0..n).map(move |x| Tile::new(x, y));
                if y % 2 == 0 {
                    row.collect::<Vec<_>>()
                } else {
                    row.rev().collect()
                }
            })
            .collect()
    }
}
