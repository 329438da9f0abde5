use rand::Rng;

use crate::geometry::{Cell, GRID};

/// Random draws tried before switching to sampling the free cells directly.
pub const MAX_REJECTIONS: usize = 64;

/// Picks a cell not covered by `occupied`, uniformly over the free cells.
///
/// Rejection sampling is enough while the snake is short. Once it has missed
/// `MAX_REJECTIONS` times in a row the free cells are enumerated and one is
/// drawn from that list, so the call always terminates. Returns `None` only
/// when the board is full.
pub fn place_food<R: Rng + ?Sized>(occupied: &[Cell], rng: &mut R) -> Option<Cell> {
    for _ in 0..MAX_REJECTIONS {
        let cell = Cell::new(rng.gen_range(0..GRID), rng.gen_range(0..GRID));
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = (0..GRID)
        .flat_map(|y| (0..GRID).map(move |x| Cell::new(x, y)))
        .filter(|c| !occupied.contains(c))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}
