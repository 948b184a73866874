use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::grid::Cell;

/// Picks a uniformly random free cell for food placement.
///
/// Returns `None` when every cell is blocked (board full). Callers treat
/// absence as a recoverable condition and retry on a later tick.
#[must_use]
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    blocked: &HashSet<Cell>,
) -> Option<Cell> {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let cell = Cell { x, y };
            if !blocked.contains(&cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::grid::Cell;

    use super::place;

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    #[test]
    fn placement_never_lands_on_blocked_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let blocked: HashSet<Cell> = (0..6).map(|x| Cell { x, y: 0 }).collect();

        for _ in 0..100 {
            let food = place(&mut rng, BOUNDS, &blocked).expect("free cells remain");
            assert!(!blocked.contains(&food));
            assert!(food.is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn full_board_yields_no_placement() {
        let mut rng = StdRng::seed_from_u64(1);
        let blocked: HashSet<Cell> = (0..i32::from(BOUNDS.height))
            .flat_map(|y| (0..i32::from(BOUNDS.width)).map(move |x| Cell { x, y }))
            .collect();

        assert_eq!(place(&mut rng, BOUNDS, &blocked), None);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(2);
        let free = Cell { x: 3, y: 3 };
        let blocked: HashSet<Cell> = (0..i32::from(BOUNDS.height))
            .flat_map(|y| (0..i32::from(BOUNDS.width)).map(move |x| Cell { x, y }))
            .filter(|cell| *cell != free)
            .collect();

        assert_eq!(place(&mut rng, BOUNDS, &blocked), Some(free));
    }
}
