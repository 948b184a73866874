use std::collections::HashSet;

use rand::Rng;

use crate::config::{GridSize, MAZE_DENSITY_DIVISOR, MAZE_MAX_ATTEMPTS};
use crate::grid::Cell;
use crate::path::find_path;

/// A generated wall layout with guaranteed start-to-goal solvability.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: HashSet<Cell>,
    start: Cell,
    goal: Cell,
    /// Start-to-goal path found at generation time. Display-only: movement
    /// planning always re-runs the pathfinder against live obstacles.
    reference_path: Vec<Cell>,
}

impl Maze {
    /// Generates a random solvable maze for `bounds`.
    ///
    /// Each attempt lays a full border ring plus `total_cells / 3` interior
    /// samples (duplicates collapse into the set) and validates with the
    /// pathfinder. After [`MAZE_MAX_ATTEMPTS`] failures, falls back to the
    /// border-only layout, which is always solvable. This function therefore
    /// never returns an unsolvable maze.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        debug_assert!(bounds.width >= 4 && bounds.height >= 4);

        let start = Cell { x: 1, y: 1 };
        let goal = Cell {
            x: i32::from(bounds.width) - 2,
            y: i32::from(bounds.height) - 2,
        };

        for _ in 0..MAZE_MAX_ATTEMPTS {
            let mut walls = border_ring(bounds);

            let samples = bounds.total_cells() / MAZE_DENSITY_DIVISOR;
            for _ in 0..samples {
                let candidate = Cell {
                    x: rng.gen_range(1..i32::from(bounds.width) - 1),
                    y: rng.gen_range(1..i32::from(bounds.height) - 1),
                };
                if candidate != start && candidate != goal {
                    walls.insert(candidate);
                }
            }

            if let Some(path) = find_path(start, goal, &walls, bounds) {
                return Self {
                    walls,
                    start,
                    goal,
                    reference_path: path,
                };
            }
        }

        // Fallback: empty interior, trivially solvable.
        let walls = border_ring(bounds);
        let reference_path =
            find_path(start, goal, &walls, bounds).unwrap_or_default();

        Self {
            walls,
            start,
            goal,
            reference_path,
        }
    }

    /// Returns true when `cell` is a wall.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Returns the wall set.
    #[must_use]
    pub fn walls(&self) -> &HashSet<Cell> {
        &self.walls
    }

    /// Returns the fixed entry cell.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Returns the fixed goal cell.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Returns the cached generation-time path (informational only).
    #[must_use]
    pub fn reference_path(&self) -> &[Cell] {
        &self.reference_path
    }
}

fn border_ring(bounds: GridSize) -> HashSet<Cell> {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let mut walls = HashSet::new();

    for x in 0..width {
        walls.insert(Cell { x, y: 0 });
        walls.insert(Cell { x, y: height - 1 });
    }
    for y in 0..height {
        walls.insert(Cell { x: 0, y });
        walls.insert(Cell { x: width - 1, y });
    }

    walls
}
