use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::config::GridSize;
use crate::grid::{Cell, neighbors};

/// Finds a shortest path from `start` to `goal` avoiding `blocked` cells.
///
/// Returns the cell sequence excluding `start` and ending at `goal`, so the
/// first element is the next step to take. `start == goal` yields an empty
/// path ("already arrived"), which is distinct from `None` ("unreachable").
///
/// A* over the 4-connected grid with unit step cost and the Manhattan
/// heuristic, which is admissible and consistent here, so the first time the
/// goal is popped the path is optimal.
#[must_use]
pub fn find_path(
    start: Cell,
    goal: Cell,
    blocked: &HashSet<Cell>,
    bounds: GridSize,
) -> Option<Vec<Cell>> {
    if start == goal {
        return Some(Vec::new());
    }

    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut g_score: HashMap<Cell, u32> = HashMap::new();

    g_score.insert(start, 0);
    open.push(Reverse((start.manhattan(goal), start.x, start.y)));

    while let Some(Reverse((_, x, y))) = open.pop() {
        let current = Cell { x, y };
        if current == goal {
            return Some(reconstruct(&came_from, start, goal));
        }

        let current_g = g_score[&current];

        for neighbor in neighbors(current, bounds) {
            if blocked.contains(&neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                let f = tentative_g + neighbor.manhattan(goal);
                open.push(Reverse((f, neighbor.x, neighbor.y)));
            }
        }
    }

    None
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
