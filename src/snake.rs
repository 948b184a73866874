use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;

/// Ordered snake occupancy, head at the front.
///
/// This is a pure occupancy-update primitive: callers are responsible for
/// choosing legal destinations (adjacency, bounds, walls). The body stays
/// contiguous and duplicate-free as long as callers respect the obstacle set
/// reported by [`Snake::occupied_excluding_tail`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Replaces the whole body with `segments` (front is head).
    pub fn reset(&mut self, segments: Vec<Cell>) {
        debug_assert!(!segments.is_empty());
        self.body = VecDeque::from(segments);
    }

    /// Applies one movement step: prepends `next` and, unless the snake
    /// grew this tick, drops the tail segment.
    pub fn advance(&mut self, next: Cell, grew: bool) {
        self.body.push_front(next);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns every segment except the tail as an obstacle set.
    ///
    /// The tail cell vacates in the same tick the head would arrive, so it
    /// never blocks movement planning.
    #[must_use]
    pub fn occupied_excluding_tail(&self) -> HashSet<Cell> {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).copied().collect()
    }

    /// Returns the full body as an obstacle set, tail included.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Snake};

    fn three_segment_snake() -> Snake {
        Snake::from_segments(vec![
            Cell { x: 7, y: 10 },
            Cell { x: 6, y: 10 },
            Cell { x: 5, y: 10 },
        ])
    }

    #[test]
    fn advance_without_growth_preserves_length() {
        let mut snake = three_segment_snake();

        snake.advance(Cell { x: 8, y: 10 }, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell { x: 8, y: 10 });
        assert!(!snake.occupies(Cell { x: 5, y: 10 }));
    }

    #[test]
    fn advance_with_growth_adds_one_segment() {
        let mut snake = three_segment_snake();

        snake.advance(Cell { x: 8, y: 10 }, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell { x: 5, y: 10 }));
    }

    #[test]
    fn obstacle_set_excludes_only_the_tail() {
        let snake = three_segment_snake();
        let blocked = snake.occupied_excluding_tail();

        assert!(blocked.contains(&Cell { x: 7, y: 10 }));
        assert!(blocked.contains(&Cell { x: 6, y: 10 }));
        assert!(!blocked.contains(&Cell { x: 5, y: 10 }));
    }

    #[test]
    fn single_segment_snake_contributes_no_obstacles() {
        let snake = Snake::from_segments(vec![Cell { x: 1, y: 1 }]);

        assert!(snake.occupied_excluding_tail().is_empty());
    }

    #[test]
    fn reset_replaces_body() {
        let mut snake = three_segment_snake();
        snake.reset(vec![Cell { x: 1, y: 1 }]);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell { x: 1, y: 1 });
    }
}
