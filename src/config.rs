use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default play-field width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default play-field height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Base simulation rate in ticks per second, before the speed multiplier.
pub const BASE_TICKS_PER_SECOND: f32 = 14.0;

/// Smallest allowed speed multiplier.
pub const SPEED_MULT_MIN: f32 = 0.25;

/// Largest allowed speed multiplier.
pub const SPEED_MULT_MAX: f32 = 6.0;

/// Increment applied per speed-change command.
pub const SPEED_MULT_STEP: f32 = 0.25;

/// Interior wall samples drawn per maze attempt: `total_cells / MAZE_DENSITY_DIVISOR`.
pub const MAZE_DENSITY_DIVISOR: usize = 3;

/// Maximum random layouts tried before falling back to a border-only maze.
pub const MAZE_MAX_ATTEMPTS: u32 = 250;

/// Bounded speed scalar applied to the base tick rate.
///
/// Mutated only by explicit speed commands; always clamped to
/// [`SPEED_MULT_MIN`, `SPEED_MULT_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMultiplier(f32);

impl SpeedMultiplier {
    /// Returns the current multiplier value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Steps the multiplier up by one increment, saturating at the maximum.
    /// Returns `true` when the value actually changed.
    pub fn increase(&mut self) -> bool {
        let next = (self.0 + SPEED_MULT_STEP).min(SPEED_MULT_MAX);
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    /// Steps the multiplier down by one increment, saturating at the minimum.
    /// Returns `true` when the value actually changed.
    pub fn decrease(&mut self) -> bool {
        let next = (self.0 - SPEED_MULT_STEP).max(SPEED_MULT_MIN);
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    /// Returns the tick interval in milliseconds for the current multiplier.
    #[must_use]
    pub fn tick_interval_ms(self) -> u64 {
        let ticks_per_second = (BASE_TICKS_PER_SECOND * self.0).max(1.0);
        (1000.0 / ticks_per_second) as u64
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Glyph drawn for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph drawn for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

/// Glyph drawn for maze wall cells.
pub const GLYPH_WALL: &str = "█";

/// Glyph drawn for the cached reference path.
pub const GLYPH_REFERENCE_PATH: &str = "·";

/// Glyph drawn for the maze start marker.
pub const GLYPH_MAZE_START: &str = "S";

/// Glyph drawn for the maze goal marker.
pub const GLYPH_MAZE_GOAL: &str = "G";

/// Colors applied to all rendered entities.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub wall: Color,
    pub reference_path: Color,
    pub maze_start: Color,
    pub maze_goal: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_accent: Color,
}

/// Single built-in theme; presentation polish is out of scope.
pub const THEME: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    wall: Color::DarkGray,
    reference_path: Color::Cyan,
    maze_start: Color::Blue,
    maze_goal: Color::Yellow,
    border_fg: Color::White,
    hud_fg: Color::Gray,
    hud_accent: Color::Green,
};

#[cfg(test)]
mod tests {
    use super::{SPEED_MULT_MAX, SPEED_MULT_MIN, SpeedMultiplier};

    #[test]
    fn speed_multiplier_clamps_at_both_ends() {
        let mut speed = SpeedMultiplier::default();

        for _ in 0..100 {
            speed.increase();
        }
        assert_eq!(speed.value(), SPEED_MULT_MAX);
        assert!(!speed.increase());

        for _ in 0..100 {
            speed.decrease();
        }
        assert_eq!(speed.value(), SPEED_MULT_MIN);
        assert!(!speed.decrease());
    }

    #[test]
    fn faster_speed_means_shorter_tick_interval() {
        let mut fast = SpeedMultiplier::default();
        fast.increase();

        let base = SpeedMultiplier::default();
        assert!(fast.tick_interval_ms() < base.tick_interval_ms());
    }
}
