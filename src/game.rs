use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridSize, SpeedMultiplier};
use crate::food;
use crate::grid::Cell;
use crate::input::{Command, Direction};
use crate::maze::Maze;
use crate::path::find_path;
use crate::snake::Snake;

/// Which arena the snake is playing in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayMode {
    /// Open wrapping arena, no walls, toroidal movement.
    Open,
    /// Generated maze, walls block movement, no wrap.
    Maze,
}

/// Which source supplies the next direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Steering {
    /// A* pathfinding toward the food each tick.
    Autopilot,
    /// Last commanded direction.
    Manual,
}

/// Direction of a speed change, for feedback cues.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpeedChange {
    Up,
    Down,
}

/// Fire-and-forget tick outcome notifications.
///
/// Consumed by presentation/audio collaborators; dropping them never affects
/// core state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    Moved,
    Ate,
    Blocked,
    Wrapped,
    MazeEntered,
    MazeExited,
    MazeRegenerated,
    SpeedChanged(SpeedChange),
}

/// Complete mutable game state for one session.
///
/// Owns the snake, food, maze, mode flags, and RNG. All mutation happens
/// inside [`GameState::apply_command`] and [`GameState::tick`]; everything
/// else is read-only snapshot access for the presentation layer.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub speed: SpeedMultiplier,
    pub tick_count: u64,
    maze: Maze,
    play_mode: PlayMode,
    steering: Steering,
    pending_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
    events: Vec<TickEvent>,
}

impl GameState {
    /// Creates a state seeded from OS entropy, starting in the open arena
    /// with the autopilot engaged.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_seed(bounds, rand::thread_rng().r#gen())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(&mut rng, bounds);
        let snake = Snake::from_segments(open_start_segments(bounds));
        let food = food::place(&mut rng, bounds, &snake.occupied());

        Self {
            snake,
            food,
            score: 0,
            speed: SpeedMultiplier::default(),
            tick_count: 0,
            maze,
            play_mode: PlayMode::Open,
            steering: Steering::Autopilot,
            pending_direction: None,
            bounds,
            rng,
            events: Vec::new(),
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the current arena mode.
    #[must_use]
    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    /// Returns the current steering source.
    #[must_use]
    pub fn steering(&self) -> Steering {
        self.steering
    }

    /// Returns the active maze. Only rendered in maze mode, but always
    /// generated so mode entry is instant.
    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Drains the events accumulated since the last drain.
    pub fn take_events(&mut self) -> Vec<TickEvent> {
        std::mem::take(&mut self.events)
    }

    /// Applies one external command before the next movement computation.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::SetDirection(direction) => {
                self.pending_direction = Some(direction);
            }
            Command::ToggleSteering => {
                // Snake and food are untouched; only the direction source changes.
                self.steering = match self.steering {
                    Steering::Autopilot => Steering::Manual,
                    Steering::Manual => Steering::Autopilot,
                };
            }
            Command::ToggleMaze => match self.play_mode {
                PlayMode::Open => {
                    self.play_mode = PlayMode::Maze;
                    self.maze = Maze::generate(&mut self.rng, self.bounds);
                    self.reset_maze_session();
                    self.events.push(TickEvent::MazeEntered);
                }
                PlayMode::Maze => {
                    self.play_mode = PlayMode::Open;
                    self.reset_open_session();
                    self.events.push(TickEvent::MazeExited);
                }
            },
            Command::Reset => match self.play_mode {
                PlayMode::Open => self.reset_open_session(),
                PlayMode::Maze => {
                    self.maze = Maze::generate(&mut self.rng, self.bounds);
                    self.reset_maze_session();
                    self.events.push(TickEvent::MazeRegenerated);
                }
            },
            Command::IncreaseSpeed => {
                if self.speed.increase() {
                    self.events.push(TickEvent::SpeedChanged(SpeedChange::Up));
                }
            }
            Command::DecreaseSpeed => {
                if self.speed.decrease() {
                    self.events.push(TickEvent::SpeedChanged(SpeedChange::Down));
                }
            }
            // Quit terminates the runtime loop; core state has no part in it.
            Command::Quit => {}
        }
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        if !self.ensure_food() {
            // Maze completed (no free cell left): regenerated, skip movement.
            return;
        }

        match self.play_mode {
            PlayMode::Open => self.step_open(),
            PlayMode::Maze => self.step_maze(),
        }
    }

    /// Re-attempts food placement when the board had no free cell earlier.
    ///
    /// Returns `false` when the maze was regenerated instead, in which case
    /// movement is skipped for this tick.
    fn ensure_food(&mut self) -> bool {
        if self.food.is_some() {
            return true;
        }

        let blocked = self.active_obstacles_with_tail();
        self.food = food::place(&mut self.rng, self.bounds, &blocked);

        if self.food.is_none() && self.play_mode == PlayMode::Maze {
            self.maze = Maze::generate(&mut self.rng, self.bounds);
            self.reset_maze_session();
            self.events.push(TickEvent::MazeRegenerated);
            return false;
        }

        true
    }

    fn step_open(&mut self) {
        let head = self.snake.head();

        let (next, wrapped) = match self.steering {
            Steering::Autopilot => {
                let blocked = self.snake.occupied_excluding_tail();
                let step = self
                    .food
                    .and_then(|food| find_path(head, food, &blocked, self.bounds))
                    .and_then(|path| path.first().copied());

                match step {
                    Some(cell) => (cell, false),
                    // No route: keep drifting right, wrapping the arena.
                    None => {
                        let raw = head.step(Direction::Right);
                        (raw.wrapped(self.bounds), !raw.is_within_bounds(self.bounds))
                    }
                }
            }
            Steering::Manual => {
                let direction = self.pending_direction.unwrap_or(Direction::Right);
                let raw = head.step(direction);
                (raw.wrapped(self.bounds), !raw.is_within_bounds(self.bounds))
            }
        };

        self.complete_step(next, wrapped);
    }

    fn step_maze(&mut self) {
        let head = self.snake.head();

        let next = match self.steering {
            Steering::Autopilot => {
                let mut blocked = self.snake.occupied_excluding_tail();
                blocked.extend(self.maze.walls().iter().copied());

                let step = self
                    .food
                    .and_then(|food| find_path(head, food, &blocked, self.bounds))
                    .and_then(|path| path.first().copied());

                match step {
                    Some(cell) => cell,
                    // The snake's own body has sealed off the food. Not an
                    // error: regenerate and restart the maze session.
                    None => {
                        self.maze = Maze::generate(&mut self.rng, self.bounds);
                        self.reset_maze_session();
                        self.events.push(TickEvent::MazeRegenerated);
                        return;
                    }
                }
            }
            Steering::Manual => {
                // Wait state: the snake holds still until the first command.
                let Some(direction) = self.pending_direction else {
                    return;
                };

                let candidate = head.step(direction);
                if self.maze.is_wall(candidate) || !candidate.is_within_bounds(self.bounds) {
                    self.events.push(TickEvent::Blocked);
                    return;
                }
                candidate
            }
        };

        self.complete_step(next, false);
    }

    /// Applies a validated step to `next`, handling growth and food relocation.
    fn complete_step(&mut self, next: Cell, wrapped: bool) {
        self.events.push(TickEvent::Moved);

        let ate = self.food == Some(next);
        self.snake.advance(next, ate);

        if ate {
            self.score += 1;
            self.events.push(TickEvent::Ate);

            let blocked = self.active_obstacles_with_tail();
            self.food = food::place(&mut self.rng, self.bounds, &blocked);
            // A full board leaves food absent; the next tick retries and, in
            // maze mode, treats persistent absence as completion.
        }

        if wrapped {
            self.events.push(TickEvent::Wrapped);
        }
    }

    /// Full-body obstacle set for food placement (tail included, walls in
    /// maze mode).
    fn active_obstacles_with_tail(&self) -> HashSet<Cell> {
        let mut blocked = self.snake.occupied();
        if self.play_mode == PlayMode::Maze {
            blocked.extend(self.maze.walls().iter().copied());
        }
        blocked
    }

    fn reset_open_session(&mut self) {
        self.snake.reset(open_start_segments(self.bounds));
        self.pending_direction = None;
        self.score = 0;
        self.food = food::place(&mut self.rng, self.bounds, &self.snake.occupied());
    }

    fn reset_maze_session(&mut self) {
        let start = self.maze.start();
        let mut segments = vec![start];

        // Short trailing segment when the adjacent cell is open.
        let trailing = Cell {
            x: start.x + 1,
            y: start.y,
        };
        if trailing.is_within_bounds(self.bounds) && !self.maze.is_wall(trailing) {
            segments.push(trailing);
        }

        self.snake.reset(segments);
        self.pending_direction = None;
        self.score = 0;

        let blocked = self.active_obstacles_with_tail();
        self.food = food::place(&mut self.rng, self.bounds, &blocked);
    }
}

/// Default mid-arena starting body for the open mode, heading right.
fn open_start_segments(bounds: GridSize) -> Vec<Cell> {
    let anchor_x = i32::from(bounds.width) / 4;
    let mid_y = i32::from(bounds.height) / 2;

    vec![
        Cell {
            x: anchor_x,
            y: mid_y,
        },
        Cell {
            x: anchor_x - 1,
            y: mid_y,
        },
        Cell {
            x: anchor_x - 2,
            y: mid_y,
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::Cell;
    use crate::input::{Command, Direction};
    use crate::snake::Snake;

    use super::{GameState, PlayMode, Steering, TickEvent};

    const BOUNDS: GridSize = GridSize {
        width: 30,
        height: 20,
    };

    fn manual_open_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, seed);
        state.apply_command(Command::ToggleSteering);
        assert_eq!(state.steering(), Steering::Manual);
        state.take_events();
        state
    }

    fn manual_maze_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, seed);
        state.apply_command(Command::ToggleMaze);
        state.apply_command(Command::ToggleSteering);
        assert_eq!(state.play_mode(), PlayMode::Maze);
        state.take_events();
        state
    }

    #[test]
    fn autopilot_reaches_food_along_shortest_route() {
        let mut state = GameState::new_with_seed(BOUNDS, 11);
        state.snake = Snake::from_segments(vec![
            Cell { x: 7, y: 10 },
            Cell { x: 6, y: 10 },
            Cell { x: 5, y: 10 },
        ]);
        state.food = Some(Cell { x: 10, y: 10 });

        state.tick();
        assert_eq!(state.snake.head(), Cell { x: 8, y: 10 });

        state.tick();
        state.tick();
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_ne!(state.food, Some(Cell { x: 10, y: 10 }));
    }

    #[test]
    fn open_manual_wraps_on_all_four_edges() {
        let cases = [
            (Cell { x: 29, y: 5 }, Direction::Right, Cell { x: 0, y: 5 }),
            (Cell { x: 0, y: 5 }, Direction::Left, Cell { x: 29, y: 5 }),
            (Cell { x: 5, y: 0 }, Direction::Up, Cell { x: 5, y: 19 }),
            (Cell { x: 5, y: 19 }, Direction::Down, Cell { x: 5, y: 0 }),
        ];

        for (start, direction, expected) in cases {
            let mut state = manual_open_state(3);
            state.snake = Snake::from_segments(vec![start]);
            state.food = Some(Cell { x: 15, y: 15 });
            state.apply_command(Command::SetDirection(direction));

            state.tick();

            assert_eq!(state.snake.head(), expected);
            assert!(state.take_events().contains(&TickEvent::Wrapped));
        }
    }

    #[test]
    fn open_manual_defaults_to_moving_right() {
        let mut state = manual_open_state(5);
        state.snake = Snake::from_segments(vec![Cell { x: 4, y: 4 }]);
        state.food = Some(Cell { x: 20, y: 15 });

        state.tick();

        assert_eq!(state.snake.head(), Cell { x: 5, y: 4 });
    }

    #[test]
    fn maze_manual_waits_for_first_command() {
        let mut state = manual_maze_state(8);
        let head_before = state.snake.head();

        state.tick();
        state.tick();

        assert_eq!(state.snake.head(), head_before);
        assert!(!state.take_events().contains(&TickEvent::Moved));
    }

    #[test]
    fn maze_manual_wall_move_is_rejected_unchanged() {
        let mut state = manual_maze_state(8);
        let segments_before: Vec<Cell> = state.snake.segments().copied().collect();

        // Head starts at (1,1); the cell above is always border wall.
        state.apply_command(Command::SetDirection(Direction::Up));
        state.tick();

        let segments_after: Vec<Cell> = state.snake.segments().copied().collect();
        assert_eq!(segments_after, segments_before);

        let events = state.take_events();
        assert!(events.contains(&TickEvent::Blocked));
        assert!(!events.contains(&TickEvent::Moved));
    }

    #[test]
    fn maze_autopilot_regenerates_when_food_is_sealed_off() {
        let mut state = GameState::new_with_seed(BOUNDS, 13);
        state.apply_command(Command::ToggleMaze);
        state.take_events();

        // Body loop sealing the start corner: head (1,1) has both open
        // neighbors covered by non-tail segments.
        state.snake = Snake::from_segments(vec![
            Cell { x: 1, y: 1 },
            Cell { x: 1, y: 2 },
            Cell { x: 2, y: 2 },
            Cell { x: 2, y: 1 },
            Cell { x: 3, y: 1 },
        ]);
        state.food = Some(Cell { x: 10, y: 10 });

        state.tick();

        let events = state.take_events();
        assert!(events.contains(&TickEvent::MazeRegenerated));
        assert!(!events.contains(&TickEvent::Moved));
        assert_eq!(state.snake.head(), state.maze().start());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn maze_toggle_round_trip_resets_sessions() {
        let mut state = GameState::new_with_seed(BOUNDS, 21);
        state.score = 7;

        state.apply_command(Command::ToggleMaze);
        assert_eq!(state.play_mode(), PlayMode::Maze);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), state.maze().start());
        let food = state.food.expect("maze session places food");
        assert!(!state.maze().is_wall(food));
        assert!(state.take_events().contains(&TickEvent::MazeEntered));

        state.apply_command(Command::ToggleMaze);
        assert_eq!(state.play_mode(), PlayMode::Open);
        assert_eq!(state.snake.len(), 3);
        assert!(state.take_events().contains(&TickEvent::MazeExited));
    }

    #[test]
    fn steering_toggle_preserves_snake_and_food() {
        let mut state = GameState::new_with_seed(BOUNDS, 2);
        let segments_before: Vec<Cell> = state.snake.segments().copied().collect();
        let food_before = state.food;

        state.apply_command(Command::ToggleSteering);

        let segments_after: Vec<Cell> = state.snake.segments().copied().collect();
        assert_eq!(segments_after, segments_before);
        assert_eq!(state.food, food_before);
        assert_eq!(state.steering(), Steering::Manual);
    }

    #[test]
    fn eating_relocates_food_off_snake_and_walls() {
        let mut state = GameState::new_with_seed(BOUNDS, 17);
        state.apply_command(Command::ToggleMaze);
        state.take_events();

        for _ in 0..500 {
            state.tick();
            if state.score >= 1 {
                break;
            }
        }

        assert!(state.score >= 1, "autopilot should eventually eat");
        let food = state.food.expect("board is far from full");
        assert!(!state.maze().is_wall(food));
        assert!(!state.snake.occupies(food));
    }
}
