//! Terminal snake with an A* autopilot and procedurally generated, provably
//! solvable mazes.
//!
//! The core is presentation-free: [`game::GameState`] owns all mutable state
//! and advances one tick at a time, while `renderer`/`ui`/`input` adapt it to
//! a ratatui terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod maze;
pub mod path;
pub mod renderer;
pub mod snake;
pub mod ui;
