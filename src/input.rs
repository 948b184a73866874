use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit step offset for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Discrete commands consumed by the game loop, at most one per tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    SetDirection(Direction),
    ToggleSteering,
    ToggleMaze,
    Reset,
    IncreaseSpeed,
    DecreaseSpeed,
    Quit,
}

/// Polls the terminal for one pending command without blocking.
///
/// Returns `Ok(None)` when no key is buffered within the poll window.
pub fn poll_command(poll_window: Duration) -> io::Result<Option<Command>> {
    if !event::poll(poll_window)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn map_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::SetDirection(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::SetDirection(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::SetDirection(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::SetDirection(Direction::Right)),
        KeyCode::Tab => Some(Command::ToggleSteering),
        KeyCode::Char('m') => Some(Command::ToggleMaze),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::IncreaseSpeed),
        KeyCode::Char('-') => Some(Command::DecreaseSpeed),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
