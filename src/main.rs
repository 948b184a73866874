use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use maze_snake::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize};
use maze_snake::error::AppError;
use maze_snake::game::{GameState, TickEvent};
use maze_snake::input::{self, Command};
use maze_snake::renderer;
use maze_snake::ui::hud::HudInfo;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Poll window for keyboard input between frames.
const INPUT_POLL_WINDOW: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Terminal snake with an A* autopilot and generated mazes")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    cols: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    rows: u16,

    /// RNG seed for reproducible runs (defaults to OS entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Start in the maze instead of the open arena.
    #[arg(long)]
    maze: bool,

    /// Start with manual steering instead of the autopilot.
    #[arg(long)]
    manual: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    if cli.cols < 8 || cli.rows < 8 {
        return Err(AppError::GridTooSmall {
            width: cli.cols,
            height: cli.rows,
        });
    }

    install_panic_hook();

    let result = run(&cli);
    cleanup_terminal()?;
    result
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let bounds = GridSize {
        width: cli.cols,
        height: cli.rows,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    if cli.maze {
        state.apply_command(Command::ToggleMaze);
    }
    if cli.manual {
        state.apply_command(Command::ToggleSteering);
    }
    state.take_events();

    let mut terminal = setup_terminal()?;
    let mut last_tick = Instant::now();
    let mut hud_info = HudInfo::default();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &hud_info))?;

        if let Some(command) = input::poll_command(INPUT_POLL_WINDOW)? {
            if command == Command::Quit {
                break;
            }
            state.apply_command(command);
        }

        let tick_interval = Duration::from_millis(state.speed.tick_interval_ms());
        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        // Keep the latest noteworthy cue; routine Moved events pass through.
        for event in state.take_events() {
            if event != TickEvent::Moved {
                hud_info.last_event = Some(event);
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
