use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::THEME;
use crate::game::{GameState, PlayMode, SpeedChange, Steering, TickEvent};

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    /// Most recent tick event, shown as a short feedback cue.
    pub last_event: Option<TickEvent>,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let mode = match state.play_mode() {
        PlayMode::Open => "NORMAL",
        PlayMode::Maze => "MAZE",
    };
    let steering = match state.steering() {
        Steering::Autopilot => "auto",
        Steering::Manual => "manual",
    };

    let mut spans = vec![
        Span::styled(mode, Style::new().fg(THEME.hud_accent)),
        Span::raw(format!(
            " [{steering}] | score {} | speed {:.2}x",
            state.score,
            state.speed.value(),
        )),
        Span::raw(" | tab steer  m maze  r reset  +/- speed  q quit"),
    ];

    if let Some(cue) = info.last_event.and_then(event_cue) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(cue, Style::new().fg(THEME.hud_accent)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::new().fg(THEME.hud_fg)),
        status_area,
    );

    play_area
}

/// Short feedback text for noteworthy events; routine moves stay silent.
fn event_cue(event: TickEvent) -> Option<&'static str> {
    match event {
        TickEvent::Ate => Some("ate"),
        TickEvent::Blocked => Some("blocked"),
        TickEvent::Wrapped => Some("wrapped"),
        TickEvent::MazeEntered => Some("maze entered"),
        TickEvent::MazeExited => Some("maze exited"),
        TickEvent::MazeRegenerated => Some("maze regenerated"),
        TickEvent::SpeedChanged(SpeedChange::Up) => Some("speed up"),
        TickEvent::SpeedChanged(SpeedChange::Down) => Some("speed down"),
        TickEvent::Moved => None,
    }
}
