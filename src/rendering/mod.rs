use macroquad::prelude::*;

use crate::application::{Event, RunController, RunMode, Viewport};
use crate::domain::{Grid, Pattern};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, TextField, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.09, 0.09, 0.09, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// One-line text shown for a notification; `None` for silent events
pub fn event_message(event: &Event) -> Option<String> {
    match event {
        Event::TutorialComplete { ticks } => Some(format!(
            "Tutorial complete after {ticks} ticks. Draw your own cells or place a pattern."
        )),
        Event::PatternStable { ticks } => Some(format!("Pattern stabilized after {ticks} ticks.")),
        Event::PatternPlaced { pattern, row, col } => Some(format!("Placed {pattern} at ({row}, {col}).")),
        Event::PlacementFailed(err) => Some(format!("Cannot place: {err}")),
        Event::RulesUpdated(rules) => Some(format!("Rules set to {rules}.")),
        Event::StateChanged { .. } => None,
    }
}

/// Draw the toroidal board
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    let size = viewport.cell_size;

    for (i, j, cell) in grid.iter_cells() {
        let (x, y) = viewport.cell_to_screen(i, j);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
        draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
    }
}

/// Ghost of the pending pattern where a click would place it.
/// Patterns that cannot fit get a red marker on the hovered cell instead.
pub fn draw_pattern_preview(pattern: &Pattern, grid: &Grid, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let (rows, cols) = grid.dimensions();
    let Some((row, col)) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1, rows, cols) else {
        return;
    };

    let size = viewport.cell_size;
    let anchor = pattern.clamp_anchor(
        rows,
        cols,
        row.saturating_sub(pattern.height / 2),
        col.saturating_sub(pattern.width / 2),
    );

    let Ok((anchor_row, anchor_col)) = anchor else {
        let (x, y) = viewport.cell_to_screen(row, col);
        draw_rectangle_lines(x, y, size, size, 2.0, RED);
        return;
    };

    for (di, dj) in pattern.alive_cells() {
        let (x, y) = viewport.cell_to_screen(anchor_row + di, anchor_col + dj);
        draw_rectangle(x, y, size, size, Color::from_rgba(0, 255, 150, 120));
        draw_rectangle_lines(x, y, size, size, 1.5, Color::from_rgba(0, 255, 150, 200));
    }

    let (box_x, box_y) = viewport.cell_to_screen(anchor_row, anchor_col);
    let pitch = viewport.pitch();
    draw_rectangle_lines(
        box_x,
        box_y,
        pattern.width as f32 * pitch - viewport.cell_gap,
        pattern.height as f32 * pitch - viewport.cell_gap,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

/// Title and the latest notification above the board
pub fn draw_header(controller: &RunController, message: Option<&str>) {
    let title = match controller.mode() {
        RunMode::Tutorial => match controller.autostart_remaining() {
            Some(left) => format!("Welcome! The demo starts in {:.0}s", left.as_secs_f32().ceil()),
            None => "Press Space to watch the demo".to_string(),
        },
        RunMode::Running { tutorial: true } => format!(
            "Tutorial: {} ticks to go",
            controller.tutorial_ticks_remaining().unwrap_or(0)
        ),
        RunMode::PlacementPending { pattern } => format!("Click the board to place {pattern}"),
        _ => "Game of Life on a torus".to_string(),
    };
    draw_text(&title, 10.0, 25.0, 24.0, WHITE);

    if let Some(message) = message {
        draw_text(message, 10.0, 48.0, 16.0, Color::from_rgba(255, 215, 0, 255));
    }
}

fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, dropdowns and the status readout
pub fn draw_controls(
    controller: &RunController,
    buttons: &[Button],
    fields: &[&TextField],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    fields.iter().for_each(|field| field.draw());

    let px = panel_x();
    let mode = controller.mode();
    let mode_color = match mode {
        RunMode::Running { .. } => Color::from_rgba(0, 255, 0, 255),
        RunMode::Tutorial => Color::from_rgba(100, 200, 255, 255),
        _ => Color::from_rgba(255, 165, 0, 255),
    };

    let controls = [
        ("Controls:", 240.0, 14.0),
        ("LMB: Toggle / place", 255.0, 12.0),
        ("RMB / Esc: Cancel placing", 268.0, 12.0),
        ("Space: Start / stop", 281.0, 12.0),
        ("R: Reset   T: Skip tutorial", 294.0, 12.0),
    ];
    for (i, (text, y, size)) in controls.iter().enumerate() {
        draw_text(text, px, *y, *size, if i == 0 { WHITE } else { GRAY });
    }

    let [survive, born] = controller.rules().summary();
    let (rows, cols) = controller.grid().dimensions();
    let stats = controller.stats();
    let info = [
        format!("Grid: {rows}x{cols}  Alive: {}", controller.grid().count_alive()),
        format!("Rules: {}", controller.rules()),
        survive,
        born,
        format!("Step: {:.2}ms ({})", controller.last_step_time().as_secs_f32() * 1000.0, controller.config().algorithm.name()),
        format!("Runs: {}  Total ticks: {}", stats.runs_started, stats.total_ticks),
    ];
    for (i, line) in info.iter().enumerate() {
        draw_text(line, px, 320.0 + i as f32 * 15.0, 12.0, Color::from_rgba(150, 150, 150, 255));
    }

    draw_text("Status:", px, 640.0, 16.0, WHITE);
    draw_text(mode.name(), px, 660.0, 16.0, mode_color);
    draw_text("Tick:", px, 690.0, 16.0, WHITE);
    draw_text(&controller.ticks().to_string(), px, 710.0, 20.0, ALIVE_COLOR);
    if let Some(left) = controller.tutorial_ticks_remaining() {
        draw_text(&format!("Tutorial ticks left: {left}"), px, 735.0, 14.0, GRAY);
    }

    // Open dropdown last so its menu sits on top
    dropdowns
        .iter()
        .filter(|dd| !dd.is_open())
        .chain(dropdowns.iter().filter(|dd| dd.is_open()))
        .for_each(|dd| dd.draw(mouse_pos));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleSet;
    use crate::error::EngineError;

    #[test]
    fn test_event_messages() {
        assert_eq!(
            event_message(&Event::PatternStable { ticks: 4 }).as_deref(),
            Some("Pattern stabilized after 4 ticks.")
        );
        assert_eq!(
            event_message(&Event::RulesUpdated(RuleSet::high_life())).as_deref(),
            Some("Rules set to B36/S23.")
        );

        let failed = event_message(&Event::PlacementFailed(EngineError::UnknownPattern("x".into())));
        assert!(failed.is_some_and(|m| m.starts_with("Cannot place")));
    }

    #[test]
    fn test_state_changes_are_silent() {
        let event = Event::StateChanged { mode: RunMode::Idle, ticks: 0 };
        assert_eq!(event_message(&event), None);
    }
}
