use std::collections::BTreeSet;
use std::time::Duration;

use log::{error, info, warn};
use macroquad::prelude::*;
use torus_life::{
    Algorithm, Command, Config, RunController, RunMode,
    application::{EventLog, Viewport},
    domain::all_rules,
    input, rendering,
    ui::{self, Dropdown, GRID_SIZES, TextField},
};

/// Environment variable naming a JSON config file
const CONFIG_ENV: &str = "TORUS_LIFE_CONFIG";

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life on a Torus".to_owned(),
        window_width: 900,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config from `TORUS_LIFE_CONFIG`, or defaults when unset or unusable
fn load_config() -> Config {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Config::default();
    };

    match Config::load(&path) {
        Ok(config) => {
            info!("loaded config from {path}");
            config
        }
        Err(err) => {
            warn!("{path}: {err}; using defaults");
            Config::default()
        }
    }
}

/// Neighbour counts as typed in the rule fields, e.g. `2,3`
fn counts_text(counts: &BTreeSet<u8>) -> String {
    counts.iter().map(u8::to_string).collect::<Vec<_>>().join(",")
}

/// Regenerate the board at `side`x`side`, or say why it cannot happen now
fn resize(controller: &mut RunController, side: usize, message: &mut Option<String>) {
    match controller.resize_grid(side, side) {
        Ok(true) => {}
        Ok(false) if controller.mode() != RunMode::Idle => {
            *message = Some("Stop the simulation to resize the board.".to_string());
        }
        Ok(false) => {}
        Err(err) => warn!("resize failed: {err}"),
    }
}

fn run_command(controller: &mut RunController, command: Command) {
    if let Err(err) = controller.apply(command) {
        // Already reported through the notifier
        warn!("{err}");
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    let events = EventLog::new();
    let mut controller = match RunController::new(config, Box::new(events.clone())) {
        Ok(controller) => controller,
        Err(err) => {
            error!("cannot start: {err}");
            return;
        }
    };
    let mut viewport = Viewport::default();
    let mut message: Option<String> = None;

    let px = ui::panel_x();
    let grid_size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut grid_size_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Grid Size", grid_size_items);
    let (rows, cols) = controller.grid().dimensions();
    if rows == cols {
        grid_size_dropdown.set_selected(ui::grid_size_index(rows));
    }

    let rules = all_rules();
    let rule_items: Vec<String> = rules.iter().map(|(name, _)| name.to_string()).collect();
    let mut rule_dropdown = Dropdown::new(px, 70.0, ui::PANEL_WIDTH, "Rule", rule_items);

    let algorithms = Algorithm::all();
    let algorithm_items: Vec<String> = algorithms.iter().map(|a| a.name().to_string()).collect();
    let mut algorithm_dropdown = Dropdown::new(px, 120.0, ui::PANEL_WIDTH, "Algorithm", algorithm_items);
    if let Some(idx) = algorithms.iter().position(|a| *a == controller.config().algorithm) {
        algorithm_dropdown.set_selected(idx);
    }

    let pattern_names: Vec<&'static str> = controller.library().names().collect();
    let pattern_items: Vec<String> = pattern_names.iter().map(|name| name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, 170.0, ui::PANEL_WIDTH, "Pattern", pattern_items);

    let mut survival_field = TextField::new(px, ui::RULE_FIELDS_Y, ui::RULE_FIELD_WIDTH, "Survive (Enter)", "");
    let mut birth_field = TextField::new(
        px + ui::PANEL_WIDTH - ui::RULE_FIELD_WIDTH,
        ui::RULE_FIELDS_Y,
        ui::RULE_FIELD_WIDTH,
        "Born",
        "",
    );

    let mut screen = (screen_width(), screen_height());

    loop {
        let mouse_pos = mouse_position();

        // Responsive layout
        let px = ui::panel_x();
        grid_size_dropdown.set_position(px, 20.0);
        rule_dropdown.set_position(px, 70.0);
        algorithm_dropdown.set_position(px, 120.0);
        pattern_dropdown.set_position(px, 170.0);
        survival_field.set_position(px, ui::RULE_FIELDS_Y);
        birth_field.set_position(px + ui::PANEL_WIDTH - ui::RULE_FIELD_WIDTH, ui::RULE_FIELDS_Y);

        // Follow the window while idle when fitting to it
        let resized = (screen_width(), screen_height()) != screen;
        screen = (screen_width(), screen_height());
        let fitting = GRID_SIZES[grid_size_dropdown.selected()].0.is_none();
        if resized && fitting && controller.mode() == RunMode::Idle {
            let side = viewport.fit_grid(ui::grid_area_width());
            resize(&mut controller, side, &mut message);
        }

        let (rows, cols) = controller.grid().dimensions();
        viewport.center_in(0.0, ui::HEADER_HEIGHT, ui::grid_area_width(), ui::grid_area_height(), rows, cols);

        let locked = controller.in_tutorial();
        let buttons: Vec<_> = ui::create_buttons()
            .into_iter()
            .enumerate()
            .map(|(i, btn)| match i {
                0 | 1 => btn.with_enabled(!locked),
                2 => btn.with_enabled(locked),
                _ => btn,
            })
            .collect();
        pattern_dropdown.set_enabled(controller.pattern_options().iter().map(|o| o.fits && !locked));

        let over_dropdown = [&grid_size_dropdown, &rule_dropdown, &algorithm_dropdown, &pattern_dropdown]
            .iter()
            .any(|dd| dd.contains(mouse_pos) || dd.is_open());

        if let Some(idx) = grid_size_dropdown.update(mouse_pos) {
            let side = GRID_SIZES[idx].0.unwrap_or_else(|| viewport.fit_grid(ui::grid_area_width()));
            resize(&mut controller, side, &mut message);
        }

        if let Some(idx) = rule_dropdown.update(mouse_pos) {
            if let Some((_, rules)) = rules.get(idx) {
                run_command(&mut controller, Command::SetRules(rules.clone()));
            }
        }

        if let Some(idx) = algorithm_dropdown.update(mouse_pos) {
            if let Some(algorithm) = algorithms.get(idx) {
                controller.set_algorithm(*algorithm);
            }
        }

        if let Some(idx) = pattern_dropdown.update(mouse_pos) {
            if let Some(name) = pattern_names.get(idx) {
                run_command(&mut controller, Command::EnterPlacement(name.to_string()));
            }
        }

        // Only one dropdown open at a time
        let dropdowns = [&mut grid_size_dropdown, &mut rule_dropdown, &mut algorithm_dropdown, &mut pattern_dropdown];
        if let Some(open) = dropdowns.iter().rposition(|dd| dd.is_open()) {
            for (i, dd) in dropdowns.into_iter().enumerate() {
                if i != open {
                    dd.close();
                }
            }
        }

        if !over_dropdown {
            survival_field.update(mouse_pos);
            birth_field.update(mouse_pos);
        }
        let typing = survival_field.is_focused() || birth_field.is_focused();
        let submitted = input::text_entry(&mut [&mut survival_field, &mut birth_field]);

        // Keys go to the focused field instead of the bindings
        let mut commands = if typing { Vec::new() } else { input::keyboard_commands() };
        if submitted {
            commands.push(input::rule_text_command(&survival_field, &birth_field));
        }
        // Open menus cover the buttons and the board
        if !over_dropdown {
            commands.extend(input::button_commands(&buttons, mouse_pos));
            commands.extend(input::grid_click(&controller, &viewport, mouse_pos));
        }
        for command in commands {
            run_command(&mut controller, command);
        }

        controller.advance(Duration::from_secs_f32(get_frame_time()));

        // Fields show the active rules unless being edited
        if !survival_field.is_focused() {
            survival_field.set_text(counts_text(controller.rules().survival()));
        }
        if !birth_field.is_focused() {
            birth_field.set_text(counts_text(controller.rules().birth()));
        }

        for event in events.drain() {
            if let Some(text) = rendering::event_message(&event) {
                message = Some(text);
            }
        }

        clear_background(BLACK);
        rendering::draw_header(&controller, message.as_deref());
        rendering::draw_grid(controller.grid(), &viewport);
        if let Some(pattern) = controller.pending_pattern() {
            rendering::draw_pattern_preview(pattern, controller.grid(), &viewport, mouse_pos);
        }
        rendering::draw_controls(
            &controller,
            &buttons,
            &[&survival_field, &birth_field],
            &[&grid_size_dropdown, &rule_dropdown, &algorithm_dropdown, &pattern_dropdown],
            mouse_pos,
        );

        next_frame().await;
    }
}
