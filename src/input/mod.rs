use macroquad::prelude::*;

use crate::application::{Command, RunController, Viewport};
use crate::ui::{Button, TextField};

/// Keys the front-end listens to
const BOUND_KEYS: [KeyCode; 4] = [KeyCode::Space, KeyCode::R, KeyCode::Escape, KeyCode::T];

/// Command bound to a key, if any
pub fn key_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Space => Some(Command::StartStop),
        KeyCode::R => Some(Command::Reset),
        KeyCode::Escape => Some(Command::CancelPlacement),
        KeyCode::T => Some(Command::SkipTutorial),
        _ => None,
    }
}

/// Command for a button by its index in [`crate::ui::BUTTON_LABELS`]
pub fn button_command(index: usize) -> Option<Command> {
    match index {
        0 => Some(Command::StartStop),
        1 => Some(Command::Reset),
        2 => Some(Command::SkipTutorial),
        _ => None,
    }
}

/// Commands for keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| key_command(*key))
        .collect()
}

/// Commands for buttons clicked this frame
pub fn button_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| button_command(idx))
        .collect()
}

/// Route typed text to the focused field, if any. Escape releases focus,
/// Enter releases it and returns true.
pub fn text_entry(fields: &mut [&mut TextField]) -> bool {
    let Some(field) = fields.iter_mut().find(|field| field.is_focused()) else {
        // Typing outside a field is for key bindings only
        while get_char_pressed().is_some() {}
        return false;
    };

    while let Some(c) = get_char_pressed() {
        field.insert(c);
    }
    if is_key_pressed(KeyCode::Backspace) {
        field.backspace();
    }
    if is_key_pressed(KeyCode::Escape) {
        field.blur();
        return false;
    }
    let submitted = is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter);
    if submitted {
        field.blur();
    }
    submitted
}

/// Rule change typed into the survival and birth fields
pub fn rule_text_command(survival: &TextField, birth: &TextField) -> Command {
    Command::SetRuleText {
        survival: survival.text().to_string(),
        birth: birth.text().to_string(),
    }
}

/// Left click on a cell toggles it (or places the pending pattern there);
/// right click cancels a pending placement.
pub fn grid_click(controller: &RunController, viewport: &Viewport, mouse_pos: (f32, f32)) -> Option<Command> {
    if is_mouse_button_pressed(MouseButton::Right) {
        return controller.pending_pattern().map(|_| Command::CancelPlacement);
    }
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }

    let (rows, cols) = controller.grid().dimensions();
    viewport
        .screen_to_cell(mouse_pos.0, mouse_pos.1, rows, cols)
        .map(|(row, col)| Command::ToggleCell { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_command(KeyCode::Space), Some(Command::StartStop));
        assert_eq!(key_command(KeyCode::R), Some(Command::Reset));
        assert_eq!(key_command(KeyCode::Escape), Some(Command::CancelPlacement));
        assert_eq!(key_command(KeyCode::T), Some(Command::SkipTutorial));
        assert_eq!(key_command(KeyCode::Q), None);
    }

    #[test]
    fn test_every_bound_key_has_command() {
        assert!(BOUND_KEYS.iter().all(|key| key_command(*key).is_some()));
    }

    #[test]
    fn test_rule_text_command_reads_fields() {
        let survival = TextField::new(0.0, 0.0, 90.0, "Survive", "2,3");
        let birth = TextField::new(100.0, 0.0, 90.0, "Born", "3,6");
        assert_eq!(
            rule_text_command(&survival, &birth),
            Command::SetRuleText { survival: "2,3".into(), birth: "3,6".into() }
        );
    }

    #[test]
    fn test_button_commands_match_labels() {
        let bound = (0..crate::ui::BUTTON_LABELS.len()).filter_map(button_command).count();
        assert_eq!(bound, crate::ui::BUTTON_LABELS.len());
        assert_eq!(button_command(3), None);
    }
}
