mod button;
mod dropdown;
mod text_field;

pub use button::Button;
pub use dropdown::Dropdown;
pub use text_field::TextField;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Height reserved above the board for the title and status line
pub const HEADER_HEIGHT: f32 = 60.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height() - HEADER_HEIGHT
}

/// Entries of the grid size dropdown; `None` fits the board to the window
pub const GRID_SIZES: &[(Option<usize>, &str)] = &[
    (None, "Fit window"),
    (Some(10), "10x10"),
    (Some(15), "15x15"),
    (Some(17), "17x17"),
    (Some(20), "20x20"),
    (Some(25), "25x25"),
];

/// Dropdown index of the entry matching a square board side
pub fn grid_size_index(side: usize) -> usize {
    GRID_SIZES
        .iter()
        .position(|(size, _)| *size == Some(side))
        .unwrap_or(0)
}

/// Top of the survival/birth text fields
pub const RULE_FIELDS_Y: f32 = 425.0;
/// Width of each rule text field; two sit side by side
pub const RULE_FIELD_WIDTH: f32 = 95.0;

/// Button order; input maps clicks by index
pub const BUTTON_LABELS: &[&str] = &["Start / Stop", "Reset", "Skip tutorial"];

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    BUTTON_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Button::new(px, 470.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_index() {
        assert_eq!(grid_size_index(17), 3);
        assert_eq!(grid_size_index(25), 5);
        assert_eq!(grid_size_index(13), 0);
    }
}
