use macroquad::prelude::*;

const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component. Individual items can be disabled; they
/// draw greyed out and cannot be picked.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    disabled: Vec<bool>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        let disabled = vec![false; items.len()];
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            disabled,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Mark items as enabled (`true`) or disabled, in item order
    pub fn set_enabled(&mut self, enabled: impl IntoIterator<Item = bool>) {
        for (flag, on) in self.disabled.iter_mut().zip(enabled) {
            *flag = !on;
        }
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        !self.disabled.get(index).copied().unwrap_or(true)
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction (for rendering only)
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        // Leave space for the arrow
        if let Some(text) = self.items.get(self.selected) {
            let display = truncate(text, self.width - 30.0);
            draw_text(&display, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        }
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let enabled = self.is_enabled(i);

            let item_color = if !enabled {
                Color::from_rgba(35, 35, 35, 255)
            } else if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, self.height, 1.0, Color::from_rgba(80, 80, 80, 255));

            let display = truncate(item, self.width - 10.0);
            let text_color = if enabled { WHITE } else { Color::from_rgba(100, 100, 100, 255) };
            draw_text(&display, self.x + 5.0, item_y + 21.0, FONT_SIZE, text_color);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle interaction. Returns the item picked this frame, if any,
    /// even when it was already selected.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if !self.is_open {
            return None;
        }

        match (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
            // Disabled entries keep the menu open
            Some(i) if !self.is_enabled(i) => None,
            Some(i) => {
                self.selected = i;
                self.is_open = false;
                Some(i)
            }
            None => {
                self.is_open = false;
                None
            }
        }
    }

    /// Whether a point is over the dropdown, including its open menu
    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}

/// Shorten text with an ellipsis until it fits `max_width` pixels
fn truncate(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}
