use macroquad::prelude::*;

const FONT_SIZE: f32 = 16.0;
const MAX_LEN: usize = 24;

/// Single-line text input. Clicking it takes keyboard focus, clicking
/// anywhere else releases it.
#[derive(Clone)]
pub struct TextField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    text: String,
    focused: bool,
}

impl TextField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            label: label.into(),
            text: text.into(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Append a typed character. Control characters and input past the
    /// length limit are ignored.
    pub fn insert(&mut self, c: char) {
        if !c.is_control() && self.text.chars().count() < MAX_LEN {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Focus follows left clicks
    pub fn update(&mut self, mouse_pos: (f32, f32)) {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.contains(mouse_pos);
        }
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let border = if self.focused { Color::from_rgba(100, 149, 237, 255) } else { GRAY };
        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(20, 20, 20, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let shown = if self.focused { format!("{}_", self.text) } else { self.text.clone() };
        draw_text(&shown, self.x + 5.0, self.y + 19.0, FONT_SIZE, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new(0.0, 0.0, 90.0, "Survive", "2,3");
        for c in [',', '6', '\r', '\u{8}'] {
            field.insert(c);
        }
        assert_eq!(field.text(), "2,3,6");

        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "2,3");
    }

    #[test]
    fn test_length_limit() {
        let mut field = TextField::new(0.0, 0.0, 90.0, "Born", "");
        "0,1,2,3,4,5,6,7,8,0,1,2,3,4".chars().for_each(|c| field.insert(c));
        assert_eq!(field.text().len(), MAX_LEN);
    }

    #[test]
    fn test_contains() {
        let field = TextField::new(10.0, 10.0, 90.0, "Born", "3");
        assert!(field.contains((50.0, 20.0)));
        assert!(!field.contains((50.0, 40.0)));
        assert!(!field.is_focused());
    }
}
