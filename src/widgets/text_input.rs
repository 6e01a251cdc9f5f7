//! Text input widget for rendering [`TextInput`] instances.
//!
//! Draws a rounded, titled box with the current text (or a placeholder) and
//! colors the border by state: focused, invalid, or idle.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use slider::widgets::TextInputWidget;
/// use slider::utils::TextInput;
///
/// let input = TextInput::with_text("Cameron");
/// let widget = TextInputWidget::new(&input)
///     .title("First Name")
///     .placeholder("Cameron")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    invalid: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            invalid: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the field as currently failing validation.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    fn display_text(&self) -> &str {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            text
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        if self.focused {
            t.border_focused_style()
        } else if self.invalid {
            t.border_error_style()
        } else {
            t.border_style()
        }
    }

    fn block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Screen position of the cursor inside `area`.
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let offset = self.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        Position::new(inner.x + offset, inner.y)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .style(self.text_style())
            .block(self.block())
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor when focused.
///
/// The `Widget` trait has no access to the frame's cursor, hence the
/// extension on `Frame`.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_builder() {
        let input = TextInput::with_text("test");
        let widget = TextInputWidget::new(&input)
            .title("Email")
            .placeholder("cameron@test.com")
            .focused(true)
            .invalid(true);

        assert!(widget.focused);
        assert!(widget.invalid);
        assert_eq!(widget.title, Some("Email"));
    }

    #[test]
    fn test_display_text_empty_with_placeholder() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Cameron");
        assert_eq!(widget.display_text(), "Cameron");
    }

    #[test]
    fn test_display_text_normal() {
        let input = TextInput::with_text("Al");
        let widget = TextInputWidget::new(&input).placeholder("Cameron");
        assert_eq!(widget.display_text(), "Al");
    }

    #[test]
    fn test_cursor_position_follows_input() {
        let input = TextInput::with_text("Al");
        let widget = TextInputWidget::new(&input).focused(true);
        let pos = widget.cursor_position(Rect::new(10, 5, 30, 3));
        assert_eq!(pos, Position::new(13, 6));
    }

    #[test]
    fn test_renders_placeholder_into_buffer() {
        let input = TextInput::new();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TextInputWidget::new(&input)
            .placeholder("Cameron")
            .render(area, &mut buf);
        let row: String = (1..8).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "Cameron");
    }
}
