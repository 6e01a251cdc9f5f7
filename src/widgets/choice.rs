//! Single-choice toggle group.
//!
//! Options sit side by side in equal-width tiles. The selected tile is filled;
//! when the group has focus, the highlighted tile is marked with brackets.

use crate::form::ChoiceOption;
use crate::styles::theme;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct ChoiceWidget<'a> {
    options: &'a [ChoiceOption],
    /// Currently stored value; empty when nothing is selected
    selected: &'a str,
    /// Option under the keyboard highlight
    highlighted: usize,
    title: Option<&'a str>,
    focused: bool,
    invalid: bool,
}

impl<'a> ChoiceWidget<'a> {
    pub fn new(options: &'a [ChoiceOption], selected: &'a str) -> Self {
        Self {
            options,
            selected,
            highlighted: 0,
            title: None,
            focused: false,
            invalid: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn highlighted(mut self, index: usize) -> Self {
        self.highlighted = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    fn tile_label(&self, index: usize, option: &ChoiceOption) -> String {
        let mark = if option.value == self.selected { "✱" } else { "·" };
        if self.focused && index == self.highlighted {
            format!("[ {} {} ]", mark, option.label)
        } else {
            format!("{} {}", mark, option.label)
        }
    }
}

impl Widget for ChoiceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else if self.invalid {
            t.border_error_style()
        } else {
            t.border_style()
        };
        let mut outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            outer = outer.title(format!(" {} ", title));
        }
        let inner = outer.inner(area);
        outer.render(area, buf);

        if self.options.is_empty() {
            return;
        }
        let tiles = Layout::horizontal(
            self.options
                .iter()
                .map(|_| Constraint::Ratio(1, self.options.len() as u32)),
        )
        .spacing(1)
        .split(inner);

        for (index, (option, tile)) in self.options.iter().zip(tiles.iter()).enumerate() {
            let style = if option.value == self.selected {
                t.selected_style()
            } else {
                t.text_style()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_style());
            let tile_inner = block.inner(*tile);
            block.render(*tile, buf);

            // vertically center the label
            let [label_area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(tile_inner);
            buf.set_style(tile_inner, style);
            Paragraph::new(self.tile_label(index, option))
                .alignment(Alignment::Center)
                .style(style)
                .render(label_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::EX_OPTIONS;

    #[test]
    fn test_tile_label_marks_selection_and_highlight() {
        let widget = ChoiceWidget::new(EX_OPTIONS, "option_2")
            .highlighted(0)
            .focused(true);
        assert_eq!(widget.tile_label(0, &EX_OPTIONS[0]), "[ · Option 1 ]");
        assert_eq!(widget.tile_label(1, &EX_OPTIONS[1]), "✱ Option 2");
    }

    #[test]
    fn test_unfocused_has_no_brackets() {
        let widget = ChoiceWidget::new(EX_OPTIONS, "").highlighted(1);
        assert_eq!(widget.tile_label(1, &EX_OPTIONS[1]), "· Option 2");
    }

    #[test]
    fn test_render_does_not_panic_in_tiny_area() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        ChoiceWidget::new(EX_OPTIONS, "option_1")
            .title("Second Step")
            .render(area, &mut buf);
    }
}
