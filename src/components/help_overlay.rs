//! Help overlay
//!
//! Lists the active key bindings grouped by category. While it is open,
//! 1/2/3 switch the keymap preset.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORY_ORDER: [&str; 5] = ["Steps", "Fields", "Cursor & Choice", "Text Editing", "Global"];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Preset chosen by a digit key while the overlay is open.
    pub fn preset_for_key(c: char) -> Option<KeymapPreset> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        KeymapPreset::ALL.get(index).copied()
    }

    fn preset_line(current: KeymapPreset) -> Line<'static> {
        let t = theme();
        let mut spans = vec![Span::styled("Preset: ", t.text_style())];
        for (i, preset) in KeymapPreset::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!("{} {}", i + 1, preset.name());
            if *preset == current {
                spans.push(Span::styled(
                    format!("[{}]", label),
                    t.title_style().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, t.muted_style()));
            }
        }
        Line::from(spans)
    }

    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut bindings = keymap.all_bindings();
        // stable sort keeps preset order within a category
        bindings.sort_by_key(|b| {
            CATEGORY_ORDER
                .iter()
                .position(|c| *c == b.action.category())
                .unwrap_or(CATEGORY_ORDER.len())
        });

        let mut lines = Vec::new();
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", category),
                    t.title_style(),
                )));
                current_category = category;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }
        lines
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .border_style(t.border_focused_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(Self::preset_line(keymap.preset)), preset_area);
        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
            config_path
        ))
        .style(t.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_for_key() {
        assert_eq!(HelpOverlay::preset_for_key('1'), Some(KeymapPreset::Standard));
        assert_eq!(HelpOverlay::preset_for_key('3'), Some(KeymapPreset::Emacs));
        assert_eq!(HelpOverlay::preset_for_key('0'), None);
        assert_eq!(HelpOverlay::preset_for_key('4'), None);
        assert_eq!(HelpOverlay::preset_for_key('x'), None);
    }

    #[test]
    fn test_binding_lines_grouped_by_category() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let headers: Vec<String> = lines
            .iter()
            .filter(|l| l.spans.len() == 1 && !l.spans[0].content.is_empty())
            .map(|l| l.spans[0].content.trim().to_string())
            .collect();
        let mut unique = headers.clone();
        unique.dedup();
        assert_eq!(headers, unique, "each category appears once");
        assert!(headers.iter().any(|h| h == "Steps"));
    }
}
