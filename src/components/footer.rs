use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer with key hints
pub struct Footer;

impl Footer {
    /// Hint text is `"Label: Keys | Label: Keys"`; labels and keys are
    /// colored separately.
    pub(crate) fn spans(text: &str) -> Vec<Span<'_>> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((label, keys)) => {
                    spans.push(Span::styled(
                        format!("{}: ", label),
                        Style::default().fg(t.primary).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(keys, t.emphasis_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        spans
    }

    /// Render the footer. Returns the height used (border + one text line).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme().border_style())
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        let footer = Paragraph::new(Line::from(Self::spans(text))).alignment(Alignment::Center);

        frame.render_widget(block, area);
        frame.render_widget(footer, inner);

        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_split_labels_and_keys() {
        let spans = Footer::spans("Next: Enter | Quit: Ctrl+C");
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["Next: ", "Enter", " | ", "Quit: ", "Ctrl+C"]);
    }

    #[test]
    fn test_plain_part_kept_whole() {
        let spans = Footer::spans("Saved");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Saved");
    }
}
