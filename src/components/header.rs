use crate::styles::theme;
use anyhow::Result;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Common header shown above the wizard
pub struct Header;

impl Header {
    /// Render a bordered header with a centered title and a subtitle line.
    ///
    /// Returns the height used, for layout calculations.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let subtitle = Paragraph::new(subtitle)
            .style(t.muted_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(subtitle, line_area);

        Ok(area.height)
    }
}
