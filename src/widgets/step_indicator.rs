//! Row of dots showing wizard progress.

use crate::styles::theme;
use ratatui::prelude::*;

const DOT: &str = "●";
const HOLLOW: &str = "○";

/// One dot per step; the current step is filled with the primary color.
pub struct StepIndicator {
    /// 1-based
    current: usize,
    total: usize,
}

impl StepIndicator {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    fn line(&self) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::with_capacity(self.total * 2);
        for index in 1..=self.total {
            if index > 1 {
                spans.push(Span::raw(" "));
            }
            if index == self.current {
                spans.push(Span::styled(DOT, Style::default().fg(t.primary)));
            } else {
                spans.push(Span::styled(HOLLOW, t.muted_style()));
            }
        }
        Line::from(spans).alignment(Alignment::Center)
    }
}

impl Widget for StepIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dot_per_step() {
        let line = StepIndicator::new(2, 3).line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○");
    }

    #[test]
    fn test_renders_centered() {
        let area = Rect::new(0, 0, 9, 1);
        let mut buf = Buffer::empty(area);
        StepIndicator::new(1, 3).render(area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), "●");
        assert_eq!(buf[(6, 0)].symbol(), "○");
    }
}
