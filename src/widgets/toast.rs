//! Toast notification widget.
//!
//! A short-lived notification drawn in the bottom-right corner, above the
//! footer. It never takes focus.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2714}", // ✔
            ToastKind::Info => "\u{2139}",    // ℹ
            ToastKind::Error => "\u{2718}",   // ✘
        }
    }

    fn color(self) -> Color {
        let t = theme();
        match self {
            ToastKind::Success => t.success,
            ToastKind::Info => t.primary,
            ToastKind::Error => t.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        // errors linger longer so they can be read
        let secs = if kind == ToastKind::Error { 6 } else { 3 };
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(secs),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Renders a [`Toast`] in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn placement(area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::placement(area);
        Clear.render(toast_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.toast.kind.color()));

        Paragraph::new(format!(" {} {} ", self.toast.kind.icon(), self.toast.message))
            .block(block)
            .style(theme().text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds at most one toast at a time.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any existing one
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Error));
    }

    /// Drop the toast once expired; returns whether one is still shown
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}
