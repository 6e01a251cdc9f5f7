use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A popup rectangle centered in `area`, sized as a percentage of it.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// A column of at most `max_width` cells, centered horizontally in `area`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Standard screen layout: header, body, footer.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area)
}
