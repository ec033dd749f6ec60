use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1]);
    cols[1]
}

/// Split `area` into `n` equal-width columns, capped at `max_width` each.
pub(super) fn columns(area: Rect, n: usize, max_width: u16) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let width = (area.width / n as u16).min(max_width);
    let mut constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Length(width)).collect();
    constraints.push(Constraint::Min(0));
    let mut out = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec();
    out.truncate(n);
    out
}
