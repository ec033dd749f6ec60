use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____  _            _    _            _
| __ )| | __ _  ___| | _(_) __ _  ___| | __
|  _ \| |/ _` |/ __| |/ / |/ _` |/ __| |/ /
| |_) | | (_| | (__|   <| | (_| | (__|   <
|____/|_|\__,_|\___|_|\_\ |\__,_|\___|_|\_\
                      |__/
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    let block = Block::default().title("blackjack-rs").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));
    f.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), rows[0]);

    let mut cfg_lines: Vec<Line> = vec![Line::from(Span::styled(
        "New Session:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    if app.session.stats().rounds > 0 {
        cfg_lines.push(Line::from(format!(
            "Current session: ${} after {} rounds",
            app.session.bankroll(),
            app.session.stats().rounds
        )));
    }
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Start  [Esc] Back  [↑/↓] Move  [+/-] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(
        Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        rows[1],
    );
}
