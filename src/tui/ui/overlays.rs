use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Round Log").borders(Borders::ALL);
    let history = app.session.history();
    let end = history.len().saturating_sub(app.history_offset());
    let start = end.saturating_sub(AppState::HISTORY_PAGE_SIZE);
    let mut lines: Vec<Line> = Vec::new();
    if history.is_empty() {
        lines.push(Line::from("No rounds played yet."));
    }
    for entry in &history[start..end] {
        let result = entry.outcome.map(|o| o.label()).unwrap_or("Forfeited");
        let style = if entry.payout > 0 {
            Style::default().fg(Color::Green)
        } else if entry.payout < 0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!(
                "#{:<3} bet ${:<5} {:>2} vs {:>2}  ",
                entry.round, entry.bet, entry.player_total, entry.dealer_total
            )),
            Span::styled(format!("{result} ({:+})", entry.payout), style),
            Span::raw(format!("  → ${}", entry.bankroll_after)),
        ]));
    }
    let stats = app.session.stats();
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "W {}  L {}  P {}  BJ {}  Net {:+}",
        stats.wins, stats.losses, stats.pushes, stats.blackjacks, stats.net
    )));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / D: deal a new round"),
        Line::from("- H: hit"),
        Line::from("- S: stand"),
        Line::from("- P: autoplay the rest of the hand"),
        Line::from("- + / -: change bet"),
        Line::from("- A: type a bet"),
        Line::from("- L: round log"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Blackjack pays 3:2, both blackjack is a push"),
        Line::from("- Dealer draws to 16 and stands on all 17s"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (starts a new session)"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q quits • Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_bet_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Bet: ${current}")),
        Line::from(format!("Range: 1 - {}", app.session.bankroll())),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("Enter to confirm, Esc to cancel"),
    ];
    let block = Block::default().title("Bet Amount").borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}
