use crate::cards::Card;
use crate::engine::{Phase, RoundEngine, RoundVerb, Seat};
use crate::hand::Hand;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{columns, inner};

const CARD_WIDTH: u16 = 9;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(7), // dealer
            Constraint::Length(7), // player
            Constraint::Min(3),    // round log
            Constraint::Length(5), // status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    let round = app.session.round();
    let hidden = app.dealer_hole_hidden();
    let dealer_title = match round {
        Some(r) if hidden => {
            let up = r.dealer_upcard().map(|c| c.rank().points()).unwrap_or(0);
            format!("Dealer: showing {up}")
        }
        Some(r) => format!("Dealer: {}", hand_summary(r.dealer())),
        None => "Dealer".to_string(),
    };
    draw_hand(f, chunks[1], &dealer_title, round.map(|r| r.dealer()), hidden, None);

    let player_title = match round {
        Some(r) => format!("Player: {}", hand_summary(r.player())),
        None => "Player".to_string(),
    };
    let border = round.and_then(|r| r.settlement()).map(|s| {
        if s.outcome.player_won() {
            Color::Green
        } else if s.outcome.is_push() {
            Color::Yellow
        } else {
            Color::Red
        }
    });
    draw_hand(f, chunks[2], &player_title, round.map(|r| r.player()), false, border);

    draw_round_log(f, chunks[3], round, hidden);
    draw_status(f, chunks[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let session = &app.session;
    let shoe = session
        .round()
        .map(|r| format!("   Shoe: {} left", r.shoe_remaining()))
        .unwrap_or_default();
    let lines = vec![
        Line::from(format!(
            "Bankroll: ${}   Bet: ${}   Round: {}{shoe}",
            session.bankroll(),
            app.bet,
            session.stats().rounds
        )),
        Line::from(format!(
            "Net: {:+}   Autoplay: {}",
            session.stats().net,
            app.autoplay.label()
        )),
    ];
    let header = Paragraph::new(lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn hand_summary(hand: &Hand) -> String {
    if hand.is_blackjack() {
        "Blackjack".to_string()
    } else if hand.is_busted() {
        format!("{} (bust)", hand.total())
    } else if hand.is_soft() {
        format!("{} (soft)", hand.total())
    } else {
        hand.total().to_string()
    }
}

fn draw_hand(
    f: &mut Frame,
    area: Rect,
    title: &str,
    hand: Option<&Hand>,
    hide_first: bool,
    border: Option<Color>,
) {
    let mut block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);
    let Some(hand) = hand else {
        return;
    };
    let slots = columns(inner(area), hand.len(), CARD_WIDTH);
    for (i, (card, slot)) in hand.cards().iter().zip(slots).enumerate() {
        let face = if hide_first && i == 0 { None } else { Some(*card) };
        render_card_widget(f, slot, face);
    }
}

/// One card as a small bordered box; `None` is drawn face down.
fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let block = Block::default().borders(Borders::ALL);
    let body = inner(area);
    let lines = match card {
        Some(c) => {
            let style = if c.suit().is_red() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            let rank = c.rank().label();
            vec![
                Line::from(Span::styled(format!("{rank:<2}"), style)),
                Line::from(Span::styled(c.suit().glyph().to_string(), style))
                    .alignment(Alignment::Center),
                Line::from(Span::styled(format!("{rank:>2}"), style)).alignment(Alignment::Right),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled("?", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            Line::from(""),
        ],
    };
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), body);
}

fn draw_round_log(f: &mut Frame, area: Rect, round: Option<&RoundEngine>, hidden: bool) {
    let block = Block::default().title("This Round").borders(Borders::ALL);
    let capacity = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    if let Some(r) = round {
        let mut dealer_deals = 0;
        for ev in r.events() {
            let who = match ev.seat {
                Seat::Player => "You",
                Seat::Dealer => "Dealer",
            };
            let mut card = ev.card.map(|c| c.glyph_label()).unwrap_or_default();
            let mut total = ev.total.to_string();
            if ev.seat == Seat::Dealer && ev.verb == RoundVerb::Deal {
                dealer_deals += 1;
                if hidden && dealer_deals == 1 {
                    card = "??".to_string();
                }
                if hidden {
                    total = "?".to_string();
                }
            }
            let line = match ev.verb {
                RoundVerb::Settle => match r.settlement() {
                    Some(s) => format!("{} ({:+})", s.outcome.label(), s.payout),
                    None => continue,
                },
                verb => format!("{who}: {} {card} → {total}", verb.label()),
            };
            lines.push(Line::from(line));
        }
    }
    let skip = lines.len().saturating_sub(capacity);
    let para = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let phase = app.session.round().map(|r| r.phase());
    let mut left: Vec<Line> = Vec::new();
    if app.session.is_over() {
        left.push(Line::from("Out of money. Press M to start a new session."));
    } else {
        match phase {
            None | Some(Phase::Settled) => {
                left.push(Line::from(format!("Press Space to deal (bet ${}).", app.bet)));
            }
            Some(Phase::PlayerTurn) => {
                let hint = app.hint().map(|a| a.label()).unwrap_or("-");
                left.push(Line::from(format!("Your move. Hint: {hint}")));
            }
            Some(_) => left.push(Line::from("Dealer is playing…")),
        }
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let can_act = app.can_act();
    let can_deal = app.can_deal();
    left.push(Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("Space deal", action_style(can_deal)),
        Span::raw(" • "),
        Span::styled("H hit", action_style(can_act)),
        Span::raw(" • "),
        Span::styled("S stand", action_style(can_act)),
        Span::raw(" • "),
        Span::styled("P autoplay", action_style(can_act)),
    ]));
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right = vec![
        Line::from("+/- bet • A enter bet"),
        Line::from("? help • L log • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}
