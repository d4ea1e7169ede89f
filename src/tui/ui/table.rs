use crate::cards::{Card, Suit};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // last hand
            Constraint::Length(8), // deck
            Constraint::Min(3),    // dealt hands
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let header = Paragraph::new(Line::from(format!(
        "Cards left: {}   Shuffles: {}   Hands dealt: {}",
        app.deck.len(),
        app.shuffles,
        app.dealt.len()
    )))
    .block(Block::default().title("poker-hands").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Last hand as five card slots
    let last = app.last_dealt();
    let title = last
        .map_or_else(|| "Last hand".to_string(), |d| format!("Last hand: {}", d.hand_type));
    let hand_block = Block::default().title(title).borders(Borders::ALL);
    let hand_area = chunks[1];
    let hand_inner = inner(hand_area);
    let card_width = hand_inner.width / 5;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(hand_inner);
    f.render_widget(hand_block, hand_area);
    for (i, slot) in slots.iter().enumerate() {
        let card = last.map(|d| d.hand.cards()[i]);
        render_card_widget(f, *slot, card);
    }

    // Remaining deck in current order; the top card is the last one shown
    let deck_spans: Vec<Span> = app
        .deck
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            let sep = if i == 0 { "" } else { " " };
            [Span::raw(sep), card_span(c)]
        })
        .collect();
    let deck_para = Paragraph::new(Line::from(deck_spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Deck (top is last)").borders(Borders::ALL));
    f.render_widget(deck_para, chunks[2]);

    // Dealt hands, newest first
    let mut hand_lines: Vec<Line> = Vec::new();
    if app.dealt.is_empty() {
        hand_lines.push(Line::from("No hands dealt yet."));
    }
    for (n, dealt) in app.dealt.iter().enumerate().rev().skip(app.scroll()) {
        let mut spans = vec![Span::raw(format!("#{:<3} ", n + 1))];
        for (i, c) in dealt.hand.cards().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(", "));
            }
            spans.push(card_span(*c));
        }
        spans.push(Span::styled(
            format!("  {}", dealt.hand_type),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        hand_lines.push(Line::from(spans));
    }
    let hands_para = Paragraph::new(hand_lines)
        .block(Block::default().title("Dealt hands").borders(Borders::ALL));
    f.render_widget(hands_para, chunks[3]);

    // Status bar
    let mut status_lines = vec![Line::from(app.status().unwrap_or_default().to_string())];
    if let Some(err) = app.error() {
        status_lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else {
        status_lines.push(Line::from(Span::styled(
            "Space deal • s shuffle • n new deck • ? help • q quit",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let status = Paragraph::new(status_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, chunks[4]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Deal table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / D: deal five cards and classify them"),
        Line::from("- S: shuffle the remaining deck"),
        Line::from("- N: fresh 52-card deck"),
        Line::from("- Up / Down: scroll dealt hands"),
        Line::from("- Q / Esc: quit"),
        Line::from(""),
        Line::from("Cards read suit then face: CA is the ace of clubs."),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let block = Block::default().borders(Borders::ALL);
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

fn card_span(c: Card) -> Span<'static> {
    Span::styled(c.to_string(), suit_style(c.suit()))
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Clubs | Suit::Spades => Style::default().fg(Color::White),
    }
}
