use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::{RatingInput, TierColor};
use crate::rating::{bracket_for, format_display, resolve_tier, tier_table};
use crate::tui::app::{App, InputMode};

pub fn to_color(color: TierColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let title = Paragraph::new("🧙 CodeWizard Rating Explorer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_tier_card(frame, app, body[0]);
    draw_tier_table(frame, app, body[1]);
    draw_input(frame, app, chunks[2]);
    draw_help(frame, app, chunks[3]);
}

fn draw_tier_card(frame: &mut Frame, app: &App, area: Rect) {
    let tier = app.tier();
    let display = app.display();
    let range = bracket_for(tier.name).range_label();

    let mut text = vec![
        Line::from(vec![
            Span::raw(format!("{} ", tier.badge)),
            Span::styled(
                tier.name.as_str(),
                Style::default()
                    .fg(to_color(tier.text_color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(
                display.label.clone(),
                Style::default().fg(to_color(display.color)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::raw("Range:  "), Span::raw(range)]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Gradient: "),
            Span::styled("      ", Style::default().bg(to_color(tier.gradient.start))),
            Span::styled("      ", Style::default().bg(to_color(tier.gradient.end))),
            Span::raw(format!(" {} → {}", tier.gradient.start, tier.gradient.end)),
        ]),
        Line::from(format!("Text color: {}", tier.text_color)),
    ];

    if !app.history.is_empty() {
        text.push(Line::from(""));
        text.push(Line::from("Recent:"));
        for entry in &app.history {
            let input = RatingInput::from(entry.as_str());
            let past = resolve_tier(input);
            let past_display = format_display(input);
            text.push(Line::from(vec![
                Span::raw(format!("  {} ", past.badge)),
                Span::styled(past_display.label, Style::default().fg(to_color(past_display.color))),
                Span::raw(format!("  {}", past.name)),
            ]));
        }
    }

    let card = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Tier"))
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn draw_tier_table(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.tier().name;

    let rows: Vec<ListItem> = tier_table()
        .map(|bracket| {
            let descriptor = bracket.descriptor;
            let line = Line::from(vec![
                Span::raw(format!("{} ", descriptor.badge)),
                Span::styled(
                    format!("{:<22}", descriptor.name.as_str()),
                    Style::default().fg(to_color(descriptor.text_color)),
                ),
                Span::raw(bracket.range_label()),
            ]);

            let style = if descriptor.name == current {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let table = List::new(rows).block(Block::default().borders(Borders::ALL).title("Tiers"));
    frame.render_widget(table, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(match app.input_mode {
        InputMode::Editing => "Rating [Enter to keep, Esc to stop editing]",
        InputMode::Normal => "Rating [e to edit]",
    });

    let input = Paragraph::new(app.current_input.as_str())
        .style(match app.input_mode {
            InputMode::Editing => Style::default().fg(Color::Yellow),
            InputMode::Normal => Style::default(),
        })
        .block(block);
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        frame.set_cursor(area.x + app.current_input.len() as u16 + 1, area.y + 1);
    }
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let key = |label: &'static str, color: Color| {
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let line = match app.input_mode {
        InputMode::Normal => Line::from(vec![
            key("e", Color::Green),
            Span::raw(" edit | "),
            key("↑/↓", Color::Green),
            Span::raw(" ±100 | "),
            key("c", Color::Green),
            Span::raw(" clear | "),
            key("q", Color::Red),
            Span::raw(" quit"),
        ]),
        InputMode::Editing => Line::from(vec![
            Span::raw("Type a rating | "),
            key("↑/↓", Color::Green),
            Span::raw(" ±100 | "),
            key("Esc", Color::Yellow),
            Span::raw(" done"),
        ]),
    };

    let help = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_current_tier() {
        let mut app = App::new();
        app.current_input = "1450".to_string();

        let screen = render(&app);
        assert!(screen.contains("Candidate Master"));
        assert!(screen.contains("1450"));
        assert!(screen.contains("Grandmaster"));
        assert!(screen.contains("[1400, 1600)"));
    }

    #[test]
    fn test_renders_dash_for_missing_rating() {
        let app = App::new();
        let screen = render(&app);
        assert!(screen.contains("Rating: —"));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color(TierColor::rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
