//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Panel};
use crate::core::WordEntry;
use crate::engine::SortKey;
use crate::output::formatters::{meaning_heading, order_marker};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Panels
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_subwords(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    render_lookup(f, app, right_chunks[0]);
    render_suggest(f, app, right_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SANAPELI - word game helper")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let (border_type, color) = if focused {
        (BorderType::Double, Color::Yellow)
    } else {
        (BorderType::Rounded, Color::White)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let cursor = if focused { "█" } else { "" };
    Line::from(vec![
        Span::raw(label),
        Span::styled(
            value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(cursor),
    ])
}

fn render_subwords(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Subwords;
    let mut lines = vec![input_line("Word: ", &app.subword_input, focused), Line::from("")];

    if let Some(result) = &app.subwords {
        lines.push(Line::from(vec![
            Span::raw("Subwords: "),
            Span::styled(
                result.count().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        if app.show_solutions {
            lines.push(Line::from(Span::styled(
                format!(
                    "[^N] Name{}   [^L] Length{}",
                    order_marker(&app.order, SortKey::Name),
                    order_marker(&app.order, SortKey::Length)
                ),
                Style::default().fg(Color::Cyan),
            )));

            let visible = usize::from(area.height.saturating_sub(6));
            let mut list = Vec::new();
            for (offset, entry) in result.solutions.iter().skip(app.solutions_scroll).enumerate() {
                if offset == 0 {
                    list.push(Line::from(Span::styled(
                        format!("▸ {}", entry.word),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )));
                    if app.show_meanings {
                        list.extend(entry_lines(entry).into_iter().skip(1));
                    }
                } else {
                    list.push(Line::from(format!("  {}", entry.word)));
                }
                if list.len() >= visible {
                    break;
                }
            }
            list.truncate(visible);
            lines.extend(list);
        }
    }

    let paragraph = Paragraph::new(lines).block(panel_block(" Subwords ", focused));
    f.render_widget(paragraph, area);
}

fn entry_lines(entry: &WordEntry) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            entry.word.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", entry.count),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    for meaning in &entry.meanings {
        lines.push(Line::from(Span::styled(
            meaning_heading(meaning),
            Style::default().fg(Color::Cyan),
        )));
        if !meaning.description.is_empty() {
            lines.push(Line::from(format!("  {}", meaning.description)));
        }
    }
    lines
}

fn render_lookup(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Lookup;
    let mut lines = vec![input_line("Is it a word? ", &app.lookup_input, focused), Line::from("")];

    if let Some(result) = &app.lookup {
        if let Some(entry) = result.entry {
            lines.push(Line::from(Span::styled(
                "Yes!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(entry_lines(entry));
        } else {
            lines.push(Line::from(Span::styled(
                "No!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            result.reference_url.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(" Lookup ", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_suggest(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Suggest;
    let tiers = app.helper.tiers();

    let tier_spans: Vec<Span> = (0..tiers.len())
        .map(|tier| {
            let name = tiers.tier_name(tier);
            if tier == app.difficulty {
                Span::styled(
                    format!("(•) {name}  "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!("( ) {name}  "))
            }
        })
        .collect();

    let mut lines = vec![
        Line::from(tier_spans),
        input_line("Containing letters: ", &app.suggest_letters, focused),
        Line::from(""),
    ];

    if let Some(result) = &app.suggestion {
        match result.suggestion {
            Some(entry) => {
                lines.extend(entry_lines(entry));
                lines.push(Line::from(Span::styled(
                    format!("1 of {} candidates | ^T: find its subwords", result.eligible),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            None => lines.push(Line::from(Span::styled(
                "Nothing matches.",
                Style::default().fg(Color::Red),
            ))),
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(" Suggest ", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Panel::Subwords => {
            "Esc: Quit | Tab: Next panel | Enter: Search | ^N/^L: Sort | ↑↓ PgUp/PgDn: Select | ^O: Meanings"
        }
        Panel::Lookup => "Esc: Quit | Tab: Next panel | Enter: Look up",
        Panel::Suggest => "Esc: Quit | Tab: Next panel | Enter: Draw | ↑↓: Difficulty | ^T: Move to subwords",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
