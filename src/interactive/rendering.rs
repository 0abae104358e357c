//! TUI rendering with ratatui
//!
//! Layout for the anagram finder interface.

use super::app::{App, MessageStyle, Palette};
use crate::output::formatters::strip_markup;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();

    // Theme background behind everything
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(palette.background)
                .fg(palette.foreground),
        ),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Results
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Words
            Constraint::Percentage(70), // Definitions
        ])
        .split(chunks[1]);

    render_words(f, app, &palette, main_chunks[0]);
    render_definitions(f, app, &palette, main_chunks[1]);
    render_input(f, app, &palette, chunks[2]);
    render_status(f, app, &palette, chunks[3]);
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
}

fn render_header(f: &mut Frame, palette: &Palette, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM FINDER")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(panel("", palette));
    f.render_widget(header, area);
}

fn render_words(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = app
        .words()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = if i == app.selected {
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            };
            ListItem::new(format!(" {word} ")).style(style)
        })
        .collect();

    let title = format!(" Words ({}) ", items.len());
    let list = List::new(items).block(panel(&title, palette));
    f.render_widget(list, area);
}

fn render_definitions(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = match &app.report {
        Some(report) if report.is_found() => report
            .result
            .entries
            .iter()
            .flat_map(|entry| {
                [
                    Line::from(Span::styled(
                        entry.word.trim().to_string(),
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("  {}", strip_markup(&entry.definition))),
                    Line::from(""),
                ]
            })
            .collect(),
        Some(_) => vec![Line::from(Span::styled(
            "No anagrams found",
            Style::default().fg(palette.muted),
        ))],
        None => vec![Line::from(Span::styled(
            "Type a word and press Enter",
            Style::default().fg(palette.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(" Definitions ", palette))
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(format!(
                    " Enter a word (max {} letters) | Enter: search ",
                    app.max_length
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(15),
            Constraint::Percentage(10),
            Constraint::Percentage(30),
        ])
        .split(area);

    let info_color = match app.info.style {
        MessageStyle::Info => palette.foreground,
        MessageStyle::Success => palette.success,
        MessageStyle::Error => palette.error,
    };
    let info = Paragraph::new(app.info.text.as_str()).style(Style::default().fg(info_color));
    f.render_widget(info, chunks[0]);

    let stats_text = format!("Lookups: {} | Hits: {}", app.stats.lookups, app.stats.found);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let theme = Paragraph::new(app.theme.label()).alignment(Alignment::Center);
    f.render_widget(theme, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: Theme | ↑↓: Word | Home: Top")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    f.render_widget(help, chunks[3]);
}
