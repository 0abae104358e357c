//! TUI application state and logic

use crate::anagram::{LookupReport, lookup};
use crate::core::{DictionaryEntry, normalize};
use crate::output::formatters::summary_line;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};
use std::io;

/// Rendered lines per matched entry: word, definition, spacer
pub const LINES_PER_ENTRY: u16 = 3;

const PAGE: u16 = 10;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [DictionaryEntry],
    pub max_length: usize,
    pub input_buffer: String,
    pub report: Option<LookupReport>,
    pub info: Message,
    pub theme: Theme,
    pub selected: usize,
    pub scroll: u16,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Colors used by one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "🌙 Dark",
            Self::Light => "☀️ Light",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                success: Color::Green,
                error: Color::Red,
            },
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                success: Color::Green,
                error: Color::Red,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub lookups: usize,
    pub found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [DictionaryEntry], max_length: usize) -> Self {
        Self {
            dictionary,
            max_length,
            input_buffer: String::new(),
            report: None,
            info: Message {
                text: format!("{} dictionary entries loaded", dictionary.len()),
                style: MessageStyle::Info,
            },
            theme: Theme::Dark,
            selected: 0,
            scroll: 0,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Look up the word in the input box
    ///
    /// The input box is cleared whether or not the lookup succeeds.
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match lookup(&input, self.dictionary, self.max_length) {
            Ok(report) => {
                self.stats.lookups += 1;
                let style = if report.is_found() {
                    self.stats.found += 1;
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.set_info(&summary_line(&report), style);
                self.report = Some(report);
                self.selected = 0;
                self.scroll = 0;
            }
            Err(e) => self.set_info(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Matched words of the current report
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.report
            .as_ref()
            .map_or(&[], |report| report.result.words.as_slice())
    }

    pub fn select_next(&mut self) {
        let count = self.words().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
            self.jump_to_selected();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.words().is_empty() {
            self.selected = self.selected.saturating_sub(1);
            self.jump_to_selected();
        }
    }

    /// Scroll the definitions panel to the first entry of the selected word
    fn jump_to_selected(&mut self) {
        if let Some(offset) = self.entry_offset(self.selected) {
            self.scroll = offset;
        }
    }

    /// First rendered line of the entries for the word at `index`
    #[must_use]
    pub fn entry_offset(&self, index: usize) -> Option<u16> {
        let report = self.report.as_ref()?;
        let key = normalize(report.result.words.get(index)?);
        let position = report
            .result
            .entries
            .iter()
            .position(|entry| normalize(&entry.word) == key)?;

        Some((position as u16).saturating_mul(LINES_PER_ENTRY))
    }

    fn max_scroll(&self) -> u16 {
        let entries = self.report.as_ref().map_or(0, |r| r.result.entries.len());
        (entries as u16)
            .saturating_mul(LINES_PER_ENTRY)
            .saturating_sub(1)
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.selected = 0;
    }

    pub fn set_info(&mut self, text: &str, style: MessageStyle) {
        self.info = Message {
            text: text.to_string(),
            style,
        };
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.toggle_theme(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::PageDown => self.scroll_down(PAGE),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
