//! TUI application state and logic

use crate::commands::{
    LookupResult, SubwordsConfig, SubwordsResult, SuggestConfig, SuggestResult, find_sub_words,
    lookup_word, suggest_word,
};
use crate::core::WordEntry;
use crate::engine::{DEFAULT_TIER, Helper, SolutionOrder};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which panel receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Subwords,
    Lookup,
    Suggest,
}

impl Panel {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Subwords => Self::Lookup,
            Self::Lookup => Self::Suggest,
            Self::Suggest => Self::Subwords,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Subwords => Self::Suggest,
            Self::Lookup => Self::Subwords,
            Self::Suggest => Self::Lookup,
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

/// Application state
pub struct App<'a> {
    pub helper: Helper<'a>,
    pub reference_base: String,
    pub focus: Panel,
    pub subword_input: String,
    pub subwords: Option<SubwordsResult<'a>>,
    pub show_solutions: bool,
    pub order: SolutionOrder,
    /// Index of the selected solution; the list scrolls with it
    pub solutions_scroll: usize,
    pub show_meanings: bool,
    pub lookup_input: String,
    pub lookup: Option<LookupResult<'a>>,
    pub suggest_letters: String,
    pub difficulty: usize,
    pub suggestion: Option<SuggestResult<'a>>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// `rng` is the single generator used for every suggestion in this session
    #[must_use]
    pub fn new(helper: Helper<'a>, reference_base: String, rng: StdRng) -> Self {
        let words = helper.catalog().len();
        Self {
            helper,
            reference_base,
            focus: Panel::Subwords,
            subword_input: String::new(),
            subwords: None,
            show_solutions: false,
            order: SolutionOrder::default(),
            solutions_scroll: 0,
            show_meanings: false,
            lookup_input: String::new(),
            lookup: None,
            suggest_letters: String::new(),
            difficulty: DEFAULT_TIER,
            suggestion: None,
            messages: vec![
                Message {
                    text: format!("{words} words loaded."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Tab switches panels, Enter searches.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            rng,
        }
    }

    /// Search subwords; the same word submitted twice in a row reveals the solutions
    pub fn submit_subwords(&mut self) {
        let query = self.subword_input.clone();
        let repeated = self
            .subwords
            .as_ref()
            .is_some_and(|result| result.query == query);

        match find_sub_words(
            &self.helper,
            SubwordsConfig {
                query,
                order: self.order,
            },
        ) {
            Ok(result) => {
                if !repeated {
                    self.add_message(
                        &format!("{} subwords. Enter again to list them.", result.count()),
                        MessageStyle::Info,
                    );
                }
                self.show_solutions = repeated;
                self.solutions_scroll = 0;
                self.show_meanings = false;
                self.subwords = Some(result);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Typing in the subword box discards the previous result
    pub fn clear_subwords(&mut self) {
        self.subwords = None;
        self.show_solutions = false;
        self.solutions_scroll = 0;
        self.show_meanings = false;
    }

    /// Sorting only applies while the solution list is visible
    pub fn order_by_name(&mut self) {
        if self.show_solutions {
            self.order.by_name();
            self.apply_order();
        }
    }

    pub fn order_by_length(&mut self) {
        if self.show_solutions {
            self.order.by_length();
            self.apply_order();
        }
    }

    /// Solution under the cursor, if the list is shown
    #[must_use]
    pub fn selected_solution(&self) -> Option<&'a WordEntry> {
        if !self.show_solutions {
            return None;
        }
        self.subwords
            .as_ref()
            .and_then(|result| result.solutions.get(self.solutions_scroll).copied())
    }

    /// Open or close the meanings of the selected solution
    pub fn toggle_meanings(&mut self) {
        if self.selected_solution().is_some() {
            self.show_meanings = !self.show_meanings;
        }
    }

    fn apply_order(&mut self) {
        if let Some(result) = self.subwords.as_mut() {
            result.reorder(self.order);
        }
    }

    pub fn scroll_solutions(&mut self, delta: isize) {
        let max = self
            .subwords
            .as_ref()
            .map_or(0, |r| r.count().saturating_sub(1));
        self.solutions_scroll = self.solutions_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn submit_lookup(&mut self) {
        let result = lookup_word(&self.helper, &self.lookup_input, &self.reference_base);
        if result.found() {
            self.add_message(&format!("'{}' is a word.", result.query), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("'{}' was not found.", result.query),
                MessageStyle::Error,
            );
        }
        self.lookup = Some(result);
    }

    pub fn clear_lookup(&mut self) {
        self.lookup = None;
    }

    pub fn choose_difficulty(&mut self, tier: usize) {
        if tier < self.helper.tiers().len() {
            self.difficulty = tier;
        }
    }

    pub fn submit_suggest(&mut self) {
        let config = SuggestConfig::new(self.difficulty, self.suggest_letters.clone());
        match suggest_word(&self.helper, config, &mut self.rng) {
            Ok(result) => {
                if result.suggestion.is_none() {
                    self.add_message("No word matches.", MessageStyle::Error);
                }
                self.suggestion = Some(result);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn clear_suggest(&mut self) {
        self.suggestion = None;
    }

    /// Copy the suggested word into the subword box
    pub fn move_suggestion_to_subwords(&mut self) {
        let Some(entry) = self.suggestion.as_ref().and_then(|s| s.suggestion) else {
            self.add_message("Draw a word first.", MessageStyle::Error);
            return;
        };
        self.subword_input = entry.word.clone();
        self.clear_subwords();
        self.focus = Panel::Subwords;
        self.add_message(
            &format!("Moved '{}' to subword search.", entry.word),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Panel::Subwords => &mut self.subword_input,
            Panel::Lookup => &mut self.lookup_input,
            Panel::Suggest => &mut self.suggest_letters,
        }
    }

    fn input_changed(&mut self) {
        match self.focus {
            Panel::Subwords => self.clear_subwords(),
            Panel::Lookup => self.clear_lookup(),
            Panel::Suggest => self.clear_suggest(),
        }
    }

    fn submit(&mut self) {
        match self.focus {
            Panel::Subwords => self.submit_subwords(),
            Panel::Lookup => self.submit_lookup(),
            Panel::Suggest => self.submit_suggest(),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.order_by_name(),
            KeyCode::Char('l') if ctrl => self.order_by_length(),
            KeyCode::Char('t') if ctrl => self.move_suggestion_to_subwords(),
            KeyCode::Char('o') if ctrl => self.toggle_meanings(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Up if self.focus == Panel::Suggest => {
                self.choose_difficulty(self.difficulty.saturating_sub(1));
            }
            KeyCode::Down if self.focus == Panel::Suggest => {
                self.choose_difficulty(self.difficulty + 1);
            }
            KeyCode::Up => self.scroll_solutions(-1),
            KeyCode::Down => self.scroll_solutions(1),
            KeyCode::PageUp => self.scroll_solutions(-10),
            KeyCode::PageDown => self.scroll_solutions(10),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                if self.focused_input().pop().is_some() {
                    self.input_changed();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_input().push(c);
                self.input_changed();
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
