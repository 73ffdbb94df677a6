//! Terminal user interface: one inline picker field per preset.
//!
//! This module contains the demo loop, `DemoState` and the widgets using
//! Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod inline_picker;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::engine::ChoiceList;
use crate::picker::{InlinePicker, PickerEvent};

pub use component::ContextualComponent;
pub use inline_picker::InlinePickerField;
pub use theme::Theme;

/// A picker field and the choices behind it.
#[derive(Debug, Clone)]
pub struct DemoField {
    /// The rendered picker
    pub widget: InlinePickerField,
    /// Choices, updated with custom entries as they are typed
    pub choices: ChoiceList,
}

/// Demo application state.
#[derive(Debug, Clone)]
pub struct DemoState {
    /// Fields, top to bottom
    pub fields: Vec<DemoField>,
    /// Index of the field receiving keys
    pub focused: usize,
    /// Active color theme
    pub theme: Theme,
    /// Show the key help line
    pub show_help: bool,
    /// Set by Esc, Ctrl+C or `q` on a numeric field
    pub should_quit: bool,
}

impl DemoState {
    /// Builds one field per preset, each starting at its initial text.
    pub fn new(config: &Config, theme: Theme) -> Result<Self> {
        let fields = config
            .presets
            .iter()
            .map(|preset| -> Result<DemoField> {
                let choices = preset.choice_list();
                let mut picker = InlinePicker::new(preset.configuration.clone())
                    .with_context(|| format!("Invalid preset '{}'", preset.name))?;
                if !preset.initial_text.is_empty() {
                    picker.set_text(preset.initial_text.clone(), &choices);
                }
                Ok(DemoField {
                    widget: InlinePickerField::new(preset.name.clone(), picker),
                    choices,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut state = Self {
            fields,
            focused: 0,
            theme,
            show_help: config.ui.show_help,
            should_quit: false,
        };
        state.focus(0);
        Ok(state)
    }

    fn focus(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.widget.set_focused(false);
        }
        self.focused = index;
        if let Some(field) = self.fields.get_mut(index) {
            field.widget.set_focused(true);
        }
    }

    /// Result line per field: name and current text.
    #[must_use]
    pub fn results(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| {
                let text = field
                    .widget
                    .picker()
                    .text(&field.choices)
                    .unwrap_or_else(|err| err.to_string());
                (field.widget.name().to_string(), text)
            })
            .collect()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.fields.is_empty() {
            self.should_quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
            return;
        }

        // Custom fields take `q` as text
        let q_quits = self.fields[self.focused]
            .widget
            .picker()
            .configuration()
            .mode
            .is_numeric();
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if q_quits => self.should_quit = true,
            KeyCode::Tab => self.focus((self.focused + 1) % self.fields.len()),
            KeyCode::BackTab => {
                self.focus((self.focused + self.fields.len() - 1) % self.fields.len());
            }
            _ => {
                let field = &mut self.fields[self.focused];
                for event in field.widget.handle_input(key, &mut field.choices) {
                    if let PickerEvent::CustomEntry(entry) = event {
                        debug!(field = field.widget.name(), entry = %entry, "choices updated");
                    }
                }
            }
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the interactive demo until the user quits.
pub fn run_demo(config: &Config) -> Result<()> {
    let mut state = DemoState::new(config, Theme::from_mode(config.ui.theme_mode))?;
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut DemoState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &DemoState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(
        state
            .fields
            .iter()
            .map(|_| Constraint::Length(InlinePickerField::height())),
    );
    constraints.push(Constraint::Length(state.fields.len() as u16 + 2));
    constraints.push(Constraint::Min(0));
    if state.show_help {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_title_bar(f, chunks[0], &state.theme);

    for (index, field) in state.fields.iter().enumerate() {
        field
            .widget
            .render(f, chunks[index + 1], &state.theme, &field.choices);
    }

    render_results(f, chunks[state.fields.len() + 1], state);

    if state.show_help {
        let help = Paragraph::new(
            "←/→: Wheel | ↑/↓: Spin | Type to enter | Enter: Done | Tab: Next field | Esc: Quit",
        )
        .style(Style::default().fg(state.theme.text_muted));
        if let Some(area) = chunks.last() {
            f.render_widget(help, *area);
        }
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(format!(" {APP_NAME} v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().fg(theme.primary).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(title, area);
}

fn render_results(f: &mut Frame, area: Rect, state: &DemoState) {
    let theme = &state.theme;
    let lines: Vec<Line> = state
        .results()
        .into_iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!("{name}: "), Style::default().fg(theme.text_secondary)),
                Span::styled(
                    text,
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let results = Paragraph::new(lines).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(results, area);
}
