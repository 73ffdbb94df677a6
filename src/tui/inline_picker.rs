//! Inline picker field: a row of spinning wheels inside a bordered box.
//!
//! Each wheel shows its selected label with the previous and next rows
//! above and below. Separators sit between the wheels on the selected
//! line; the last one is the decimal separator when the picker joins its
//! fractional wheel that way.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engine::{ChoiceList, Encoder};
use crate::error::EncodingResult;
use crate::picker::{InlinePicker, PickerEvent};

use super::component::ContextualComponent;
use super::Theme;

/// Rows drawn per wheel: previous, selected, next.
pub const VISIBLE_ROWS: u16 = 3;

/// A named picker with wheel focus.
#[derive(Debug, Clone)]
pub struct InlinePickerField {
    name: String,
    picker: InlinePicker,
    focused_wheel: usize,
    focused: bool,
    last_error: Option<String>,
}

impl InlinePickerField {
    /// Wraps `picker` under the title `name`.
    pub fn new(name: impl Into<String>, picker: InlinePicker) -> Self {
        Self {
            name: name.into(),
            picker,
            focused_wheel: 0,
            focused: false,
            last_error: None,
        }
    }

    /// Field title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped picker.
    #[must_use]
    pub const fn picker(&self) -> &InlinePicker {
        &self.picker
    }

    /// Wheel receiving ↑/↓.
    #[must_use]
    pub const fn focused_wheel(&self) -> usize {
        self.focused_wheel
    }

    /// Gives or takes keyboard focus. Losing focus ends editing.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.picker.end_editing();
        }
    }

    /// Height needed to draw the field, borders included.
    #[must_use]
    pub const fn height() -> u16 {
        VISIBLE_ROWS + 2
    }

    fn record<T>(&mut self, result: EncodingResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    fn spin(&mut self, delta: i64, choices: &ChoiceList) -> Vec<PickerEvent> {
        self.picker.set_selecting(true);
        let result = self.picker.step_wheel(self.focused_wheel, delta, choices);
        self.record(result).unwrap_or_default()
    }

    /// Labels of (previous, selected, next) rows for each wheel.
    fn wheel_columns(&self, encoder: &Encoder<'_>) -> EncodingResult<Vec<[String; 3]>> {
        let mut columns = Vec::with_capacity(encoder.wheel_count());
        for wheel in 0..encoder.wheel_count() {
            let rows = encoder.row_count(wheel)?;
            if rows == 0 {
                columns.push([String::new(), String::new(), String::new()]);
                continue;
            }
            let selected = self.picker.selection().row(wheel).unwrap_or(0).min(rows - 1);
            let label = |row: u64| encoder.label_for_row(wheel, row);
            let (previous, next) = if rows > 2 {
                (
                    label((selected + rows - 1) % rows)?,
                    label((selected + 1) % rows)?,
                )
            } else {
                let neighbour = |row: Option<u64>| match row.filter(|&r| r < rows) {
                    Some(r) => label(r),
                    None => Ok(String::new()),
                };
                (
                    neighbour(selected.checked_sub(1))?,
                    neighbour(selected.checked_add(1))?,
                )
            };
            columns.push([previous, label(selected)?, next]);
        }
        Ok(columns)
    }

    fn wheel_lines(&self, choices: &ChoiceList, theme: &Theme) -> EncodingResult<Vec<Line<'static>>> {
        let encoder = self.picker.encoder(choices)?;
        let columns = self.wheel_columns(&encoder)?;
        let separators = self.picker.configuration().resolve_separators();
        let decimal_last = self.picker.configuration().joins_with_decimal_separator();

        let mut lines = vec![Vec::new(), Vec::new(), Vec::new()];
        for (wheel, column) in columns.iter().enumerate() {
            if wheel > 0 {
                let separator = if decimal_last && wheel + 1 == columns.len() {
                    &separators.decimal
                } else {
                    &separators.primary
                };
                let blank = " ".repeat(separator.chars().count());
                lines[0].push(Span::raw(blank.clone()));
                lines[1].push(Span::styled(
                    separator.clone(),
                    Style::default().fg(theme.text_secondary),
                ));
                lines[2].push(Span::raw(blank));
            }

            let width = column.iter().map(|label| label.chars().count()).max().unwrap_or(0);
            let wheel_focused = self.focused && wheel == self.focused_wheel;
            for (line, label) in lines.iter_mut().zip(column) {
                line.push(Span::raw(format!("{label:>width$}")));
            }

            let muted = Style::default().fg(theme.text_muted);
            let mut selected = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
            if wheel_focused {
                selected = selected.fg(theme.accent).bg(theme.highlight_bg);
            }
            if let Some(span) = lines[0].last_mut() {
                span.style = muted;
            }
            if let Some(span) = lines[1].last_mut() {
                span.style = selected;
            }
            if let Some(span) = lines[2].last_mut() {
                span.style = muted;
            }
        }

        Ok(lines.into_iter().map(Line::from).collect())
    }
}

impl ContextualComponent for InlinePickerField {
    type Context = ChoiceList;
    type Event = PickerEvent;

    fn handle_input(&mut self, key: KeyEvent, choices: &mut ChoiceList) -> Vec<PickerEvent> {
        let wheel_count = self.picker.configuration().wheel_count();
        match key.code {
            KeyCode::Left => {
                self.focused_wheel = self.focused_wheel.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Right => {
                self.focused_wheel = (self.focused_wheel + 1).min(wheel_count.saturating_sub(1));
                Vec::new()
            }
            KeyCode::Up => self.spin(-1, choices),
            KeyCode::Down => self.spin(1, choices),
            KeyCode::Backspace => self.picker.delete_backward(choices),
            KeyCode::Enter => {
                self.picker.end_editing();
                vec![PickerEvent::EditingChanged]
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.picker.accepts_char(c) {
                    return Vec::new();
                }
                if !self.picker.is_editing() {
                    self.picker.begin_editing();
                }
                self.picker.set_selecting(false);
                self.last_error = None;
                self.picker.insert_char(c, choices)
            }
            _ => Vec::new(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, choices: &ChoiceList) {
        let border = if self.picker.is_highlighted() {
            theme.active
        } else if self.focused {
            theme.primary
        } else {
            theme.text_muted
        };

        let title = if self.picker.is_editing() {
            format!(" {} [{}] ", self.name, self.picker.typed_text())
        } else {
            format!(" {} ", self.name)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background));

        let error_line = |message: String| {
            vec![Line::from(Span::styled(
                message,
                Style::default().fg(theme.error),
            ))]
        };
        let lines = match &self.last_error {
            Some(message) => error_line(message.clone()),
            None => self
                .wheel_lines(choices, theme)
                .unwrap_or_else(|err| error_line(err.to_string())),
        };

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Configuration, DigitGrouping, TimePrecision};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rendered_lines(field: &InlinePickerField, choices: &ChoiceList) -> Vec<String> {
        let backend = TestBackend::new(40, InlinePickerField::height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| field.render(f, f.area(), &Theme::dark(), choices))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn money_field() -> InlinePickerField {
        let config = Configuration::number(DigitGrouping::MyriadDecimal).with_prefix("$");
        let mut picker = InlinePicker::new(config).unwrap();
        picker.set_text("123456789", &ChoiceList::default());
        InlinePickerField::new("money", picker)
    }

    #[test]
    fn test_render_shows_selected_line_with_separators() {
        let field = money_field();
        let lines = rendered_lines(&field, &ChoiceList::default());
        assert!(lines[0].contains("money"));
        assert!(lines[2].contains("$123,4567.89"), "got {:?}", lines[2]);
        assert!(lines[1].contains("$122 4566 88"), "got {:?}", lines[1]);
        assert!(lines[3].contains("$124 4568 90"), "got {:?}", lines[3]);
    }

    #[test]
    fn test_render_custom_choices() {
        let choices = ChoiceList::new(["24mm", "35mm", "40mm"]);
        let mut picker = InlinePicker::new(Configuration::custom()).unwrap();
        picker.set_text("35mm", &choices);
        let field = InlinePickerField::new("lens", picker);

        let lines = rendered_lines(&field, &choices);
        assert!(lines[1].contains("24mm"));
        assert!(lines[2].contains("35mm"));
        assert!(lines[3].contains("40mm"));
    }

    #[test]
    fn test_arrow_keys_move_focus_and_spin() {
        let picker =
            InlinePicker::new(Configuration::time(TimePrecision::HourMinuteSecond)).unwrap();
        let mut field = InlinePickerField::new("clock", picker);
        let mut choices = ChoiceList::default();

        field.handle_input(key(KeyCode::Right), &mut choices);
        field.handle_input(key(KeyCode::Right), &mut choices);
        field.handle_input(key(KeyCode::Right), &mut choices);
        assert_eq!(field.focused_wheel(), 2);

        let events = field.handle_input(key(KeyCode::Up), &mut choices);
        assert!(events.contains(&PickerEvent::ValueChanged));
        assert_eq!(field.picker().selection().rows(), &[0, 0, 59]);
        assert!(field.picker().is_selecting());
    }

    #[test]
    fn test_typing_starts_editing_and_enter_ends_it() {
        let picker = InlinePicker::new(Configuration::time(TimePrecision::HourMinute)).unwrap();
        let mut field = InlinePickerField::new("clock", picker);
        let mut choices = ChoiceList::default();

        assert!(field.handle_input(key(KeyCode::Char('a')), &mut choices).is_empty());
        for c in "930".chars() {
            field.handle_input(key(KeyCode::Char(c)), &mut choices);
        }
        assert!(field.picker().is_editing());
        assert_eq!(field.picker().selection().rows(), &[9, 30]);

        let events = field.handle_input(key(KeyCode::Enter), &mut choices);
        assert_eq!(events, vec![PickerEvent::EditingChanged]);
        assert!(!field.picker().is_editing());
    }

    #[test]
    fn test_custom_typing_feeds_choice_list() {
        let mut choices = ChoiceList::new(["24mm", "35mm"]);
        let picker = InlinePicker::new(Configuration::custom()).unwrap();
        let mut field = InlinePickerField::new("lens", picker);

        let events: Vec<PickerEvent> = "85"
            .chars()
            .flat_map(|c| field.handle_input(key(KeyCode::Char(c)), &mut choices))
            .collect();
        assert!(events.contains(&PickerEvent::CustomEntry("85".to_string())));
        assert_eq!(choices.custom_entry(), Some("85"));
        assert_eq!(field.picker().selection().rows(), &[2]);
    }
}
