//! Component trait pattern for TUI components.
//!
//! Components own their state, handle their own keys and render into the
//! area they are given.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// Extended trait for components that need shared context.
///
/// The context is data the parent owns and the component reads or
/// updates, such as the choice list behind a Custom-mode picker.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    ///
    /// Returns the events the parent should act on, empty when the key
    /// was handled internally or ignored.
    fn handle_input(&mut self, key: KeyEvent, context: &mut Self::Context) -> Vec<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}
