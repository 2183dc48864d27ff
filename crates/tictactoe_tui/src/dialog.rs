//! The player-names dialog.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Which of the two name fields has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// First player's name.
    #[default]
    One,
    /// Second player's name.
    Two,
}

impl NameField {
    /// Moves focus to the other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// What a key press did to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still editing.
    Editing,
    /// Confirmed with these two names.
    Submitted(String, String),
    /// Closed without changes.
    Cancelled,
}

/// Text inputs for both player names, prefilled with the current names.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NamesDialog {
    name_one: String,
    name_two: String,
    focus: NameField,
}

impl NamesDialog {
    /// Opens the dialog with the given names filled in.
    #[instrument(skip_all)]
    pub fn new(name_one: impl Into<String>, name_two: impl Into<String>) -> Self {
        Self {
            name_one: name_one.into(),
            name_two: name_two.into(),
            focus: NameField::default(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::One => &mut self.name_one,
            NameField::Two => &mut self.name_two,
        }
    }

    /// Applies a key press.
    ///
    /// Names are submitted as typed; empty names are allowed.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        match key.code {
            KeyCode::Char(c) => {
                self.focused_mut().push(c);
                DialogOutcome::Editing
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
                DialogOutcome::Editing
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
                DialogOutcome::Editing
            }
            KeyCode::Enter => {
                debug!(name_one = %self.name_one, name_two = %self.name_two, "Names submitted");
                DialogOutcome::Submitted(self.name_one.clone(), self.name_two.clone())
            }
            KeyCode::Esc => DialogOutcome::Cancelled,
            _ => DialogOutcome::Editing,
        }
    }
}
