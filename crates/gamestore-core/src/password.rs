//! Password field state machine.
//!
//! Two orthogonal flags live next to the text:
//!
//! - **masking**: `Masked` until the toggle is activated, flipped by each
//!   activation, independent of the text
//! - **toggle visibility**: hidden while the text is empty, shown otherwise,
//!   recomputed after every accepted edit
//!
//! Both are stored fields rather than conditions computed while rendering,
//! so the invariants can be asserted directly against this type.

use crate::focus::Focusable;

/// Full field value reported to the host after an accepted edit.
pub type InputChange = String;

/// Accessible name of the toggle while the text is masked.
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
/// Accessible name of the toggle while the text is shown in plain form.
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// A single key-level edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    /// Append a character
    Insert(char),
    /// Remove the last character
    Backspace,
}

/// Display mode of the field's characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Masking {
    /// Characters rendered as placeholder glyphs
    #[default]
    Masked,
    /// Characters rendered as typed
    Unmasked,
}

impl Masking {
    /// The other mode
    pub fn flipped(self) -> Self {
        match self {
            Masking::Masked => Masking::Unmasked,
            Masking::Unmasked => Masking::Masked,
        }
    }

    /// HTML input type for this mode
    pub fn input_type(self) -> &'static str {
        match self {
            Masking::Masked => "password",
            Masking::Unmasked => "text",
        }
    }

    /// Accessible name of the toggle control in this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            Masking::Masked => SHOW_PASSWORD_LABEL,
            Masking::Unmasked => HIDE_PASSWORD_LABEL,
        }
    }
}

/// Local state of one password field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PasswordFieldState {
    text: String,
    masking: Masking,
    toggle_shown: bool,
    disabled: bool,
}

impl PasswordFieldState {
    /// Create a masked field holding `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let toggle_shown = !text.is_empty();
        Self {
            text,
            masking: Masking::Masked,
            toggle_shown,
            disabled: false,
        }
    }

    /// Builder-style variant of [`set_disabled`](Self::set_disabled).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn masking(&self) -> Masking {
        self.masking
    }

    /// Whether the toggle control is visible and interactable.
    pub fn is_toggle_shown(&self) -> bool {
        self.toggle_shown
    }

    /// Apply one keystroke.
    ///
    /// Returns the full new value when the edit was accepted. A disabled
    /// field, or a backspace on empty text, yields `None` and leaves the
    /// state untouched.
    pub fn apply(&mut self, key: Keystroke) -> Option<InputChange> {
        if self.disabled {
            tracing::trace!(?key, "keystroke ignored: field disabled");
            return None;
        }

        match key {
            Keystroke::Insert(c) => self.text.push(c),
            Keystroke::Backspace => {
                self.text.pop()?;
            }
        }

        Some(self.accept())
    }

    /// Replace the whole value, as delivered by a DOM `input` event.
    ///
    /// Returns `None` when disabled or when the value did not change.
    pub fn replace(&mut self, value: &str) -> Option<InputChange> {
        if self.disabled || self.text == value {
            return None;
        }

        self.text.clear();
        self.text.push_str(value);
        Some(self.accept())
    }

    fn accept(&mut self) -> InputChange {
        self.toggle_shown = !self.text.is_empty();
        self.text.clone()
    }

    /// Activate the toggle control.
    ///
    /// Does nothing while the toggle is hidden. Never touches the text.
    pub fn toggle_masking(&mut self) -> Masking {
        if self.toggle_shown {
            self.masking = self.masking.flipped();
        }
        self.masking
    }

    /// HTML input type for the current masking
    pub fn input_type(&self) -> &'static str {
        self.masking.input_type()
    }

    /// Accessible name of the toggle for the current masking
    pub fn toggle_label(&self) -> &'static str {
        self.masking.toggle_label()
    }

    /// `tabindex` for the input: disabled fields leave the tab order.
    pub fn tab_index(&self) -> i32 {
        if self.disabled {
            -1
        } else {
            0
        }
    }

    /// Describe this field's input for a [`FocusRing`](crate::FocusRing).
    pub fn focusable(&self, id: impl Into<String>) -> Focusable {
        Focusable {
            id: id.into(),
            disabled: self.disabled,
            tab_index: self.tab_index(),
        }
    }
}
