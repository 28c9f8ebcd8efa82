//! Host-side password rules.
//!
//! The password field never validates its own content. Pages run a
//! [`PasswordPolicy`] over the reported value and hand the resulting
//! message back to the field as its `error` text.

use thiserror::Error;

/// Default minimum password length
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// A rule the password failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Password must contain a digit")]
    MissingDigit,
}

/// Rules a new password must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Check `password`, reporting the first failed rule.
    ///
    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> Result<(), PolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PolicyError::TooShort {
                min: self.min_length,
            });
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyError::MissingDigit);
        }
        Ok(())
    }
}
