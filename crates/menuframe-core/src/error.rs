//! Menu error types.

use thiserror::Error;

use crate::{keys::LookupError, option::OptionId};

/// Errors raised while building, updating, or mutating a menu.
///
/// All variants are wiring defects surfaced at first misuse. The core never
/// retries; the host's frame loop decides whether to stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A text-only operation (text, color, font) was applied to an option
    /// that renders no text.
    #[error("option {option} does not carry text")]
    NotText {
        /// Option the operation targeted.
        option: OptionId,
    },

    /// An action name the key state never bound.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// An option id that does not belong to this menu.
    #[error("option {0} is not part of this menu")]
    UnknownOption(OptionId),
}

/// What a text-only operation does when its target carries no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMismatch {
    /// Return [`MenuError::NotText`].
    #[default]
    Fail,
    /// Do nothing.
    Ignore,
}

impl OnMismatch {
    /// Resolve a mismatch `error` according to this policy.
    pub fn resolve(self, error: MenuError) -> Result<(), MenuError> {
        match self {
            Self::Fail => Err(error),
            Self::Ignore => Ok(()),
        }
    }
}
