//! The one failure kind the isolation core knows about.

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error;

/// Text shown in place of a failure message when the failure carried none.
pub const NO_MESSAGE_PLACEHOLDER: &str = "(no message)";

/// A failure raised while rendering content inside a boundary's healthy frame.
///
/// An empty message is normalized to `None` at construction so that every
/// consumer sees the same "no message" case. Any other text, whitespace
/// included, is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or(NO_MESSAGE_PLACEHOLDER))]
pub struct RenderFailure {
    message: Option<String>,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_optional(Some(message.into()))
    }

    /// A failure that carries no message at all.
    #[must_use]
    pub const fn without_message() -> Self {
        Self { message: None }
    }

    #[must_use]
    pub fn from_optional(message: Option<String>) -> Self {
        let message = message.filter(|m| !m.is_empty());
        Self { message }
    }

    /// Wraps any error, keeping its `Display` output as the message.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        Self::new(err.to_string())
    }

    /// Builds a failure from a caught panic payload.
    ///
    /// `&str` and `String` payloads (what `panic!` produces) become the
    /// message. Anything else raised through `panic_any` has no message.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(s) = payload.downcast_ref::<&str>() {
            Self::new(*s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Self::new(s.clone())
        } else {
            Self::without_message()
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
    }

    /// The message, or [`NO_MESSAGE_PLACEHOLDER`].
    #[must_use]
    pub fn display_message(&self) -> &str {
        self.message().unwrap_or(NO_MESSAGE_PLACEHOLDER)
    }
}

impl From<String> for RenderFailure {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for RenderFailure {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
