//! The contract every failure value carried by an [`Outcome`](crate::Outcome) satisfies.
//!
//! Concrete error kinds declare their own `tag`. Consumers that need to branch
//! over several kinds union them in an enum of their own and `match` on it,
//! which the compiler checks for exhaustiveness:
//!
//! ```
//! use outcome_core::{ErrorBase, Outcome};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("user {0} not found")]
//! struct NotFoundError(u64);
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("invalid id: {0}")]
//! struct ValidationError(String);
//!
//! #[derive(Debug, thiserror::Error)]
//! enum LookupError {
//!     #[error(transparent)]
//!     NotFound(NotFoundError),
//!     #[error(transparent)]
//!     Validation(ValidationError),
//! }
//!
//! impl ErrorBase for LookupError {
//!     fn tag(&self) -> &'static str {
//!         match self {
//!             LookupError::NotFound(_) => "NotFoundError",
//!             LookupError::Validation(_) => "ValidationError",
//!         }
//!     }
//! }
//!
//! let r: Outcome<u64, LookupError> =
//!     Outcome::err(LookupError::NotFound(NotFoundError(7))).with_ok();
//! let msg = r.fold(
//!     |id| format!("found {id}"),
//!     |e| match e {
//!         LookupError::NotFound(e) => format!("404: {e}"),
//!         LookupError::Validation(e) => format!("400: {e}"),
//!     },
//! );
//! assert_eq!(msg, "404: user 7 not found");
//! ```
//!
//! Leaving a kind out of the handler does not compile:
//!
//! ```compile_fail
//! use outcome_core::{ErrorBase, Outcome};
//!
//! #[derive(Debug, thiserror::Error)]
//! enum LookupError {
//!     #[error("not found")]
//!     NotFound,
//!     #[error("invalid")]
//!     Validation,
//! }
//!
//! impl ErrorBase for LookupError {
//!     fn tag(&self) -> &'static str {
//!         match self {
//!             LookupError::NotFound => "NotFoundError",
//!             LookupError::Validation => "ValidationError",
//!         }
//!     }
//! }
//!
//! let r: Outcome<u64, LookupError> = Outcome::err(LookupError::NotFound).with_ok();
//! let _ = r.fold(
//!     |id| id.to_string(),
//!     |e| match e {
//!         LookupError::NotFound => "404".to_string(),
//!     },
//! );
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// The uninhabited type. An `Outcome<T, Never>` can never be an error and an
/// `Outcome<Never, E>` can never be a success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Never {}

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Never {}

impl Serialize for Never {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

/// Minimal shape of a failure value.
///
/// The message is the `Display` rendering, so anything implementing this trait
/// can also travel as a plain `Box<dyn std::error::Error + Send + Sync>`.
pub trait ErrorBase: std::error::Error + Send + Sync + 'static {
    /// Discriminant identifying the concrete error kind.
    fn tag(&self) -> &'static str;

    fn message(&self) -> String {
        self.to_string()
    }

    fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            tag: self.tag(),
            message: self.message(),
        }
    }
}

impl ErrorBase for Never {
    fn tag(&self) -> &'static str {
        match *self {}
    }
}

/// Serializable summary of an error: its tag and message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorRecord {
    pub tag: &'static str,
    pub message: String,
}
