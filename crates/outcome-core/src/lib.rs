//! A typed two-variant outcome: a success value or a tagged failure.
//!
//! Failures are values. [`Outcome`] is built with [`Outcome::ok`] or
//! [`Outcome::err`], inspected or transformed with a handful of combinators,
//! and consumed with [`Outcome::fold`] or one of the extractors. Only
//! [`Outcome::get_or_throw`] turns a failure back into a panic.
//!
//! ```
//! use outcome_core::Outcome;
//!
//! let s = Outcome::ok(2)
//!     .map(|n| n * 2)
//!     .fold(|v| format!("ok:{v}"), |e| format!("err:{e}"));
//! assert_eq!(s, "ok:4");
//! ```

pub mod config;
pub mod error_base;
pub mod errors;
pub mod json;
pub mod logging;
pub mod outcome;
pub mod render;

pub use error_base::{ErrorBase, ErrorRecord, Never};
pub use errors::{Error, Result};
pub use json::OutcomeJson;
pub use outcome::{Outcome, Payload};
