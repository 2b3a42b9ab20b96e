use std::fmt;

use serde::Serialize;

use crate::error_base::{ErrorBase, Never};

/// Outcome of an operation: exactly one success value or exactly one error.
///
/// The variant is fixed at construction and no method mutates an instance.
/// Build one with [`Outcome::ok`] or [`Outcome::err`], then widen with
/// [`with_err`](Outcome::with_err) / [`with_ok`](Outcome::with_ok) when both
/// paths have to share a type.
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome<T, E: ErrorBase> {
    repr: Repr<T, E>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr<T, E> {
    Ok(T),
    Err(E),
}

/// Borrowed or owned view of whichever payload an [`Outcome`] holds.
///
/// Serializes untagged: just the payload, by its own rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Payload<T, E> {
    Ok(T),
    Err(E),
}

impl<T> Outcome<T, Never> {
    /// Success-path factory. The result can never be an error.
    pub fn ok(value: T) -> Self {
        Self {
            repr: Repr::Ok(value),
        }
    }

    /// Widen to any error type.
    pub fn with_err<E: ErrorBase>(self) -> Outcome<T, E> {
        Outcome::from_repr(Repr::Ok(self.into_ok()))
    }

    /// Extract the value. Cannot fail: the error side is uninhabited.
    pub fn into_ok(self) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(never) => match never {},
        }
    }
}

impl<E: ErrorBase> Outcome<Never, E> {
    /// Failure-path factory. The result can never be a success.
    pub fn err(error: E) -> Self {
        Self {
            repr: Repr::Err(error),
        }
    }

    /// Widen to any success type.
    pub fn with_ok<T>(self) -> Outcome<T, E> {
        Outcome::from_repr(Repr::Err(self.into_err()))
    }

    /// Extract the error. Cannot fail: the success side is uninhabited.
    pub fn into_err(self) -> E {
        match self.repr {
            Repr::Ok(never) => match never {},
            Repr::Err(error) => error,
        }
    }
}

impl<T, E: ErrorBase> Outcome<T, E> {
    fn from_repr(repr: Repr<T, E>) -> Self {
        Self { repr }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.repr, Repr::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self.repr, Repr::Err(_))
    }

    /// Whichever payload is present.
    pub fn value(&self) -> Payload<&T, &E> {
        match &self.repr {
            Repr::Ok(value) => Payload::Ok(value),
            Repr::Err(error) => Payload::Err(error),
        }
    }

    pub fn into_value(self) -> Payload<T, E> {
        match self.repr {
            Repr::Ok(value) => Payload::Ok(value),
            Repr::Err(error) => Payload::Err(error),
        }
    }

    pub fn get_or_default(self, default: T) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(_) => default,
        }
    }

    /// The success value, or `on_err(error)`. `on_err` only runs on Err.
    pub fn get_or_else<F>(self, on_err: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(error) => on_err(error),
        }
    }

    pub fn get_or_none(&self) -> Option<&T> {
        match &self.repr {
            Repr::Ok(value) => Some(value),
            Repr::Err(_) => None,
        }
    }

    pub fn err_or_none(&self) -> Option<&E> {
        match &self.repr {
            Repr::Ok(_) => None,
            Repr::Err(error) => Some(error),
        }
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// On Err, unwinds with the contained error as the panic payload
    /// (`std::panic::panic_any`). A `catch_unwind` can `downcast::<E>()` it back.
    /// This is the only operation that turns a failure value into a panic.
    #[track_caller]
    pub fn get_or_throw(self) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    tag = error.tag(),
                    message = %error.message(),
                    "get_or_throw on Err"
                );
                std::panic::panic_any(error)
            }
        }
    }

    /// Transform the success value. An Err passes through untouched and `f`
    /// is not called.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => Outcome::from_repr(Repr::Ok(f(value))),
            Repr::Err(error) => Outcome::from_repr(Repr::Err(error)),
        }
    }

    /// Eliminate the outcome. Exactly one of the two closures runs.
    pub fn fold<R, F, G>(self, if_ok: F, if_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Ok(value) => if_ok(value),
            Repr::Err(error) => if_err(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }
}

impl<T, E: ErrorBase> From<Result<T, E>> for Outcome<T, E> {
    fn from(r: Result<T, E>) -> Self {
        match r {
            Ok(value) => Self::from_repr(Repr::Ok(value)),
            Err(error) => Self::from_repr(Repr::Err(error)),
        }
    }
}

impl<T, E: ErrorBase> From<Outcome<T, E>> for Result<T, E> {
    fn from(o: Outcome<T, E>) -> Self {
        o.into_result()
    }
}

impl<T: fmt::Debug, E: ErrorBase> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Repr::Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

/// `Ok(<value>)` or `Err(<message>)`.
impl<T: fmt::Display, E: ErrorBase> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Ok(value) => write!(f, "Ok({value})"),
            Repr::Err(error) => write!(f, "Err({})", error.message()),
        }
    }
}
