//! Checks for conditions the library guarantees to itself.
//!
//! Every check returns `Ok` when the assumption holds and an
//! [`InternalError`] otherwise. Checks compose with `?`: the first one that
//! fails is the one that is reported.

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

use crate::errors::{Cause, InternalError};

/// Message used by [`not_reachable`].
pub const UNREACHABLE_MESSAGE: &str = "unreachable code reached";

#[track_caller]
fn raise(err: InternalError) -> InternalError {
    let location = Location::caller();
    tracing::debug!(
        detail = err.message(),
        has_cause = err.cause().is_some(),
        %location,
        "internal assumption failed"
    );
    err
}

/// Requires `condition` to hold.
#[track_caller]
pub fn that(condition: bool) -> Result<(), InternalError> {
    if condition {
        Ok(())
    } else {
        Err(raise(InternalError::new()))
    }
}

/// Requires `condition` to hold, building the failure message only when it
/// does not.
#[track_caller]
pub fn that_with<M, F>(condition: bool, message: F) -> Result<(), InternalError>
where
    M: Into<Cow<'static, str>>,
    F: FnOnce() -> M,
{
    if condition {
        Ok(())
    } else {
        Err(raise(InternalError::with_message(Some(message().into()))))
    }
}

/// Requires `condition` to be false.
#[track_caller]
pub fn not(condition: bool) -> Result<(), InternalError> {
    that(!condition)
}

/// Requires a value to be present and hands it back.
#[track_caller]
pub fn present<T>(value: Option<T>) -> Result<T, InternalError> {
    match value {
        Some(value) => Ok(value),
        None => Err(raise(InternalError::new())),
    }
}

/// Requires a value to be absent.
#[track_caller]
pub fn absent<T>(value: &Option<T>) -> Result<(), InternalError> {
    that(value.is_none())
}

/// Requires a string to have at least one character.
#[track_caller]
pub fn not_empty(value: &str) -> Result<(), InternalError> {
    that(!value.is_empty())
}

/// Requires `value` to be a `T` and returns it as one.
#[track_caller]
pub fn is<T: Any>(value: &dyn Any) -> Result<&T, InternalError> {
    match value.downcast_ref::<T>() {
        Some(value) => Ok(value),
        None => {
            let message = format!("value is not a `{}`", std::any::type_name::<T>());
            Err(raise(InternalError::with_message(Some(message.into()))))
        }
    }
}

/// Requires an operation that cannot fail to have succeeded. The error, if
/// any, is kept as the cause.
#[track_caller]
pub fn succeeds<T, E>(result: Result<T, E>) -> Result<T, InternalError>
where
    E: StdError + Send + Sync + 'static,
{
    match result {
        Ok(value) => Ok(value),
        Err(err) => Err(raise(InternalError::with_cause(None, Some(Arc::new(err))))),
    }
}

/// Fails unconditionally.
#[track_caller]
pub fn fail(message: impl Into<Cow<'static, str>>) -> InternalError {
    raise(InternalError::with_message(Some(message.into())))
}

/// Fails unconditionally, attaching the error that led here.
#[track_caller]
pub fn fail_with(message: impl Into<Cow<'static, str>>, cause: Cause) -> InternalError {
    raise(InternalError::with_cause(Some(message.into()), Some(cause)))
}

/// Marks a branch the library never takes.
#[track_caller]
pub fn not_reachable() -> InternalError {
    raise(InternalError::with_message(Some(Cow::Borrowed(UNREACHABLE_MESSAGE))))
}

/// Checks an assumption, with an optional `format!`-style failure message.
///
/// ```
/// fn slot(len: usize, index: usize) -> Result<usize, validation::InternalError> {
///     validation::assume!(index < len, "slot {index} past end ({len})");
///     Ok(index)
/// }
///
/// assert!(slot(4, 1).is_ok());
/// assert_eq!(slot(4, 9).unwrap_err().message(), "slot 9 past end (4)");
/// ```
#[macro_export]
macro_rules! assume {
    ($cond:expr $(,)?) => {
        $crate::assumes::that($cond)?
    };
    ($cond:expr, $($fmt:tt)+) => {
        $crate::assumes::that_with($cond, || ::std::format!($($fmt)+))?
    };
}
