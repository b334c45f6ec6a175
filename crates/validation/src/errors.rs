//! The error raised when one of the library's own invariants does not hold.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failure is raised without an explicit description.
pub const DEFAULT_MESSAGE: &str = "internal error";

/// Shared handle to the error that triggered an [`InternalError`].
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Signals that an invariant the library guarantees itself has been violated.
///
/// This is a defect in the library, not a misuse by the caller. Handlers should
/// report it with its full cause chain and stop, not try to recover from it.
///
/// Values are only built by the checks in [`crate::assumes`], or rebuilt from
/// an [`ErrorRecord`] through [`InternalError::from_serialized`]:
///
/// ```compile_fail
/// let err = validation::InternalError::new();
/// ```
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(into = "ErrorRecord", from = "ErrorRecord")]
#[error("{message}")]
pub struct InternalError {
    message: Cow<'static, str>,
    #[source]
    cause: Option<Cause>,
}

impl InternalError {
    pub(crate) fn new() -> Self {
        Self::with_cause(None, None)
    }

    pub(crate) fn with_message(message: Option<Cow<'static, str>>) -> Self {
        Self::with_cause(message, None)
    }

    pub(crate) fn with_cause(message: Option<Cow<'static, str>>, cause: Option<Cause>) -> Self {
        let message = message.unwrap_or(Cow::Borrowed(DEFAULT_MESSAGE));
        Self { message, cause }
    }

    /// Rebuilds a failure that crossed a serialization boundary.
    ///
    /// The recorded cause chain becomes the new cause, so walking
    /// [`std::error::Error::source`] yields the same messages as on the
    /// sending side.
    pub fn from_serialized(record: ErrorRecord) -> Self {
        let ErrorRecord { message, cause } = record;
        Self::with_cause(
            Some(Cow::Owned(message)),
            cause.map(|cause| Arc::new(*cause) as Cause),
        )
    }

    /// Returns the human readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error that triggered this failure, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Whether the message is the built-in default.
    pub fn has_default_message(&self) -> bool {
        self.message == DEFAULT_MESSAGE
    }

    /// Iterates over the cause chain, nearest cause first.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }
}

/// Maximum number of links, the failure itself included, carried by an
/// [`ErrorRecord`]. Deeper chains are cut when captured and rejected when
/// decoded.
pub const MAX_CAUSE_DEPTH: usize = 256;

/// A decoded cause chain exceeded [`MAX_CAUSE_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cause chain has {depth} links, limit is {limit}")]
pub struct ChainTooDeep {
    /// Links found in the payload.
    pub depth: usize,
    /// The limit in force.
    pub limit: usize,
}

/// Serialized form of an error and everything that caused it.
///
/// On the wire the chain is flat: the message followed by the list of cause
/// messages, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(into = "WireRecord", try_from = "WireRecord")]
#[error("{message}")]
pub struct ErrorRecord {
    /// Display text of this link.
    pub message: String,
    /// The next link in the chain.
    #[source]
    pub cause: Option<Box<ErrorRecord>>,
}

#[derive(Serialize, Deserialize)]
struct WireRecord {
    message: String,
    #[serde(default)]
    causes: Vec<String>,
}

impl ErrorRecord {
    /// Creates a record without a cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the next link of the chain.
    pub fn with_cause(mut self, cause: ErrorRecord) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Records `err` and its `source()` chain, keeping at most
    /// [`MAX_CAUSE_DEPTH`] links.
    pub fn capture(err: &(dyn StdError + 'static)) -> Self {
        let mut links = std::iter::successors(Some(err), |&err| err.source())
            .take(MAX_CAUSE_DEPTH)
            .map(|err| err.to_string());
        let message = links.next().unwrap_or_default();
        Self::from_links(message, links.collect())
    }

    fn from_links(message: String, causes: Vec<String>) -> Self {
        let mut cause = None;
        for message in causes.into_iter().rev() {
            cause = Some(Box::new(Self { message, cause }));
        }
        Self { message, cause }
    }

    /// Number of links, this one included.
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |&record| record.cause.as_deref()).count()
    }
}

impl From<ErrorRecord> for WireRecord {
    fn from(record: ErrorRecord) -> Self {
        let causes =
            std::iter::successors(record.cause.as_deref(), |&link| link.cause.as_deref())
                .map(|link| link.message.clone())
                .collect();
        Self {
            message: record.message,
            causes,
        }
    }
}

impl TryFrom<WireRecord> for ErrorRecord {
    type Error = ChainTooDeep;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        let depth = wire.causes.len() + 1;
        if depth > MAX_CAUSE_DEPTH {
            return Err(ChainTooDeep {
                depth,
                limit: MAX_CAUSE_DEPTH,
            });
        }
        Ok(Self::from_links(wire.message, wire.causes))
    }
}

impl From<InternalError> for ErrorRecord {
    fn from(err: InternalError) -> Self {
        Self::capture(&err)
    }
}

impl From<ErrorRecord> for InternalError {
    fn from(record: ErrorRecord) -> Self {
        Self::from_serialized(record)
    }
}
