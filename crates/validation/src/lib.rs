#![deny(missing_docs)]
#![doc = "Checks for invariants a library guarantees to itself, and the error raised when one of them breaks."]

/// Assumption checks and the `assume!` macro.
pub mod assumes;
/// Reporting configuration.
pub mod config;
/// The internal failure type and its serialized record.
pub mod errors;
/// Defect reports for failures caught at the top level.
pub mod report;
/// JSON and binary codecs.
pub mod serde;

pub use crate::config::ReportConfig;
pub use crate::errors::{
    Cause, ChainTooDeep, ErrorRecord, InternalError, DEFAULT_MESSAGE, MAX_CAUSE_DEPTH,
};
pub use crate::report::{describe, fail_fast, report, DefectReport};
pub use crate::serde::{from_bytes, from_json, to_bytes, to_json, CodecError};
