//! Defect reporting for failures that reached a top-level handler.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::errors::InternalError;

/// Rendered description of an [`InternalError`] and its causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectReport {
    /// Message of the failure itself.
    pub message: String,
    /// Display text of each cause, nearest first.
    pub causes: Vec<String>,
    /// Set when part of the chain was left out.
    pub truncated: bool,
}

impl Display for DefectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.causes {
            write!(f, "\n  caused by: {cause}")?;
        }
        if self.truncated {
            write!(f, "\n  caused by: ...")?;
        }
        Ok(())
    }
}

/// Builds a report without logging it.
pub fn describe(err: &InternalError, config: &ReportConfig) -> DefectReport {
    let mut causes = Vec::new();
    let mut truncated = false;
    if config.include_causes {
        for (depth, cause) in err.causes().enumerate() {
            if depth >= config.max_depth {
                truncated = true;
                break;
            }
            causes.push(cause.to_string());
        }
    } else {
        truncated = err.cause().is_some();
    }
    DefectReport {
        message: err.message().to_string(),
        causes,
        truncated,
    }
}

/// Builds a report and logs it as an error event.
pub fn report(err: &InternalError, config: &ReportConfig) -> DefectReport {
    let report = describe(err, config);
    tracing::error!(
        causes = report.causes.len(),
        truncated = report.truncated,
        defect = %report,
        "internal invariant violated, please report this bug"
    );
    report
}

/// Reports the failure and panics with the rendered report.
pub fn fail_fast(err: InternalError, config: &ReportConfig) -> ! {
    let report = report(&err, config);
    panic!("{report}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_causes() {
        let report = DefectReport {
            message: "bad state".to_string(),
            causes: vec!["sector unreadable".to_string()],
            truncated: true,
        };
        assert_eq!(
            report.to_string(),
            "bad state\n  caused by: sector unreadable\n  caused by: ..."
        );
    }
}
