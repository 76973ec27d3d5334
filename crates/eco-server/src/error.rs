//! Request-fatal errors for the report pipeline.
//!
//! Only the live air-quality path is fatal; the archive and traffic
//! paths degrade to empty sections and never construct one of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Missing {0} in environment")]
    MissingCredential(&'static str),

    #[error("{source_name} error: {detail}")]
    Provider {
        source_name: &'static str,
        detail: String,
    },
}

impl ReportError {
    pub fn provider(source_name: &'static str, detail: impl Into<String>) -> Self {
        Self::Provider {
            source_name,
            detail: detail.into(),
        }
    }
}
