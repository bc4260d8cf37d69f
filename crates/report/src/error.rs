use thiserror::Error;

use armory_core::DomainError;

/// Error type for the audit/render pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
}
