use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A call to the identity service failed.
///
/// Authorization failures, throttling, malformed requests and transport faults
/// all land here; the run is aborted on the first one.
#[derive(Debug, Error)]
#[error("{operation} failed: {detail}")]
pub struct ServiceError {
    operation: &'static str,
    detail: String,
    #[source]
    source: Option<BoxError>,
}

impl ServiceError {
    pub fn new(operation: &'static str, detail: impl Into<String>) -> Self {
        Self { operation, detail: detail.into(), source: None }
    }

    /// Attach the underlying client error as the cause.
    pub fn with_source<E>(operation: &'static str, detail: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { operation, detail: detail.into(), source: Some(Box::new(source)) }
    }

    /// Name of the service operation that failed, e.g. `ListUsers`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
