//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input and authorize bearer tokens before store calls.
//! - Compose identity and todo stores into register/login/list/todo flows.
//! - Emit one metadata-only log event per use case.
//!
//! # Invariants
//! - Stores are only mutated after validation and authorization succeed.
//! - Log lines never contain access tokens or todo descriptions.

pub mod account_service;
pub mod error;
pub mod todo_service;

use crate::service::error::ServiceError;
use log::warn;

/// Logs a failed use case with its stable error code and passes the result on.
pub(crate) fn log_failure<T>(
    event: &'static str,
    result: Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    if let Err(err) = &result {
        warn!(
            "event={event} module=service status=error error_code={}",
            err.code()
        );
    }
    result
}
