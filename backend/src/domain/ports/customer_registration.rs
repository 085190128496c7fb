//! Driving port for registering customers.
//!
//! Inbound adapters (HTTP handlers) depend on this trait rather than on the
//! registrar type so they can be exercised with doubles.

use async_trait::async_trait;

use crate::domain::{CreateCustomerRequest, Error, RegistrationOutcome};

/// Domain use-case port for creating customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRegistration: Send + Sync {
    /// Register the customer named in `request`.
    ///
    /// Duplicates and refused inserts are returned as
    /// [`RegistrationOutcome`] values.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::InternalError`](crate::domain::ErrorCode)
    /// error when the store is unreachable, times out, or fails a query.
    async fn register(&self, request: CreateCustomerRequest)
    -> Result<RegistrationOutcome, Error>;
}
