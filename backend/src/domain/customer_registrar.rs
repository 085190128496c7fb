//! Customer registration service.
//!
//! The registrar validates nothing itself; it receives an already validated
//! [`CreateCustomerRequest`] and runs the check-then-insert sequence against
//! the [`CustomerRepository`] port. Business outcomes come back as
//! [`RegistrationOutcome`] values. Store failures and timeouts come back as
//! internal [`Error`]s carrying operator-facing detail.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{CustomerRegistration, CustomerRepository, CustomerRepositoryError};
use crate::domain::{CreateCustomerRequest, CustomerId, Error, RegistrationOutcome};

/// Default bound on a single store interaction.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Customer registration service implementing [`CustomerRegistration`].
///
/// Holds no per-call state; concurrent registrations only share the
/// repository handle.
#[derive(Clone)]
pub struct CustomerRegistrar<R> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R> CustomerRegistrar<R> {
    /// Create a registrar over the given repository using
    /// [`DEFAULT_STORE_TIMEOUT`].
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the bound applied to each store interaction.
    #[must_use]
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Bound applied to each store interaction.
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }
}

impl<R> CustomerRegistrar<R>
where
    R: CustomerRepository,
{
    fn map_repository_error(error: CustomerRepositoryError) -> Error {
        match error {
            CustomerRepositoryError::Connection { message } => {
                Error::internal(format!("customer store unavailable: {message}"))
            }
            CustomerRepositoryError::Query { message } => {
                Error::internal(format!("customer store error: {message}"))
            }
            CustomerRepositoryError::DuplicateName { name } => {
                Error::internal(format!("unexpected duplicate outside insert: {name}"))
            }
        }
    }

    /// Run one store interaction under the configured timeout. An elapsed
    /// timeout is a fault; the repository result is returned untouched.
    async fn bounded<T, Fut>(
        &self,
        operation: &'static str,
        fut: Fut,
    ) -> Result<Result<T, CustomerRepositoryError>, Error>
    where
        Fut: Future<Output = Result<T, CustomerRepositoryError>>,
    {
        tokio::time::timeout(self.store_timeout, fut)
            .await
            .map_err(|_| {
                Error::internal(format!(
                    "customer store {operation} timed out after {:?}",
                    self.store_timeout
                ))
            })
    }

    /// Register the customer named in `request`.
    ///
    /// # Errors
    ///
    /// Returns an internal [`Error`] when the store fails or does not answer
    /// within the configured timeout.
    pub async fn register(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<RegistrationOutcome, Error> {
        let name = request.name();

        let existing = self
            .bounded("existence check", self.repository.count_by_name(name))
            .await?
            .map_err(Self::map_repository_error)?;
        if existing > 0 {
            info!(name = %name, existing, "customer name already registered");
            return Ok(RegistrationOutcome::Duplicate);
        }

        match self.bounded("insert", self.repository.insert(name)).await? {
            Ok(raw_id) => match raw_id.and_then(CustomerId::new) {
                Some(id) => {
                    info!(name = %name, customer_id = %id, "customer registered");
                    Ok(RegistrationOutcome::Inserted { id })
                }
                None => {
                    warn!(name = %name, ?raw_id, "store returned no usable customer id");
                    Ok(RegistrationOutcome::InsertionFailed)
                }
            },
            // Lost a race with a concurrent registration of the same name.
            Err(CustomerRepositoryError::DuplicateName { .. }) => {
                info!(name = %name, "customer name registered concurrently");
                Ok(RegistrationOutcome::Duplicate)
            }
            Err(error) => Err(Self::map_repository_error(error)),
        }
    }
}

#[async_trait]
impl<R> CustomerRegistration for CustomerRegistrar<R>
where
    R: CustomerRepository + 'static,
{
    async fn register(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<RegistrationOutcome, Error> {
        CustomerRegistrar::register(self, request).await
    }
}

#[cfg(test)]
#[path = "customer_registrar_tests.rs"]
mod tests;
