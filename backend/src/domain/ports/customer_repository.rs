//! Port abstraction for the customer store and its errors.
//!
//! The registrar drives the store through two separate calls, an existence
//! count followed by an insert. Adapters must back the name column with a
//! uniqueness guarantee and report a violation on insert as
//! [`CustomerRepositoryError::DuplicateName`] so concurrent registrations of
//! the same name cannot both succeed.

use async_trait::async_trait;

use crate::domain::CustomerName;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by customer repository adapters.
    pub enum CustomerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "customer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "customer repository query failed: {message}",
        /// The insert collided with an existing customer of the same name.
        DuplicateName { name: String } => "customer name already stored: {name}",
    }
}

/// Driven port for the customer table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Count persisted customers whose name equals `name` under the store's
    /// collation.
    async fn count_by_name(&self, name: &CustomerName) -> Result<u64, CustomerRepositoryError>;

    /// Insert a customer and return the identifier assigned by the store.
    ///
    /// `Ok(None)` means the store accepted the statement but handed back no
    /// identifier.
    async fn insert(&self, name: &CustomerName) -> Result<Option<i64>, CustomerRepositoryError>;
}
