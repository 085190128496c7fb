//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod customer_registration;
mod customer_repository;

#[cfg(test)]
pub use customer_registration::MockCustomerRegistration;
pub use customer_registration::CustomerRegistration;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerRepository, CustomerRepositoryError};
