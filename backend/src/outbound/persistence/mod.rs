//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Connections come from a `bb8` pool through `diesel-async`. Row structs and
//! the table definition stay private to this module; callers only see the
//! [`CustomerRepository`](crate::domain::ports::CustomerRepository)
//! implementation and the pool.
//!
//! # Example
//!
//! ```no_run
//! use customer_registry::outbound::persistence::{
//!     DbPool, DieselCustomerRepository, PoolConfig,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/registry")).await?;
//! let repo = DieselCustomerRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_customer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_customer_repository::DieselCustomerRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
