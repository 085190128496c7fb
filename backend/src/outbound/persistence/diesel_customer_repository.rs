//! PostgreSQL-backed `CustomerRepository` implementation using Diesel ORM.
//!
//! Each port call checks out its own pooled connection. The existence count
//! and the insert therefore run on independent connections; the unique
//! constraint on `customers.name` is what keeps concurrent registrations of
//! the same name from both landing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::CustomerName;
use crate::domain::ports::{CustomerRepository, CustomerRepositoryError};

use super::models::NewCustomerRow;
use super::pool::{DbPool, PoolError};
use super::schema::customers;

/// Diesel-backed implementation of the [`CustomerRepository`] port.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CustomerRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CustomerRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to customer repository errors.
///
/// `name` is the customer being written; it is only used when the store
/// reports a unique violation. Every other error keeps the driver's message
/// so the logged fault names the real cause.
fn map_diesel_error(error: diesel::result::Error, name: &CustomerName) -> CustomerRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CustomerRepositoryError::duplicate_name(name.as_ref())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            CustomerRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => CustomerRepositoryError::query(info.message()),
        other => CustomerRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn count_by_name(&self, name: &CustomerName) -> Result<u64, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = customers::table
            .filter(customers::name.eq(name.as_ref()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, name))?;

        u64::try_from(count)
            .map_err(|_| CustomerRepositoryError::query(format!("negative row count {count}")))
    }

    async fn insert(&self, name: &CustomerName) -> Result<Option<i64>, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCustomerRow {
            name: name.as_ref(),
        };

        diesel::insert_into(customers::table)
            .values(&row)
            .returning(customers::id)
            .get_result::<i64>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, name))
    }
}
