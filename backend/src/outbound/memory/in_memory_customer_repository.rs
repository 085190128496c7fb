//! In-memory `CustomerRepository` for local runs and tests.
//!
//! Names live in a `HashMap` behind a `RwLock` and are lost when the store is
//! dropped. The insert re-checks the name under the write lock, giving the
//! same uniqueness guarantee as the database constraint.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::CustomerName;
use crate::domain::ports::{CustomerRepository, CustomerRepositoryError};

#[derive(Debug)]
struct Table {
    rows: HashMap<String, i64>,
    next_id: i64,
}

/// In-memory implementation of [`CustomerRepository`].
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    table: RwLock<Table>,
}

impl InMemoryCustomerRepository {
    /// Create an empty store. The first insert is assigned id `1`.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(error: E) -> CustomerRepositoryError {
    CustomerRepositoryError::query(format!("lock poisoned: {error}"))
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn count_by_name(&self, name: &CustomerName) -> Result<u64, CustomerRepositoryError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(u64::from(table.rows.contains_key(name.as_ref())))
    }

    async fn insert(&self, name: &CustomerName) -> Result<Option<i64>, CustomerRepositoryError> {
        let mut table = self.table.write().map_err(poisoned)?;
        if table.rows.contains_key(name.as_ref()) {
            return Err(CustomerRepositoryError::duplicate_name(name.as_ref()));
        }
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(name.as_ref().to_owned(), id);
        Ok(Some(id))
    }
}
