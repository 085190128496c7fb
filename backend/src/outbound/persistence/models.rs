//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use super::schema::customers;

/// Insertable struct for creating customer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customers)]
pub(crate) struct NewCustomerRow<'a> {
    pub name: &'a str,
}
