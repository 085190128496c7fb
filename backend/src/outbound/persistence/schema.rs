//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Registered customers.
    ///
    /// `name` carries a unique constraint; the registrar relies on it to
    /// reject concurrent registrations of the same name.
    customers (id) {
        /// Store-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        /// Customer name as submitted.
        name -> Text,
    }
}
