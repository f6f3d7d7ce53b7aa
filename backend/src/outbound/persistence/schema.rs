//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Stored accounts.
    ///
    /// `username` carries a `UNIQUE` constraint so concurrent creates for the
    /// same name cannot both succeed.
    users (id) {
        /// Primary key: UUID v4 assigned by the adapter.
        id -> Uuid,
        /// Exact, case-sensitive login name.
        username -> Text,
        /// bcrypt hash in modular crypt format.
        password_hash -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
