//! Per-resource queries, each file adding methods to [`Database`].
//!
//! Lookups and writes against a missing id fail with
//! `sqlx::Error::RowNotFound`, which the API maps to 404.
//!
//! [`Database`]: super::Database

mod appointments;
mod invoices;
mod medications;
mod patients;
mod treatments;
mod users;
mod visitors;

pub(crate) use patients::insert_patient;

use sqlx::sqlite::SqliteQueryResult;

/// An UPDATE or DELETE that touched nothing means the id does not exist.
fn ensure_found(result: SqliteQueryResult) -> Result<(), sqlx::Error> {
    if result.rows_affected() == 0 {
        Err(sqlx::Error::RowNotFound)
    } else {
        Ok(())
    }
}
