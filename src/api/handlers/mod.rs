//! Request handlers, one module per resource.

pub mod appointments;
pub mod health;
pub mod invoices;
pub mod medications;
pub mod patients;
pub mod treatments;
pub mod users;
pub mod visitors;
