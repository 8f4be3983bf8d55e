//! Admin console
//!
//! Routed screens over the REST client, rendered as plain text and driven
//! line by line from [`console::Console`].

pub mod console;
pub mod form;
pub mod router;
pub mod screens;

use thiserror::Error;

use crate::client::ClientError;
pub use form::FormError;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("no record with id {0} on this screen")]
    UnknownRecord(i64),
    #[error("select an appointment first")]
    NothingSelected,
    #[error("'{0}' is not available on this screen")]
    Unsupported(&'static str),
}
