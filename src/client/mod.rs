//! Client side of the contact pipeline.
//!
//! [`ContactForm`] holds the bound field values and runs a submission
//! through a [`ContactTransport`], reporting the outcome to a [`Notifier`].

mod form;
mod notify;
mod transport;

pub use form::*;
pub use notify::*;
pub use transport::*;
