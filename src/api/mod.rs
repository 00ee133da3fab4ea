//! REST API module.
//!
//! Contains the contact endpoint and the page configuration endpoint.

mod contact;
mod site;

pub use contact::*;
pub use site::*;
