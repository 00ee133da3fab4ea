//! Data models for the portfolio contact pipeline.
//!
//! Field names match the JSON the contact form sends.

mod contact;

pub use contact::*;
