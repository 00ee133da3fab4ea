//! Page view state.
//!
//! Everything here is derived from raw viewport signals (scroll offset,
//! per-section intersection coverage) and user commands, and is independent of
//! any browser API. The host feeds signals into [`ViewController`] and renders
//! through a [`PageSurface`].

mod controller;
mod section;
mod theme;
mod visibility;

pub use controller::*;
pub use section::*;
pub use theme::*;
pub use visibility::*;

use serde::{Deserialize, Serialize};

use crate::client::FormVariant;

/// Feature flags selecting the page variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFeatures {
    /// Animated particle background behind the hero
    pub particle_background: bool,
    /// Show the full project list instead of the highlights
    pub extended_projects: bool,
    /// Contact form asks for the sender's name
    pub extended_contact_form: bool,
}

impl PageFeatures {
    pub fn form_variant(&self) -> FormVariant {
        if self.extended_contact_form {
            FormVariant::Extended
        } else {
            FormVariant::Basic
        }
    }
}
