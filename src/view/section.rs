//! Page sections and scroll-position derivations.

use serde::{Deserialize, Serialize};

/// Distance below the scroll offset used as the reference point when deciding
/// which section is active. Keeps the fixed header from hiding the switch.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// One named region of the single-page layout, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Education,
    Projects,
    Certificates,
    Contact,
}

impl Section {
    /// All sections in canonical (document) order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    /// Stable anchor identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Certificates => "certificates",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Position in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Measured vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `point` lies in `[top, bottom)`.
    pub fn contains(&self, point: f64) -> bool {
        self.top <= point && point < self.bottom()
    }
}

/// Section whose extent contains the reference point for `scroll_offset`.
///
/// When extents overlap the earliest section in canonical order wins,
/// regardless of the order of `extents`. Returns `None` when no extent
/// contains the point; callers keep their previous value in that case.
pub fn active_section(scroll_offset: f64, extents: &[SectionExtent]) -> Option<Section> {
    let point = scroll_offset + SCROLL_LOOKAHEAD;

    Section::ALL.into_iter().find(|section| {
        extents
            .iter()
            .any(|extent| extent.section == *section && extent.contains(point))
    })
}

/// Fraction of the scrollable distance already covered, in `[0, 1]`.
///
/// A document that fits in the viewport reports 0.
pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let progress = scroll_offset / scrollable;
    if !progress.is_finite() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}
