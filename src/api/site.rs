//! Page configuration endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::client::FormVariant;
use crate::view::{PageFeatures, Section, DEFAULT_VISIBILITY_THRESHOLD, SCROLL_LOOKAHEAD};
use crate::AppState;

/// Settings the page needs before it renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub features: PageFeatures,
    pub form_variant: FormVariant,
    pub sections: Vec<Section>,
    pub scroll_lookahead: f64,
    pub visibility_threshold: f64,
}

/// GET /api/site - Feature flags and section layout for the page.
pub async fn get_site(State(state): State<AppState>) -> Json<SiteInfo> {
    let features = state.config.features;
    Json(SiteInfo {
        features,
        form_variant: features.form_variant(),
        sections: Section::ALL.to_vec(),
        scroll_lookahead: SCROLL_LOOKAHEAD,
        visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
    })
}
