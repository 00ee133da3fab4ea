//! View controller owning the derived page state.

use super::{
    active_section, scroll_progress, AnimationTrigger, PageFeatures, PreferenceStore, Section,
    SectionExtent, Theme, Visibility, VisibilityTracker, THEME_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Viewport measurements delivered with a scroll signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Rendering side of the page.
pub trait PageSurface {
    /// Switch the document-level presentation to `theme`.
    fn apply_theme(&mut self, theme: Theme);
    /// Scroll the viewport so `offset` is at its top.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
    /// Start the animation described by `trigger`, replacing any running one.
    fn start_animation(&mut self, trigger: AnimationTrigger);
}

/// Derives theme, active section, menu and visibility state from page signals.
pub struct ViewController<S, P> {
    store: S,
    surface: P,
    features: PageFeatures,
    theme: Theme,
    active: Section,
    menu_open: bool,
    layout: Vec<SectionExtent>,
    visibility: VisibilityTracker,
    progress: f64,
}

impl<S: PreferenceStore, P: PageSurface> ViewController<S, P> {
    pub fn new(store: S, surface: P, features: PageFeatures) -> Self {
        Self {
            store,
            surface,
            features,
            theme: Theme::default(),
            active: Section::Home,
            menu_open: false,
            layout: Vec::new(),
            visibility: VisibilityTracker::default(),
            progress: 0.0,
        }
    }

    /// Use a custom visibility threshold instead of the default.
    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility = VisibilityTracker::new(threshold);
        self
    }

    /// Restore the persisted theme and apply it.
    pub fn initialize(&mut self) {
        self.theme = match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        self.surface.apply_theme(self.theme);
        tracing::debug!(theme = self.theme.as_str(), "View initialized");
    }

    /// Flip the theme, apply it and persist it.
    ///
    /// Persistence is best-effort: a failed write still changes the theme for
    /// this session.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.surface.apply_theme(self.theme);
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.theme
    }

    /// Replace the measured section extents.
    pub fn set_layout(&mut self, layout: Vec<SectionExtent>) {
        self.layout = layout;
    }

    /// Recompute scroll-derived state. Returns the active section.
    ///
    /// The active section is kept when no section contains the reference point.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Section {
        if let Some(section) = active_section(viewport.scroll_offset, &self.layout) {
            if section != self.active {
                tracing::trace!(from = %self.active, to = %section, "Active section changed");
                self.active = section;
            }
        }
        self.progress = scroll_progress(
            viewport.scroll_offset,
            viewport.document_height,
            viewport.viewport_height,
        );
        self.active
    }

    /// Smooth-scroll to `section` and close the mobile menu.
    ///
    /// Returns false when the section has not been measured yet; the menu is
    /// closed regardless.
    pub fn navigate_to(&mut self, section: Section) -> bool {
        self.close_mobile_menu();

        match self.layout.iter().find(|e| e.section == section) {
            Some(extent) => {
                self.surface.scroll_to(extent.top, ScrollBehavior::Smooth);
                true
            }
            None => {
                tracing::debug!(section = %section, "Navigation before layout was measured");
                false
            }
        }
    }

    pub fn set_section_visible(
        &mut self,
        section: Section,
        visible: bool,
    ) -> Option<AnimationTrigger> {
        let trigger = self.visibility.set_visible(section, visible)?;
        self.surface.start_animation(trigger);
        Some(trigger)
    }

    /// Feed an intersection ratio for `section`.
    pub fn set_section_coverage(&mut self, section: Section, ratio: f64) -> Option<AnimationTrigger> {
        let visible = ratio >= self.visibility.threshold();
        self.set_section_visible(section, visible)
    }

    /// Report that an animation finished. Stale reports return false.
    pub fn animation_finished(&mut self, trigger: &AnimationTrigger) -> bool {
        self.visibility.complete(trigger)
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn visibility(&self, section: Section) -> Visibility {
        self.visibility.state(section)
    }

    pub fn scroll_progress(&self) -> f64 {
        self.progress
    }

    pub fn features(&self) -> PageFeatures {
        self.features
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{AnimationKind, MemoryPreferenceStore, PreferenceError};

    #[derive(Debug, Default)]
    struct RecordingSurface {
        themes: Vec<Theme>,
        scrolls: Vec<(f64, ScrollBehavior)>,
        animations: Vec<AnimationTrigger>,
    }

    impl PageSurface for RecordingSurface {
        fn apply_theme(&mut self, theme: Theme) {
            self.themes.push(theme);
        }

        fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
            self.scrolls.push((offset, behavior));
        }

        fn start_animation(&mut self, trigger: AnimationTrigger) {
            self.animations.push(trigger);
        }
    }

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Unavailable("quota exceeded".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn layout() -> Vec<SectionExtent> {
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, s)| SectionExtent::new(s, i as f64 * 1000.0, 1000.0))
            .collect()
    }

    fn viewport(offset: f64) -> Viewport {
        Viewport {
            scroll_offset: offset,
            viewport_height: 900.0,
            document_height: 6000.0,
        }
    }

    fn controller() -> ViewController<MemoryPreferenceStore, RecordingSurface> {
        let mut view = ViewController::new(
            MemoryPreferenceStore::default(),
            RecordingSurface::default(),
            PageFeatures::default(),
        );
        view.initialize();
        view.set_layout(layout());
        view
    }

    #[test]
    fn test_initialize_defaults_to_light() {
        let view = controller();
        assert_eq!(view.theme(), Theme::Light);
        assert_eq!(view.surface().themes, vec![Theme::Light]);
    }

    #[test]
    fn test_initialize_restores_stored_theme() {
        let mut store = MemoryPreferenceStore::default();
        store.set(THEME_KEY, "dark").unwrap();

        let mut view = ViewController::new(store, RecordingSurface::default(), PageFeatures::default());
        view.initialize();

        assert_eq!(view.theme(), Theme::Dark);
        assert_eq!(view.surface().themes, vec![Theme::Dark]);
    }

    #[test]
    fn test_initialize_ignores_unknown_value() {
        let mut store = MemoryPreferenceStore::default();
        store.set(THEME_KEY, "neon").unwrap();

        let mut view = ViewController::new(store, RecordingSurface::default(), PageFeatures::default());
        view.initialize();

        assert_eq!(view.theme(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_restores_theme_and_store() {
        let mut view = controller();

        assert_eq!(view.toggle_theme(), Theme::Dark);
        assert_eq!(
            view.store().get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );

        assert_eq!(view.toggle_theme(), Theme::Light);
        assert_eq!(
            view.store().get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(
            view.surface().themes,
            vec![Theme::Light, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let mut view = ViewController::new(
            BrokenStore,
            RecordingSurface::default(),
            PageFeatures::default(),
        );
        view.initialize();
        assert_eq!(view.theme(), Theme::Light);

        assert_eq!(view.toggle_theme(), Theme::Dark);
        assert_eq!(view.surface().themes.last(), Some(&Theme::Dark));
    }

    #[test]
    fn test_active_section_is_home_before_scrolling() {
        let view = controller();
        assert_eq!(view.active_section(), Section::Home);
    }

    #[test]
    fn test_active_section_retained_outside_layout() {
        let mut view = controller();

        assert_eq!(view.on_scroll(viewport(3000.0)), Section::Projects);
        // Past the end of the page nothing matches
        assert_eq!(view.on_scroll(viewport(10_000.0)), Section::Projects);
        assert_eq!(view.on_scroll(viewport(-400.0)), Section::Projects);
    }

    #[test]
    fn test_active_section_always_defined() {
        let mut view = controller();
        let mut offset = -2000.0;
        while offset < 9000.0 {
            let active = view.on_scroll(viewport(offset));
            assert!(Section::ALL.contains(&active));
            offset += 250.0;
        }
    }

    #[test]
    fn test_scroll_progress_tracks_offset() {
        let mut view = controller();
        view.on_scroll(viewport(2550.0));
        assert!((view.scroll_progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navigate_scrolls_and_closes_menu() {
        let mut view = controller();
        assert!(view.toggle_mobile_menu());

        assert!(view.navigate_to(Section::Certificates));

        assert!(!view.is_menu_open());
        assert_eq!(
            view.surface().scrolls,
            vec![(4000.0, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn test_navigate_before_layout() {
        let mut view = ViewController::new(
            MemoryPreferenceStore::default(),
            RecordingSurface::default(),
            PageFeatures::default(),
        );
        view.toggle_mobile_menu();

        assert!(!view.navigate_to(Section::Contact));
        assert!(!view.is_menu_open());
        assert!(view.surface().scrolls.is_empty());
    }

    #[test]
    fn test_mobile_menu_toggle() {
        let mut view = controller();
        assert!(!view.is_menu_open());
        assert!(view.toggle_mobile_menu());
        assert!(!view.toggle_mobile_menu());
        view.toggle_mobile_menu();
        view.close_mobile_menu();
        assert!(!view.is_menu_open());
    }

    #[test]
    fn test_visibility_drives_surface_animations() {
        let mut view = controller();

        view.set_section_coverage(Section::About, 0.8);
        view.set_section_coverage(Section::About, 0.9);
        view.set_section_coverage(Section::About, 0.2);

        let kinds: Vec<_> = view.surface().animations.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![AnimationKind::Enter, AnimationKind::Exit]);
        assert_eq!(view.visibility(Section::About), Visibility::Hidden);
    }

    #[test]
    fn test_stale_animation_completion_ignored() {
        let mut view = controller();

        let enter = view.set_section_visible(Section::Home, true).unwrap();
        let exit = view.set_section_visible(Section::Home, false).unwrap();

        assert!(!view.animation_finished(&enter));
        assert!(view.animation_finished(&exit));
    }

    #[test]
    fn test_custom_threshold() {
        let mut view = controller().with_visibility_threshold(0.25);
        assert!(view.set_section_coverage(Section::Education, 0.3).is_some());
        assert_eq!(view.visibility(Section::Education), Visibility::Visible);
    }
}
