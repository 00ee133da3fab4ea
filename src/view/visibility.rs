//! Per-section visibility state machine driving enter/exit animations.

use super::Section;

/// Fraction of a section that must intersect the viewport to count as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Enter,
    Exit,
}

/// Request to start an animation on a section.
///
/// `generation` identifies this run; completions reported for an older
/// generation are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTrigger {
    pub section: Section,
    pub kind: AnimationKind,
    pub generation: u64,
    /// A previous animation on this section was still running and is replaced
    pub interrupted: bool,
}

/// Two-state machine for a single section.
#[derive(Debug, Clone, Default)]
pub struct SectionAnimator {
    state: Visibility,
    generation: u64,
    running: Option<AnimationKind>,
}

impl SectionAnimator {
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Animation currently in flight, if any.
    pub fn running(&self) -> Option<AnimationKind> {
        self.running
    }

    /// Move to the requested state. Returns a trigger only on a transition.
    pub fn set_visible(&mut self, section: Section, visible: bool) -> Option<AnimationTrigger> {
        let target = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if target == self.state {
            return None;
        }

        let kind = match target {
            Visibility::Visible => AnimationKind::Enter,
            Visibility::Hidden => AnimationKind::Exit,
        };
        let interrupted = self.running.is_some();

        self.state = target;
        self.generation += 1;
        self.running = Some(kind);

        Some(AnimationTrigger {
            section,
            kind,
            generation: self.generation,
            interrupted,
        })
    }

    /// Record that the animation of `generation` finished.
    ///
    /// Returns false for stale or duplicate completions.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.running.is_none() {
            return false;
        }
        self.running = None;
        true
    }
}

/// Visibility state of every section.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    animators: [SectionAnimator; 6],
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTracker {
    /// Create a tracker; the threshold is clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            animators: Default::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self, section: Section) -> Visibility {
        self.animators[section.index()].state()
    }

    pub fn animator(&self, section: Section) -> &SectionAnimator {
        &self.animators[section.index()]
    }

    pub fn set_visible(&mut self, section: Section, visible: bool) -> Option<AnimationTrigger> {
        self.animators[section.index()].set_visible(section, visible)
    }

    /// Feed an intersection ratio; at or above the threshold counts as visible.
    pub fn set_coverage(&mut self, section: Section, ratio: f64) -> Option<AnimationTrigger> {
        self.set_visible(section, ratio >= self.threshold)
    }

    pub fn complete(&mut self, trigger: &AnimationTrigger) -> bool {
        self.animators[trigger.section.index()].complete(trigger.generation)
    }

    /// Sections currently visible, in canonical order.
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.state(*s) == Visibility::Visible)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let tracker = VisibilityTracker::default();
        for section in Section::ALL {
            assert_eq!(tracker.state(section), Visibility::Hidden);
        }
        assert!(tracker.visible_sections().is_empty());
    }

    #[test]
    fn test_transitions_emit_one_trigger() {
        let mut tracker = VisibilityTracker::default();

        let enter = tracker.set_visible(Section::About, true).unwrap();
        assert_eq!(enter.kind, AnimationKind::Enter);
        assert!(!enter.interrupted);

        // Repeating the same signal is not a transition
        assert_eq!(tracker.set_visible(Section::About, true), None);

        let exit = tracker.set_visible(Section::About, false).unwrap();
        assert_eq!(exit.kind, AnimationKind::Exit);
        assert!(exit.generation > enter.generation);
    }

    #[test]
    fn test_retriggers_in_both_directions() {
        let mut tracker = VisibilityTracker::default();
        let mut kinds = Vec::new();

        for visible in [true, false, true, false, true] {
            let trigger = tracker.set_visible(Section::Projects, visible).unwrap();
            tracker.complete(&trigger);
            kinds.push(trigger.kind);
        }

        assert_eq!(
            kinds,
            vec![
                AnimationKind::Enter,
                AnimationKind::Exit,
                AnimationKind::Enter,
                AnimationKind::Exit,
                AnimationKind::Enter,
            ]
        );
    }

    #[test]
    fn test_rapid_reversal_supersedes_running_animation() {
        let mut tracker = VisibilityTracker::default();

        let enter = tracker.set_visible(Section::Contact, true).unwrap();
        let exit = tracker.set_visible(Section::Contact, false).unwrap();
        assert!(exit.interrupted);

        // The enter animation finishing late must not clear the exit run
        assert!(!tracker.complete(&enter));
        assert_eq!(
            tracker.animator(Section::Contact).running(),
            Some(AnimationKind::Exit)
        );

        assert!(tracker.complete(&exit));
        assert_eq!(tracker.animator(Section::Contact).running(), None);
        // Duplicate completion is ignored
        assert!(!tracker.complete(&exit));
    }

    #[test]
    fn test_coverage_threshold() {
        let mut tracker = VisibilityTracker::default();

        assert_eq!(tracker.set_coverage(Section::Education, 0.49), None);
        let trigger = tracker.set_coverage(Section::Education, 0.5).unwrap();
        assert_eq!(trigger.kind, AnimationKind::Enter);
        assert_eq!(tracker.visible_sections(), vec![Section::Education]);

        let trigger = tracker.set_coverage(Section::Education, 0.1).unwrap();
        assert_eq!(trigger.kind, AnimationKind::Exit);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityTracker::new(1.5).threshold(), 1.0);
        assert_eq!(VisibilityTracker::new(-0.2).threshold(), 0.0);
        assert_eq!(
            VisibilityTracker::new(f64::NAN).threshold(),
            DEFAULT_VISIBILITY_THRESHOLD
        );
    }
}
