//! Visibility observation for the input line
//!
//! The browser front end watches the `#input` element with an intersection
//! observer rooted at the viewport and scrolls it into view whenever a
//! visibility notification arrives. This module holds the platform-free half
//! of that: observer options, the entries a notification carries, the scroll
//! seam, and a model of when the platform reports threshold crossings.

use crate::types::{Result, TermError};
use std::collections::HashMap;

/// Id of the element kept in view
pub const REVEAL_TARGET_ID: &str = "input";

/// Visible fraction at which a notification fires
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.5;

/// Bounding container used to compute visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObserverRoot {
    /// The browser viewport (`root: null`)
    #[default]
    Viewport,
    /// An ancestor element, by id
    Element(String),
}

/// Options for a visibility observer
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root: ObserverRoot,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root: ObserverRoot::Viewport,
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl ObserverOptions {
    /// Viewport-rooted options with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the visibility ratio that triggers a notification
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TermError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Builder method: compute visibility against an ancestor element
    pub fn with_root(mut self, root: ObserverRoot) -> Self {
        self.root = root;
        self
    }
}

/// One entry of a visibility notification
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    /// Id of the observed element
    pub target: String,
    /// Visible fraction of the element, 0.0 to 1.0
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn new(target: impl Into<String>, intersection_ratio: f64) -> Self {
        Self {
            target: target.into(),
            intersection_ratio,
            is_intersecting: intersection_ratio > 0.0,
        }
    }
}

/// Something that can bring an element into view
pub trait ScrollIntoView {
    fn scroll_into_view(&mut self, target: &str);
}

/// Notification handler: every reported entry scrolls its element into view
pub struct RevealOnVisible<S: ScrollIntoView> {
    scroller: S,
}

impl<S: ScrollIntoView> RevealOnVisible<S> {
    pub fn new(scroller: S) -> Self {
        Self { scroller }
    }

    /// Handle one notification, returning the number of scroll requests issued
    pub fn handle(&mut self, entries: &[VisibilityEntry]) -> usize {
        for entry in entries {
            log::debug!(
                "Revealing #{} (ratio {:.2})",
                entry.target,
                entry.intersection_ratio
            );
            self.scroller.scroll_into_view(&entry.target);
        }
        entries.len()
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }
}

/// Models when the platform reports an entry for a single-threshold observer
///
/// The first sample of a target is always reported (observers fire once on
/// `observe`). Afterwards a sample is reported when it lands on the other
/// side of the threshold than the previous sample, or when the target starts
/// or stops intersecting at all.
#[derive(Debug, Clone)]
pub struct ThresholdCrossings {
    threshold: f64,
    /// Last `(above threshold, intersecting)` state per target
    states: HashMap<String, (bool, bool)>,
}

impl ThresholdCrossings {
    pub fn new(options: &ObserverOptions) -> Self {
        Self {
            threshold: options.threshold,
            states: HashMap::new(),
        }
    }

    /// Feed a visible-ratio sample, returning the entry the platform would report
    pub fn sample(&mut self, target: &str, ratio: f64) -> Option<VisibilityEntry> {
        let state = (ratio >= self.threshold, ratio > 0.0);
        match self.states.insert(target.to_string(), state) {
            Some(previous) if previous == state => None,
            _ => Some(VisibilityEntry::new(target, ratio)),
        }
    }

    /// Stop tracking a target; its next sample is reported again
    pub fn unobserve(&mut self, target: &str) {
        self.states.remove(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingScroller {
        calls: Vec<String>,
    }

    impl ScrollIntoView for RecordingScroller {
        fn scroll_into_view(&mut self, target: &str) {
            self.calls.push(target.to_string());
        }
    }

    #[test]
    fn test_default_options() {
        let options = ObserverOptions::new();
        assert_eq!(options.root, ObserverRoot::Viewport);
        assert_eq!(options.threshold, 0.5);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ObserverOptions::new().with_threshold(1.0).is_ok());
        assert!(ObserverOptions::new().with_threshold(0.0).is_ok());
        assert!(ObserverOptions::new().with_threshold(1.5).is_err());
        assert!(ObserverOptions::new().with_threshold(-0.1).is_err());
        assert!(ObserverOptions::new().with_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_every_entry_scrolls_once() {
        let mut reveal = RevealOnVisible::new(RecordingScroller::default());
        let entries = vec![
            VisibilityEntry::new(REVEAL_TARGET_ID, 0.6),
            VisibilityEntry::new(REVEAL_TARGET_ID, 0.2),
        ];

        assert_eq!(reveal.handle(&entries), 2);
        assert_eq!(reveal.scroller().calls, vec!["input", "input"]);
    }

    #[test]
    fn test_empty_notification_does_nothing() {
        let mut reveal = RevealOnVisible::new(RecordingScroller::default());
        assert_eq!(reveal.handle(&[]), 0);
        assert!(reveal.scroller().calls.is_empty());
    }

    #[test]
    fn test_crossings_report_initial_and_flips_only() {
        let mut crossings = ThresholdCrossings::new(&ObserverOptions::new());

        // Initial observation always reports
        assert!(crossings.sample("input", 0.1).is_some());
        // Still below the threshold
        assert!(crossings.sample("input", 0.3).is_none());
        // Crosses upwards (exactly at the threshold counts)
        let entry = crossings.sample("input", 0.5).unwrap();
        assert_eq!(entry.intersection_ratio, 0.5);
        assert!(entry.is_intersecting);
        // Stays above
        assert!(crossings.sample("input", 1.0).is_none());
        // Crosses downwards
        let entry = crossings.sample("input", 0.0).unwrap();
        assert!(!entry.is_intersecting);
    }

    #[test]
    fn test_crossings_are_tracked_per_target() {
        let mut crossings = ThresholdCrossings::new(&ObserverOptions::new());
        assert!(crossings.sample("input", 0.9).is_some());
        assert!(crossings.sample("history", 0.9).is_some());
        assert!(crossings.sample("input", 0.8).is_none());

        crossings.unobserve("input");
        assert!(crossings.sample("input", 0.8).is_some());
    }

    #[test]
    fn test_reported_crossings_drive_scrolls() {
        let mut crossings = ThresholdCrossings::new(&ObserverOptions::new());
        let mut reveal = RevealOnVisible::new(RecordingScroller::default());

        for ratio in [0.0, 0.2, 0.4, 0.6, 0.8] {
            let entries: Vec<_> = crossings.sample("input", ratio).into_iter().collect();
            reveal.handle(&entries);
        }

        // Initial report, starts intersecting, crosses the threshold
        assert_eq!(reveal.scroller().calls.len(), 3);
    }

    #[test]
    fn test_entering_the_viewport_is_reported_below_threshold() {
        let mut crossings = ThresholdCrossings::new(&ObserverOptions::new());
        assert!(crossings.sample("input", 0.0).is_some());

        let entry = crossings.sample("input", 0.2).unwrap();
        assert!(entry.is_intersecting);
        assert_eq!(entry.intersection_ratio, 0.2);

        assert!(crossings.sample("input", 0.3).is_none());
        // Leaving entirely is reported too
        assert!(!crossings.sample("input", 0.0).unwrap().is_intersecting);
    }
}
