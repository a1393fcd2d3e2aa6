use std::collections::HashSet;

use super::counter::CounterTarget;

/// How a target is painted once it has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    /// Adds the `visible` class to an element already carrying `fade-in`.
    FadeIn,
    /// Clears the inline hidden style set when the element was registered.
    LazyLoad,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub id: String,
    pub effect: RevealEffect,
    /// Statistics that start counting when this target is revealed.
    pub counters: Vec<CounterTarget>,
    has_fired: bool,
}

impl RevealTarget {
    pub fn new(id: impl Into<String>, effect: RevealEffect) -> Self {
        Self {
            id: id.into(),
            effect,
            counters: Vec::new(),
            has_fired: false,
        }
    }

    pub fn with_counters(mut self, counters: Vec<CounterTarget>) -> Self {
        self.counters = counters;
        self
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }
}

/// Targets waiting for their first intersection.
///
/// A target leaves the set the moment it fires and its id is remembered, so
/// neither a later intersection nor a second `observe` can fire it again.
#[derive(Debug, Default)]
pub struct RevealSet {
    observed: Vec<RevealTarget>,
    fired: HashSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the id is already observed or has fired.
    pub fn observe(&mut self, target: RevealTarget) -> bool {
        if self.fired.contains(&target.id) || self.is_observed(&target.id) {
            return false;
        }
        self.observed.push(target);
        true
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.iter().any(|target| target.id == id)
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Feeds one intersection event. Hands back the target, now marked as
    /// fired and no longer observed, the first time it intersects.
    pub fn on_intersection(&mut self, id: &str, is_intersecting: bool) -> Option<RevealTarget> {
        if !is_intersecting {
            return None;
        }
        let index = self.observed.iter().position(|target| target.id == id)?;
        let mut target = self.observed.remove(index);
        target.has_fired = true;
        self.fired.insert(target.id.clone());
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_then_unsubscribes() {
        let mut set = RevealSet::new();
        assert!(set.observe(RevealTarget::new("card-1", RevealEffect::FadeIn)));

        let fired = set.on_intersection("card-1", true).expect("first intersection fires");
        assert!(fired.has_fired());
        assert!(!set.is_observed("card-1"));
        assert!(set.has_fired("card-1"));

        for _ in 0..5 {
            assert!(set.on_intersection("card-1", true).is_none());
        }
    }

    #[test]
    fn leaving_the_viewport_is_ignored() {
        let mut set = RevealSet::new();
        set.observe(RevealTarget::new("card-1", RevealEffect::LazyLoad));
        assert!(set.on_intersection("card-1", false).is_none());
        assert!(set.is_observed("card-1"));
        assert!(set.on_intersection("card-1", true).is_some());
    }

    #[test]
    fn unknown_ids_do_nothing() {
        let mut set = RevealSet::new();
        set.observe(RevealTarget::new("a", RevealEffect::FadeIn));
        assert!(set.on_intersection("b", true).is_none());
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn fired_targets_cannot_be_observed_again() {
        let mut set = RevealSet::new();
        set.observe(RevealTarget::new("a", RevealEffect::FadeIn));
        assert!(!set.observe(RevealTarget::new("a", RevealEffect::FadeIn)));
        set.on_intersection("a", true);
        assert!(!set.observe(RevealTarget::new("a", RevealEffect::FadeIn)));
        assert_eq!(set.pending(), 0);
    }

    #[test]
    fn counters_travel_with_the_fired_target() {
        let counter = CounterTarget::new("stat-0", 5000, 2000, 16).unwrap();
        let mut set = RevealSet::new();
        set.observe(RevealTarget::new("stats", RevealEffect::FadeIn).with_counters(vec![counter.clone()]));
        let fired = set.on_intersection("stats", true).unwrap();
        assert_eq!(fired.counters, vec![counter]);
    }
}
