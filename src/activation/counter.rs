use log::warn;

use crate::config::COUNTER_TARGET_ATTR;
use crate::error::ActivationError;

/// Formats a statistic the way the hero section shows it: thousands get a
/// `K+` suffix, smaller targets a bare `+`.
pub fn format_count(current: f64, target_value: u32) -> String {
    let current = current.max(0.0);
    if target_value >= 1000 {
        format!("{}K+", (current / 1000.0).floor() as u64)
    } else {
        format!("{}+", current.floor() as u64)
    }
}

/// An animated statistic counting from zero up to `target_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    id: String,
    target_value: u32,
    current_value: f64,
    increment: f64,
}

impl CounterTarget {
    pub fn new(
        id: impl Into<String>,
        target_value: u32,
        duration_ms: u32,
        tick_ms: u32,
    ) -> Result<Self, ActivationError> {
        if target_value == 0 {
            return Err(ActivationError::MalformedAttribute {
                attribute: COUNTER_TARGET_ATTR.to_string(),
                value: target_value.to_string(),
            });
        }

        let steps = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Ok(Self {
            id: id.into(),
            target_value,
            current_value: 0.0,
            increment: f64::from(target_value) / steps,
        })
    }

    /// Builds a counter from the raw `data-target` attribute text.
    pub fn parse(
        id: impl Into<String>,
        raw: &str,
        duration_ms: u32,
        tick_ms: u32,
    ) -> Result<Self, ActivationError> {
        let target_value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ActivationError::MalformedAttribute {
                attribute: COUNTER_TARGET_ATTR.to_string(),
                value: raw.to_string(),
            })?;
        Self::new(id, target_value, duration_ms, tick_ms)
    }

    /// Parses `(id, raw)` pairs in order. Malformed entries are logged and
    /// dropped; the rest are kept.
    pub fn parse_all<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        duration_ms: u32,
        tick_ms: u32,
    ) -> Vec<Self> {
        entries
            .into_iter()
            .filter_map(|(id, raw)| match Self::parse(id, raw, duration_ms, tick_ms) {
                Ok(counter) => Some(counter),
                Err(err) => {
                    warn!("Skipping counter {}: {}", id, err);
                    None
                }
            })
            .collect()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target_value(&self) -> u32 {
        self.target_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn is_finished(&self) -> bool {
        self.current_value >= f64::from(self.target_value)
    }

    /// Moves one tick forward. Returns `true` once the target is reached;
    /// further calls leave the value frozen.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return true;
        }
        let target = f64::from(self.target_value);
        self.current_value = (self.current_value + self.increment).min(target);
        self.is_finished()
    }

    pub fn display(&self) -> String {
        format_count(self.current_value, self.target_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CounterTarget) -> (usize, Vec<String>) {
        let mut shown = Vec::new();
        let mut ticks = 0;
        loop {
            ticks += 1;
            let done = counter.advance();
            shown.push(counter.display());
            if done {
                return (ticks, shown);
            }
            assert!(ticks < 10_000, "counter never finished");
        }
    }

    fn leading_number(display: &str) -> u64 {
        display
            .trim_end_matches('+')
            .trim_end_matches('K')
            .parse()
            .unwrap()
    }

    #[test]
    fn thousands_count_up_to_k_suffix() {
        let mut counter = CounterTarget::new("visitors", 5000, 2000, 16).unwrap();
        let (ticks, shown) = run_to_end(&mut counter);

        // 2000ms / 16ms = 125 ticks, allow one more for float drift
        assert!((125..=126).contains(&ticks), "took {ticks} ticks");
        assert_eq!(shown.last().map(String::as_str), Some("5K+"));
        assert!(shown.iter().all(|s| s.ends_with("K+")));
        let numbers: Vec<u64> = shown.iter().map(|s| leading_number(s)).collect();
        assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn small_targets_have_no_k_suffix() {
        let mut counter = CounterTarget::new("workshops", 50, 2000, 16).unwrap();
        let (ticks, shown) = run_to_end(&mut counter);
        assert!(ticks <= 126, "took {ticks} ticks");
        assert_eq!(shown.last().map(String::as_str), Some("50+"));
        assert!(!shown.iter().any(|s| s.contains('K')));
    }

    #[test]
    fn value_never_exceeds_target() {
        let mut counter = CounterTarget::new("x", 7, 100, 16).unwrap();
        let mut previous = 0.0;
        for _ in 0..50 {
            counter.advance();
            assert!(counter.current_value() >= previous);
            assert!(counter.current_value() <= 7.0);
            previous = counter.current_value();
        }
        assert_eq!(counter.display(), "7+");
    }

    #[test]
    fn duration_shorter_than_a_tick_finishes_in_one_step() {
        let mut counter = CounterTarget::new("fast", 1200, 5, 16).unwrap();
        assert!(counter.advance());
        assert_eq!(counter.display(), "1K+");
    }

    #[test]
    fn parse_accepts_padded_integers() {
        let counter = CounterTarget::parse("c", " 250 ", 2000, 16).unwrap();
        assert_eq!(counter.target_value(), 250);
        assert_eq!(counter.id(), "c");
    }

    #[test]
    fn parse_rejects_malformed_targets() {
        for raw in ["", "abc", "12.5", "-4", "0"] {
            let err = CounterTarget::parse("c", raw, 2000, 16).unwrap_err();
            assert!(
                matches!(err, ActivationError::MalformedAttribute { ref attribute, .. } if attribute == "data-target"),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn parse_all_keeps_well_formed_siblings() {
        let counters = CounterTarget::parse_all(
            [("counter-0", "5000"), ("counter-1", "abc"), ("counter-2", "50")],
            2000,
            16,
        );
        let ids: Vec<&str> = counters.iter().map(CounterTarget::id).collect();
        assert_eq!(ids, vec!["counter-0", "counter-2"]);
        assert_eq!(counters[0].target_value(), 5000);
        assert_eq!(counters[1].target_value(), 50);
    }

    #[test]
    fn format_rounds_down() {
        assert_eq!(format_count(1999.0, 5000), "1K+");
        assert_eq!(format_count(999.9, 999), "999+");
        assert_eq!(format_count(0.0, 1000), "0K+");
    }
}
