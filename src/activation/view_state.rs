use std::collections::BTreeMap;

use super::header::{ColorScheme, HeaderVisualState};
use super::reveal::RevealEffect;

/// Everything the controller wants on screen. Painters read this and never
/// decide presentation themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub header: HeaderVisualState,
    pub active_link: Option<String>,
    pub revealed: Vec<(String, RevealEffect)>,
    pub counters: BTreeMap<String, String>,
}

impl ViewState {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self {
            header: HeaderVisualState {
                elevated: false,
                color_scheme,
            },
            ..Self::default()
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.iter().any(|(revealed, _)| revealed == id)
    }

    pub fn reveal_effect(&self, id: &str) -> Option<RevealEffect> {
        self.revealed
            .iter()
            .find(|(revealed, _)| revealed == id)
            .map(|(_, effect)| *effect)
    }

    pub fn counter_display(&self, id: &str) -> Option<&str> {
        self.counters.get(id).map(String::as_str)
    }
}

/// What changed since the last paint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewDelta {
    pub header: bool,
    pub active_link: bool,
    pub revealed: Vec<String>,
    pub counters: Vec<String>,
}

impl ViewDelta {
    pub fn is_empty(&self) -> bool {
        !self.header && !self.active_link && self.revealed.is_empty() && self.counters.is_empty()
    }
}
