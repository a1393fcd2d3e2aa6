use log::Level;

pub const HEADER_ID: &str = "header";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const LOADER_SELECTOR: &str = ".loader";

pub const FADE_IN_SELECTOR: &str =
    ".hero__stats, .alert-card, .resource-card, .event-card, .involvement-card";
pub const LAZY_LOAD_SELECTOR: &str = ".card, .alert-card, .resource-card, .event-card";
pub const STATS_CLASS: &str = "hero__stats";
pub const COUNTER_SELECTOR: &str = ".stat__number";
pub const COUNTER_TARGET_ATTR: &str = "data-target";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Visibility options handed to an `IntersectionObserver`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Tunables for the view-activation controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationConfig {
    /// Header becomes elevated strictly above this offset.
    pub header_threshold: f64,
    /// Added to the scroll offset before testing section membership.
    pub nav_offset: f64,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub fade_in: ObserverOptions,
    pub lazy_load: ObserverOptions,
    /// How long the loader overlay fades before it is hidden.
    pub loader_fade_ms: u32,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            nav_offset: 100.0,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            fade_in: ObserverOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
            },
            lazy_load: ObserverOptions {
                threshold: 0.1,
                root_margin: "0px",
            },
            loader_fade_ms: 300,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
