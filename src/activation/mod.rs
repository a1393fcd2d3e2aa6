//! Viewport-driven UI state: header elevation, one-shot reveals with their
//! counters, and the active nav link.
//!
//! Everything in here is independent of the browser. The host supplies the
//! environment through the traits below and paints [`ViewState`] however it
//! likes; the `dom` module is the web implementation.

pub mod controller;
pub mod counter;
pub mod header;
pub mod reveal;
pub mod sections;
pub mod view_state;

pub use controller::{CounterHandle, ViewportActivationController};
pub use counter::CounterTarget;
pub use header::{ColorScheme, HeaderStyle, HeaderVisualState};
pub use reveal::{RevealEffect, RevealTarget};
pub use sections::TrackedSection;
pub use view_state::{ViewDelta, ViewState};

/// Read-only access to scroll position and layout.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    fn color_scheme(&self) -> ColorScheme;
    /// Sections that have a nav link, in document order.
    fn tracked_sections(&self) -> Vec<TrackedSection>;
}

/// Runs a callback once on the next display frame.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Fixed-interval timer. The timer stops when its handle is dropped.
pub trait Ticker {
    type Handle: 'static;

    fn start(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// The single render step.
pub trait Painter {
    fn paint(&self, state: &ViewState, delta: &ViewDelta);
}
