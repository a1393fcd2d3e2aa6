use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MediaQueryList, Window};

use super::{collect_nodes, nav_link_selector};
use crate::activation::{ColorScheme, FrameScheduler, Ticker, TrackedSection, Viewport};
use crate::config::{DARK_SCHEME_QUERY, SECTION_SELECTOR};

pub struct BrowserViewport {
    window: Window,
    document: Document,
    dark_scheme: Option<MediaQueryList>,
}

impl BrowserViewport {
    pub fn new(window: Window, document: Document) -> Self {
        let dark_scheme = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
        Self {
            window,
            document,
            dark_scheme,
        }
    }

    fn has_nav_link(&self, section_id: &str) -> bool {
        !section_id.is_empty()
            && self
                .document
                .query_selector(&nav_link_selector(section_id))
                .ok()
                .flatten()
                .is_some()
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        let offset = self.window.scroll_y().ok().or_else(|| {
            self.document
                .document_element()
                .map(|root| f64::from(root.scroll_top()))
        });
        offset.unwrap_or(0.0).max(0.0)
    }

    fn color_scheme(&self) -> ColorScheme {
        let prefers_dark = self
            .dark_scheme
            .as_ref()
            .map(|query| query.matches())
            .unwrap_or(false);
        ColorScheme::from_prefers_dark(prefers_dark)
    }

    fn tracked_sections(&self) -> Vec<TrackedSection> {
        collect_nodes::<HtmlElement>(self.document.query_selector_all(SECTION_SELECTOR))
            .into_iter()
            .filter(|section| self.has_nav_link(&section.id()))
            .map(|section| {
                TrackedSection::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }
}

/// `requestAnimationFrame` backed frame scheduler.
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let slot = Rc::new(RefCell::new(Some(callback)));
        let pending = slot.clone();
        let on_frame = Closure::once_into_js(move |_timestamp: f64| {
            let callback = pending.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        });

        if let Err(err) = self.window.request_animation_frame(on_frame.unchecked_ref()) {
            // Never run the callback inline, the caller is still borrowed.
            warn!("requestAnimationFrame failed, falling back to a timeout: {:?}", err);
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                Timeout::new(16, callback).forget();
            }
        }
    }
}

/// Keeps a counter's interval alive. Dropping it clears the interval on the
/// next task so a timer can finish itself from inside its own tick.
pub struct CounterTimer(Option<Interval>);

impl Drop for CounterTimer {
    fn drop(&mut self) {
        if let Some(interval) = self.0.take() {
            Timeout::new(0, move || drop(interval)).forget();
        }
    }
}

pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = CounterTimer;

    fn start(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> CounterTimer {
        CounterTimer(Some(Interval::new(period_ms, move || tick())))
    }
}
