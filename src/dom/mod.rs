//! Browser side of the activation controller: wires `web-sys` listeners and
//! observers to it and paints its state back onto the page.

mod environment;
mod observer;
mod painter;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, MediaQueryList, MediaQueryListEvent, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

pub use environment::{AnimationFrames, BrowserViewport, CounterTimer, IntervalTicker};
pub use observer::RevealObserver;
pub use painter::DomPainter;

use crate::activation::sections::anchor_scroll_top;
use crate::activation::{
    ColorScheme, CounterTarget, RevealEffect, RevealTarget, ViewportActivationController,
};
use crate::config::{
    ActivationConfig, COUNTER_SELECTOR, COUNTER_TARGET_ATTR, DARK_SCHEME_QUERY, FADE_IN_SELECTOR,
    HEADER_ID, LAZY_LOAD_SELECTOR, LOADER_SELECTOR, STATS_CLASS,
};
use crate::error::ActivationError;

pub type PageController =
    ViewportActivationController<BrowserViewport, AnimationFrames, IntervalTicker, DomPainter>;

const FADE_IN_ID_ATTR: &str = "data-reveal-id";
const LAZY_LOAD_ID_ATTR: &str = "data-lazy-id";

type ListenerClosure = Closure<dyn FnMut()>;
type SchemeClosure = Closure<dyn FnMut(MediaQueryListEvent)>;

pub(crate) fn nav_link_selector(section_id: &str) -> String {
    format!(".nav__link[href=\"#{}\"]", section_id)
}

pub(crate) fn collect_nodes<T: JsCast>(nodes: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Everything [`mount`] attached to the page. Dropping it detaches the
/// listeners, disconnects the observers and stops running counters.
pub struct MountedPage {
    window: Window,
    _controller: Rc<RefCell<PageController>>,
    on_scroll: ListenerClosure,
    dark_scheme: Option<(MediaQueryList, SchemeClosure)>,
    on_load: Option<ListenerClosure>,
    _observers: Vec<RevealObserver>,
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some((query, on_change)) = &self.dark_scheme {
            let _ = query.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        }
        if let Some(on_load) = &self.on_load {
            let _ = self
                .window
                .remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        }
        info!("Viewport activation unmounted");
    }
}

/// Attaches the activation controller to the rendered page.
pub fn mount(config: ActivationConfig) -> Result<MountedPage, ActivationError> {
    let window = web_sys::window().ok_or_else(|| ActivationError::MissingElement("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ActivationError::MissingElement("document".to_string()))?;

    let mut painter = DomPainter::new(&document);
    let fade_targets = collect_fade_in(&document, &config, &mut painter);
    let lazy_targets = collect_lazy_load(&document, &mut painter);

    let controller = PageController::new_shared(
        config,
        BrowserViewport::new(window.clone(), document.clone()),
        AnimationFrames::new(window.clone()),
        IntervalTicker,
        painter,
    );

    let mut observers = Vec::new();
    for (id_attr, options, targets) in [
        (FADE_IN_ID_ATTR, config.fade_in, fade_targets),
        (LAZY_LOAD_ID_ATTR, config.lazy_load, lazy_targets),
    ] {
        match RevealObserver::new(controller.clone(), id_attr, options) {
            Ok(observer) => {
                for (target, element) in targets {
                    if controller.borrow_mut().observe_for_reveal(target) {
                        observer.observe(&element);
                    }
                }
                observers.push(observer);
            }
            Err(err) => warn!("IntersectionObserver unavailable, skipping reveals: {:?}", err),
        }
    }

    let on_scroll = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move || controller.borrow_mut().on_scroll()) as Box<dyn FnMut()>)
    };
    if let Err(err) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
        warn!("Could not listen for scroll events: {:?}", err);
    }

    let dark_scheme = listen_for_color_scheme(&window, &controller);
    let on_load = when_loaded(&window, &document, config.loader_fade_ms);

    controller.borrow_mut().refresh();
    info!(
        "Viewport activation mounted with {} reveal targets",
        controller.borrow().pending_reveals()
    );

    Ok(MountedPage {
        window,
        _controller: controller,
        on_scroll,
        dark_scheme,
        on_load,
        _observers: observers,
    })
}

fn collect_fade_in(
    document: &Document,
    config: &ActivationConfig,
    painter: &mut DomPainter,
) -> Vec<(RevealTarget, Element)> {
    let mut next_counter = 0;
    collect_nodes::<HtmlElement>(document.query_selector_all(FADE_IN_SELECTOR))
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let id = format!("reveal-{}", index);
            let _ = element.class_list().add_1("fade-in");
            let _ = element.set_attribute(FADE_IN_ID_ATTR, &id);

            let mut target = RevealTarget::new(&id, RevealEffect::FadeIn);
            if element.class_list().contains(STATS_CLASS) {
                target = target.with_counters(collect_counters(&element, config, painter, &mut next_counter));
            }

            painter.register_reveal(&id, element.clone());
            (target, element.into())
        })
        .collect()
}

fn collect_counters(
    stats: &HtmlElement,
    config: &ActivationConfig,
    painter: &mut DomPainter,
    next_counter: &mut usize,
) -> Vec<CounterTarget> {
    let mut elements = Vec::new();
    for element in collect_nodes::<Element>(stats.query_selector_all(COUNTER_SELECTOR)) {
        let id = format!("counter-{}", *next_counter);
        *next_counter += 1;
        let raw = element.get_attribute(COUNTER_TARGET_ATTR).unwrap_or_default();
        elements.push((id, raw, element));
    }

    let counters = CounterTarget::parse_all(
        elements.iter().map(|(id, raw, _)| (id.as_str(), raw.as_str())),
        config.counter_duration_ms,
        config.counter_tick_ms,
    );
    for (id, _, element) in elements {
        if counters.iter().any(|counter| counter.id() == id) {
            painter.register_counter(&id, element);
        }
    }
    counters
}

fn collect_lazy_load(document: &Document, painter: &mut DomPainter) -> Vec<(RevealTarget, Element)> {
    collect_nodes::<HtmlElement>(document.query_selector_all(LAZY_LOAD_SELECTOR))
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let id = format!("lazy-{}", index);
            let css = element.style();
            let _ = css.set_property("opacity", "0");
            let _ = css.set_property("transform", "translateY(20px)");
            let _ = css.set_property("transition", "all 0.6s ease-out");
            let _ = element.set_attribute(LAZY_LOAD_ID_ATTR, &id);

            painter.register_reveal(&id, element.clone());
            (RevealTarget::new(&id, RevealEffect::LazyLoad), element.into())
        })
        .collect()
}

fn listen_for_color_scheme(
    window: &Window,
    controller: &Rc<RefCell<PageController>>,
) -> Option<(MediaQueryList, SchemeClosure)> {
    let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
    let on_change = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            controller
                .borrow_mut()
                .on_color_scheme_change(ColorScheme::from_prefers_dark(event.matches()));
        }) as Box<dyn FnMut(MediaQueryListEvent)>)
    };
    query
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .ok()?;
    Some((query, on_change))
}

/// Runs the page-loaded transition now if the document is complete, otherwise
/// on the window `load` event.
fn when_loaded(window: &Window, document: &Document, fade_ms: u32) -> Option<ListenerClosure> {
    if document.ready_state() == "complete" {
        finish_loading(document, fade_ms);
        return None;
    }

    let on_load = {
        let document = document.clone();
        Closure::wrap(Box::new(move || finish_loading(&document, fade_ms)) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .ok()?;
    Some(on_load)
}

fn finish_loading(document: &Document, fade_ms: u32) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }

    let Some(loader) = document
        .query_selector(LOADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = loader.style().set_property("opacity", "0");
    Timeout::new(fade_ms, move || {
        let _ = loader.style().set_property("display", "none");
    })
    .forget();
}

/// Smoothly scrolls so the section behind `href` sits just below the header.
pub fn scroll_to_anchor(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(section) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(section.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_selector_matches_hash_href() {
        assert_eq!(nav_link_selector("alerts"), ".nav__link[href=\"#alerts\"]");
    }
}
