use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::collect_nodes;
use crate::activation::{HeaderVisualState, Painter, RevealEffect, ViewDelta, ViewState};
use crate::config::{HEADER_ID, NAV_LINK_SELECTOR};

/// Writes [`ViewState`] onto the live page. Elements that are missing are
/// simply not painted.
pub struct DomPainter {
    header: Option<HtmlElement>,
    nav_links: Vec<Element>,
    reveal_elements: HashMap<String, HtmlElement>,
    counter_elements: HashMap<String, Element>,
}

impl DomPainter {
    pub fn new(document: &Document) -> Self {
        let header = document
            .get_element_by_id(HEADER_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        Self {
            header,
            nav_links: collect_nodes(document.query_selector_all(NAV_LINK_SELECTOR)),
            reveal_elements: HashMap::new(),
            counter_elements: HashMap::new(),
        }
    }

    pub fn register_reveal(&mut self, id: &str, element: HtmlElement) {
        self.reveal_elements.insert(id.to_string(), element);
    }

    pub fn register_counter(&mut self, id: &str, element: Element) {
        self.counter_elements.insert(id.to_string(), element);
    }

    fn paint_header(&self, header: &HeaderVisualState) {
        let Some(element) = &self.header else {
            return;
        };
        let style = header.style();
        let css = element.style();
        let _ = css.set_property("background", style.background);
        let _ = css.set_property("backdrop-filter", style.backdrop_filter);
        let _ = css.set_property("box-shadow", style.box_shadow);
    }

    fn paint_active_link(&self, section_id: &str) {
        let target = format!("#{}", section_id);
        for link in &self.nav_links {
            let is_active = link.get_attribute("href").as_deref() == Some(target.as_str());
            let _ = link.class_list().toggle_with_force("active", is_active);
        }
    }

    fn paint_reveal(&self, id: &str, effect: RevealEffect) {
        let Some(element) = self.reveal_elements.get(id) else {
            return;
        };
        match effect {
            RevealEffect::FadeIn => {
                let _ = element.class_list().add_1("visible");
            }
            RevealEffect::LazyLoad => {
                let css = element.style();
                let _ = css.set_property("opacity", "1");
                let _ = css.set_property("transform", "translateY(0)");
            }
        }
    }
}

impl Painter for DomPainter {
    fn paint(&self, state: &ViewState, delta: &ViewDelta) {
        if delta.header {
            self.paint_header(&state.header);
        }

        if delta.active_link {
            if let Some(section_id) = &state.active_link {
                self.paint_active_link(section_id);
            }
        }

        for id in &delta.revealed {
            if let Some(effect) = state.reveal_effect(id) {
                self.paint_reveal(id, effect);
            }
        }

        for id in &delta.counters {
            if let (Some(element), Some(text)) = (self.counter_elements.get(id), state.counter_display(id)) {
                element.set_text_content(Some(text));
            }
        }
    }
}
