use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::PageController;
use crate::config::ObserverOptions;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` that forwards entries to the controller by the
/// id stored in `id_attr`, and unobserves targets once they have fired.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub fn new(
        controller: Rc<RefCell<PageController>>,
        id_attr: &'static str,
        options: ObserverOptions,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target.get_attribute(id_attr) else {
                    continue;
                };

                let fired = controller
                    .borrow_mut()
                    .on_intersection(&id, entry.is_intersecting());
                if fired {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
