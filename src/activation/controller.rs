use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use log::{debug, info};

use super::counter::CounterTarget;
use super::header::{ColorScheme, HeaderVisualState};
use super::reveal::{RevealSet, RevealTarget};
use super::sections::{active_section, TrackedSection};
use super::view_state::{ViewDelta, ViewState};
use super::{FrameScheduler, Painter, Ticker, Viewport};
use crate::config::ActivationConfig;

/// Lets a caller stop a running counter, e.g. when its element goes away.
///
/// Cancelling freezes the last painted value; the timer is released on its
/// next tick.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    id: String,
    cancelled: Rc<Cell<bool>>,
}

impl CounterHandle {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct RunningCounter<H> {
    counter: CounterTarget,
    handle: CounterHandle,
    _timer: H,
}

pub struct ViewportActivationController<V, F, T: Ticker, P> {
    this: Weak<RefCell<Self>>,
    config: ActivationConfig,
    viewport: V,
    frames: F,
    ticker: T,
    painter: P,
    frame_pending: bool,
    last_scroll_top: f64,
    state: ViewState,
    delta: ViewDelta,
    reveals: RevealSet,
    animations: HashMap<String, RunningCounter<T::Handle>>,
    started_counters: HashSet<String>,
}

impl<V, F, T, P> ViewportActivationController<V, F, T, P>
where
    V: Viewport + 'static,
    F: FrameScheduler + 'static,
    T: Ticker + 'static,
    P: Painter + 'static,
{
    /// Builds a controller behind `Rc<RefCell<..>>`; frame and timer
    /// callbacks reach it through a weak reference to itself.
    pub fn new_shared(config: ActivationConfig, viewport: V, frames: F, ticker: T, painter: P) -> Rc<RefCell<Self>> {
        let color_scheme = viewport.color_scheme();
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                this: this.clone(),
                config,
                viewport,
                frames,
                ticker,
                painter,
                frame_pending: false,
                last_scroll_top: 0.0,
                state: ViewState::new(color_scheme),
                // First paint always writes the header.
                delta: ViewDelta {
                    header: true,
                    ..ViewDelta::default()
                },
                reveals: RevealSet::new(),
                animations: HashMap::new(),
                started_counters: HashSet::new(),
            })
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn pending_reveals(&self) -> usize {
        self.reveals.pending()
    }

    pub fn is_animating(&self, counter_id: &str) -> bool {
        self.animations.contains_key(counter_id)
    }

    pub fn counter_handle(&self, counter_id: &str) -> Option<CounterHandle> {
        self.animations.get(counter_id).map(|running| running.handle.clone())
    }

    /// Scroll listener entry point. Coalesces to one recomputation per frame.
    pub fn on_scroll(&mut self) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;

        let this = self.this.clone();
        self.frames.request_frame(Box::new(move || {
            if let Some(controller) = this.upgrade() {
                controller.borrow_mut().on_frame();
            }
        }));
    }

    pub fn on_frame(&mut self) {
        self.frame_pending = false;
        self.refresh();
    }

    /// Reads the viewport and repaints whatever changed.
    pub fn refresh(&mut self) {
        let offset = self.viewport.scroll_offset();
        let color_scheme = self.viewport.color_scheme();
        let sections = self.viewport.tracked_sections();
        self.apply_scroll(offset, color_scheme, &sections);
        self.render();
    }

    fn apply_scroll(&mut self, offset: f64, color_scheme: ColorScheme, sections: &[TrackedSection]) {
        let header = HeaderVisualState::from_scroll(offset, self.config.header_threshold, color_scheme);
        if header != self.state.header {
            self.state.header = header;
            self.delta.header = true;
        }

        // No match keeps whatever link was active before.
        if let Some(id) = active_section(sections, offset, self.config.nav_offset) {
            if self.state.active_link.as_deref() != Some(id) {
                debug!("Active section is now #{}", id);
                self.state.active_link = Some(id.to_string());
                self.delta.active_link = true;
            }
        }

        self.last_scroll_top = offset;
    }

    pub fn on_color_scheme_change(&mut self, color_scheme: ColorScheme) {
        let header = self.state.header.with_color_scheme(color_scheme);
        if header != self.state.header {
            info!("Color scheme changed to {:?}", color_scheme);
            self.state.header = header;
            self.delta.header = true;
        }
        self.render();
    }

    /// Starts watching a target. Returns `false` for ids already observed or fired.
    pub fn observe_for_reveal(&mut self, target: RevealTarget) -> bool {
        self.reveals.observe(target)
    }

    /// Intersection callback entry point. Returns `true` when the target fired
    /// and the host should stop observing it.
    pub fn on_intersection(&mut self, target_id: &str, is_intersecting: bool) -> bool {
        let Some(target) = self.reveals.on_intersection(target_id, is_intersecting) else {
            return false;
        };

        debug!("Revealing {} ({:?})", target.id, target.effect);
        self.state.revealed.push((target.id.clone(), target.effect));
        self.delta.revealed.push(target.id);
        for counter in target.counters {
            self.run_counter_animation(counter);
        }
        self.render();
        true
    }

    /// Starts ticking `counter` towards its target. A counter id only ever
    /// starts once, and only from zero; otherwise returns `None`.
    pub fn run_counter_animation(&mut self, counter: CounterTarget) -> Option<CounterHandle> {
        let id = counter.id().to_string();
        if counter.current_value() != 0.0 {
            debug!("Counter {} is already at {}, not starting", id, counter.current_value());
            return None;
        }
        if !self.started_counters.insert(id.clone()) {
            debug!("Counter {} already started", id);
            return None;
        }

        let handle = CounterHandle::new(&id);
        let this = self.this.clone();
        let tick_id = id.clone();
        let timer = self.ticker.start(
            self.config.counter_tick_ms,
            Box::new(move || {
                if let Some(controller) = this.upgrade() {
                    controller.borrow_mut().advance_counter(&tick_id);
                }
            }),
        );

        self.animations.insert(
            id,
            RunningCounter {
                counter,
                handle: handle.clone(),
                _timer: timer,
            },
        );
        Some(handle)
    }

    fn advance_counter(&mut self, counter_id: &str) {
        let Some(running) = self.animations.get_mut(counter_id) else {
            return;
        };

        if running.handle.is_cancelled() {
            debug!("Counter {} cancelled", counter_id);
            self.animations.remove(counter_id);
            return;
        }

        let finished = running.counter.advance();
        let display = running.counter.display();
        self.state.counters.insert(counter_id.to_string(), display);
        self.delta.counters.push(counter_id.to_string());

        if finished {
            // Dropping the entry drops the timer handle, which stops the ticks.
            self.animations.remove(counter_id);
        }
        self.render();
    }

    fn render(&mut self) {
        if self.delta.is_empty() {
            return;
        }
        let delta = std::mem::take(&mut self.delta);
        self.painter.paint(&self.state, &delta);
    }
}
