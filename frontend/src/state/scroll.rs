//! Edge-triggered "scrolled past the threshold" signal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use crate::host::{Detach, Viewport};

#[derive(Default)]
struct MonitorState {
    scrolled: bool,
    next_id: usize,
    observers: Vec<(usize, Callback<bool>)>,
    scroll_listener: Option<Detach>,
    pending_frame: Option<Detach>,
}

struct MonitorInner {
    viewport: Rc<dyn Viewport>,
    threshold: f64,
    state: RefCell<MonitorState>,
}

impl MonitorInner {
    fn is_past_threshold(&self) -> bool {
        self.viewport.scroll_offset() > self.threshold
    }

    /// Coalesces a burst of scroll events into one sample per frame.
    fn schedule_sample(self: &Rc<Self>) {
        if self.state.borrow().pending_frame.is_some() {
            return;
        }

        let weak = Rc::downgrade(self);
        let frame = self.viewport.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.sample();
            }
        }));
        self.state.borrow_mut().pending_frame = Some(frame);
    }

    fn sample(&self) {
        let finished = self.state.borrow_mut().pending_frame.take();
        drop(finished);

        let scrolled = self.is_past_threshold();
        let observers: Vec<_> = {
            let mut state = self.state.borrow_mut();
            if state.scrolled == scrolled {
                return;
            }
            state.scrolled = scrolled;
            state.observers.iter().map(|(_, observer)| observer.clone()).collect()
        };

        debug!("Scroll threshold crossed, scrolled = {}", scrolled);
        for observer in observers {
            observer.emit(scrolled);
        }
    }

    fn unobserve(&self, id: usize) {
        let released = {
            let mut state = self.state.borrow_mut();
            state.observers.retain(|(other, _)| *other != id);
            if state.observers.is_empty() {
                (state.scroll_listener.take(), state.pending_frame.take())
            } else {
                (None, None)
            }
        };
        if released.0.is_some() {
            debug!("Last scroll observer gone, detaching scroll listener");
        }
        drop(released);
    }
}

/// Tells observers whenever the page crosses the scroll threshold.
///
/// One scroll listener is shared by every observer. It is attached when the
/// first observer arrives and detached when the last one leaves.
#[derive(Clone)]
pub struct ScrollMonitor {
    inner: Rc<MonitorInner>,
}

impl ScrollMonitor {
    pub fn new(viewport: Rc<dyn Viewport>, threshold: f64) -> Self {
        Self {
            inner: Rc::new(MonitorInner {
                viewport,
                threshold,
                state: RefCell::new(MonitorState::default()),
            }),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.inner.state.borrow().scrolled
    }

    /// Registers `on_change`, called with the new value on each crossing only.
    pub fn observe(&self, on_change: Callback<bool>) -> ScrollObservation {
        let (id, first) = {
            let mut state = self.inner.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.observers.push((id, on_change));
            (id, state.scroll_listener.is_none())
        };

        if first {
            let scrolled = self.inner.is_past_threshold();
            let weak = Rc::downgrade(&self.inner);
            let listener = self.inner.viewport.on_scroll(Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.schedule_sample();
                }
            }));
            let mut state = self.inner.state.borrow_mut();
            state.scrolled = scrolled;
            state.scroll_listener = Some(listener);
        }

        ScrollObservation { monitor: Rc::downgrade(&self.inner), id }
    }
}

impl PartialEq for ScrollMonitor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Keeps an observer registered; dropping it unregisters.
#[must_use = "dropping a ScrollObservation unregisters the observer"]
pub struct ScrollObservation {
    monitor: Weak<MonitorInner>,
    id: usize,
}

impl ScrollObservation {
    pub fn is_scrolled(&self) -> bool {
        self.monitor
            .upgrade()
            .map(|inner| inner.state.borrow().scrolled)
            .unwrap_or(false)
    }
}

impl Drop for ScrollObservation {
    fn drop(&mut self) {
        if let Some(inner) = self.monitor.upgrade() {
            inner.unobserve(self.id);
        }
    }
}
