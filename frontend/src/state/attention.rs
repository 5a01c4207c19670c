//! The profile sidebar's collapsed bar, which nudges for attention.
//!
//! After `delay_ms` the bar starts to vibrate and keeps pulsing every
//! `vibrate_interval_ms` while collapsed. The first expansion stops the
//! nudging for good; collapsing again does not re-arm it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::Callback;

use crate::config::{ATTENTION_DELAY_MS, VIBRATE_INTERVAL_MS};
use crate::host::{Detach, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttentionTiming {
    pub delay_ms: u32,
    pub vibrate_interval_ms: u32,
}

impl Default for AttentionTiming {
    fn default() -> Self {
        Self {
            delay_ms: ATTENTION_DELAY_MS,
            vibrate_interval_ms: VIBRATE_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Collapsed,
    Expanded,
}

/// What the view needs to draw the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttentionSnapshot {
    pub state: WidgetState,
    /// Set once the delay has passed, cleared for good by the first expansion.
    pub signal: bool,
    /// Number of pulses so far; the view restarts its shake animation on each.
    pub pulse: u32,
}

impl AttentionSnapshot {
    pub fn is_expanded(&self) -> bool {
        self.state == WidgetState::Expanded
    }

    pub fn is_vibrating(&self) -> bool {
        self.signal && self.state == WidgetState::Collapsed
    }
}

struct WidgetCore {
    snapshot: AttentionSnapshot,
    suppressed: bool,
    timer: Option<Detach>,
}

struct WidgetInner {
    scheduler: Rc<dyn Scheduler>,
    timing: AttentionTiming,
    on_change: Callback<AttentionSnapshot>,
    core: RefCell<WidgetCore>,
}

impl WidgetInner {
    fn arm(self: &Rc<Self>) {
        if self.core.borrow().suppressed {
            return;
        }

        let weak = Rc::downgrade(self);
        let interval = self.scheduler.every(
            self.timing.vibrate_interval_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pulse();
                }
            }),
        );

        let (delay, snapshot) = {
            let mut core = self.core.borrow_mut();
            core.snapshot.signal = true;
            core.snapshot.pulse += 1;
            (core.timer.replace(interval), core.snapshot)
        };
        drop(delay);

        debug!("Attention signal armed");
        self.on_change.emit(snapshot);
    }

    fn pulse(&self) {
        let snapshot = {
            let mut core = self.core.borrow_mut();
            if core.suppressed || core.snapshot.state != WidgetState::Collapsed {
                return;
            }
            core.snapshot.pulse += 1;
            core.snapshot
        };
        self.on_change.emit(snapshot);
    }
}

/// Timers and state of one mounted sidebar. Dropping it cancels every timer.
pub struct AttentionWidget {
    inner: Rc<WidgetInner>,
}

impl AttentionWidget {
    pub fn mount(
        scheduler: Rc<dyn Scheduler>,
        timing: AttentionTiming,
        on_change: Callback<AttentionSnapshot>,
    ) -> Self {
        let inner = Rc::new(WidgetInner {
            scheduler,
            timing,
            on_change,
            core: RefCell::new(WidgetCore {
                snapshot: AttentionSnapshot::default(),
                suppressed: false,
                timer: None,
            }),
        });

        let weak = Rc::downgrade(&inner);
        let delay = inner.scheduler.after(
            timing.delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.arm();
                }
            }),
        );
        inner.core.borrow_mut().timer = Some(delay);

        Self { inner }
    }

    pub fn snapshot(&self) -> AttentionSnapshot {
        self.inner.core.borrow().snapshot
    }

    pub fn expand(&self) {
        let (timer, snapshot) = {
            let mut core = self.inner.core.borrow_mut();
            if core.snapshot.state == WidgetState::Expanded {
                return;
            }
            core.snapshot.state = WidgetState::Expanded;
            core.snapshot.signal = false;
            core.suppressed = true;
            (core.timer.take(), core.snapshot)
        };
        drop(timer);

        debug!("Profile sidebar expanded");
        self.inner.on_change.emit(snapshot);
    }

    pub fn collapse(&self) {
        let snapshot = {
            let mut core = self.inner.core.borrow_mut();
            if core.snapshot.state == WidgetState::Collapsed {
                return;
            }
            core.snapshot.state = WidgetState::Collapsed;
            core.snapshot
        };

        debug!("Profile sidebar collapsed");
        self.inner.on_change.emit(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{FakeScheduler, FakeViewport};
    use crate::host::{Rect, Region, Viewport};
    use crate::state::outside::{GuardConfig, OutsideGuard};

    const FAST: AttentionTiming = AttentionTiming { delay_ms: 100, vibrate_interval_ms: 200 };

    fn mount(scheduler: &Rc<FakeScheduler>) -> (AttentionWidget, Rc<RefCell<Vec<AttentionSnapshot>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = seen.clone();
            Callback::from(move |snapshot| seen.borrow_mut().push(snapshot))
        };
        let widget = AttentionWidget::mount(scheduler.clone(), FAST, on_change);
        (widget, seen)
    }

    #[test]
    fn signal_arms_after_the_delay() {
        let scheduler = FakeScheduler::new();
        let (widget, seen) = mount(&scheduler);

        scheduler.advance(99);
        assert!(!widget.snapshot().signal);
        assert!(seen.borrow().is_empty());

        scheduler.advance(1);
        assert!(widget.snapshot().signal);
        assert!(widget.snapshot().is_vibrating());
        assert_eq!(widget.snapshot().pulse, 1);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn pulses_repeat_while_collapsed() {
        let scheduler = FakeScheduler::new();
        let (widget, _) = mount(&scheduler);

        scheduler.advance(100);
        scheduler.advance(200);
        assert_eq!(widget.snapshot().pulse, 2);
        scheduler.advance(400);
        assert_eq!(widget.snapshot().pulse, 4);
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn expanding_stops_all_scheduling_for_good() {
        let scheduler = FakeScheduler::new();
        let (widget, seen) = mount(&scheduler);
        scheduler.advance(100);

        widget.expand();
        assert!(widget.snapshot().is_expanded());
        assert!(!widget.snapshot().signal);
        assert_eq!(scheduler.active_timers(), 0);

        let pulses = widget.snapshot().pulse;
        scheduler.advance(1_000);
        widget.collapse();
        scheduler.advance(1_000);

        assert_eq!(widget.snapshot().state, WidgetState::Collapsed);
        assert_eq!(widget.snapshot().pulse, pulses);
        assert!(!widget.snapshot().is_vibrating());
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn expanding_before_the_delay_never_signals() {
        let scheduler = FakeScheduler::new();
        let (widget, _) = mount(&scheduler);

        scheduler.advance(50);
        widget.expand();
        widget.collapse();
        scheduler.advance(5_000);

        assert!(!widget.snapshot().signal);
        assert_eq!(widget.snapshot().pulse, 0);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn repeated_expand_and_collapse_are_idempotent() {
        let scheduler = FakeScheduler::new();
        let (widget, seen) = mount(&scheduler);

        widget.collapse();
        widget.expand();
        widget.expand();
        widget.collapse();
        widget.collapse();

        let states: Vec<_> = seen.borrow().iter().map(|snapshot| snapshot.state).collect();
        assert_eq!(states, vec![WidgetState::Expanded, WidgetState::Collapsed]);
    }

    #[test]
    fn unmounting_cancels_pending_timers() {
        let scheduler = FakeScheduler::new();
        let (widget, _) = mount(&scheduler);
        assert_eq!(scheduler.active_timers(), 1);
        drop(widget);
        assert_eq!(scheduler.active_timers(), 0);

        let (widget, _) = mount(&scheduler);
        scheduler.advance(150);
        assert_eq!(scheduler.active_timers(), 1);
        drop(widget);
        assert_eq!(scheduler.active_timers(), 0);
    }

    /// Wires a guard to the widget the way the profile sidebar does.
    struct SidebarHarness {
        viewport: Rc<FakeViewport>,
        widget: Rc<AttentionWidget>,
        guard: Option<OutsideGuard>,
    }

    impl SidebarHarness {
        fn new(scheduler: &Rc<FakeScheduler>) -> Self {
            let (widget, _) = mount(scheduler);
            let mut harness = Self {
                viewport: FakeViewport::new(1280.0),
                widget: Rc::new(widget),
                guard: None,
            };
            harness.sync_guard();
            harness
        }

        // Mirrors the effect that re-attaches the guard on every expand or collapse.
        fn sync_guard(&mut self) {
            self.guard.take();
            let widget = self.widget.clone();
            let viewport: Rc<dyn Viewport> = self.viewport.clone();
            let panel: Rc<dyn Region> = Rc::new(Rect::new(1004.0, 80.0, 256.0, 360.0));
            self.guard = Some(OutsideGuard::attach(&viewport, GuardConfig {
                is_active: self.widget.snapshot().is_expanded(),
                regions: vec![panel],
                on_outside: Callback::from(move |_: ()| widget.collapse()),
                close_on_resize_above: None,
            }));
        }

        fn expand(&mut self) {
            self.widget.expand();
            self.sync_guard();
        }

        fn press(&mut self, x: f64, y: f64) {
            self.viewport.pointer_down(x, y);
            self.sync_guard();
        }
    }

    #[test]
    fn pressing_outside_the_open_panel_collapses_it() {
        let scheduler = FakeScheduler::new();
        let mut harness = SidebarHarness::new(&scheduler);
        assert_eq!(harness.viewport.listener_count(), 0);

        harness.expand();
        assert_eq!(harness.viewport.listener_count(), 1);

        harness.press(1100.0, 200.0);
        assert!(harness.widget.snapshot().is_expanded());

        harness.press(300.0, 600.0);
        assert_eq!(harness.widget.snapshot().state, WidgetState::Collapsed);
        assert_eq!(harness.viewport.listener_count(), 0);
    }

    #[test]
    fn presses_while_collapsed_change_nothing() {
        let scheduler = FakeScheduler::new();
        let mut harness = SidebarHarness::new(&scheduler);
        scheduler.advance(100);

        harness.press(300.0, 600.0);
        assert_eq!(harness.widget.snapshot().state, WidgetState::Collapsed);
        assert!(harness.widget.snapshot().is_vibrating());
        assert_eq!(harness.viewport.listener_count(), 0);
    }
}
