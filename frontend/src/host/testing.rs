//! Deterministic stand-ins for the browser, used by the unit tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{Detach, Point, Scheduler, Viewport};
use crate::state::theme::{PreferenceStorage, StorageError};

#[derive(Default)]
struct ViewportState {
    scroll: f64,
    width: f64,
    next_id: usize,
    scroll_handlers: Vec<(usize, Rc<dyn Fn()>)>,
    resize_handlers: Vec<(usize, Rc<dyn Fn(f64)>)>,
    pointer_handlers: Vec<(usize, Rc<dyn Fn(Point)>)>,
    frames: Vec<(usize, Box<dyn FnOnce()>)>,
    frames_requested: usize,
}

impl ViewportState {
    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }
}

/// A viewport whose events are fired by hand.
pub struct FakeViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl FakeViewport {
    pub fn new(width: f64) -> Rc<Self> {
        let state = ViewportState { width, ..Default::default() };
        Rc::new(Self { state: Rc::new(RefCell::new(state)) })
    }

    pub fn scroll_to(&self, offset: f64) {
        self.state.borrow_mut().scroll = offset;
        let handlers: Vec<_> = self.state.borrow().scroll_handlers.iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler();
        }
    }

    /// Runs every frame requested so far.
    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for (_, frame) in frames {
            frame();
        }
    }

    pub fn resize_to(&self, width: f64) {
        self.state.borrow_mut().width = width;
        let handlers: Vec<_> = self.state.borrow().resize_handlers.iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler(width);
        }
    }

    pub fn pointer_down(&self, x: f64, y: f64) {
        let handlers: Vec<_> = self.state.borrow().pointer_handlers.iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler(Point::new(x, y));
        }
    }

    pub fn listener_count(&self) -> usize {
        let state = self.state.borrow();
        state.scroll_handlers.len() + state.resize_handlers.len() + state.pointer_handlers.len()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.state.borrow().scroll_handlers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn frames_requested(&self) -> usize {
        self.state.borrow().frames_requested
    }

    fn release(&self, remove: impl FnOnce(&mut ViewportState) + 'static) -> Detach {
        let state: Weak<RefCell<ViewportState>> = Rc::downgrade(&self.state);
        Detach::new(move || {
            if let Some(state) = state.upgrade() {
                remove(&mut state.borrow_mut());
            }
        })
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll
    }

    fn width(&self) -> f64 {
        self.state.borrow().width
    }

    fn on_scroll(&self, handler: Rc<dyn Fn()>) -> Detach {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            state.scroll_handlers.push((id, handler));
            id
        };
        self.release(move |state| state.scroll_handlers.retain(|(other, _)| *other != id))
    }

    fn on_resize(&self, handler: Rc<dyn Fn(f64)>) -> Detach {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            state.resize_handlers.push((id, handler));
            id
        };
        self.release(move |state| state.resize_handlers.retain(|(other, _)| *other != id))
    }

    fn on_pointer_down(&self, handler: Rc<dyn Fn(Point)>) -> Detach {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            state.pointer_handlers.push((id, handler));
            id
        };
        self.release(move |state| state.pointer_handlers.retain(|(other, _)| *other != id))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Detach {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            state.frames.push((id, callback));
            state.frames_requested += 1;
            id
        };
        self.release(move |state| state.frames.retain(|(other, _)| *other != id))
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Timer {
    id: usize,
    due: u64,
    period: u64,
    task: Option<Task>,
}

#[derive(Default)]
struct SchedulerState {
    now: u64,
    next_id: usize,
    timers: Vec<Timer>,
}

/// Timers driven by a virtual clock.
pub struct FakeScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl FakeScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { state: Rc::new(RefCell::new(SchedulerState::default())) })
    }

    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves the clock forward, firing every timer that falls due on the way.
    pub fn advance(&self, millis: u64) {
        let target = self.state.borrow().now + millis;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .filter(|timer| timer.task.is_some() && timer.due <= target)
                    .min_by_key(|timer| (timer.due, timer.id))
                    .map(|timer| (timer.id, timer.due));
                match due {
                    None => None,
                    Some((id, due)) => {
                        state.now = due;
                        let index = state.timers.iter().position(|timer| timer.id == id);
                        index.map(|index| {
                            let timer = &mut state.timers[index];
                            let task = timer.task.take();
                            if let Some(Task::Once(_)) = task {
                                state.timers.remove(index);
                            } else {
                                timer.due += timer.period;
                            }
                            (id, task)
                        })
                    }
                }
            };

            let Some((id, task)) = next else { break };
            match task {
                Some(Task::Once(callback)) => callback(),
                Some(Task::Repeat(mut callback)) => {
                    callback();
                    // Cancelled from inside its own callback: drop it.
                    let mut state = self.state.borrow_mut();
                    if let Some(timer) = state.timers.iter_mut().find(|timer| timer.id == id) {
                        timer.task = Some(Task::Repeat(callback));
                    }
                }
                None => {}
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn schedule(&self, millis: u32, period: u64, task: Task) -> Detach {
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            let due = state.now + u64::from(millis);
            state.timers.push(Timer { id, due, period, task: Some(task) });
            id
        };
        let state = Rc::downgrade(&self.state);
        Detach::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().timers.retain(|timer| timer.id != id);
            }
        })
    }
}

impl Scheduler for FakeScheduler {
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Detach {
        self.schedule(millis, 0, Task::Once(callback))
    }

    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Detach {
        self.schedule(millis, u64::from(millis.max(1)), Task::Repeat(callback))
    }
}

/// Storage that refuses every read and write, like a locked-down browser profile.
pub struct FailingStorage;

impl PreferenceStorage for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Readable storage whose writes are rejected (quota exceeded).
pub struct ReadOnlyStorage(pub Option<String>);

impl PreferenceStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.clone())
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_string()))
    }
}
