//! Platform seam between the state core and the browser.
//!
//! Everything the navbar and the profile sidebar need from the outside world
//! (scroll offset, viewport width, pointer presses, animation frames, timers)
//! goes through the [`Viewport`] and [`Scheduler`] traits. Every subscription
//! hands back a [`Detach`] that releases the listener when dropped.

use std::rc::Rc;

use web_sys::{DomRect, Element};
use yew::NodeRef;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::state::scroll::ScrollMonitor;

pub mod browser;
#[cfg(test)]
pub mod testing;

/// Releases a listener, timer or frame request when dropped.
#[must_use = "dropping a Detach releases what it guards immediately"]
pub struct Detach(Option<Box<dyn FnOnce()>>);

impl Detach {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    /// A handle with nothing to release.
    pub fn noop() -> Self {
        Self(None)
    }
}

impl Drop for Detach {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

/// Viewport coordinates of a pointer press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

impl From<DomRect> for Rect {
    fn from(rect: DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Something on screen an interaction can land inside of.
pub trait Region {
    /// Current bounding box, or `None` while nothing is mounted yet.
    fn bounds(&self) -> Option<Rect>;
}

impl Region for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Region for NodeRef {
    fn bounds(&self) -> Option<Rect> {
        self.cast::<Element>()
            .map(|element| Rect::from(element.get_bounding_client_rect()))
    }
}

/// Scroll, resize and pointer events of the page, plus frame scheduling.
pub trait Viewport {
    /// Vertical scroll offset in px.
    fn scroll_offset(&self) -> f64;
    /// Inner width of the viewport in px.
    fn width(&self) -> f64;
    fn on_scroll(&self, handler: Rc<dyn Fn()>) -> Detach;
    /// The handler receives the new viewport width.
    fn on_resize(&self, handler: Rc<dyn Fn(f64)>) -> Detach;
    fn on_pointer_down(&self, handler: Rc<dyn Fn(Point)>) -> Detach;
    /// Runs `callback` before the next repaint unless the handle is dropped first.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Detach;
}

/// Wall-clock timers. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Detach;
    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Detach;
}

/// Platform services shared by every component of the page.
#[derive(Clone)]
pub struct Host {
    pub viewport: Rc<dyn Viewport>,
    pub scheduler: Rc<dyn Scheduler>,
    pub scroll: ScrollMonitor,
}

impl Host {
    pub fn new(viewport: Rc<dyn Viewport>, scheduler: Rc<dyn Scheduler>) -> Self {
        let scroll = ScrollMonitor::new(viewport.clone(), SCROLL_THRESHOLD_PX);
        Self { viewport, scheduler, scroll }
    }

    pub fn browser() -> Self {
        Self::new(
            Rc::new(browser::BrowserViewport::new()),
            Rc::new(browser::BrowserScheduler),
        )
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        same_instance(&self.viewport, &other.viewport)
            && same_instance(&self.scheduler, &other.scheduler)
            && self.scroll == other.scroll
    }
}

// Compare data pointers only; vtable pointers of the same type may differ.
fn same_instance<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
