//! Dismissal on pointer presses outside an open surface.

use std::cell::Cell;
use std::rc::Rc;

use yew::Callback;

use crate::host::{Detach, Point, Region, Viewport};

pub struct GuardConfig {
    /// Whether the governed surface is open. Nothing is attached otherwise.
    pub is_active: bool,
    pub regions: Vec<Rc<dyn Region>>,
    pub on_outside: Callback<()>,
    /// Also dismiss when the viewport widens across this width.
    pub close_on_resize_above: Option<f64>,
}

/// Listeners for one open surface, released on drop.
#[must_use = "dropping an OutsideGuard detaches its listeners"]
pub struct OutsideGuard {
    _listeners: Vec<Detach>,
}

impl OutsideGuard {
    pub fn attach(viewport: &Rc<dyn Viewport>, config: GuardConfig) -> Self {
        if !config.is_active {
            return Self { _listeners: Vec::new() };
        }

        let mut listeners = Vec::with_capacity(2);
        let regions = config.regions;
        let on_outside = config.on_outside.clone();
        listeners.push(viewport.on_pointer_down(Rc::new(move |point| {
            if is_outside(&regions, point) {
                on_outside.emit(());
            }
        })));

        if let Some(breakpoint) = config.close_on_resize_above {
            let last_width = Cell::new(viewport.width());
            let on_outside = config.on_outside;
            listeners.push(viewport.on_resize(Rc::new(move |width| {
                let previous = last_width.replace(width);
                if previous < breakpoint && width >= breakpoint {
                    on_outside.emit(());
                }
            })));
        }

        Self { _listeners: listeners }
    }
}

/// True when `point` misses every mounted region. With no region mounted yet
/// there is nothing to be outside of.
pub fn is_outside(regions: &[Rc<dyn Region>], point: Point) -> bool {
    let mut mounted = regions.iter().filter_map(|region| region.bounds()).peekable();
    if mounted.peek().is_none() {
        return false;
    }
    mounted.all(|bounds| !bounds.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::FakeViewport;
    use crate::host::Rect;
    use yew::NodeRef;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_: ()| count.set(count.get() + 1))
        };
        (count, callback)
    }

    fn panel() -> Rc<dyn Region> {
        Rc::new(Rect::new(100.0, 100.0, 200.0, 300.0))
    }

    #[test]
    fn inactive_guard_never_listens_or_fires() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();

        let _guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: false,
            regions: vec![panel()],
            on_outside,
            close_on_resize_above: Some(768.0),
        });

        assert_eq!(viewport.listener_count(), 0);
        viewport.pointer_down(5.0, 5.0);
        viewport.resize_to(1024.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn fires_once_per_press_outside_and_never_inside() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();
        let _guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: true,
            regions: vec![panel()],
            on_outside,
            close_on_resize_above: None,
        });

        viewport.pointer_down(150.0, 200.0);
        assert_eq!(count.get(), 0);
        viewport.pointer_down(5.0, 5.0);
        assert_eq!(count.get(), 1);
        viewport.pointer_down(450.0, 450.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn a_press_inside_any_region_is_inside() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();
        let button: Rc<dyn Region> = Rc::new(Rect::new(440.0, 10.0, 40.0, 40.0));
        let _guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: true,
            regions: vec![panel(), button],
            on_outside,
            close_on_resize_above: None,
        });

        viewport.pointer_down(460.0, 30.0);
        viewport.pointer_down(120.0, 390.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unmounted_regions_are_not_an_outside() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();
        let _guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: true,
            regions: vec![Rc::new(NodeRef::default()) as Rc<dyn Region>],
            on_outside,
            close_on_resize_above: None,
        });

        viewport.pointer_down(5.0, 5.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn widening_across_the_breakpoint_fires_once() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();
        let _guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: true,
            regions: vec![panel()],
            on_outside,
            close_on_resize_above: Some(768.0),
        });

        viewport.resize_to(600.0);
        assert_eq!(count.get(), 0);
        viewport.resize_to(900.0);
        assert_eq!(count.get(), 1);
        viewport.resize_to(1200.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_the_guard_removes_its_listeners() {
        let viewport = FakeViewport::new(500.0);
        let host: Rc<dyn Viewport> = viewport.clone();
        let (count, on_outside) = counter();
        let guard = OutsideGuard::attach(&host, GuardConfig {
            is_active: true,
            regions: vec![panel()],
            on_outside,
            close_on_resize_above: Some(768.0),
        });
        assert_eq!(viewport.listener_count(), 2);

        drop(guard);
        assert_eq!(viewport.listener_count(), 0);
        viewport.pointer_down(5.0, 5.0);
        assert_eq!(count.get(), 0);
    }
}
