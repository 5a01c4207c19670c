use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::host::{Host, Region};
use crate::state::attention::{AttentionSnapshot, AttentionTiming, AttentionWidget};
use crate::state::outside::{GuardConfig, OutsideGuard};
use crate::state::scroll::ScrollMonitor;
use crate::state::theme::{ThemePreference, ThemeStore};

#[hook]
pub fn use_host() -> Host {
    use_context::<Host>().expect("Host context is provided by App")
}

/// Whether the page is scrolled past the threshold; re-renders on crossings only.
#[hook]
pub fn use_scrolled() -> bool {
    let host = use_host();
    let scrolled = use_state(|| host.scroll.is_scrolled());

    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |monitor: &ScrollMonitor| {
                let on_change = {
                    let setter = setter.clone();
                    Callback::from(move |value| setter.set(value))
                };
                let observation = monitor.observe(on_change);
                setter.set(observation.is_scrolled());
                move || drop(observation)
            },
            host.scroll.clone(),
        );
    }

    *scrolled
}

/// Calls `on_outside` for presses outside `regions` while `is_active` holds.
#[hook]
pub fn use_outside_interaction(
    is_active: bool,
    regions: Vec<NodeRef>,
    on_outside: Callback<()>,
    close_on_resize_above: Option<f64>,
) {
    let host = use_host();
    use_effect_with_deps(
        move |(is_active, regions, close_on_resize_above): &(bool, Vec<NodeRef>, Option<f64>)| {
            let guard = OutsideGuard::attach(
                &host.viewport,
                GuardConfig {
                    is_active: *is_active,
                    regions: regions
                        .iter()
                        .map(|node| Rc::new(node.clone()) as Rc<dyn Region>)
                        .collect(),
                    on_outside,
                    close_on_resize_above: *close_on_resize_above,
                },
            );
            move || drop(guard)
        },
        (is_active, regions, close_on_resize_above),
    );
}

/// Current theme plus a callback that flips it.
#[hook]
pub fn use_theme() -> (ThemePreference, Callback<()>) {
    let store = use_context::<ThemeStore>().expect("ThemeStore context is provided by App");
    let preference = use_state(|| store.preference());

    {
        let setter = preference.setter();
        use_effect_with_deps(
            move |store: &ThemeStore| {
                setter.set(store.preference());
                let subscription = store.subscribe(Callback::from(move |value| setter.set(value)));
                move || drop(subscription)
            },
            store.clone(),
        );
    }

    let toggle = Callback::from(move |_: ()| store.toggle());
    (*preference, toggle)
}

pub struct UseAttentionHandle {
    pub snapshot: AttentionSnapshot,
    pub expand: Callback<()>,
    pub collapse: Callback<()>,
}

/// Mounts an [`AttentionWidget`] for the lifetime of the component.
#[hook]
pub fn use_attention(timing: AttentionTiming) -> UseAttentionHandle {
    let host = use_host();
    let snapshot = use_state(AttentionSnapshot::default);
    let widget: Rc<RefCell<Option<AttentionWidget>>> = use_mut_ref(|| None);

    {
        let setter = snapshot.setter();
        let widget = widget.clone();
        use_effect_with_deps(
            move |timing: &AttentionTiming| {
                let on_change = {
                    let setter = setter.clone();
                    Callback::from(move |value| setter.set(value))
                };
                let mounted = AttentionWidget::mount(host.scheduler.clone(), *timing, on_change);
                setter.set(mounted.snapshot());
                *widget.borrow_mut() = Some(mounted);
                move || {
                    widget.borrow_mut().take();
                }
            },
            timing,
        );
    }

    let expand = {
        let widget = widget.clone();
        Callback::from(move |_: ()| {
            if let Some(widget) = widget.borrow().as_ref() {
                widget.expand();
            }
        })
    };
    let collapse = Callback::from(move |_: ()| {
        if let Some(widget) = widget.borrow().as_ref() {
            widget.collapse();
        }
    });

    UseAttentionHandle { snapshot: *snapshot, expand, collapse }
}
