use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent, Storage, Window};

use super::{Detach, Point, Scheduler, Viewport};
use crate::state::theme::{PreferenceStorage, StorageError, ThemePreference};

pub struct BrowserViewport {
    window: Option<Window>,
}

impl BrowserViewport {
    pub fn new() -> Self {
        let window = web_sys::window();
        if window.is_none() {
            warn!("No window available; viewport listeners are disabled");
        }
        Self { window }
    }
}

fn listen(target: &EventTarget, event: &'static str, callback: Closure<dyn FnMut(Event)>) -> Detach {
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        warn!("Failed to attach {} listener: {:?}", event, err);
        return Detach::noop();
    }

    let target = target.clone();
    Detach::new(move || {
        let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    })
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn width(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn on_scroll(&self, handler: Rc<dyn Fn()>) -> Detach {
        let Some(window) = self.window.as_ref() else {
            return Detach::noop();
        };
        let callback = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        listen(window, "scroll", callback)
    }

    fn on_resize(&self, handler: Rc<dyn Fn(f64)>) -> Detach {
        let Some(window) = self.window.clone() else {
            return Detach::noop();
        };
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            if let Some(width) = reader.inner_width().ok().and_then(|w| w.as_f64()) {
                handler(width);
            }
        }) as Box<dyn FnMut(Event)>);
        listen(&window, "resize", callback)
    }

    fn on_pointer_down(&self, handler: Rc<dyn Fn(Point)>) -> Detach {
        let Some(document) = self.window.as_ref().and_then(|window| window.document()) else {
            return Detach::noop();
        };
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                handler(Point::new(mouse.client_x() as f64, mouse.client_y() as f64));
            }
        }) as Box<dyn FnMut(Event)>);
        listen(&document, "mousedown", callback)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Detach {
        let Some(window) = self.window.clone() else {
            return Detach::noop();
        };
        let frame = Closure::once(move || callback());
        match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
            Ok(id) => Detach::new(move || {
                let _ = window.cancel_animation_frame(id);
                drop(frame);
            }),
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                Detach::noop()
            }
        }
    }
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Detach {
        let timeout = Timeout::new(millis, callback);
        Detach::new(move || drop(timeout))
    }

    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Detach {
        let interval = Interval::new(millis, callback);
        Detach::new(move || drop(interval))
    }
}

/// `window.localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Rejected(format!("{:?}", err)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected(format!("{:?}", err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{:?}", err)))
    }
}

/// Mirrors the preference onto the `dark`/`light` classes of `<html>`.
pub fn apply_theme_to_document(preference: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.toggle_with_force("dark", preference.is_dark());
    let _ = classes.toggle_with_force("light", !preference.is_dark());
}
