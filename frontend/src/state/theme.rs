//! Dark/light preference shared by the whole page.
//!
//! The store is injected through a Yew context rather than living in a
//! global. It reads the `"theme"` slot once when opened, writes through on
//! every change and tells its subscribers. When the browser refuses access
//! to storage the store quietly keeps the preference in memory for the rest
//! of the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;
use yew::Callback;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark Mode",
            Self::Light => "Light Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error surfaced by a [`PreferenceStorage`] backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage at all (no window, or storage disabled by the browser).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The platform refused the operation.
    #[error("preference storage rejected the operation: {0}")]
    Rejected(String),
}

/// Device-local key/value slots.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Slots that live as long as the page.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

struct StoreState {
    preference: ThemePreference,
    storage: Rc<dyn PreferenceStorage>,
    next_id: usize,
    listeners: Vec<(usize, Callback<ThemePreference>)>,
}

/// Observable theme preference with write-through persistence.
#[derive(Clone)]
pub struct ThemeStore {
    state: Rc<RefCell<StoreState>>,
}

impl ThemeStore {
    /// Loads the saved preference, defaulting to dark without writing anything.
    ///
    /// Any non-empty saved value other than `"dark"` reads as light.
    pub fn open(storage: Rc<dyn PreferenceStorage>) -> Self {
        let (preference, storage): (_, Rc<dyn PreferenceStorage>) = match storage.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => {
                let preference = ThemePreference::parse(&raw).unwrap_or_else(|| {
                    warn!("Unrecognised theme value {:?}, reading it as light", raw);
                    ThemePreference::Light
                });
                (preference, storage)
            }
            Ok(_) => (ThemePreference::default(), storage),
            Err(err) => {
                warn!("{}; keeping the theme in memory for this session", err);
                (ThemePreference::default(), Rc::new(MemoryStorage::default()))
            }
        };

        debug!("Theme store opened with {} preference", preference);
        Self {
            state: Rc::new(RefCell::new(StoreState {
                preference,
                storage,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        let listeners: Vec<_> = {
            let mut state = self.state.borrow_mut();
            if let Err(err) = state.storage.write(THEME_STORAGE_KEY, preference.as_str()) {
                warn!("{}; keeping the theme in memory for this session", err);
                state.storage = Rc::new(MemoryStorage::with_value(THEME_STORAGE_KEY, preference.as_str()));
            }
            state.preference = preference;
            state.listeners.iter().map(|(_, listener)| listener.clone()).collect()
        };

        debug!("Theme set to {}", preference);
        for listener in listeners {
            listener.emit(preference);
        }
    }

    pub fn toggle(&self) {
        self.set_preference(self.preference().toggled());
    }

    /// Calls `listener` after every change until the subscription is dropped.
    pub fn subscribe(&self, listener: Callback<ThemePreference>) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.push((id, listener));
        Subscription { state: Rc::downgrade(&self.state), id }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    state: Weak<RefCell<StoreState>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
