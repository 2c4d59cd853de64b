//! Admin mode: a UI switch that reveals the inline create/edit/delete controls.
//!
//! This is not an access-control boundary. The password is compared in the
//! browser and a persisted flag restores the mode on the next visit without
//! asking again. The REST API is responsible for protecting its own writes.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use leptos::{logging, prelude::*};

use crate::config::SiteConfig;

/// Storage key of the persisted "admin session active" flag.
pub const ADMIN_STORAGE_KEY: &str = "portfolio_admin_authenticated";

/// Where the admin flag survives a reload.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn flag(&self, key: &str) -> bool;
    fn set_flag(&self, key: &str);
    fn clear_flag(&self, key: &str);
}

/// Process-local store, used during server rendering and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    flags: Arc<Mutex<HashSet<String>>>,
}

impl SessionStore for MemoryStore {
    fn flag(&self, key: &str) -> bool {
        self.flags.lock().is_ok_and(|flags| flags.contains(key))
    }

    fn set_flag(&self, key: &str) {
        if let Ok(mut flags) = self.flags.lock() {
            flags.insert(key.to_owned());
        }
    }

    fn clear_flag(&self, key: &str) {
        if let Ok(mut flags) = self.flags.lock() {
            flags.remove(key);
        }
    }
}

/// `window.localStorage`, holding the flag as the string `"true"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn flag(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|storage| storage.get_item(key).ok().flatten())
            .is_some_and(|value| value == "true")
    }

    fn set_flag(&self, key: &str) {
        if let Some(storage) = Self::storage()
            && storage.set_item(key, "true").is_err()
        {
            logging::warn!("Could not persist admin session flag");
        }
    }

    fn clear_flag(&self, key: &str) {
        if let Some(storage) = Self::storage()
            && storage.remove_item(key).is_err()
        {
            logging::warn!("Could not clear admin session flag");
        }
    }
}

#[derive(Clone)]
pub struct AdminGate {
    store: Arc<dyn SessionStore>,
    secret: Option<String>,
    is_admin: bool,
}

impl core::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminGate")
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

impl AdminGate {
    /// A gate that has not yet looked at the persisted flag.
    ///
    /// `admin_mode` is the deployment display toggle; when set the gate starts
    /// open.
    pub fn new(store: Arc<dyn SessionStore>, secret: Option<String>, admin_mode: bool) -> Self {
        Self {
            store,
            secret,
            is_admin: admin_mode,
        }
    }

    /// A gate initialized from the persisted flag, as at process start.
    pub fn restored(store: Arc<dyn SessionStore>, secret: Option<String>, admin_mode: bool) -> Self {
        let mut gate = Self::new(store, secret, admin_mode);
        gate.restore();
        gate
    }

    /// Opens the gate if the persisted flag is present. The secret is not
    /// checked again.
    pub fn restore(&mut self) {
        if self.store.flag(ADMIN_STORAGE_KEY) {
            self.is_admin = true;
        }
    }

    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Compares `password` with the configured secret. On success the gate
    /// opens and the flag is persisted; on failure nothing changes.
    pub fn login(&mut self, password: &str) -> bool {
        match self.secret.as_deref() {
            Some(secret) if !secret.is_empty() && secret == password => {
                self.is_admin = true;
                self.store.set_flag(ADMIN_STORAGE_KEY);
                true
            }
            _ => false,
        }
    }

    pub fn logout(&mut self) {
        self.is_admin = false;
        self.store.clear_flag(ADMIN_STORAGE_KEY);
    }
}

/// Reactive handle on the admin gate, provided at the root of the view tree.
#[derive(Debug, Clone, Copy)]
pub struct AdminContext {
    gate: RwSignal<AdminGate>,
}

impl AdminContext {
    pub fn is_admin(&self) -> bool {
        self.gate.with(AdminGate::is_admin)
    }

    pub fn login(&self, password: &str) -> bool {
        self.gate
            .try_update(|gate| gate.login(password))
            .unwrap_or(false)
    }

    pub fn logout(&self) {
        self.gate.update(AdminGate::logout);
    }
}

/// Creates the admin gate for this page and provides it as context.
///
/// The persisted flag lives in the browser, so it is read after hydration
/// rather than during server rendering.
pub fn provide_admin_context(config: &SiteConfig) -> AdminContext {
    let gate = AdminGate::new(
        Arc::new(BrowserStore),
        config.admin_secret.clone(),
        config.admin_mode,
    );
    let context = AdminContext {
        gate: RwSignal::new(gate),
    };
    provide_context(context);

    Effect::new(move |_| context.gate.update(AdminGate::restore));

    context
}

pub fn use_admin() -> AdminContext {
    expect_context::<AdminContext>()
}
