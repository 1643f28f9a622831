//! Browser-backed persistence slots

use gloo::storage::{LocalStorage, SessionStorage, Storage as _};
use techpoa_core::{SessionVault, Tier};

/// `SessionVault` over the browser storage pair.
///
/// The remembered tier maps to localStorage, the ephemeral tier to
/// sessionStorage. Raw handles keep values exactly as written, without the
/// JSON wrapping gloo's typed accessors add. Writes are best effort; quota
/// or privacy settings can reject them.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebVault;

impl WebVault {
    pub fn new() -> Self {
        Self
    }

    fn storage(tier: Tier) -> web_sys::Storage {
        match tier {
            Tier::Remembered => LocalStorage::raw(),
            Tier::Ephemeral => SessionStorage::raw(),
        }
    }
}

impl SessionVault for WebVault {
    fn get(&self, tier: Tier, key: &str) -> Option<String> {
        Self::storage(tier).get_item(key).ok().flatten()
    }

    fn set(&self, tier: Tier, key: &str, value: &str) {
        let _ = Self::storage(tier).set_item(key, value);
    }

    fn remove(&self, tier: Tier, key: &str) {
        let _ = Self::storage(tier).remove_item(key);
    }
}
