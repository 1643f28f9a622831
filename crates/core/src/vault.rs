//! Durable client-side session storage
//!
//! The browser backing (localStorage / sessionStorage) lives in
//! `techpoa-frontend-common`; the store only sees this trait so the session
//! logic runs natively under plain `cargo test`.

/// Storage keys, identical in both tiers.
pub mod keys {
    /// Opaque session token.
    pub const AUTH_TOKEN: &str = "authToken";
    /// JSON-encoded [`Identity`](crate::Identity).
    pub const USER_DATA: &str = "userData";
}

/// Which tier a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Survives browser restarts (`localStorage`).
    Remembered,
    /// Lives until the tab session ends (`sessionStorage`).
    Ephemeral,
}

impl Tier {
    /// Restore order: remembered first.
    pub const BOTH: [Tier; 2] = [Tier::Remembered, Tier::Ephemeral];
}

/// Key/value storage with a remembered and an ephemeral tier.
///
/// Writes are best-effort: implementations swallow platform failures (quota,
/// disabled storage) the same way the browser code ignores `set_item` errors.
/// A write that did not stick surfaces later as an absent key.
pub trait SessionVault {
    fn get(&self, tier: Tier, key: &str) -> Option<String>;
    fn set(&self, tier: Tier, key: &str, value: &str);
    fn remove(&self, tier: Tier, key: &str);
}
