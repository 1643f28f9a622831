//! Application configuration constants

/// Site-wide configuration
pub struct AppConfig;

impl AppConfig {
    /// Path prefix for site API calls, appended to the window origin
    pub const API_BASE: &'static str = "/api";
    /// Simulated latency of the mock auth backend (in milliseconds)
    pub const MOCK_LATENCY_MS: u64 = 600;
    /// Remembered-tier key marking a verified admin session
    pub const ADMIN_AUTH_KEY: &'static str = "techpoa_admin_auth";
    /// Remembered-tier key holding the verified admin access code
    pub const ADMIN_CODE_KEY: &'static str = "techpoa_admin_code";
    /// Launch date shown when the launch endpoint cannot be reached
    pub const FALLBACK_LAUNCH_AT: &'static str = "2026-03-01T09:00:00Z";
}
