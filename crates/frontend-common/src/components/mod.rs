mod loading_overlay;
mod spinner;

pub use loading_overlay::LoadingOverlay;
pub use spinner::LoadingSpinner;
