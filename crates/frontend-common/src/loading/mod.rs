//! Loading signal context

pub mod context;

pub use context::{use_loading, LoadingContext, LoadingProvider};
