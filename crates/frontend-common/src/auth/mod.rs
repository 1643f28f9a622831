//! Session context and hooks

pub mod context;

pub use context::{
    use_identity, use_is_authenticated, use_session, SessionContext, SessionProvider,
};
