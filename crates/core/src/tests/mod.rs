//! Test support and suites for the session core
//!
//! `support` ships with the `tests` cargo feature so dependent crates can
//! reuse the in-memory vault and the scripted auth stub in their own tests.

pub mod support;

#[cfg(test)]
mod session;
