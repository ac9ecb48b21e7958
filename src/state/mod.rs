//! Session state modules.
//!
//! DESIGN
//! ======
//! `session` is the pure state machine — one authoritative value, one event
//! at a time, effects as data. `store` is the Leptos-facing driver that owns
//! the signal, persists the token, and runs the HTTP effects.

pub mod session;
pub mod store;
