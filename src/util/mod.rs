//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, storage,
//! redirect paths) from page and component logic so the pure parts test
//! natively.

pub mod cookie;
pub mod nav;
pub mod token_storage;
