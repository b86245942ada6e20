//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod file_pick;
pub mod flash;
pub mod format;
pub mod guard;
pub mod lifetime;
pub mod storage;
