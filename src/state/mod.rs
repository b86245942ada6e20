//! Client-side state shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is provided through Leptos context by `App`; the screen modules
//! hold pure draft and query logic that pages wrap in local signals.

pub mod jobs;
pub mod post_job;
pub mod profile;
pub mod session;
pub mod session_store;
