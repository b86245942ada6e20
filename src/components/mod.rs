//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, route guard, banners) and list
//! items while reading the session from Leptos context.

pub mod flash_banner;
pub mod job_card;
pub mod navbar;
pub mod protected;
pub mod search_insights;
