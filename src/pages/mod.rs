//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one route, reads the session and the API store from
//! context, and issues its own backend calls on mount.

pub mod admin;
pub mod applications;
pub mod home;
pub mod job_details;
pub mod jobs;
pub mod login;
pub mod post_job;
pub mod profile;
mod profile_form;
pub mod recommended;
pub mod register;
