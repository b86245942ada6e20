use leptos::prelude::Owner;

use super::*;

#[test]
fn clones_share_the_flag() {
    let lifetime = ScreenLifetime::new();
    let task_copy = lifetime.clone();
    assert!(task_copy.is_alive());
    lifetime.end();
    assert!(!task_copy.is_alive());
}

#[test]
fn disposing_owner_ends_installed_lifetime() {
    let owner = Owner::new();
    let lifetime = owner.with(ScreenLifetime::install);
    assert!(lifetime.is_alive());
    owner.cleanup();
    assert!(!lifetime.is_alive());
}
