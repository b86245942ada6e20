//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the router outlet. The link set depends only
//! on the signed-in user's role, computed by `nav_links` so it can be tested
//! without a DOM.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppStore;
use crate::net::types::{Role, User};
use crate::state::session::SessionHandle;
use crate::util::format::first_name;

/// One navbar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: String,
}

impl NavLink {
    fn new(href: &'static str, label: impl Into<String>) -> Self {
        Self { href, label: label.into() }
    }
}

/// Links shown for `user` (anonymous when `None`), in display order.
#[must_use]
pub fn nav_links(user: Option<&User>) -> Vec<NavLink> {
    let Some(user) = user else {
        return vec![NavLink::new("/login", "Login"), NavLink::new("/register", "Sign Up")];
    };
    let mut links = vec![NavLink::new("/jobs", "Browse Jobs")];
    match user.role {
        Role::Candidate => links.push(NavLink::new("/recommended", "Recommended")),
        Role::Recruiter => links.push(NavLink::new("/post-job", "Post Job")),
        Role::Admin => links.push(NavLink::new("/admin", "Admin")),
    }
    links.push(NavLink::new("/applications", "Applications"));
    links.push(NavLink::new("/profile", first_name(&user.name)));
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let links = move || nav_links(session.identity().as_ref());
    let signed_in = move || session.with(|s| s.identity().is_some());

    let on_logout = move |_| {
        session.logout(&store);
        menu_open.set(false);
        navigate("/", NavigateOptions::default());
    };

    let render_links = move || {
        let path = location.pathname.get();
        links()
            .into_iter()
            .map(|link| {
                let class = if path == link.href { "navbar__link navbar__link--active" } else { "navbar__link" };
                view! {
                    <A href=link.href attr:class=class on:click=move |_| menu_open.set(false)>
                        {link.label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">"JobPortal"</A>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    {render_links}
                    <Show when=signed_in>
                        <button class="btn navbar__logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
