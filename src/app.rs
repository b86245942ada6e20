//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::config::api_base_url;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage, applications::ApplicationsPage, home::HomePage, job_details::JobDetailsPage, jobs::JobsPage,
    login::LoginPage, post_job::PostJobPage, profile::ProfilePage, recommended::RecommendedPage,
    register::RegisterPage,
};
use crate::state::session::{Session, SessionHandle};
use crate::state::session_store::SessionStore;
use crate::util::lifetime::spawn_browser;
use crate::util::storage::LocalStorage;

/// Session store wired to the browser transport and `localStorage`.
pub type AppStore = SessionStore<BrowserTransport, LocalStorage>;

const POSTERS: &[Role] = &[Role::Recruiter, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and API store contexts, restores any persisted
/// credential, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppStore::new(ApiClient::new(api_base_url(), BrowserTransport), LocalStorage);
    let session = SessionHandle::new(Session::restoring());
    provide_context(store.clone());
    provide_context(session);

    spawn_browser(async move { session.refresh(&store).await });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobportal.css"/>
        <Title text="Job Portal"/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailsPage/>
                    <Route
                        path=StaticSegment("recommended")
                        view=|| view! { <Protected><RecommendedPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("applications")
                        view=|| view! { <Protected><ApplicationsPage/></Protected> }
                    />
                    <Route path=StaticSegment("profile") view=|| view! { <Protected><ProfilePage/></Protected> }/>
                    <Route
                        path=StaticSegment("post-job")
                        view=|| view! { <Protected allowed=POSTERS><PostJobPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Protected allowed=ADMINS><AdminPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
