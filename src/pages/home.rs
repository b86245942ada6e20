//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionHandle;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let signed_in = move || session.with(|s| s.identity().is_some());

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Find Your Dream Job with AI"</h1>
                <p>"Get personalized job recommendations based on your skills and experience"</p>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <div class="hero__actions">
                                <A href="/register" attr:class="btn btn--primary">"Get Started"</A>
                                <A href="/jobs" attr:class="btn">"Browse Jobs"</A>
                            </div>
                        }
                    }
                >
                    <div class="hero__actions">
                        <A href="/recommended" attr:class="btn btn--primary">"View Recommendations"</A>
                        <A href="/jobs" attr:class="btn">"Browse All Jobs"</A>
                    </div>
                </Show>
            </section>

            <section class="features">
                <h2>"Why Choose Us?"</h2>
                <p>"AI-powered job matching for better opportunities"</p>
                <div class="features__grid">
                    <div class="feature">
                        <h3>"AI Recommendations"</h3>
                        <p>"Get personalized job recommendations powered by advanced AI and machine learning"</p>
                    </div>
                    <div class="feature">
                        <h3>"Wide Range of Jobs"</h3>
                        <p>"Browse thousands of job openings from top companies across various industries"</p>
                    </div>
                    <div class="feature">
                        <h3>"For Everyone"</h3>
                        <p>"Whether you're a candidate looking for opportunities or a recruiter posting jobs"</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Get Started?"</h2>
                <p>"Join thousands of job seekers finding their perfect match"</p>
                <Show when=move || !signed_in()>
                    <A href="/register" attr:class="btn btn--primary">"Create Your Account"</A>
                </Show>
            </section>
        </div>
    }
}
