//! Inline success/error banner bound to a `FlashState` signal.

use leptos::prelude::*;

use crate::util::flash::FlashState;

#[component]
pub fn FlashBanner(flash: RwSignal<FlashState>) -> impl IntoView {
    move || {
        flash.get().message.map(|(kind, text)| {
            view! {
                <div class=kind.class() role="status">
                    {text}
                </div>
            }
        })
    }
}
