//! Submission status line under the contact form.

use leptos::prelude::*;

use crate::state::contact::SubmissionStatus;

/// Renders nothing while idle; `role="status"` so screen readers announce changes.
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<SubmissionStatus>) -> impl IntoView {
    move || {
        let current = status.get();
        current.message().map(|text| {
            view! {
                <p class=format!("status-banner status-banner--{}", current.kind()) role="status">
                    {text.to_owned()}
                </p>
            }
        })
    }
}
