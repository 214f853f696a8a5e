//! Anchor styled as a button.
//!
//! Internal paths are plain anchors; the router intercepts same-origin clicks,
//! so no special link component is needed.

use leptos::prelude::*;

use crate::util::brand::{ButtonVariant, variant_class};

#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    /// Open in a new tab (external sites, documents).
    #[prop(optional)]
    external: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=variant_class("button", variant.modifier())
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
        >
            {children()}
        </a>
    }
}
