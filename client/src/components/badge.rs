//! Small rounded label.

use leptos::prelude::*;

use crate::util::brand::{Tone, variant_class};

#[component]
pub fn Badge(#[prop(optional)] tone: Tone, children: Children) -> impl IntoView {
    view! { <span class=variant_class("badge", tone.modifier())>{children()}</span> }
}
