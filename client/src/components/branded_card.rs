//! Card with a title row, optional tag badge, and coloured accent.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::util::brand::{Accent, Tone, cn};

#[component]
pub fn BrandedCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] tag: Option<String>,
    #[prop(optional)] tone: Tone,
    #[prop(optional)] accent: Accent,
    children: Children,
) -> impl IntoView {
    let class = cn(&[
        "card",
        &format!("card--{}", tone.modifier()),
        &format!("card--accent-{}", accent.modifier()),
    ]);

    view! {
        <div class=class>
            <div class="card__header">
                <div class="card__title">{title}</div>
                {tag.map(|text| view! { <Badge tone=tone>{text}</Badge> })}
            </div>
            <div class="card__body">{children()}</div>
        </div>
    }
}
