//! Page section with eyebrow, heading, and subtitle.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::brand::{Tone, cn};

/// A centered-width page section.
///
/// `heading_level` picks `h1`..`h3`; anything else renders `h2`.
#[component]
pub fn Section(
    #[prop(optional, into)] eyebrow: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(default = Tone::Wine)] accent: Tone,
    #[prop(default = 1)] heading_level: u8,
    #[prop(optional)] centered: bool,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let head_class = cn(&["section__head", if centered { "section__head--center" } else { "" }]);
    let eyebrow_class = format!("section__eyebrow section__eyebrow--{}", accent.modifier());

    let heading = title.map(|text| match heading_level {
        1 => view! { <h1 class="section__title">{text}</h1> }.into_any(),
        3 => view! { <h3 class="section__title">{text}</h3> }.into_any(),
        _ => view! { <h2 class="section__title">{text}</h2> }.into_any(),
    });

    view! {
        <section class="section" id=id>
            <div class=head_class>
                {eyebrow.map(|text| view! { <div class=eyebrow_class>{text}</div> })}
                {heading}
                {subtitle.map(|text| view! { <p class="section__subtitle">{text}</p> })}
            </div>
            <div class="section__body">{children()}</div>
        </section>
    }
}
