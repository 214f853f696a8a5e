//! Figure with a fixed aspect ratio and a placeholder when no image exists.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// Supported aspect ratios, matching `.image-frame__media--*` in the stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Aspect {
    #[default]
    Wide,
    Landscape,
    Classic,
}

impl Aspect {
    fn modifier(self) -> &'static str {
        match self {
            Self::Wide => "16-10",
            Self::Landscape => "16-11",
            Self::Classic => "4-3",
        }
    }
}

#[component]
pub fn ImageFrame(
    #[prop(default = None)] src: Option<String>,
    #[prop(optional, into)] alt: String,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional)] aspect: Aspect,
) -> impl IntoView {
    let media = match src {
        Some(src) => view! { <img class="image-frame__img" src=src alt=alt loading="lazy"/> }.into_any(),
        None => view! {
            <div class="image-frame__placeholder" role="img" aria-label=alt>
                <span>"Image placeholder"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <figure class="image-frame">
            <div class=format!("image-frame__media image-frame__media--{}", aspect.modifier())>{media}</div>
            {caption.map(|text| view! { <figcaption class="image-frame__caption">{text}</figcaption> })}
        </figure>
    }
}
