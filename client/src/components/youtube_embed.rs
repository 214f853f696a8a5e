//! Responsive YouTube player card with a fallback for unrecognised links.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::youtube::embed_url;

pub const INVALID_VIDEO_MESSAGE: &str = "Video link is invalid.";

#[component]
pub fn YouTubeEmbed(
    /// Any common YouTube share link.
    url: &'static str,
    title: &'static str,
    /// Small label above the title in the caption row.
    #[prop(default = "Featured")]
    label: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    let player = match embed_url(url) {
        Some(src) => view! {
            <iframe
                class="video__frame"
                src=src
                title=title
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
            ></iframe>
        }
        .attr("loading", "lazy")
        .into_any(),
        None => {
            log::warn!("unrecognised video link: {url}");
            view! { <div class="video__invalid">{INVALID_VIDEO_MESSAGE}</div> }.into_any()
        }
    };

    view! {
        <div class="video">
            <div class="video__media">{player}</div>
            <div class="video__caption">
                <div>
                    <div class="video__label">{label}</div>
                    <div class="video__title">{title}</div>
                    {blurb.map(|text| view! { <div class="video__blurb">{text}</div> })}
                </div>
                <a class="button button--primary" href=url target="_blank" rel="noreferrer">"Watch on YouTube"</a>
            </div>
        </div>
    }
}
