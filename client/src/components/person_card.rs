//! Profile card for board and management listings.

use leptos::prelude::*;

use crate::components::image_frame::{Aspect, ImageFrame};

const BIO_PLACEHOLDER: &str = "Bio placeholder \u{2014} add a short profile here.";

#[component]
pub fn PersonCard(
    #[prop(into)] name: String,
    #[prop(into)] role: String,
    #[prop(optional, into)] bio: Option<String>,
    #[prop(default = None)] img_src: Option<String>,
) -> impl IntoView {
    let bio_class = if bio.is_some() { "person-card__bio" } else { "person-card__bio person-card__bio--placeholder" };
    let bio = bio.unwrap_or_else(|| BIO_PLACEHOLDER.to_owned());

    view! {
        <div class="person-card">
            <ImageFrame src=img_src alt=name.clone() aspect=Aspect::Classic/>
            <div class="person-card__body">
                <div class="person-card__name">{name}</div>
                <div class="person-card__role">{role}</div>
                <p class=bio_class>{bio}</p>
            </div>
        </div>
    }
}
