//! Fallback view for unknown paths.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button_link::ButtonLink;
use crate::components::section::Section;
use crate::util::nav::SitePage;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found"/>
        <Section eyebrow="404" title="Page not found" subtitle="The page you are looking for does not exist." centered=true>
            <ButtonLink href=SitePage::Home.path()>"Back to home"</ButtonLink>
        </Section>
    }
}
