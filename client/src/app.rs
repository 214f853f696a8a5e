//! Root application component, HTML shell, and route table.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_layout::SiteLayout;
use crate::config::{META_API_BASE, META_REQUEST_TIMEOUT, SiteConfig};
use crate::pages::{
    about::AboutPage, contact::ContactPage, get_involved::GetInvolvedPage, governance::GovernancePage,
    home::HomePage, not_found::NotFoundPage, policies::PoliciesPage, programs::ProgramsPage,
};
use crate::util::nav::SitePage;
use crate::util::site_info::FOUNDATION_NAME;

/// Stylesheet emitted by cargo-leptos under `/pkg`.
pub const STYLESHEET_HREF: &str = "/pkg/foundation-site.css";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The `SiteConfig` in context is mirrored into `<meta>` tags that the browser
/// bundle reads back in `SiteConfig::from_document`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_API_BASE content=config.api_base/>
                <meta name=META_REQUEST_TIMEOUT content=config.request_timeout_ms.to_string()/>
                <link rel="icon" href="/assets/logo.png"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Re-provides the `SiteConfig` found in context (or the default) and sets up
/// routing inside the shared layout chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(use_context::<SiteConfig>().unwrap_or_default());

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title formatter=|page: String| page_title(&page)/>
        <Meta name="description" content="Longhorn Foundation: strong foundations for lifelong learning."/>

        <Router>
            <SiteLayout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment(SitePage::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(SitePage::About.segment()) view=AboutPage/>
                    <Route path=StaticSegment(SitePage::Programs.segment()) view=ProgramsPage/>
                    <Route path=StaticSegment(SitePage::Governance.segment()) view=GovernancePage/>
                    <Route path=StaticSegment(SitePage::Policies.segment()) view=PoliciesPage/>
                    <Route path=StaticSegment(SitePage::GetInvolved.segment()) view=GetInvolvedPage/>
                    <Route path=StaticSegment(SitePage::Contact.segment()) view=ContactPage/>
                </Routes>
            </SiteLayout>
        </Router>
    }
}

/// Browser tab title: `"<page> | <foundation>"`, or just the foundation name.
pub fn page_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() { FOUNDATION_NAME.to_owned() } else { format!("{page} | {FOUNDATION_NAME}") }
}
