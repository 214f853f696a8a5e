//! Site footer: mission blurb, quick links, contact details, copyright.

use leptos::prelude::*;

use crate::util::nav::SitePage;
use crate::util::site_info::{
    ADDRESS_LINES, COPYRIGHT_YEAR, EMAIL, FOOTER_PHONE_DISPLAY, FOOTER_PHONE_TEL, FOUNDATION_NAME, MAP_URL, TAGLINE,
    WEBSITE_DISPLAY, WEBSITE_URL, mailto,
};

/// Labelled contact line.
#[component]
fn FooterItem(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="footer__item">
            <div class="footer__label">{label}</div>
            <div class="footer__value">{children()}</div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let quick_links = SitePage::NAV
        .into_iter()
        .map(|page| view! { <a class="footer__link" href=page.path()>{page.label()}</a> })
        .collect_view();

    let address = ADDRESS_LINES.into_iter().map(|line| view! { <div>{line}</div> }).collect_view();

    view! {
        <footer class="footer">
            <div class="footer__accent"></div>
            <div class="footer__grid">
                <div class="footer__col">
                    <div class="footer__heading footer__heading--brand">{FOUNDATION_NAME}</div>
                    <p class="footer__text">
                        "Partnership, accountability, safeguarding, measurable impact, and community-centered design."
                    </p>
                    <div class="footer__pill">
                        <span class="footer__dot"></span>
                        <span>{TAGLINE}</span>
                    </div>
                </div>
                <div class="footer__col">
                    <div class="footer__heading">"Quick Links"</div>
                    <nav class="footer__links">{quick_links}</nav>
                </div>
                <div class="footer__col">
                    <div class="footer__heading">"Contact"</div>
                    <FooterItem label="Phone">
                        <a class="footer__link" href=FOOTER_PHONE_TEL>{FOOTER_PHONE_DISPLAY}</a>
                    </FooterItem>
                    <FooterItem label="Email">
                        <a class="footer__link" href=mailto()>{EMAIL}</a>
                    </FooterItem>
                    <FooterItem label="Address">
                        <address class="footer__address">{address}</address>
                        <a class="footer__link" href=MAP_URL target="_blank" rel="noreferrer">"Open in Google Maps"</a>
                    </FooterItem>
                    <FooterItem label="Website">
                        <a class="footer__link" href=WEBSITE_URL target="_blank" rel="noreferrer">{WEBSITE_DISPLAY}</a>
                    </FooterItem>
                </div>
            </div>
            <div class="footer__bottom">
                <div>"Foundation Trust \u{2022} Community Impact"</div>
                <div>{format!("\u{a9} {COPYRIGHT_YEAR} {FOUNDATION_NAME}. All rights reserved.")}</div>
                <div class="footer__bottom-links">
                    <a class="footer__link" href=SitePage::Policies.path()>"Policies"</a>
                    <a class="footer__link" href=SitePage::Contact.path()>"Support"</a>
                </div>
            </div>
        </footer>
    }
}
