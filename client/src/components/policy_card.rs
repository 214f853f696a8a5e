//! Policy document card.
//!
//! Published documents get "Open PDF" / "Download" actions; unpublished ones
//! point the reader at the contact page to request a copy.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::nav::SitePage;

#[component]
pub fn PolicyCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Document URL; `None` (or blank) while the document is only on request.
    #[prop(default = None)]
    href: Option<&'static str>,
    #[prop(default = "Policy")] tag: &'static str,
) -> impl IntoView {
    let href = href.filter(|h| !h.trim().is_empty());

    let availability = if href.is_some() {
        view! { <span class="pill pill--available">"Available"</span> }.into_any()
    } else {
        view! { <span class="pill pill--muted">"On request"</span> }.into_any()
    };

    let actions = match href {
        Some(href) => view! {
            <div class="policy-card__actions">
                <a
                    class="button button--wine"
                    href=href
                    target="_blank"
                    rel="noreferrer"
                    aria-label=format!("Open {title} PDF")
                    title="Open PDF"
                >
                    "\u{2197} Open PDF"
                </a>
                <a
                    class="button button--ghost"
                    href=href
                    download=""
                    aria-label=format!("Download {title} PDF")
                    title="Download PDF"
                >
                    "\u{2b07} Download"
                </a>
                <span class="policy-card__note">"PDF \u{2022} opens in new tab"</span>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="policy-card__request">
                <a class="button button--ghost button--block" href=SitePage::Contact.path()>
                    "Request document"
                </a>
                <span class="policy-card__note">"We\u{2019}ll respond with the document link"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="policy-card">
            <div class="policy-card__body">
                <div class="policy-card__title">{title}</div>
                <div class="policy-card__pills">
                    <span class="pill pill--brand">{tag}</span>
                    {availability}
                </div>
                <p class="policy-card__description">{description}</p>
            </div>
            <div class="policy-card__footer">{actions}</div>
        </div>
    }
}
