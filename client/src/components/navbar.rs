//! Sticky site header with logo, primary navigation, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `SiteLayout` for every page. The active link follows the
//! router location. On narrow screens the link list collapses behind a toggle
//! button; the open menu closes on navigation and on Escape pressed while
//! focus is inside the header.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::SitePage;
use crate::util::site_info::{FOUNDATION_NAME, LOGO_SRC, TAGLINE};

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let current = Memo::new(move |_| SitePage::from_path(&location.pathname.get()));

    // Any route change closes the mobile menu.
    Effect::new(move || {
        location.pathname.track();
        menu_open.set(false);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && menu_open.get_untracked() {
            menu_open.set(false);
        }
    };

    let links = move || {
        let current = current.get();
        SitePage::NAV
            .into_iter()
            .map(|page| {
                let active = current == Some(page);
                view! {
                    <a
                        class=if active { "navbar__link navbar__link--active" } else { "navbar__link" }
                        href=page.path()
                        aria-current=active.then_some("page")
                    >
                        {page.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar" on:keydown=on_keydown>
            <div class="navbar__inner">
                <a class="navbar__brand" href=SitePage::Home.path()>
                    <img class="navbar__logo" src=LOGO_SRC alt=FOUNDATION_NAME/>
                    <span class="navbar__brand-text">
                        <span class="navbar__name">{FOUNDATION_NAME}</span>
                        <span class="navbar__tagline">{TAGLINE}</span>
                    </span>
                </a>
                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle menu"
                    aria-controls="site-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <nav
                    id="site-menu"
                    class=move || if menu_open.get() { "navbar__menu navbar__menu--open" } else { "navbar__menu" }
                >
                    {links}
                </nav>
            </div>
        </header>
    }
}
