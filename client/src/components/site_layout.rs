//! Page chrome: header, main content, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="site__main">{children()}</main>
            <Footer/>
        </div>
    }
}
