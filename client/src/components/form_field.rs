//! Labelled form control wrapper with hint and inline error.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// `id` of the wrapped control.
    #[prop(into)]
    for_id: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    let class = move || if error.get().is_some() { "form-field form-field--invalid" } else { "form-field" };

    view! {
        <div class=class>
            <label class="form-field__label" for=for_id>{label}</label>
            {children()}
            {move || error.get().map(|message| view! { <p class="form-field__error">{message}</p> })}
            {hint.map(|text| view! { <p class="form-field__hint">{text}</p> })}
        </div>
    }
}
