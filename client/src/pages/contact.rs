//! Contact page: contact details and the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only stateful page. One `RwSignal<ContactState>` per page view holds
//! the field values, the submit lifecycle, and the touched flag. A submit
//! runs `begin_submit`, issues at most one request through the configured
//! transport on a local task, then feeds the outcome to `finish_submit`.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::Badge;
use crate::components::form_field::FormField;
use crate::components::section::Section;
use crate::components::status_banner::StatusBanner;
use crate::config::SiteConfig;
use crate::net::api::{HttpContactTransport, send_contact};
use crate::state::contact::{ContactField, ContactState, SENDING, SubmitRejected};
use crate::util::brand::Tone;
use crate::util::site_info::{CONTACT_PHONE_DISPLAY, CONTACT_PHONE_TEL, EMAIL, mailto};

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let transport = HttpContactTransport::new(&config);
    let state = RwSignal::new(ContactState::default());

    let value = move |field: ContactField| move || state.with(|s| s.form.get(field).to_owned());
    let on_input =
        move |field: ContactField| move |ev: Event| state.update(|s| s.set_field(field, event_target_value(&ev)));
    let error = move |field: ContactField| Signal::derive(move || state.with(|s| s.visible_error(field)));
    let sending = move || state.with(ContactState::is_sending);
    let status = Signal::derive(move || state.with(|s| s.status.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match state.try_update(ContactState::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(SubmitRejected::InFlight)) => {
                log::debug!("contact submit ignored: request already in flight");
                return;
            }
            Some(Err(SubmitRejected::Invalid)) | None => return,
        };

        let transport = transport.clone();
        leptos::task::spawn_local(async move {
            let outcome = send_contact(&transport, &request).await;
            state.update(|s| s.finish_submit(outcome));
        });
    };

    view! {
        <Title text="Contact"/>
        <Section
            eyebrow="Contact"
            title="Get in touch"
            subtitle="For partnerships, program support, or general enquiries\u{2014}send us a message and \
                      we\u{2019}ll respond."
        >
            <div class="grid grid--contact">
                <div class="panel panel--gradient-top">
                    <div class="panel__header">
                        <div class="panel__title">"Contact details"</div>
                        <Badge tone=Tone::Wine>"Support"</Badge>
                    </div>
                    <div class="contact-details">
                        <div class="contact-details__item">
                            <div class="contact-details__label">"Email"</div>
                            <a class="contact-details__value" href=mailto()>{EMAIL}</a>
                        </div>
                        <div class="contact-details__item">
                            <div class="contact-details__label">"Phone"</div>
                            <a class="contact-details__value" href=CONTACT_PHONE_TEL>{CONTACT_PHONE_DISPLAY}</a>
                        </div>
                        <p class="panel__text">
                            "Prefer partnerships or program support? Send a message and we\u{2019}ll respond."
                        </p>
                    </div>
                    <div class="panel panel--tinted">
                        <div class="panel__eyebrow">"What to include"</div>
                        <p class="panel__text">
                            "Tell us your organization (if applicable), the location, and the kind of support \
                             you\u{2019}re seeking."
                        </p>
                    </div>
                </div>

                <form class="panel contact-form" on:submit=on_submit novalidate=true>
                    <div class="contact-form__head">
                        <div class="panel__title">"Send a message"</div>
                        <div class="contact-form__required">"Required: name, email, message"</div>
                    </div>
                    <StatusBanner status=status/>

                    <FormField label="Full name" for_id="contact-name" error=error(ContactField::Name)>
                        <input
                            id="contact-name"
                            class="input"
                            name=ContactField::Name.key()
                            placeholder="Your name"
                            autocomplete="name"
                            prop:value=value(ContactField::Name)
                            on:input=on_input(ContactField::Name)
                        />
                    </FormField>
                    <FormField label="Email address" for_id="contact-email" error=error(ContactField::Email)>
                        <input
                            id="contact-email"
                            class="input"
                            type="email"
                            inputmode="email"
                            name=ContactField::Email.key()
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=value(ContactField::Email)
                            on:input=on_input(ContactField::Email)
                        />
                    </FormField>
                    <FormField
                        label="Subject"
                        for_id="contact-subject"
                        hint="Optional"
                        error=error(ContactField::Subject)
                    >
                        <input
                            id="contact-subject"
                            class="input"
                            name=ContactField::Subject.key()
                            placeholder="How can we help?"
                            prop:value=value(ContactField::Subject)
                            on:input=on_input(ContactField::Subject)
                        />
                    </FormField>
                    <FormField label="Message" for_id="contact-message" error=error(ContactField::Message)>
                        <textarea
                            id="contact-message"
                            class="input input--textarea"
                            name=ContactField::Message.key()
                            rows="6"
                            placeholder="Write your message..."
                            prop:value=value(ContactField::Message)
                            on:input=on_input(ContactField::Message)
                        ></textarea>
                    </FormField>

                    <div class="contact-form__footer">
                        <button class="button button--primary" type="submit" disabled=sending>
                            {move || if sending() { SENDING } else { "Send message" }}
                        </button>
                        <span class="contact-form__note">"We typically respond within 1\u{2013}2 business days."</span>
                    </div>
                </form>
            </div>
        </Section>
    }
}
