//! Small content cards shared by the marketing pages.
//!
//! DESIGN
//! ======
//! Cards take `&'static` copy because all page text is compiled in. Tone
//! picks the accent colour through a BEM modifier; no card owns state.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::button_link::ButtonLink;
use crate::components::image_frame::ImageFrame;
use crate::util::brand::{ButtonVariant, Tone, cn, variant_class};

/// Headline figure with a left accent stripe.
#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    view! {
        <div class=variant_class("stat-card", tone.modifier())>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
            {hint.map(|text| view! { <div class="stat-card__hint">{text}</div> })}
        </div>
    }
}

/// Labelled highlight with a gradient top bar.
#[component]
pub fn MiniCard(
    label: &'static str,
    title: &'static str,
    desc: &'static str,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    view! {
        <div class=variant_class("mini-card", tone.modifier())>
            <div class="mini-card__label">{label}</div>
            <div class="mini-card__title">{title}</div>
            <p class="mini-card__desc">{desc}</p>
        </div>
    }
}

/// Dotted list used inside cards and hero panels.
#[component]
pub fn BulletList(items: &'static [&'static str], #[prop(optional)] tone: Tone) -> impl IntoView {
    view! {
        <ul class=variant_class("bullets", tone.modifier())>
            {items.iter().map(|item| view! { <li class="bullets__item">{*item}</li> }).collect_view()}
        </ul>
    }
}

/// Call to action rendered at the bottom of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Titled card with a tag, optional description, bullet list, and link.
///
/// Used for program pillars, program teasers, and engagement options.
#[component]
pub fn BulletCard(
    title: &'static str,
    tag: &'static str,
    #[prop(optional)] desc: Option<&'static str>,
    bullets: &'static [&'static str],
    #[prop(optional)] tone: Tone,
    #[prop(optional)] link: Option<CardLink>,
    #[prop(optional)] link_variant: ButtonVariant,
    /// Adds an image slot above the body.
    #[prop(optional)]
    with_image: bool,
) -> impl IntoView {
    view! {
        <div class=cn(&["bullet-card", &format!("bullet-card--{}", tone.modifier())])>
            {with_image.then(|| view! { <ImageFrame alt=title/> })}
            <div class="bullet-card__body">
                <div class="bullet-card__header">
                    <div class="bullet-card__title">{title}</div>
                    <Badge tone=tone>{tag}</Badge>
                </div>
                {desc.map(|text| view! { <p class="bullet-card__desc">{text}</p> })}
                <BulletList items=bullets tone=tone/>
                {link.map(|link| view! {
                    <div class="bullet-card__actions">
                        <ButtonLink href=link.href variant=link_variant>{link.label}</ButtonLink>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Short outcome statement with a left accent strip.
#[component]
pub fn OutcomeCard(title: &'static str, desc: &'static str, #[prop(optional)] tone: Tone) -> impl IntoView {
    view! {
        <div class=variant_class("outcome-card", tone.modifier())>
            <div class="outcome-card__title">{title}</div>
            <p class="outcome-card__desc">{desc}</p>
        </div>
    }
}

/// One letter of an acronym value set.
#[component]
pub fn ValueCard(letter: char, word: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="value-card">
            <div class="value-card__head">
                <span class="value-card__letter">{letter.to_string()}</span>
                <span class="value-card__word">{word}</span>
            </div>
            <p class="value-card__desc">{desc}</p>
        </div>
    }
}

/// Numbered process step.
#[component]
pub fn StepCard(n: u8, title: &'static str, desc: &'static str, #[prop(optional)] tone: Tone) -> impl IntoView {
    view! {
        <div class=variant_class("step-card", tone.modifier())>
            <div class="step-card__number">{n}</div>
            <div>
                <div class="step-card__title">{title}</div>
                <p class="step-card__desc">{desc}</p>
            </div>
        </div>
    }
}

/// Full-width tinted bar: a sentence on the left, actions on the right.
#[component]
pub fn CalloutBar(text: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="callout">
            <div class="callout__text">{text}</div>
            <div class="callout__actions">{children()}</div>
        </div>
    }
}

/// Solid brand gradient panel used for closing calls to action.
#[component]
pub fn CtaPanel(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] body: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="cta-panel">
            <div class="cta-panel__eyebrow">{eyebrow}</div>
            <h3 class="cta-panel__title">{title}</h3>
            {body.map(|text| view! { <p class="cta-panel__body">{text}</p> })}
            <div class="cta-panel__actions">{children()}</div>
        </div>
    }
}
