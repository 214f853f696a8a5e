//! Policies page: transparency intro and the policy library.

#[cfg(test)]
#[path = "policies_test.rs"]
mod policies_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button_link::ButtonLink;
use crate::components::cards::CalloutBar;
use crate::components::image_frame::{Aspect, ImageFrame};
use crate::components::policy_card::PolicyCard;
use crate::components::section::Section;
use crate::util::brand::{ButtonVariant, Tone};
use crate::util::nav::SitePage;

/// One entry of the public policy library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyDoc {
    pub title: &'static str,
    pub desc: &'static str,
    /// Served from the public directory; `None` while only available on request.
    pub href: Option<&'static str>,
    pub tag: &'static str,
}

pub const POLICY_DOCS: [PolicyDoc; 4] = [
    PolicyDoc {
        title: "Safeguarding Policy",
        desc: "Commitment to child protection, safe programming, and reporting procedures.",
        href: None,
        tag: "Safeguarding",
    },
    PolicyDoc {
        title: "Data Protection & Privacy",
        desc: "How we handle data responsibly and protect personal information.",
        href: Some("/policies/data-protection-privacy.pdf"),
        tag: "Compliance",
    },
    PolicyDoc {
        title: "Financial Management Policy",
        desc: "Controls and processes for responsible financial stewardship.",
        href: Some("/policies/financial-management-policy.pdf"),
        tag: "Finance",
    },
    PolicyDoc {
        title: "Code of Conduct",
        desc: "Expected behavior, ethics, and accountability for staff, volunteers, and partners.",
        href: None,
        tag: "Ethics",
    },
];

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let library = POLICY_DOCS
        .into_iter()
        .map(|doc| view! { <PolicyCard title=doc.title description=doc.desc href=doc.href tag=doc.tag/> })
        .collect_view();

    view! {
        <Title text="Policies"/>
        <Section
            eyebrow="Policies"
            title="Policies & public documents"
            subtitle="Transparency matters. Below are key governance and safeguarding documents available to \
                      partners and the public."
        >
            <div class="grid grid--2 grid--stretch">
                <div class="panel panel--gradient-top">
                    <h2 class="panel__title">"Transparency"</h2>
                    <p class="panel__text">
                        "These policies guide ethical practice, safeguarding, responsible partnerships, and sound \
                         stewardship. If you need a document not listed here, please contact us."
                    </p>
                    <div class="panel__actions">
                        <ButtonLink href=SitePage::Contact.path()>"Request a document"</ButtonLink>
                        <ButtonLink href=SitePage::Governance.path() variant=ButtonVariant::Ghost>
                            "View governance"
                        </ButtonLink>
                    </div>
                    <p class="panel__note">"Documents are provided in PDF format and may be updated periodically."</p>
                </div>
                <div class="panel panel--wine">
                    <ImageFrame
                        alt="Policies"
                        caption="Optional: add a policies/handbook image."
                        aspect=Aspect::Landscape
                    />
                </div>
            </div>
        </Section>

        <Section eyebrow="Documents" title="Policy library" accent=Tone::Brand heading_level=2>
            <div class="grid grid--2">{library}</div>
            <CalloutBar text="For due diligence or partnerships, we can share additional documentation on request.">
                <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
            </CalloutBar>
        </Section>
    }
}
