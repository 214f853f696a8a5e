//! Governance page: model, structure, board, and management.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::branded_card::BrandedCard;
use crate::components::button_link::ButtonLink;
use crate::components::cards::{BulletList, CalloutBar};
use crate::components::image_frame::{Aspect, ImageFrame};
use crate::components::person_card::PersonCard;
use crate::components::section::Section;
use crate::util::brand::{Accent, ButtonVariant, Tone};
use crate::util::nav::SitePage;

/// Placeholder listings until the official names are published.
pub static BOARD: [(&str, &str); 3] =
    [("Name Surname", "Chairperson"), ("Name Surname", "Trustee"), ("Name Surname", "Trustee")];

pub static MANAGEMENT: [(&str, &str); 3] = [
    ("Name Surname", "Executive Director"),
    ("Name Surname", "Programs & Partnerships"),
    ("Name Surname", "Operations & Compliance"),
];

fn people(list: &'static [(&'static str, &'static str)]) -> impl IntoView {
    list.iter().map(|(name, role)| view! { <PersonCard name=*name role=*role/> }).collect_view()
}

#[component]
pub fn GovernancePage() -> impl IntoView {
    view! {
        <Title text="Governance"/>
        <div class="tinted">
            <Section
                eyebrow="Governance"
                title="Leadership & accountability"
                subtitle="Good governance protects learners, strengthens partnerships, and ensures responsible \
                          stewardship of resources."
            >
                <div class="grid grid--2 grid--stretch">
                    <div class="panel panel--gradient-top">
                        <h2 class="panel__title">"How we are governed"</h2>
                        <p class="panel__text">
                            "The Foundation is guided by a Board of Trustees that provides strategic oversight and \
                             accountability, supported by a management team responsible for operations and program \
                             delivery."
                        </p>
                        <BulletList items=&[
                            "Strategic oversight and responsible stewardship",
                            "Transparent decision-making and compliance",
                            "Safeguarding and ethical partnerships",
                            "Clear accountability for results and learning (MEL)",
                        ]/>
                        <div class="panel__actions">
                            <ButtonLink href=SitePage::Policies.path() variant=ButtonVariant::Ghost>
                                "View policies"
                            </ButtonLink>
                            <ButtonLink href=SitePage::Contact.path()>"Partner with us"</ButtonLink>
                        </div>
                    </div>
                    <div class="panel panel--wine">
                        <ImageFrame
                            alt="Governance"
                            caption="Add a governance/board image here (optional)."
                            aspect=Aspect::Landscape
                        />
                    </div>
                </div>
            </Section>

            <Section
                eyebrow="Structure"
                title="How oversight and delivery work together"
                subtitle="A simple model: the Board governs; management delivers."
                accent=Tone::Brand
                heading_level=2
            >
                <div class="grid grid--3">
                    <BrandedCard title="Board of Trustees" tag="Oversight" tone=Tone::Wine accent=Accent::Top>
                        "Provides strategic direction, governance oversight, and accountability to ensure the \
                         Foundation remains aligned to its mandate."
                    </BrandedCard>
                    <BrandedCard title="Management Team" tag="Delivery" accent=Accent::Top>
                        "Leads day-to-day operations and program implementation, coordinating partners and \
                         ensuring quality delivery."
                    </BrandedCard>
                    <BrandedCard title="Accountability & Learning" tag="MEL" accent=Accent::Top>
                        "Monitoring, Evaluation & Learning (MEL) supports transparency, tracks progress, and helps \
                         improve program effectiveness."
                    </BrandedCard>
                </div>
                <CalloutBar text="Need documentation for a partnership or due diligence?">
                    <ButtonLink href=SitePage::Policies.path() variant=ButtonVariant::Ghost>"Policies"</ButtonLink>
                    <ButtonLink href=SitePage::Contact.path() variant=ButtonVariant::Wine>
                        "Request documents"
                    </ButtonLink>
                </CalloutBar>
            </Section>

            <Section eyebrow="Board" title="Board of Trustees" heading_level=2>
                <p class="section__lead">
                    "The Board of Trustees provides oversight, approves strategic priorities, and supports \
                     integrity and accountability across operations and partnerships."
                </p>
                <div class="grid grid--3">{people(&BOARD)}</div>
                <p class="section__note">
                    "Replace names/roles with the official list from your Foundation Profile."
                </p>
            </Section>

            <Section
                eyebrow="Management"
                title="Management Team"
                subtitle="The management team supports day-to-day delivery and partnership coordination."
                accent=Tone::Brand
                heading_level=2
            >
                <div class="grid grid--3">{people(&MANAGEMENT)}</div>
                <CalloutBar text="Work with us: let\u{2019}s build a partnership with clear governance and measurable outcomes.">
                    <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
                </CalloutBar>
            </Section>
        </div>
    }
}
