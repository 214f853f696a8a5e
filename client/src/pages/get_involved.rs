//! Get Involved page: engagement options and the three-step process.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button_link::ButtonLink;
use crate::components::cards::{BulletCard, CalloutBar, CardLink, StepCard};
use crate::components::section::Section;
use crate::util::brand::{ButtonVariant, Tone};
use crate::util::nav::SitePage;

const fn contact_link(label: &'static str) -> CardLink {
    CardLink { label, href: SitePage::Contact.path() }
}

#[component]
pub fn GetInvolvedPage() -> impl IntoView {
    view! {
        <Title text="Get Involved"/>
        <Section
            eyebrow="Get involved"
            title="Partner, support, or volunteer"
            subtitle="There are several ways to support stronger literacy and numeracy foundations. Choose what \
                      fits you or your organization."
        >
            <div class="hero__card">
                <div class="hero__grid">
                    <div>
                        <h2 class="panel__title">"What we\u{2019}re looking for"</h2>
                        <p class="panel__text">
                            "We collaborate with schools, communities, donors, and institutions to strengthen \
                             learning outcomes through practical support, resources, and teacher development."
                        </p>
                        <div class="panel__actions">
                            <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
                            <ButtonLink href=SitePage::Programs.path() variant=ButtonVariant::Ghost>
                                "View programs"
                            </ButtonLink>
                        </div>
                    </div>
                    <div class="panel panel--tinted">
                        <div class="panel__eyebrow">"Quick start"</div>
                        <h3 class="panel__title">"Tell us what you want to support"</h3>
                        <p class="panel__text">
                            "Share your interest (donation, partnership, volunteering, or a school request). \
                             We\u{2019}ll respond with the next steps and the right contact person."
                        </p>
                        <ButtonLink href=SitePage::Contact.path() variant=ButtonVariant::Wine>
                            "Start a conversation"
                        </ButtonLink>
                        <p class="panel__note">"We typically reply within normal business hours."</p>
                    </div>
                </div>
            </div>
        </Section>

        <Section
            eyebrow="Ways to support"
            title="Choose how you\u{2019}d like to engage"
            accent=Tone::Brand
            heading_level=2
        >
            <div class="grid grid--3">
                <BulletCard
                    title="Partner with us"
                    tag="Partnership"
                    desc="Collaborate on school or community initiatives that strengthen foundational skills."
                    bullets=&[
                        "Schools, NGOs, community groups, and institutions",
                        "Co-design initiatives based on local needs",
                        "Clear governance and measurable outcomes",
                    ]
                    link=contact_link("Discuss partnership")
                />
                <BulletCard
                    title="Support resources"
                    tag="Community"
                    desc="Help expand access to learning materials and strengthen learning environments."
                    bullets=&[
                        "Readers, textbooks, numeracy kits",
                        "Community learning hubs and safe spaces",
                        "Targeted support for underserved areas",
                    ]
                    tone=Tone::Wine
                    link=contact_link("Support a program")
                    link_variant=ButtonVariant::Wine
                />
                <BulletCard
                    title="Volunteer"
                    tag="Partnership"
                    desc="Contribute time and skills to support learning activities and community engagement."
                    bullets=&[
                        "Reading sessions and mentorship",
                        "Community outreach and events",
                        "Skills-based support (design, ops, MEL)",
                    ]
                    link=contact_link("Volunteer interest")
                />
            </div>
            <CalloutBar text="Not sure where you fit, or want to support a specific school/community?">
                <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
            </CalloutBar>
        </Section>

        <Section
            eyebrow="How it works"
            title="A simple engagement process"
            subtitle="We keep it clear and practical\u{2014}from first contact to implementation."
            heading_level=2
        >
            <div class="grid grid--3">
                <StepCard n=1 title="Reach out" desc="Tell us what you\u{2019}d like to support and where you are based."/>
                <StepCard
                    n=2
                    title="Align on scope"
                    desc="We clarify needs, timelines, and the most suitable program approach."
                    tone=Tone::Wine
                />
                <StepCard
                    n=3
                    title="Deliver & learn"
                    desc="We implement with partners and track results to improve outcomes."
                />
            </div>
            <CalloutBar text="Ready to begin? Let\u{2019}s work together to strengthen learning outcomes.">
                <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
            </CalloutBar>
        </Section>
    }
}
