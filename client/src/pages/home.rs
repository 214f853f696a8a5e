//! Landing page: hero, program teasers, and why-it-matters.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::Badge;
use crate::components::button_link::ButtonLink;
use crate::components::cards::{BulletCard, CalloutBar, CardLink, CtaPanel, MiniCard, StatCard};
use crate::components::section::Section;
use crate::util::brand::{ButtonVariant, Tone};
use crate::util::nav::SitePage;

const VIEW_PROGRAMS: CardLink = CardLink { label: "View programs", href: SitePage::Programs.path() };

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <section class="hero">
            <div class="hero__card">
                <div class="hero__grid">
                    <div>
                        <div class="hero__pills">
                            <Badge>"CSR initiative \u{2022} Longhorn Publishers PLC"</Badge>
                            <Badge tone=Tone::Wine>"Kenya & East Africa"</Badge>
                        </div>
                        <h1 class="hero__title">"Strong foundations for lifelong learning."</h1>
                        <p class="hero__lead">
                            "We support early grade literacy and numeracy by strengthening teaching, expanding \
                             access to learning resources, and building community support around the learner."
                        </p>
                        <div class="hero__actions">
                            <ButtonLink href=SitePage::GetInvolved.path()>"Get Involved"</ButtonLink>
                            <ButtonLink href=SitePage::Programs.path() variant=ButtonVariant::Ghost>
                                "Explore Programs"
                            </ButtonLink>
                        </div>
                        <div class="hero__points">
                            <span class="hero__point">"Teacher training & coaching"</span>
                            <span class="hero__point">"Learning resources & practice"</span>
                            <span class="hero__point">"Community learning spaces"</span>
                        </div>
                        <CalloutBar text="Learn who we are, what guides our work, and how we stay accountable.">
                            <ButtonLink href=SitePage::About.path() variant=ButtonVariant::Secondary>
                                "About the foundation"
                            </ButtonLink>
                        </CalloutBar>
                    </div>
                    <div class="stack">
                        <MiniCard
                            label="Focus"
                            title="Early grade foundations"
                            desc="Literacy and numeracy foundations that unlock learning across all subjects."
                        />
                        <MiniCard
                            label="Delivery"
                            title="Schools, teachers, communities"
                            desc="Support is designed around the learner\u{2014}inside classrooms and beyond school."
                            tone=Tone::Wine
                        />
                        <div class="grid grid--2">
                            <StatCard
                                value="Inclusive"
                                label="Equity-first"
                                hint="Prioritizing underserved and marginalized communities."
                            />
                            <StatCard
                                value="Evidence"
                                label="Data-driven"
                                hint="MEL supports learning and continuous improvement."
                                tone=Tone::Wine
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>

        <Section
            eyebrow="Programs"
            title="How we deliver impact"
            subtitle="A quick look at our program pillars. Full details live on the Programs page."
            heading_level=2
        >
            <div class="grid grid--3">
                <BulletCard
                    title="Literacy Support"
                    tag="Pillar"
                    bullets=&[
                        "Reading fluency & comprehension practice",
                        "Supportive learning materials",
                        "Teacher coaching for literacy instruction",
                    ]
                    link=VIEW_PROGRAMS
                    link_variant=ButtonVariant::Ghost
                />
                <BulletCard
                    title="Numeracy Support"
                    tag="Pillar"
                    bullets=&[
                        "Number sense & problem-solving activities",
                        "Practical tools for classroom learning",
                        "Support for learners who need a boost",
                    ]
                    link=VIEW_PROGRAMS
                    link_variant=ButtonVariant::Ghost
                />
                <BulletCard
                    title="Community Learning Hubs"
                    tag="Access"
                    bullets=&[
                        "Reading culture beyond school",
                        "Partnerships with hubs & libraries",
                        "Community participation & ownership",
                    ]
                    tone=Tone::Wine
                    link=VIEW_PROGRAMS
                    link_variant=ButtonVariant::Ghost
                />
            </div>
            <CalloutBar text="Want to partner, donate, or support a school initiative? Let\u{2019}s talk.">
                <ButtonLink href=SitePage::Programs.path() variant=ButtonVariant::Secondary>
                    "View all programs"
                </ButtonLink>
                <ButtonLink href=SitePage::Contact.path()>"Contact us"</ButtonLink>
            </CalloutBar>
        </Section>

        <Section
            eyebrow="Why it matters"
            title="Closing the gap between schooling and learning"
            subtitle="Enrollment has increased, but too many learners still miss foundational skills. We focus on \
                      early intervention where it matters most."
            accent=Tone::Brand
            heading_level=2
        >
            <div class="grid grid--3">
                <StatCard
                    value="Early grades"
                    label="Highest leverage"
                    hint="Foundational skills unlock learning across all subjects."
                />
                <StatCard
                    value="Underserved"
                    label="Priority communities"
                    hint="Rural, informal settlements, and marginalized regions."
                    tone=Tone::Wine
                />
                <StatCard
                    value="Measurable"
                    label="Accountable impact"
                    hint="Monitoring, Evaluation & Learning informs continuous improvement."
                />
            </div>
            <div class="grid grid--2">
                <div class="panel panel--wine-top">
                    <div class="panel__eyebrow">"Transparency"</div>
                    <p class="panel__text">
                        "Learn more about our governance structures, oversight, and stewardship."
                    </p>
                    <ButtonLink href=SitePage::Governance.path() variant=ButtonVariant::Ghost>
                        "View governance"
                    </ButtonLink>
                </div>
                <CtaPanel
                    eyebrow="Ready to collaborate?"
                    title="Partner with us to grow learning outcomes."
                    body="We work with schools, communities, government, NGOs, and donors to expand reach and \
                          strengthen foundational learning."
                >
                    <ButtonLink href=SitePage::GetInvolved.path() variant=ButtonVariant::Secondary>
                        "Ways to get involved"
                    </ButtonLink>
                    <ButtonLink href=SitePage::Contact.path() variant=ButtonVariant::Ghost>"Talk to us"</ButtonLink>
                </CtaPanel>
            </div>
        </Section>
    }
}
