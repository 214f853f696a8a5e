//! Programs page: focus, overview video, pillars, implementation.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::Badge;
use crate::components::button_link::ButtonLink;
use crate::components::cards::{BulletCard, CalloutBar, CardLink, OutcomeCard};
use crate::components::section::Section;
use crate::components::youtube_embed::YouTubeEmbed;
use crate::util::brand::{ButtonVariant, Tone};
use crate::util::nav::SitePage;
use crate::util::site_info::FEATURE_VIDEO_URL;

const PARTNER: CardLink = CardLink { label: "Partner with us", href: SitePage::Contact.path() };

#[component]
pub fn ProgramsPage() -> impl IntoView {
    view! {
        <Title text="Programs"/>
        <Section
            eyebrow="Programs"
            title="What we do"
            subtitle="Our programs strengthen early grade literacy and numeracy through practical support for \
                      learners, teachers, and learning spaces."
        >
            <div class="grid grid--2 grid--stretch">
                <div class="panel panel--gradient-top">
                    <div class="hero__pills">
                        <Badge>"Foundational learning"</Badge>
                        <Badge tone=Tone::Wine>"Teacher support"</Badge>
                        <Badge>"Community learning"</Badge>
                    </div>
                    <div class="panel__eyebrow">"Primary focus"</div>
                    <h2 class="panel__title">"Literacy & Numeracy foundations"</h2>
                    <p class="panel__text">
                        "We focus on early skills because they unlock learning across all subjects. Our role is \
                         to strengthen classroom practice, expand access to learning resources, and build \
                         community support around the learner."
                    </p>
                    <div class="panel__actions">
                        <ButtonLink href=SitePage::GetInvolved.path() variant=ButtonVariant::Ghost>
                            "Ways to get involved"
                        </ButtonLink>
                        <ButtonLink href=SitePage::Contact.path()>"Partner with us"</ButtonLink>
                    </div>
                </div>
                <YouTubeEmbed
                    url=FEATURE_VIDEO_URL
                    title="Longhorn Foundation Programs \u{2014} Overview"
                    label="Programs"
                    blurb="A short overview of how our work supports learners and teachers."
                />
            </div>
        </Section>

        <Section eyebrow="Focus areas" title="Program pillars" accent=Tone::Brand heading_level=2>
            <div class="grid grid--3">
                <BulletCard
                    title="Literacy Support"
                    tag="Pillar"
                    desc="Strengthening reading fluency, comprehension, vocabulary, and foundational language \
                          skills in early grades."
                    bullets=&[
                        "Reading practice and structured support",
                        "Supportive learning materials",
                        "Teacher coaching for literacy instruction",
                    ]
                    link=PARTNER
                    with_image=true
                />
                <BulletCard
                    title="Numeracy Support"
                    tag="Pillar"
                    desc="Building confidence with numbers, problem-solving, and practical numeracy skills for \
                          everyday learning."
                    bullets=&[
                        "Number sense and problem-solving activities",
                        "Classroom-friendly tools and methods",
                        "Support for learners who need a boost",
                    ]
                    link=PARTNER
                    with_image=true
                />
                <BulletCard
                    title="Community Learning Hubs"
                    tag="Access"
                    desc="Creating and strengthening spaces beyond the classroom where children can read, \
                          practice, and stay engaged."
                    bullets=&[
                        "Partnerships with libraries and learning centers",
                        "After-school reading and learning sessions",
                        "Community participation and ownership",
                    ]
                    tone=Tone::Wine
                    link=PARTNER
                    with_image=true
                />
            </div>
        </Section>

        <Section
            eyebrow="In practice"
            title="What implementation can include"
            subtitle="Programs are adapted to context\u{2014}school needs, community priorities, and partnership models."
            heading_level=2
        >
            <div class="grid grid--3">
                <OutcomeCard
                    title="Teacher training & coaching"
                    desc="Workshops, mentorship, and practical tools that strengthen instruction and classroom routines."
                />
                <OutcomeCard
                    title="Learning resources"
                    desc="Textbooks, readers, numeracy kits, and supportive materials that increase practice and \
                          engagement."
                    tone=Tone::Wine
                />
                <OutcomeCard
                    title="Community engagement"
                    desc="Reading culture initiatives, parent/community participation, and locally supported \
                          learning spaces."
                />
            </div>
            <CalloutBar text="Looking for a partnership, school support, or a community initiative?">
                <ButtonLink href=SitePage::Contact.path()>"Start a conversation"</ButtonLink>
            </CalloutBar>
        </Section>
    }
}
