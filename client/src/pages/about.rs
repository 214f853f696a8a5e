//! About page: who we are, mission and vision, EQUIP values.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::branded_card::BrandedCard;
use crate::components::cards::ValueCard;
use crate::components::section::Section;
use crate::components::youtube_embed::YouTubeEmbed;
use crate::util::brand::{Accent, Tone};
use crate::util::site_info::FEATURE_VIDEO_URL;

/// The EQUIP acronym, in order.
pub const VALUES: [(char, &str, &str); 5] = [
    ('E', "Equity", "Prioritizing underserved communities so every learner can access support and opportunity."),
    ('Q', "Quality", "Designing and delivering high-standard programs that improve learning outcomes."),
    ('U', "Understanding", "Listening to communities and responding to real needs with relevant solutions."),
    ('I', "Integrity", "Practicing transparency, accountability, and ethical stewardship in all partnerships."),
    ('P', "Purpose", "Staying focused on meaningful outcomes\u{2014}strong foundations for lifelong learning."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let values = VALUES
        .into_iter()
        .map(|(letter, word, desc)| view! { <ValueCard letter=letter word=word desc=desc/> })
        .collect_view();

    view! {
        <Title text="About"/>
        <Section
            eyebrow="About"
            title="Our story and mandate"
            subtitle="Who we are, why we exist, and the principles that guide our work."
        >
            <div class="grid grid--2 grid--stretch">
                <div class="stack">
                    <BrandedCard title="Who we are" tag="Foundation">
                        "Longhorn Foundation Trust is a Corporate Social Responsibility (CSR) initiative of \
                         Longhorn Publishers PLC. We exist to strengthen foundational learning outcomes by \
                         supporting schools, teachers, and communities with sustainable education interventions."
                    </BrandedCard>
                    <BrandedCard title="Where we work" tag="Region" tone=Tone::Wine>
                        "We focus on Kenya and the wider East Africa region, prioritizing underserved \
                         communities and supporting partners to improve early grade literacy and numeracy."
                    </BrandedCard>
                </div>
                <YouTubeEmbed
                    url=FEATURE_VIDEO_URL
                    title="Longhorn Foundation \u{2014} Community \u{2022} Literacy \u{2022} Impact"
                    blurb="A quick look at our work and community impact."
                />
            </div>
        </Section>

        <Section eyebrow="Direction" title="Mission and vision" accent=Tone::Brand heading_level=2>
            <div class="grid grid--2">
                <BrandedCard title="Mission" tag="Mission" accent=Accent::Top>
                    "Strengthen early literacy and numeracy through innovative, inclusive, and sustainable \
                     programs\u{2014}empowering teachers, supporting schools, and engaging communities."
                </BrandedCard>
                <BrandedCard title="Vision" tag="Vision" tone=Tone::Wine accent=Accent::Top>
                    "Transform education in Kenya and East Africa, ensuring every child builds strong \
                     foundational literacy and numeracy skills for meaningful contribution."
                </BrandedCard>
            </div>
        </Section>

        <Section
            eyebrow="Values"
            title="EQUIP"
            subtitle="The principles that guide how we work with learners, educators, and communities."
            heading_level=2
        >
            <div class="grid grid--5">{values}</div>
        </Section>
    }
}
