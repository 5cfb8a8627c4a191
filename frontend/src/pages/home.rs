use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::book_call::BookCallWidget;
use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqSection;
use crate::scroll_to_section;

const SERVICES: &[(&str, &str)] = &[
    (
        "AI MVP Build",
        "A working AI product in weeks: one core workflow, built end to end \
         and ready to put in front of users.",
    ),
    (
        "Standard AI Product",
        "Core and Plus tiers for taking a validated idea to a production \
         system, with the integrations your team actually uses.",
    ),
    (
        "Workflow Automation",
        "Replace the copy-paste between your tools with automations that run \
         themselves and tell you when something needs a human.",
    ),
    (
        "Website Development",
        "Fast, focused marketing sites that explain what you do and convert \
         visitors into conversations.",
    ),
];

#[derive(Clone, Copy, PartialEq)]
enum Tier {
    Core,
    Plus,
}

impl Tier {
    fn section_id(self) -> &'static str {
        match self {
            Self::Core => "tier-core",
            Self::Plus => "tier-plus",
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_tier = use_state(|| Tier::Core);

    let select_tier = |tier: Tier| {
        let active_tier = active_tier.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active_tier.set(tier);
            scroll_to_section(tier.section_id());
        })
    };

    let year = chrono::Utc::now().year();

    html! {
        <div class="home-page">
            <header class="hero" id="top">
                <div class="hero-content">
                    <h1 class="hero-title">{"AI products, built and shipped"}</h1>
                    <p class="hero-subtitle">
                        {"From MVP to production: we design, build, and deliver \
                          AI systems that earn their keep."}
                    </p>
                    <button
                        class="hero-cta"
                        onclick={Callback::from(|e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section("contact");
                        })}
                    >
                        {"Start a Project"}
                    </button>
                </div>
            </header>

            <section id="services" class="services-section">
                <h2>{"What We Build"}</h2>
                <div class="services-grid">
                    {
                        for SERVICES.iter().map(|(title, description)| html! {
                            <div class="service-card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="pricing" class="pricing-section">
                <h2>{"Standard AI Product"}</h2>
                <div class="tier-buttons">
                    <button
                        class={classes!("tier-btn", (*active_tier == Tier::Core).then_some("active"))}
                        onclick={select_tier(Tier::Core)}
                    >
                        {"Core"}
                    </button>
                    <button
                        class={classes!("tier-btn", (*active_tier == Tier::Plus).then_some("active"))}
                        onclick={select_tier(Tier::Plus)}
                    >
                        {"Plus"}
                    </button>
                </div>
                {
                    match *active_tier {
                        Tier::Core => html! {
                            <div id="tier-core" class="tier-content active">
                                <h3>{"Core"}</h3>
                                <p>
                                    {"The essential production build: one AI workflow, \
                                      admin tooling, deployment, and a handover your \
                                      team can run with."}
                                </p>
                            </div>
                        },
                        Tier::Plus => html! {
                            <div id="tier-plus" class="tier-content active">
                                <h3>{"Plus"}</h3>
                                <p>
                                    {"Everything in Core plus custom integrations, \
                                      analytics, and a longer iteration period after \
                                      launch."}
                                </p>
                            </div>
                        },
                    }
                }
            </section>

            <FaqSection />

            <section id="contact" class="contact-section">
                <h2>{"Tell Us About Your Project"}</h2>
                <p>{"Fill in the form and we'll get back to you within one business day."}</p>
                <ContactForm />
            </section>

            <BookCallWidget />

            <footer class="site-footer">
                <p>{format!("© {} GenAIWorks. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}
