use log::warn;
use yew::prelude::*;

use crate::components::typewriter::Typewriter;
use crate::cycler::PhraseList;
use crate::head::{use_page_meta, PageMeta};
use crate::components::icon::{Icon, OfferingIcon};
use crate::pages::common::{use_scroll_to_top, Offering};

const SPECIALTIES: [&str; 6] = [
    "AI Integration",
    "Business Process Automation",
    "Executive AI Strategy",
    "DevOps Automation",
    "Data Engineering",
    "Cloud Infrastructure",
];

const HIGHLIGHTS: [Offering; 3] = [
    Offering {
        title: "Executive AI Advisory",
        icon: Icon::BrainCircuit,
        description: "Board-level guidance on AI investments, ethics, and risk, turning buzzwords into bottom-line impact.",
    },
    Offering {
        title: "Custom AI Solutions",
        icon: Icon::Sparkles,
        description: "We architect, train, and deploy models tailored to your data, wrapped in secure, scalable APIs.",
    },
    Offering {
        title: "Full-Stack Delivery",
        icon: Icon::Settings,
        description: "From data pipelines to MLOps, we operationalise AI so it runs, scales, and improves continuously.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(PageMeta::home());
    use_scroll_to_top();

    let phrases = use_memo(|_| PhraseList::new(SPECIALTIES), ());

    let typewriter = match &*phrases {
        Ok(phrases) => html! { <Typewriter phrases={phrases.clone()} /> },
        Err(e) => {
            warn!("Typewriter disabled: {}", e);
            html! {}
        }
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .home-page h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .home-page h2 {
                        font-size: 1.5rem;
                        font-weight: 400;
                        margin: 0.75rem 0 0;
                    }
                    .highlights {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .highlight-card {
                        max-width: 20rem;
                        padding: 1.25rem;
                        text-align: center;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                    }
                    .highlight-card h3 {
                        font-size: 1.125rem;
                        margin: 0.5rem 0;
                    }
                    .highlight-card p {
                        font-size: 0.875rem;
                        color: #e5e7eb;
                    }
                "#}
            </style>
            <div class="hero">
                <h1>{"DataForge IT Solutions"}</h1>
                <h2>
                    {"Your premiere partner for "}
                    { typewriter }
                </h2>
            </div>
            <div class="highlights">
                { HIGHLIGHTS.iter().map(|item| html! {
                    <div class="highlight-card" key={item.title}>
                        <OfferingIcon icon={item.icon} />
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </div>
    }
}
