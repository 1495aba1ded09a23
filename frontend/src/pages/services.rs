use yew::prelude::*;

use crate::head::{use_page_meta, PageMeta};
use crate::components::icon::{Icon, OfferingIcon};
use crate::pages::common::{use_scroll_to_top, Offering};

pub const SERVICES: [Offering; 8] = [
    Offering {
        title: "AI Strategy & Roadmapping",
        icon: Icon::BrainCircuit,
        description: "Align your business goals with practical AI initiatives. We design data-driven roadmaps, calculate ROI, and prioritise high-impact use-cases.",
    },
    Offering {
        title: "Machine Learning Development",
        icon: Icon::Code,
        description: "We build, train, and deploy bespoke ML models that integrate seamlessly with your products and workflows.",
    },
    Offering {
        title: "Generative AI Solutions",
        icon: Icon::Sparkles,
        description: "Unlock LLMs and diffusion models to automate content, code, and design, securely and at scale.",
    },
    Offering {
        title: "DevOps Automation & CI/CD",
        icon: Icon::Settings,
        description: "Cut release cycles with IaC, container orchestration, and self-healing pipelines.",
    },
    Offering {
        title: "Cloud Architecture & Migration",
        icon: Icon::Cloud,
        description: "Modernise legacy workloads or build green-field platforms on AWS, Azure, or GCP.",
    },
    Offering {
        title: "Data Engineering & Warehousing",
        icon: Icon::Database,
        description: "From ELT to real-time streams, we convert raw data into actionable insight.",
    },
    Offering {
        title: "AI Governance & Compliance",
        icon: Icon::ShieldCheck,
        description: "Policies, audit trails, and explainability frameworks that keep your AI ethical and secure.",
    },
    Offering {
        title: "Intelligent Process Automation",
        icon: Icon::Workflow,
        description: "Combine RPA with cognitive services to eliminate repetitive tasks and boost productivity.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    use_page_meta(PageMeta::services());
    use_scroll_to_top();

    html! {
        <section class="services-page">
            <style>
                {r#"
                    .services-page {
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .services-page h1 {
                        text-align: center;
                        font-size: 2.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .services-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 1fr;
                    }
                    @media (min-width: 768px) {
                        .services-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .service-card {
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                    }
                    .service-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .service-card p {
                        font-size: 0.875rem;
                        line-height: 1.375;
                        color: #e5e7eb;
                    }
                "#}
            </style>
            <h1>{"Our Services"}</h1>
            <div class="services-grid">
                { SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.title}>
                        <div class="service-title">
                            <OfferingIcon icon={service.icon} size={28} />
                            <span>{service.title}</span>
                        </div>
                        <p>{service.description}</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_titles_are_unique() {
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }
}
