use yew::prelude::*;

/// Line icons for the offering cards, drawn on a 24x24 stroke grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BrainCircuit,
    Code,
    Sparkles,
    Settings,
    Cloud,
    Database,
    ShieldCheck,
    Workflow,
}

impl Icon {
    /// Path data for every stroke of the icon.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::BrainCircuit => &[
                "M12 5a3 3 0 1 0-6 .1 4 4 0 0 0-2.5 5.8 4 4 0 0 0 .5 6.6A4 4 0 1 0 12 18Z",
                "M9 13a4.5 4.5 0 0 0 3-4",
                "M12 13h4",
                "M12 18h6a2 2 0 0 1 2 2v1",
                "M12 8h8",
                "M16 8V5a2 2 0 0 1 2-2",
            ],
            Icon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Icon::Sparkles => &[
                "M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7Z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            Icon::Settings => &[
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M12 1v4M12 19v4M4.2 4.2l2.8 2.8M17 17l2.8 2.8M1 12h4M19 12h4M4.2 19.8 7 17M17 7l2.8-2.8",
            ],
            Icon::Cloud => &["M18 10h-1.3A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10Z"],
            Icon::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Icon::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z",
                "M9 12l2 2 4-4",
            ],
            Icon::Workflow => &[
                "M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z",
                "M7 11v4a2 2 0 0 0 2 2h4",
                "M15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2Z",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OfferingIconProps {
    pub icon: Icon,
    #[prop_or(32)]
    pub size: u32,
}

#[function_component(OfferingIcon)]
pub fn offering_icon(props: &OfferingIconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class="offering-icon"
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 8] = [
        Icon::BrainCircuit,
        Icon::Code,
        Icon::Sparkles,
        Icon::Settings,
        Icon::Cloud,
        Icon::Database,
        Icon::ShieldCheck,
        Icon::Workflow,
    ];

    #[test]
    fn every_icon_draws_something() {
        for icon in ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{:?} has no strokes", icon);
            assert!(paths.iter().all(|d| d.starts_with('M')), "{:?}", icon);
        }
    }
}
