use yew::prelude::*;

use crate::cycler::{arm, CyclerState, GlooTimers, PhraseList, Timings};

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub phrases: PhraseList,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = use_state(CyclerState::start);

    // One timeout per rendered state. The destructor runs before the next
    // state's effect and on unmount, so a stale tick can never land.
    {
        let setter = state.setter();
        use_effect_with_deps(
            move |(current, phrases, timings)| {
                let timeout = arm(&GlooTimers, *current, phrases, timings, move |next| {
                    setter.set(next)
                });
                move || drop(timeout)
            },
            (*state, props.phrases.clone(), props.timings),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .typewriter {
                        font-weight: 800;
                        border-right: 2px solid #f3f4f6;
                        padding-right: 0.25rem;
                        white-space: pre;
                    }
                "#}
            </style>
            <span class="typewriter">{ state.visible_text(&props.phrases) }</span>
        </>
    }
}
