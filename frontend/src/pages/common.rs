use yew::prelude::*;

use crate::components::icon::Icon;

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// A titled card with an icon, shared by the home highlights and the
/// services catalog.
#[derive(Clone, Copy, PartialEq)]
pub struct Offering {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}
