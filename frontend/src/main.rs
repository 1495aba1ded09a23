use log::{info, warn, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use yew_router::prelude::*;

mod config;
mod cycler;
mod head;
mod components {
    pub mod icon;
    pub mod typewriter;
}
mod contact {
    pub mod flow;
    pub mod form;
    pub mod relay;
}
mod pages {
    pub mod common;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use config::COMPANY_NAME;
use pages::{contact::Contact, home::Home, services::Services};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                <img src={head::LOGO_PATH} alt="DataForge IT Solutions logo" decoding="async" />
            </Link<Route>>

            <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class={menu_class}>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                </div>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                </div>
                <div onclick={close_menu}>
                    <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #111827;
                    }
                    .site {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                        color: #f3f4f6;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        background-color: #0b1220;
                        background-image: url('/assets/chip-line-background.svg');
                        background-repeat: repeat;
                    }
                    .site-dim {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        pointer-events: none;
                    }
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        padding: 1rem;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(17, 24, 39, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .nav-logo img {
                        height: 6rem;
                        width: auto;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                        font-size: 1.125rem;
                        white-space: nowrap;
                    }
                    .nav-link {
                        color: inherit;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        text-decoration: underline;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #f3f4f6;
                    }
                    .offering-icon {
                        display: block;
                        flex-shrink: 0;
                        color: #93c5fd;
                    }
                    .highlight-card .offering-icon {
                        margin: 0 auto;
                    }
                    .site-main {
                        position: relative;
                        flex-grow: 1;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 2rem;
                    }
                    .site-footer {
                        position: relative;
                        padding: 1rem 0;
                        text-align: center;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            right: 1rem;
                            padding: 1rem;
                            gap: 1rem;
                            border-radius: 0.5rem;
                            background: rgba(17, 24, 39, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="site-dim"></div>
            <Nav />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <footer class="site-footer">
                {format!("© 2023 {}", COMPANY_NAME)}
            </footer>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            if let Err(e) = head::inject_json_ld(&head::organization_json_ld()) {
                warn!("Failed to inject organization markup: {:?}", e);
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/services"), Some(Route::Services));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::Contact.to_path(), "/contact");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn layout_background_is_shipped_with_the_site() {
        let shipped = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets/chip-line-background.svg");
        assert!(shipped.is_file(), "missing {}", shipped.display());
    }
}
