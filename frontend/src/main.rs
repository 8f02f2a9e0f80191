use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod preload;
mod slider;
mod gallery;
mod webhook;
mod components {
    pub mod comparison;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod reviews;
    pub mod services;
    pub mod why;
}
mod pages {
    pub mod contact;
    pub mod contact_models;
    pub mod faq;
    pub mod home;
    pub mod status;
}

use components::footer::Footer;
use pages::{
    contact::Contact,
    faq::Faq,
    home::{scroll_to_section, Home, ScrollTarget},
    status::{StatusKind, StatusPage},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[at("/maintenance")]
    Maintenance,
    #[at("/coming-soon")]
    ComingSoon,
    #[at("/success")]
    Success,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/error")]
    Error,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Maintenance => {
            info!("Rendering Maintenance page");
            html! { <StatusPage kind={StatusKind::Maintenance} /> }
        },
        Route::ComingSoon => {
            info!("Rendering Coming Soon page");
            html! { <StatusPage kind={StatusKind::ComingSoon} /> }
        },
        Route::Success => {
            info!("Rendering Success page");
            html! { <StatusPage kind={StatusKind::Success} /> }
        },
        Route::Unauthorized => {
            info!("Rendering Unauthorized page");
            html! { <StatusPage kind={StatusKind::Unauthorized} /> }
        },
        Route::Error => {
            info!("Rendering Error page");
            html! { <StatusPage kind={StatusKind::ServerError} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <StatusPage kind={StatusKind::NotFound} /> }
        },
    }
}

/// Header entries that live as sections on the home page.
const SECTION_LINKS: [(&str, &str); 3] = [
    ("Review", "review"),
    ("Gallery", "gallery"),
    ("Services", "services"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let navigator = use_navigator();
    let on_home = use_route::<Route>() == Some(Route::Home);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    // Scroll in place on the home page, otherwise carry the target through history state.
    let go_to_section = |section: &'static str| {
        let navigator = navigator.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(e);
            if on_home {
                scroll_to_section(section);
            } else if let Some(navigator) = &navigator {
                info!("Navigating home to reach {}", section);
                navigator.push_with_state(&Route::Home, ScrollTarget::new(section));
            }
        })
    };

    let nav_links = |class: &'static str| {
        html! {
            <>
                { for SECTION_LINKS.iter().map(|&(label, section)| html! {
                    <button key={label} class={class} onclick={go_to_section(section)}>
                        <span>{label}</span>
                    </button>
                }) }
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Contact} classes={classes!(class)}>
                        <span>{"Contact"}</span>
                    </Link<Route>>
                </div>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Faq} classes={classes!(class)}>
                        <span>{"FAQ"}</span>
                    </Link<Route>>
                </div>
            </>
        }
    };

    html! {
        <>
            <header class={classes!("top-nav", (*menu_open).then(|| "menu-open"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <img src={config::asset_url("logo.png")} alt="Central Florida Window Cleaners logo" draggable="false" />
                    </Link<Route>>

                    <nav class="nav-links">
                        { nav_links("nav-link") }
                    </nav>

                    <div class="nav-cta">
                        <Link<Route> to={Route::Contact} classes="nav-quote quote-button">
                            {"Get a Quote"}
                        </Link<Route>>
                    </div>

                    <button class={classes!("burger-menu", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-overlay" onclick={close_menu.clone()}></div>
                    <div class="mobile-panel">
                        { nav_links("mobile-link") }
                        <div class="mobile-divider"></div>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact} classes="nav-quote quote-button">
                                {"Get a Quote"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

const GLOBAL_STYLES: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: #f9fafb;
    color: #111827;
}
@keyframes wiggle {
    0%, 100% { transform: rotate(-1deg) scale(1.1); }
    50% { transform: rotate(1deg) scale(1.1); }
}
.quote-button {
    transition: all 0.3s ease;
}
.quote-button:hover {
    animation: wiggle 0.2s ease-in-out infinite;
}
.cta-button {
    display: inline-block;
    background: #f97316;
    color: #fff;
    padding: 0.75rem 2rem;
    border-radius: 0.25rem;
    font-size: 1.125rem;
    font-weight: 500;
    text-decoration: none;
}
.top-nav {
    position: relative;
    z-index: 50;
    width: 100%;
    background: #005389;
}
.top-nav.menu-open {
    z-index: 60;
}
.nav-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
    padding: 0 2rem;
}
.nav-logo {
    display: inline-block;
    transition: transform 0.3s ease;
}
.nav-logo:hover {
    transform: scale(1.1);
}
.nav-logo img {
    height: 2.5rem;
    width: auto;
}
.nav-links {
    display: none;
    flex: 1;
    justify-content: center;
    gap: 4rem;
}
.nav-link {
    position: relative;
    padding: 0.25rem 0;
    background: none;
    border: none;
    color: #fff;
    font-size: 1rem;
    text-decoration: none;
    cursor: pointer;
}
.nav-link::after {
    content: "";
    position: absolute;
    left: 0;
    bottom: 0;
    width: 100%;
    height: 2px;
    background: #ff8c28;
    transform: scaleX(0);
    transition: transform 0.3s ease;
}
.nav-link:hover::after {
    transform: scaleX(1);
}
.nav-cta {
    display: none;
}
.nav-quote {
    display: inline-block;
    background: #ff8c28;
    color: #fff;
    padding: 0.5rem 1.5rem;
    border-radius: 0.25rem;
    text-align: center;
    text-decoration: none;
}
.burger-menu {
    display: flex;
    flex-direction: column;
    gap: 4px;
    padding: 0.5rem;
    background: none;
    border: none;
    cursor: pointer;
    z-index: 50;
}
.burger-menu.active {
    background: #0095cc;
}
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    background: #fff;
}
.mobile-menu {
    position: fixed;
    inset: 0;
    z-index: 50;
}
.mobile-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
}
.mobile-panel {
    position: fixed;
    top: 4rem;
    right: 0;
    width: 50%;
    display: flex;
    flex-direction: column;
    padding: 2rem 1.5rem 1.5rem;
    background: #fff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.mobile-link {
    display: block;
    padding: 1rem 0;
    background: none;
    border: none;
    text-align: left;
    font-size: 1.125rem;
    color: #374151;
    text-decoration: none;
    cursor: pointer;
}
.mobile-link:hover {
    color: #00b0f0;
}
.mobile-divider {
    height: 1px;
    background: #e5e7eb;
    margin: 1rem 0;
}
@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-cta { display: block; }
    .burger-menu { display: none; }
    .mobile-menu { display: none; }
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_STYLES}</style>
            <div class="app-shell">
                <Header />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_routes_resolve() {
        assert!(Route::recognize("/contact") == Some(Route::Contact));
        assert!(Route::recognize("/error") == Some(Route::Error));
        assert!(Route::recognize("/coming-soon") == Some(Route::ComingSoon));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(Route::not_found_route() == Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn section_links_match_home_anchors() {
        let ids: Vec<_> = SECTION_LINKS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["review", "gallery", "services"]);
    }
}
