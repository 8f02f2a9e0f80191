use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    comparison::BeforeAfterComparison, gallery::Gallery, hero::Hero, reviews::Reviews,
    services::ServicesSection, why::WhyChooseUs,
};
use crate::config;
use crate::Route;

/// History state asking the home page to scroll to a section once rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTarget {
    pub section: String,
    pub requested_at: i64,
}

impl ScrollTarget {
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            requested_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

pub fn scroll_to_section(section: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id {} to scroll to", section),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scroll_target = use_location().and_then(|location| location.state::<ScrollTarget>());

    {
        use_effect_with_deps(
            move |target: &Option<std::rc::Rc<ScrollTarget>>| {
                let timeout = target.as_ref().map(|target| {
                    let section = target.section.clone();
                    Timeout::new(config::SCROLL_DELAY_MS, move || scroll_to_section(&section))
                });
                move || drop(timeout)
            },
            scroll_target,
        );
    }

    html! {
        <>
            <Hero />
            <WhyChooseUs />
            <section id="services" class="home-section">
                <ServicesSection />
            </section>
            <section class="home-section home-white">
                <BeforeAfterComparison />
            </section>
            <section class="home-cta">
                <style>
                    {r#"
                    .home-section {
                        scroll-margin-top: 4rem;
                    }
                    .home-white {
                        background: #fff;
                    }
                    .home-cta {
                        padding: 4rem 1rem;
                        background: #fff;
                        text-align: center;
                    }
                    .home-cta h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .home-cta p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    "#}
                </style>
                <h2>{"Ready for Spotless Windows?"}</h2>
                <p>{"Get in touch today for a free estimate on our professional window cleaning services"}</p>
                <Link<Route> to={Route::Contact} classes="quote-button cta-button">
                    {"Contact Us Now"}
                </Link<Route>>
            </section>
            <section id="gallery" class="home-section">
                <Gallery />
            </section>
            <section id="review" class="home-section">
                <Reviews />
            </section>
        </>
    }
}
