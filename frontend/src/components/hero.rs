use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                }
                .hero-cover {
                    display: block;
                    width: 100%;
                    height: auto;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .hero-card {
                    text-align: center;
                    background: rgba(255, 255, 255, 0.75);
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    max-width: 32rem;
                }
                .hero-card h1 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .hero-card p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    margin: 0 0 1.5rem;
                }
                @media (min-width: 768px) {
                    .hero-card {
                        padding: 2rem;
                        max-width: 42rem;
                    }
                    .hero-card h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
            <img
                src={config::asset_url("window-cleaning/cover.jpeg")}
                draggable="false"
                alt="Cover"
                class="hero-cover"
            />
            <div class="hero-overlay">
                <div class="hero-card">
                    <h1>{"Crystal Clear Windows, Every Time"}</h1>
                    <p>{"Professional window cleaning services for your home or business"}</p>
                    <Link<Route> to={Route::Contact} classes="quote-button cta-button">
                        {"Get Your Free Quote Today"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
