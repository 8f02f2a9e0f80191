use chrono::{Datelike, Utc};
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::webhook;

const SERVICES: &[&str] = &[
    "Window Cleaning",
    "Gutter Cleaning",
    "Pressure Washing",
    "Solar Panel Cleaning",
    "Christmas Lights Installation",
    "Commercial Services",
    "Residential Services",
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/cfwc2023"),
    ("Instagram", "https://www.instagram.com/centralfloridawindowcleaners"),
    ("LinkedIn", "https://www.linkedin.com/in/central-florida-window-cleaners-24a72b296"),
];

#[derive(Clone, PartialEq)]
enum SubscribeStatus {
    Idle,
    Success,
    Error,
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let is_submitting = use_state(|| false);
    let status = use_state(|| SubscribeStatus::Idle);
    let current_year = Utc::now().year();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let is_submitting = is_submitting.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = (*email).clone();
            let email = email.clone();
            let is_submitting = is_submitting.clone();
            let status = status.clone();
            is_submitting.set(true);
            status.set(SubscribeStatus::Idle);

            spawn_local(async move {
                let message = webhook::newsletter_message(&address, Utc::now());
                match webhook::post(config::newsletter_webhook_url(), &message).await {
                    Ok(()) => {
                        info!("Newsletter subscription sent");
                        status.set(SubscribeStatus::Success);
                        email.set(String::new());
                    }
                    Err(e) => {
                        error!("Newsletter subscription failed: {}", e);
                        status.set(SubscribeStatus::Error);
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: #fff;
                    padding: 3rem 0 1.5rem;
                }
                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .site-footer h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .footer-muted {
                    color: #cbd5e1;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-social a, .footer-services li {
                    color: #cbd5e1;
                    text-decoration: none;
                }
                .footer-social a:hover, .footer-services li:hover {
                    color: #fff;
                }
                .footer-services {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-services li {
                    margin-bottom: 0.5rem;
                }
                .footer-contact div {
                    margin-bottom: 0.75rem;
                }
                .newsletter-form input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 1rem;
                    margin-bottom: 0.75rem;
                    background: #1e293b;
                    color: #fff;
                    border: none;
                    border-radius: 0.25rem;
                }
                .newsletter-form button {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 0.25rem;
                    cursor: pointer;
                }
                .newsletter-form button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .newsletter-success { color: #4ade80; font-size: 0.875rem; }
                .newsletter-error { color: #f87171; font-size: 0.875rem; }
                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #1e293b;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3>{"Central Florida Window Cleaners"}</h3>
                        <p class="footer-muted">
                            {"Professional cleaning services for your home and business. Licensed, bonded, and insured."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <a target="_blank" href={*href}>{*name}</a>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h3>{"Our Services"}</h3>
                        <ul class="footer-services">
                            { for SERVICES.iter().map(|service| html! { <li>{*service}</li> }) }
                        </ul>
                    </div>
                    <div class="footer-contact">
                        <h3>{"Contact Us"}</h3>
                        <div class="footer-muted">{"☎ "}{config::PHONE}</div>
                        <div class="footer-muted">{"✉ "}{config::EMAIL}</div>
                        <div class="footer-muted">{"🕗 Monday-Sunday: 8AM-6PM"}</div>
                    </div>
                    <div>
                        <h3>{"Newsletter"}</h3>
                        <p class="footer-muted">{"Subscribe to our newsletter for tips and special offers!"}</p>
                        <form class="newsletter-form" onsubmit={onsubmit}>
                            <input
                                type="email"
                                value={(*email).clone()}
                                oninput={oninput}
                                placeholder="Enter your email"
                                required=true
                            />
                            <button type="submit" disabled={*is_submitting}>
                                { if *is_submitting { "Subscribing..." } else { "Subscribe" } }
                            </button>
                            {
                                match *status {
                                    SubscribeStatus::Success => html! {
                                        <p class="newsletter-success">{"Successfully subscribed!"}</p>
                                    },
                                    SubscribeStatus::Error => html! {
                                        <p class="newsletter-error">{"Something went wrong. Please try again later."}</p>
                                    },
                                    SubscribeStatus::Idle => html! {},
                                }
                            }
                        </form>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-muted">
                        {format!("© {} Central Florida Window Cleaners. All rights reserved.", current_year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
