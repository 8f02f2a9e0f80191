use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[derive(Clone, PartialEq)]
struct Review {
    name: &'static str,
    comment: &'static str,
    service: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        name: "Sharon Casey",
        comment: "I had my windows cleaned today. I have a lot of windows. Hunter did an excellent job at a fair price. They were a mess after all of the pollen from spring in addition to the storms. He worked hard and it shows. Even the screens look new.",
        service: "Window Cleaning",
    },
    Review {
        name: "Catherine B",
        comment: "I hired CFWC to clean my gutters. He was on time, had good communication, did good work, and charged a good price.",
        service: "Gutter Cleaning",
    },
    Review {
        name: "Valorie Kilbourne",
        comment: "Hunter has excellent work ethic. He does a thorough job, he cleaned our gutters and down spouts cleaned up and placed debris by road. He also cleaned our screen porch cover and screens.",
        service: "Gutter & Screen Cleaning",
    },
    Review {
        name: "Steve-O",
        comment: "Hunter installed our permanent Govee lighting and did an excellent job! We will definitely have him back to install more!",
        service: "Lighting Installation",
    },
];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn stars(class: &'static str) -> Html {
    html! {
        <div class={class}>
            { for (0..5).map(|_| html! { <span class="review-star">{"★"}</span> }) }
        </div>
    }
}

fn google_badge(class: &'static str) -> Html {
    html! {
        <div class={class}>
            <img src={config::asset_url("googleicon.svg")} alt="Google Review" />
            <span>{"Verified Google Review"}</span>
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let selected = use_state(|| None::<Review>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let dialog = (*selected).clone().map(|review| {
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
        html! {
            <div class="review-dialog-backdrop" onclick={close.clone()}>
                <div class="review-dialog" onclick={stop} role="dialog">
                    <div class="review-dialog-header">
                        <h2>{"Customer Review"}</h2>
                        <button class="review-dialog-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                    </div>
                    <div class="review-expanded">
                        <div class="review-expanded-author">
                            <div class="review-avatar large">{initial(review.name)}</div>
                            <div>
                                <h3>{review.name}</h3>
                                { stars("review-stars large") }
                                <span class="review-service">{review.service}</span>
                            </div>
                        </div>
                        <p class="review-expanded-comment">{review.comment}</p>
                        { google_badge("review-source bordered") }
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="reviews">
            <style>
                {r#"
                .reviews {
                    background: #fff;
                }
                .reviews-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .reviews-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .reviews-heading h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .reviews-heading p {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .reviews-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .review-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: box-shadow 0.3s ease;
                }
                .review-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .review-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .review-author h3, .review-expanded-author h3 {
                    margin: 0;
                    font-weight: 600;
                    color: #111827;
                }
                .review-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 600;
                    background: linear-gradient(135deg, #3b82f6, #2563eb);
                    flex-shrink: 0;
                }
                .review-avatar.large {
                    width: 4rem;
                    height: 4rem;
                    font-size: 1.25rem;
                }
                .review-stars {
                    display: flex;
                    gap: 0.25rem;
                    color: #facc15;
                    font-size: 0.875rem;
                }
                .review-stars.large {
                    font-size: 1.125rem;
                    margin-top: 0.25rem;
                }
                .review-service {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    background: #eff6ff;
                    color: #2563eb;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin: 0.5rem 0 1rem;
                }
                .review-comment {
                    color: #4b5563;
                    display: -webkit-box;
                    -webkit-line-clamp: 4;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .review-source {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .review-source img {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .review-source.bordered {
                    padding-top: 1rem;
                    border-top: 1px solid #e5e7eb;
                    font-size: 0.875rem;
                }
                .reviews-badge-row {
                    margin-top: 3rem;
                    text-align: center;
                }
                .reviews-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    color: #4b5563;
                    font-weight: 500;
                }
                .reviews-badge-avatars {
                    display: flex;
                }
                .reviews-badge-avatars .review-avatar {
                    width: 2rem;
                    height: 2rem;
                    font-size: 0.75rem;
                    border: 2px solid #fff;
                    margin-left: -0.5rem;
                }
                .review-dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                }
                .review-dialog {
                    background: #fff;
                    border-radius: 0.5rem;
                    width: 100%;
                    max-width: 42rem;
                    padding: 1.5rem;
                }
                .review-dialog-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .review-dialog-header h2 {
                    font-size: 1.125rem;
                    margin: 0;
                }
                .review-dialog-close {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .review-expanded {
                    padding: 1rem;
                }
                .review-expanded-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .review-expanded-comment {
                    color: #374151;
                    font-size: 1.125rem;
                    line-height: 1.75;
                    margin: 0 0 1.5rem;
                }
                @media (min-width: 768px) {
                    .reviews-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .reviews-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <div class="reviews-inner">
                <div class="reviews-heading">
                    <h2>{"Customer Reviews"}</h2>
                    <p>{"See what our customers are saying about their experience with our services"}</p>
                </div>
                <div class="reviews-grid">
                    { for REVIEWS.iter().map(|review| {
                        let onclick = {
                            let selected = selected.clone();
                            let review = review.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(review.clone())))
                        };
                        html! {
                            <div class="review-card" onclick={onclick}>
                                <div class="review-author">
                                    <div class="review-avatar">{initial(review.name)}</div>
                                    <div>
                                        <h3>{review.name}</h3>
                                        { stars("review-stars") }
                                    </div>
                                </div>
                                <span class="review-service">{review.service}</span>
                                <p class="review-comment">{review.comment}</p>
                                { google_badge("review-source") }
                            </div>
                        }
                    }) }
                </div>
                <div class="reviews-badge-row">
                    <div class="reviews-badge">
                        <div class="reviews-badge-avatars">
                            { for ['A', 'B', 'C'].iter().map(|letter| html! {
                                <div class="review-avatar">{letter.to_string()}</div>
                            }) }
                        </div>
                        <span>{"Join 50+ happy customers"}</span>
                    </div>
                </div>
            </div>
            { for dialog }
        </div>
    }
}
