use yew::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Small Business", "Locally Operated"),
    ("50+", "Happy Customers"),
    ("100%", "Satisfaction Guaranteed"),
    ("Attention To Detail", "We Pride In Our Ability To Clean Your Windows, Gutters, And More!"),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="why-us">
            <style>
                {r#"
                .why-us {
                    padding: 4rem 1rem;
                    background: #fff;
                }
                .why-us h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    text-align: center;
                    margin: 0 0 3rem;
                }
                .why-us-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .why-us-item {
                    text-align: center;
                }
                .why-us-stat {
                    color: #00b0f0;
                    font-weight: 700;
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .why-us-label {
                    color: #4b5563;
                }
                @media (min-width: 768px) {
                    .why-us-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .why-us-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <h2>{"Why Choose Us"}</h2>
            <div class="why-us-grid">
                { for HIGHLIGHTS.iter().map(|(stat, label)| html! {
                    <div class="why-us-item">
                        <div class="why-us-stat">{*stat}</div>
                        <div class="why-us-label">{*label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
