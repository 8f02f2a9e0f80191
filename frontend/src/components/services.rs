use web_sys::MouseEvent;
use yew::prelude::*;

struct Service {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    highlight: &'static str,
}

static RESIDENTIAL: [Service; 4] = [
    Service {
        title: "Window Cleaning",
        icon: "✨",
        description: "Professional residential window cleaning services",
        features: ["Interior & exterior windows", "Screen cleaning", "Track cleaning", "Hard water removal"],
        highlight: "Safe for all window types",
    },
    Service {
        title: "Gutter Cleaning",
        icon: "💧",
        description: "Complete gutter maintenance solution",
        features: ["Debris removal", "Downspout clearing", "Gutter Rinse", "Down Spout Inspection"],
        highlight: "Prevent water damage",
    },
    Service {
        title: "Christmas Lights",
        icon: "⭐",
        description: "Custom holiday lighting installation",
        features: ["Design consultation", "Professional install", "Timers included", "Post-season removal"],
        highlight: "Light Up Your Holidays",
    },
    Service {
        title: "Pressure Washing",
        icon: "🏠",
        description: "Restore your property's appearance",
        features: ["Driveways", "Decks & patios", "Siding", "Fences"],
        highlight: "Keep Your Home Looking Spotless",
    },
];

static COMMERCIAL: [Service; 4] = [
    Service {
        title: "Window Cleaning",
        icon: "✨",
        description: "Large-scale commercial window services",
        features: ["Multi-story buildings", "Interior And Exterior", "Satisfaction Guaranteed", "Maintenance plans"],
        highlight: "Liability insured",
    },
    Service {
        title: "Gutter Cleaning",
        icon: "💧",
        description: "Industrial gutter maintenance",
        features: ["Large systems", "Emergency service", "Preventative care", "Down Spout Cleaning"],
        highlight: "Annual contracts",
    },
    Service {
        title: "Christmas Lights",
        icon: "⭐",
        description: "Commercial holiday lighting",
        features: ["Large displays", "Property-wide design", "LED options", "Timer systems"],
        highlight: "Energy efficient",
    },
    Service {
        title: "Pressure Washing",
        icon: "🏠",
        description: "Commercial pressure cleaning",
        features: ["Parking lots", "Building exteriors", "Side Walks", "Roofs"],
        highlight: "Industrial grade",
    },
];

#[derive(Clone, Copy, PartialEq)]
enum ServiceTab {
    Residential,
    Commercial,
}

impl ServiceTab {
    fn label(&self) -> &'static str {
        match self {
            ServiceTab::Residential => "Residential",
            ServiceTab::Commercial => "Commercial",
        }
    }

    fn services(&self) -> &'static [Service] {
        match self {
            ServiceTab::Residential => &RESIDENTIAL,
            ServiceTab::Commercial => &COMMERCIAL,
        }
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <div class="service-card">
            <div class="service-card-header">
                <div class="service-icon">{service.icon}</div>
                <h3>{service.title}</h3>
            </div>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li><span class="service-bullet"></span><span>{*feature}</span></li>
                }) }
            </ul>
            <span class="service-highlight">{service.highlight}</span>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let active_tab = use_state(|| ServiceTab::Residential);

    let tab_button = |tab: ServiceTab| {
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                active_tab.set(tab);
            })
        };
        html! {
            <button
                class={classes!("service-tab", (*active_tab == tab).then(|| "active"))}
                onclick={onclick}
            >
                {tab.label()}
            </button>
        }
    };

    html! {
        <div class="services">
            <style>
                {r#"
                .services {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }
                .services h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 0 0 0.75rem;
                }
                .services-intro {
                    color: #4b5563;
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .service-tabs {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    max-width: 28rem;
                    margin: 0 auto 1.5rem;
                    padding: 0.25rem;
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                }
                .service-tab {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 0.375rem;
                    background: transparent;
                    font-size: 1rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .service-tab.active {
                    background: #fff;
                    color: #111827;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.2s ease;
                }
                .service-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .service-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .service-card-header h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0;
                }
                .service-icon {
                    padding: 0.5rem;
                    background: #dbeafe;
                    border-radius: 0.5rem;
                }
                .service-description {
                    color: #4b5563;
                    margin: 0 0 1rem;
                }
                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1rem;
                }
                .service-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .service-bullet {
                    width: 6px;
                    height: 6px;
                    flex-shrink: 0;
                    background: #3b82f6;
                    border-radius: 50%;
                }
                .service-highlight {
                    margin-top: auto;
                    align-self: flex-start;
                    background: #eff6ff;
                    color: #1d4ed8;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                @media (min-width: 768px) {
                    .services { padding: 4rem 1rem; }
                    .services h2 { font-size: 2.25rem; }
                    .service-grid { grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                    .service-card { padding: 1.5rem; }
                }
                "#}
            </style>
            <h2>{"Our Services"}</h2>
            <p class="services-intro">
                {"Professional cleaning and maintenance services for residential and commercial properties"}
            </p>
            <div class="service-tabs">
                { tab_button(ServiceTab::Residential) }
                { tab_button(ServiceTab::Commercial) }
            </div>
            <div class="service-grid">
                { for active_tab.services().iter().map(service_card) }
            </div>
        </div>
    }
}
