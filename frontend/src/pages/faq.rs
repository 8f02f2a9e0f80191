use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqSection {
    pub category: &'static str,
    pub questions: &'static [FaqEntry],
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilteredSection {
    pub category: &'static str,
    pub questions: Vec<FaqEntry>,
}

pub static FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        category: "Window Cleaning",
        questions: &[
            FaqEntry {
                question: "How often should I have my windows professionally cleaned?",
                answer: "For residential properties, we recommend professional cleaning 1-2 times per year. Commercial properties may require more frequent cleaning depending on location and environment.",
            },
            FaqEntry {
                question: "What cleaning solutions do you use?",
                answer: "We use dawn dish soap, and other window cleaning soaps as needed. Water fed pole is what we normally use to clean exterior windows.",
            },
            FaqEntry {
                question: "Do you clean screens and tracks as well?",
                answer: "Yes, our comprehensive window cleaning service includes cleaning the glass, screens, tracks, and frames to ensure your windows are completely clean.",
            },
            FaqEntry {
                question: "Do you warranty your window cleaning?",
                answer: "Yes, we ensure your windows will be clean up to a month. If your exterior windows become dirty within a month of your window cleaning, we will come back and clean them for free.",
            },
        ],
    },
    FaqSection {
        category: "Gutter Cleaning",
        questions: &[
            FaqEntry {
                question: "How often should gutters be cleaned?",
                answer: "Gutters should be cleaned at least twice a year - typically in spring and fall. However, if you have many trees near your home, you may need more frequent cleaning.",
            },
            FaqEntry {
                question: "What happens if I don't clean my gutters?",
                answer: "Clogged gutters can lead to water damage, foundation problems, roof damage, and create perfect conditions for pest infestations. Regular maintenance prevents these costly issues.",
            },
            FaqEntry {
                question: "What does gutter cleaning include?",
                answer: "Gutter cleaning includes removing all debris from the gutters, cleaning and inspecting all down spouts and rinsing the gutters out.",
            },
        ],
    },
    FaqSection {
        category: "Christmas Light Installation",
        questions: &[
            FaqEntry {
                question: "When do you start booking holiday light installations?",
                answer: "We begin booking installations in early September and recommend scheduling early as spots fill up quickly for the holiday season.",
            },
            FaqEntry {
                question: "Do you provide the lights or do I need to supply them?",
                answer: "We can work with either option. We offer professional-grade LED lights for purchase or rental, or we can install your existing lights.",
            },
            FaqEntry {
                question: "When do you take down the lights?",
                answer: "We typically schedule removal in January, but we can accommodate your preferred timeline. Give us a call when you're ready to take down your lights, and we will take care of it.",
            },
        ],
    },
    FaqSection {
        category: "Power Washing",
        questions: &[
            FaqEntry {
                question: "What surfaces can be power washed?",
                answer: "We can safely power wash driveways, sidewalks, decks, patios, fences, siding, and more. Our technicians adjust the pressure based on the surface material.",
            },
            FaqEntry {
                question: "Is power washing safe for all home exteriors?",
                answer: "While many surfaces can be safely power washed, some materials require soft washing or alternative cleaning methods. We'll assess your property and recommend the most appropriate cleaning method.",
            },
            FaqEntry {
                question: "How long does power washing take?",
                answer: "The duration varies depending on the size of the area and level of dirt/stains. Most residential jobs can be completed in 2-4 hours.",
            },
        ],
    },
    FaqSection {
        category: "Other Services & General Questions",
        questions: &[
            FaqEntry {
                question: "Do you offer solar panel cleaning?",
                answer: "Yes, we offer solar panel cleaning, please contact us for a free quote.",
            },
            FaqEntry {
                question: "Are you licensed and insured?",
                answer: "Yes, we are fully licensed, bonded, and insured. We carry comprehensive liability insurance and workers' compensation to protect both our clients and employees.",
            },
            FaqEntry {
                question: "Do you offer free estimates?",
                answer: "Yes, we provide free estimates for all our services. However, any clients requesting in-person quotes outside of Polk County will be charged a $25 non-refundable quote fee.",
            },
            FaqEntry {
                question: "What areas do you service?",
                answer: "We service the greater Central Florida area within a 35 mile radius.",
            },
            FaqEntry {
                question: "Do you offer any discounts or package deals?",
                answer: "Yes, we offer discounted rates on some services for recurring clients.",
            },
        ],
    },
];

/// Case-insensitive substring match over questions and answers.
/// A blank query keeps everything; otherwise the query is matched as typed,
/// surrounding spaces included. Sections left without questions are dropped.
pub fn filter_sections(sections: &[FaqSection], query: &str) -> Vec<FilteredSection> {
    let blank = query.trim().is_empty();
    let query = query.to_lowercase();
    sections
        .iter()
        .map(|section| FilteredSection {
            category: section.category,
            questions: section
                .questions
                .iter()
                .filter(|entry| {
                    blank
                        || entry.question.to_lowercase().contains(&query)
                        || entry.answer.to_lowercase().contains(&query)
                })
                .copied()
                .collect(),
        })
        .filter(|section| !section.questions.is_empty())
        .collect()
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AccordionProps {
    section: FilteredSection,
}

// At most one question open per section; clicking the open one collapses it.
#[function_component(FaqAccordion)]
fn faq_accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<&'static str>);

    html! {
        <div class="faq-section">
            <h2>{props.section.category}</h2>
            { for props.section.questions.iter().map(|entry| {
                let question = entry.question;
                let is_open = *open == Some(question);
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_| {
                        open.set(if is_open { None } else { Some(question) });
                    })
                };
                html! {
                    <FaqItem key={question} entry={*entry} is_open={is_open} on_toggle={on_toggle} />
                }
            }) }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let sections = filter_sections(FAQ_SECTIONS, &query);

    html! {
        <div class="faq-page">
            <style>
                {r#"
                .faq-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                }
                .faq-page h1 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .faq-search {
                    position: relative;
                    margin-bottom: 2rem;
                }
                .faq-search input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem 0.5rem 2.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                }
                .faq-search .search-icon {
                    position: absolute;
                    left: 0.75rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: #9ca3af;
                }
                .faq-empty {
                    text-align: center;
                    padding: 2rem 0;
                    color: #6b7280;
                }
                .faq-section {
                    margin-bottom: 2rem;
                }
                .faq-section h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .faq-question:hover .question-text {
                    text-decoration: underline;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                }
                .faq-answer p {
                    margin: 0 0 1rem;
                    color: #374151;
                }
                .faq-help {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                }
                .faq-help h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 1rem;
                }
                .faq-help-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .faq-help-row span {
                    color: #2563eb;
                }
                .faq-help-row p {
                    margin: 0;
                }
                .faq-contact {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.75rem 2rem;
                    background: #f97316;
                    color: #fff;
                    border-radius: 0.25rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .faq-contact:hover {
                    background: #fb923c;
                }
                "#}
            </style>
            <h1>{"Frequently Asked Questions"}</h1>

            <div class="faq-search">
                <span class="search-icon">{"🔍"}</span>
                <input
                    type="text"
                    placeholder="Search questions..."
                    value={(*query).clone()}
                    oninput={oninput}
                />
            </div>

            if sections.is_empty() {
                <div class="faq-empty">
                    <p>{"No questions found matching your search."}</p>
                </div>
            } else {
                { for sections.into_iter().map(|section| {
                    let category = section.category;
                    html! { <FaqAccordion key={category} section={section} /> }
                }) }
            }

            <div class="faq-help">
                <h3>{"Still Have Questions?"}</h3>
                <p>{"Don't hesitate to reach out to our customer service team. We're here to help!"}</p>
                <div class="faq-help-row">
                    <span>{"☎"}</span>
                    <p>{format!("Phone: {}", config::PHONE)}</p>
                </div>
                <div class="faq-help-row">
                    <span>{"✉"}</span>
                    <p>{format!("Email: {}", config::EMAIL)}</p>
                </div>
                <div class="faq-help-row">
                    <span>{"🕗"}</span>
                    <p>{"Hours: Monday-Sunday, 8am-6pm"}</p>
                </div>
                <Link<Route> to={Route::Contact} classes="faq-contact quote-button">
                    {"Contact Us Now"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(sections: &[FilteredSection]) -> Vec<&'static str> {
        sections
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.question))
            .collect()
    }

    #[test]
    fn blank_query_keeps_every_section() {
        for query in ["", "   ", "\t"] {
            let sections = filter_sections(FAQ_SECTIONS, query);
            assert_eq!(sections.len(), 5);
            let total: usize = sections.iter().map(|s| s.questions.len()).sum();
            assert_eq!(total, 18);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let sections = filter_sections(FAQ_SECTIONS, "GUTTERS");
        assert_eq!(sections[0].category, "Gutter Cleaning");
        assert!(questions(&sections).contains(&"How often should gutters be cleaned?"));
    }

    #[test]
    fn answers_are_searched_too() {
        let sections = filter_sections(FAQ_SECTIONS, "polk county");
        assert_eq!(questions(&sections), vec!["Do you offer free estimates?"]);
        assert_eq!(sections[0].category, "Other Services & General Questions");
    }

    #[test]
    fn empty_sections_are_dropped_and_order_kept() {
        let sections = filter_sections(FAQ_SECTIONS, "often");
        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec!["Window Cleaning", "Gutter Cleaning"]);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() {
        let sections = filter_sections(FAQ_SECTIONS, " radius");
        assert_eq!(questions(&sections), vec!["What areas do you service?"]);
        assert!(filter_sections(FAQ_SECTIONS, "radius ").is_empty());
    }

    #[test]
    fn no_match_yields_nothing() {
        assert!(filter_sections(FAQ_SECTIONS, "helicopter").is_empty());
    }
}
