use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::pages::contact_models::{service_options, ContactForm, Field, FormErrors, RequestType};
use crate::webhook;

// Pulls (name, value) out of whichever form control fired the event.
fn control_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: Field,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<&'static str>,
    onchange: Callback<Event>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let onchange = props.onchange.clone();
    let oninput = Callback::from(move |e: InputEvent| onchange.emit(e.into()));
    let class = classes!("form-control", props.error.map(|_| "invalid"));

    html! {
        <div class="form-group">
            <label for={props.name}>{props.label}</label>
            if props.field == Field::Message {
                <textarea
                    id={props.name}
                    name={props.name}
                    rows="4"
                    value={props.value.clone()}
                    oninput={oninput}
                    class={class}
                />
            } else {
                <input
                    type={props.input_type}
                    id={props.name}
                    name={props.name}
                    value={props.value.clone()}
                    oninput={oninput}
                    class={class}
                />
            }
            if let Some(message) = props.error {
                <p class="form-error">{message}</p>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FormErrors::default);
    let is_submitted = use_state(|| false);
    let is_submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);
    let is_mounted = use_is_mounted();

    let onchange = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = control_value(&e) else {
                return;
            };
            let Some(field) = Field::from_name(&name) else {
                return;
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.get(field).is_some() {
                let mut cleared = (*errors).clone();
                cleared.clear(field);
                errors.set(cleared);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitted = is_submitted.clone();
        let is_submitting = is_submitting.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                info!("Contact form rejected by validation");
                return;
            }

            let submitted_at = chrono::Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
            let message = form.to_webhook_message(&submitted_at);
            let form = form.clone();
            let is_submitted = is_submitted.clone();
            let is_submitting = is_submitting.clone();
            let submit_error = submit_error.clone();
            let is_mounted = is_mounted.clone();
            is_submitting.set(true);
            submit_error.set(None);

            spawn_local(async move {
                let result = webhook::post(config::contact_webhook_url(), &message).await;
                if !is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        info!("Contact form sent");
                        is_submitted.set(true);
                        form.set(ContactForm::default());
                    }
                    Err(e) => {
                        error!("Error sending contact form: {}", e);
                        submit_error.set(Some(
                            "There was an error submitting your message. Please try again.".to_string(),
                        ));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let send_another = {
        let is_submitted = is_submitted.clone();
        Callback::from(move |_: MouseEvent| is_submitted.set(false))
    };

    let request_radio = |request_type: RequestType, label: &'static str| {
        let id = request_type.value();
        html! {
            <div class="radio-row">
                <input
                    type="radio"
                    id={id}
                    name="requestType"
                    value={id}
                    checked={form.request_type == request_type}
                    onchange={onchange.clone()}
                />
                <label for={id}>{label}</label>
            </div>
        }
    };

    let field_view = |field: Field, name: &'static str, label: &'static str, input_type: &'static str, value: &str| {
        html! {
            <TextField
                field={field}
                name={name}
                label={label}
                input_type={input_type}
                value={value.to_string()}
                error={errors.get(field)}
                onchange={onchange.clone()}
            />
        }
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    padding: 3rem 1rem;
                }
                .contact-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .contact-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .contact-heading h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .contact-heading p {
                    font-size: 1.125rem;
                    color: #4b5563;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .contact-card {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .contact-card h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 0 0 1.5rem;
                }
                .contact-info-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-info-row .icon {
                    color: #2563eb;
                    font-size: 1.25rem;
                }
                .contact-info-row p {
                    margin: 0;
                    color: #4b5563;
                }
                .contact-info-row p.label {
                    font-weight: 500;
                    color: #111827;
                }
                .request-type {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                }
                .request-type p {
                    font-weight: 500;
                    margin: 0 0 0.75rem;
                }
                .radio-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .form-group {
                    margin-bottom: 1.5rem;
                }
                .form-group label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                }
                .form-control {
                    display: block;
                    width: 100%;
                    box-sizing: border-box;
                    margin-top: 0.25rem;
                    padding: 0.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                }
                .form-control.invalid {
                    border-color: #ef4444;
                }
                .form-error {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: #dc2626;
                }
                .submit-button, .send-another {
                    width: 100%;
                    background: #2563eb;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.375rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .send-another {
                    width: auto;
                    margin-top: 1.5rem;
                }
                .submit-error {
                    color: #dc2626;
                    margin-top: 1rem;
                }
                .thank-you {
                    text-align: center;
                    padding: 3rem 0;
                }
                .thank-you h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #16a34a;
                    margin: 0 0 1rem;
                }
                .thank-you p {
                    color: #4b5563;
                }
                @media (min-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
            <div class="contact-inner">
                <div class="contact-heading">
                    <h1>{"Contact Us"}</h1>
                    <p>{"Get in touch with us for all your cleaning and maintenance needs"}</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-card">
                        <h2>{"Contact Information"}</h2>
                        <div class="contact-info-row">
                            <span class="icon">{"☎"}</span>
                            <div>
                                <p class="label">{"Phone"}</p>
                                <p>{config::PHONE}</p>
                            </div>
                        </div>
                        <div class="contact-info-row">
                            <span class="icon">{"✉"}</span>
                            <div>
                                <p class="label">{"Email"}</p>
                                <p>{config::EMAIL}</p>
                            </div>
                        </div>
                        <div class="contact-info-row">
                            <span class="icon">{"🕗"}</span>
                            <div>
                                <p class="label">{"Business Hours"}</p>
                                <p>{"Monday-Sunday: 8:00 AM-6:00 PM"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-card">
                        if *is_submitted {
                            <div class="thank-you">
                                <h3>{"Thank you for contacting us!"}</h3>
                                <p>{"We'll get back to you as soon as possible."}</p>
                                <button class="send-another" onclick={send_another}>{"Send Another Message"}</button>
                            </div>
                        } else {
                            <form onsubmit={onsubmit} novalidate=true>
                                <div class="request-type">
                                    <p>{"What would you like?"}</p>
                                    { request_radio(RequestType::Quote, "Get a Quote") }
                                    { request_radio(RequestType::Contact, "General Contact/Question") }
                                </div>
                                { field_view(Field::Name, "name", "Name", "text", &form.name) }
                                { field_view(Field::Email, "email", "Email", "email", &form.email) }
                                { field_view(Field::Phone, "phone", "Phone", "tel", &form.phone) }
                                <div class="form-group">
                                    <label for="service">{"Service Needed"}</label>
                                    <select id="service" name="service" class="form-control" onchange={onchange.clone()}>
                                        { for service_options(form.request_type).map(|(value, label)| html! {
                                            <option value={value} selected={form.service == value}>{label}</option>
                                        }) }
                                    </select>
                                </div>
                                { field_view(Field::Message, "message", "Message", "text", &form.message) }
                                <button type="submit" class="submit-button" disabled={*is_submitting}>
                                    { if *is_submitting { "Sending..." } else { "Send Message" } }
                                </button>
                                if let Some(message) = (*submit_error).as_ref() {
                                    <p class="submit-error">{message}</p>
                                }
                            </form>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
