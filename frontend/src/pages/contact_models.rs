use once_cell::sync::Lazy;
use regex::Regex;

use crate::webhook::{Embed, EmbedField, EmbedFooter, WebhookMessage, BLUE, PURPLE};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequestType {
    Quote,
    #[default]
    Contact,
}

impl RequestType {
    pub fn value(&self) -> &'static str {
        match self {
            RequestType::Quote => "quote",
            RequestType::Contact => "contact",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "quote" => Some(RequestType::Quote),
            "contact" => Some(RequestType::Contact),
            _ => None,
        }
    }
}

/// (value, option label, offered only for quotes)
pub const SERVICES: &[(&str, &str, bool)] = &[
    ("window-cleaning", "Window Cleaning", false),
    ("gutter-cleaning", "Gutter Cleaning", false),
    ("christmas-lights", "Christmas Lights Installation", false),
    ("pressure-washing", "Pressure Washing", false),
    ("other", "Other Services", false),
    ("multiple", "Multiple Services (specify in message)", true),
];

pub const DEFAULT_SERVICE: &str = "window-cleaning";

pub fn service_options(request_type: RequestType) -> impl Iterator<Item = (&'static str, &'static str)> {
    SERVICES
        .iter()
        .filter(move |(_, _, quote_only)| !quote_only || request_type == RequestType::Quote)
        .map(|&(value, label, _)| (value, label))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    RequestType,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "service" => Some(Field::Service),
            "requestType" => Some(Field::RequestType),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub request_type: RequestType,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            request_type: RequestType::default(),
            message: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Message => self.message,
            Field::Service | Field::RequestType => None,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
            Field::Message => self.message = None,
            Field::Service | Field::RequestType => {}
        }
    }
}

impl ContactForm {
    /// Applies an input change. Picking "contact" drops a quote-only service.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
            Field::RequestType => {
                if let Some(request_type) = RequestType::from_value(&value) {
                    self.request_type = request_type;
                    if !service_options(request_type).any(|(v, _)| v == self.service) {
                        self.service = DEFAULT_SERVICE.to_string();
                    }
                }
            }
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.email = Some("Email is invalid");
        }
        if self.phone.trim().is_empty() {
            errors.phone = Some("Phone number is required");
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required");
        }
        errors
    }

    pub fn to_webhook_message(&self, submitted_at: &str) -> WebhookMessage {
        let (title, color) = match self.request_type {
            RequestType::Quote => ("New Quote Request Submission", BLUE),
            RequestType::Contact => ("New Contact Form Submission", PURPLE),
        };
        WebhookMessage {
            content: None,
            embeds: vec![Embed {
                title: title.to_string(),
                description: None,
                color,
                fields: vec![
                    EmbedField::inline("Name", self.name.clone()),
                    EmbedField::inline("Email", self.email.clone()),
                    EmbedField::inline("Phone", self.phone.clone()),
                    EmbedField::inline("Service", title_case_slug(&self.service)),
                    EmbedField::inline("Request Type", capitalize(self.request_type.value())),
                    EmbedField::block("Message", self.message.clone()),
                ],
                footer: Some(EmbedFooter {
                    text: format!("Submitted at {}", submitted_at),
                }),
                timestamp: None,
            }],
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// "christmas-lights" -> "Christmas Lights"
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sharon Casey".to_string(),
            email: "sharon@example.com".to_string(),
            phone: "863-555-0101".to_string(),
            service: "gutter-cleaning".to_string(),
            request_type: RequestType::Quote,
            message: "Two story house, lots of oaks.".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.phone, Some("Phone number is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.message = "\n\t".to_string();
        let errors = form.validate();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.message, Some("Message is required"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn email_must_look_like_an_address() {
        let mut form = filled();
        for bad in ["sharon", "sharon@example", "@.", "sharon example.com"] {
            form.email = bad.to_string();
            assert_eq!(form.validate().email, Some("Email is invalid"), "{}", bad);
        }
        form.email = "a@b.co".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut errors = ContactForm::default().validate();
        errors.clear(Field::Email);
        assert!(errors.get(Field::Email).is_none());
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn multiple_services_only_offered_for_quotes() {
        let contact: Vec<_> = service_options(RequestType::Contact).map(|(v, _)| v).collect();
        assert!(!contact.contains(&"multiple"));
        assert_eq!(contact.len(), 5);
        assert!(service_options(RequestType::Quote).any(|(v, _)| v == "multiple"));
    }

    #[test]
    fn switching_to_contact_drops_quote_only_service() {
        let mut form = filled();
        form.set(Field::Service, "multiple".to_string());
        form.set(Field::RequestType, "contact".to_string());
        assert_eq!(form.request_type, RequestType::Contact);
        assert_eq!(form.service, DEFAULT_SERVICE);
    }

    #[test]
    fn slugs_are_title_cased() {
        assert_eq!(title_case_slug("window-cleaning"), "Window Cleaning");
        assert_eq!(title_case_slug("other"), "Other");
        assert_eq!(capitalize("quote"), "Quote");
    }

    #[test]
    fn quote_payload() {
        let message = filled().to_webhook_message("12/1/2024, 3:30:00 PM");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "embeds": [{
                    "title": "New Quote Request Submission",
                    "color": 3447003,
                    "fields": [
                        {"name": "Name", "value": "Sharon Casey", "inline": true},
                        {"name": "Email", "value": "sharon@example.com", "inline": true},
                        {"name": "Phone", "value": "863-555-0101", "inline": true},
                        {"name": "Service", "value": "Gutter Cleaning", "inline": true},
                        {"name": "Request Type", "value": "Quote", "inline": true},
                        {"name": "Message", "value": "Two story house, lots of oaks."}
                    ],
                    "footer": {"text": "Submitted at 12/1/2024, 3:30:00 PM"}
                }]
            })
        );
    }

    #[test]
    fn contact_payload_is_purple() {
        let mut form = filled();
        form.request_type = RequestType::Contact;
        let embed = &form.to_webhook_message("now").embeds[0];
        assert_eq!(embed.title, "New Contact Form Submission");
        assert_eq!(embed.color, PURPLE);
    }
}
