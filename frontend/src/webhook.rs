use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

pub const BLUE: u32 = 3447003;
pub const PURPLE: u32 = 10181046;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebhookMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: true,
        }
    }

    pub fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

pub fn newsletter_message(email: &str, now: DateTime<Utc>) -> WebhookMessage {
    WebhookMessage {
        content: Some(format!("New newsletter subscription: {}", email)),
        embeds: vec![Embed {
            title: "Newsletter Subscription".to_string(),
            description: Some(format!("Email: {}", email)),
            color: BLUE,
            fields: Vec::new(),
            footer: None,
            timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }],
    }
}

pub async fn post(url: &str, message: &WebhookMessage) -> Result<(), WebhookError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(message)
        .map_err(|e| WebhookError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| WebhookError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(WebhookError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn newsletter_payload_shape() {
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 15, 30, 0).unwrap();
        let message = newsletter_message("jane@example.com", now);
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "content": "New newsletter subscription: jane@example.com",
                "embeds": [{
                    "title": "Newsletter Subscription",
                    "description": "Email: jane@example.com",
                    "color": 3447003,
                    "timestamp": "2024-12-01T15:30:00.000Z"
                }]
            })
        );
    }

    #[test]
    fn block_fields_omit_inline_flag() {
        let value = serde_json::to_value(EmbedField::block("Message", "hi")).unwrap();
        assert_eq!(value, json!({"name": "Message", "value": "hi"}));
        let value = serde_json::to_value(EmbedField::inline("Name", "Jo")).unwrap();
        assert_eq!(value, json!({"name": "Name", "value": "Jo", "inline": true}));
    }

    #[test]
    fn status_error_message() {
        assert_eq!(WebhookError::Status(429).to_string(), "webhook responded with status 429");
    }
}
