use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    Json,
};
use chrono::Utc;
use chrono_tz::Asia::Kolkata;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use std::env;
use std::sync::Arc;

use crate::handlers::contact_dtos::{service_label, ContactRequest};
use crate::utils::mailer::OutgoingEmail;
use crate::AppState;

// Same shape the form checks client-side: local part, @, domain, dot, tld.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

const CONTACT_SUBJECT: &str = "🚀 New Contact Form Submission - GenAIWorks";
const DEFAULT_RECIPIENT: &str = "anas@genaiworks.co";

/// "Provided and non-blank", as opposed to serde's "key was present".
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

/// Contact form submission endpoint. Mounted with `any()` so the
/// method check can answer with the JSON error shape the form expects
/// instead of axum's bare 405.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> (StatusCode, Json<serde_json::Value>) {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({"success": false, "error": "Method not allowed"})),
        );
    }

    // A missing or malformed body reads as a request with no fields.
    let request: ContactRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (name, email, message) = match (
        present(&request.name),
        present(&request.email),
        present(&request.message),
    ) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "error": "Missing required fields"})),
            );
        }
    };

    if !EMAIL_REGEX.is_match(email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Invalid email address"})),
        );
    }

    let label = service_label(present(&request.role));
    let html_body = render_notification(name, email, present(&request.phone), &label, message);

    let outgoing = OutgoingEmail {
        to: env::var("EMAIL_TO").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string()),
        subject: CONTACT_SUBJECT.to_string(),
        html_body,
    };

    match state.mailer.send(outgoing).await {
        Ok(()) => (StatusCode::OK, Json(json!({"success": true}))),
        Err(e) => {
            tracing::error!("Error sending contact email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Server error"})),
            )
        }
    }
}

const NOTIFICATION_STYLE: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
        line-height: 1.6;
        color: #333;
        max-width: 600px;
        margin: 0 auto;
        padding: 20px;
    }
    .header {
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        padding: 30px;
        border-radius: 10px 10px 0 0;
        text-align: center;
    }
    .header h1 { margin: 0; font-size: 24px; }
    .content {
        background: #f9f9f9;
        padding: 30px;
        border-radius: 0 0 10px 10px;
    }
    .field {
        margin-bottom: 20px;
        background: white;
        padding: 15px;
        border-radius: 5px;
        border-left: 4px solid #667eea;
    }
    .field strong {
        display: block;
        color: #667eea;
        font-size: 12px;
        text-transform: uppercase;
        letter-spacing: 0.5px;
        margin-bottom: 5px;
    }
    .field p { margin: 0; color: #333; font-size: 16px; }
    .message-box {
        background: white;
        padding: 20px;
        border-radius: 5px;
        border-left: 4px solid #667eea;
        margin-top: 20px;
    }
    .message-box strong {
        display: block;
        color: #667eea;
        font-size: 12px;
        text-transform: uppercase;
        letter-spacing: 0.5px;
        margin-bottom: 10px;
    }
    .footer {
        text-align: center;
        margin-top: 30px;
        padding-top: 20px;
        border-top: 2px solid #e0e0e0;
        color: #666;
        font-size: 12px;
    }
"#;

/// Render the lead-notification email shown to the business inbox.
fn render_notification(
    name: &str,
    email: &str,
    phone: Option<&str>,
    service_label: &str,
    message: &str,
) -> String {
    let phone_field = phone
        .map(|phone| {
            format!(
                r#"<div class="field">
              <strong>Phone</strong>
              <p><a href="tel:{phone}" style="color: #667eea; text-decoration: none;">{phone}</a></p>
            </div>"#
            )
        })
        .unwrap_or_default();

    let message_html = message.replace('\n', "<br>");
    let received = Utc::now()
        .with_timezone(&Kolkata)
        .format("%d/%m/%Y, %I:%M:%S %p");

    format!(
        r#"<!DOCTYPE html>
        <html>
        <head><style>{NOTIFICATION_STYLE}</style></head>
        <body>
          <div class="header">
            <h1>🚀 New Lead from GenAIWorks Website</h1>
          </div>
          <div class="content">
            <div class="field">
              <strong>Name</strong>
              <p>{name}</p>
            </div>
            <div class="field">
              <strong>Email</strong>
              <p><a href="mailto:{email}" style="color: #667eea; text-decoration: none;">{email}</a></p>
            </div>
            {phone_field}
            <div class="field">
              <strong>Service Interested In</strong>
              <p>{service_label}</p>
            </div>
            <div class="message-box">
              <strong>Message</strong>
              <p>{message_html}</p>
            </div>
            <div class="footer">
              <p>This email was sent from the GenAIWorks contact form</p>
              <p>Received on {received} IST</p>
            </div>
          </div>
        </body>
        </html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mailer::{MailerError, MockMailer};

    fn state_with(mailer: MockMailer) -> Arc<AppState> {
        Arc::new(AppState {
            mailer: Arc::new(mailer),
        })
    }

    fn mailer_expecting_no_send() -> MockMailer {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);
        mailer
    }

    fn body(value: serde_json::Value) -> Bytes {
        Bytes::from(value.to_string())
    }

    #[tokio::test]
    async fn non_post_methods_are_rejected() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let (status, Json(response)) = send_message(
                State(state_with(mailer_expecting_no_send())),
                method,
                body(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
            )
            .await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                response,
                json!({"success": false, "error": "Method not allowed"})
            );
        }
    }

    #[tokio::test]
    async fn empty_payload_is_missing_required_fields() {
        let (status, Json(response)) = send_message(
            State(state_with(mailer_expecting_no_send())),
            Method::POST,
            body(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            json!({"success": false, "error": "Missing required fields"})
        );
    }

    #[tokio::test]
    async fn absent_body_is_missing_required_fields() {
        let (status, Json(response)) = send_message(
            State(state_with(mailer_expecting_no_send())),
            Method::POST,
            Bytes::new(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            json!({"success": false, "error": "Missing required fields"})
        );
    }

    #[tokio::test]
    async fn whitespace_only_fields_count_as_missing() {
        let (status, Json(response)) = send_message(
            State(state_with(mailer_expecting_no_send())),
            Method::POST,
            body(json!({"name": "  ", "email": "jo@x.com", "message": "Hi"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            json!({"success": false, "error": "Missing required fields"})
        );
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_before_sending() {
        for email in ["not-an-email", "no-tld@domain", "spaces in@x.com", "@x.com"] {
            let (status, Json(response)) = send_message(
                State(state_with(mailer_expecting_no_send())),
                Method::POST,
                body(json!({"name": "Jo", "email": email, "message": "Hi"})),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "email: {email}");
            assert_eq!(
                response,
                json!({"success": false, "error": "Invalid email address"})
            );
        }
    }

    #[tokio::test]
    async fn valid_request_sends_exactly_one_email() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.subject == CONTACT_SUBJECT
                    && email.html_body.contains("<p>Jo</p>")
                    && email.html_body.contains("mailto:jo@x.com")
            })
            .times(1)
            .returning(|_| Ok(()));

        let (status, Json(response)) = send_message(
            State(state_with(mailer)),
            Method::POST,
            body(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({"success": true}));
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_generic_server_error() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::Smtp("connection refused".into())));

        let (status, Json(response)) = send_message(
            State(state_with(mailer)),
            Method::POST,
            body(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({"success": false, "error": "Server error"}));
    }

    #[test]
    fn notification_includes_phone_only_when_present() {
        let with_phone = render_notification(
            "Jo",
            "jo@x.com",
            Some("+358401234567"),
            "AI MVP Build",
            "Hi",
        );
        assert!(with_phone.contains("tel:+358401234567"));
        assert!(with_phone.contains("AI MVP Build"));

        let without_phone = render_notification("Jo", "jo@x.com", None, "Not specified", "Hi");
        assert!(!without_phone.contains("tel:"));
        assert!(without_phone.contains("Not specified"));
    }

    #[test]
    fn notification_converts_newlines_to_breaks() {
        let html = render_notification(
            "Jo",
            "jo@x.com",
            None,
            "Website Development",
            "line one\nline two",
        );
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("Received on"));
    }
}
