use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize, Debug, PartialEq)]
pub struct ContactRequest {
    name: String,
    company: String, // Not in the form, sent empty for wire compatibility
    email: String,
    role: String,
    message: String,
    phone: String,
}

#[derive(Deserialize)]
struct ContactResponse {
    success: bool,
}

/// Trim the raw field values and assemble the request payload, or
/// `None` when a required field is blank. A provided phone number is
/// folded into the message text in addition to its own field.
fn build_submission(
    name: &str,
    email: &str,
    phone: &str,
    service: &str,
    message: &str,
) -> Option<ContactRequest> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    let service = service.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return None;
    }

    let message = if phone.is_empty() {
        message.to_string()
    } else {
        format!("Phone: {}\n\n{}", phone, message)
    };

    Some(ContactRequest {
        name: name.to_string(),
        company: String::new(),
        email: email.to_string(),
        role: service.to_string(),
        message,
        phone: phone.to_string(),
    })
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(request) = build_submission(&name, &email, &phone, &service, &message)
            else {
                alert("Please fill in all required fields.");
                return;
            };

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let response = match Request::post(&format!(
                    "{}/api/send-message",
                    config::get_backend_url()
                ))
                .json(&request)
                .unwrap()
                .send()
                .await
                {
                    Ok(response) => response,
                    Err(e) => {
                        log!("Form submission error:", e.to_string());
                        alert("Server error. Please try again later.");
                        return;
                    }
                };

                match response.json::<ContactResponse>().await {
                    Ok(body) if body.success => {
                        alert("Thank you! We will get back to you shortly.");
                        // Clear the form; failed submissions keep their
                        // values so the visitor can retry.
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                    }
                    Ok(_) => {
                        alert("Server error. Please try again later.");
                    }
                    Err(e) => {
                        log!("Error parsing contact response:", e.to_string());
                        alert("Server error. Please try again later.");
                    }
                }
            });
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your Name *"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email *"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <input
                type="tel"
                name="phone"
                placeholder="Phone (optional)"
                value={(*phone).clone()}
                onchange={let phone = phone.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    phone.set(input.value());
                }}
            />
            <select
                name="service"
                value={(*service).clone()}
                onchange={let service = service.clone(); move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    service.set(select.value());
                }}
            >
                <option value="" selected={service.is_empty()}>{"What are you interested in?"}</option>
                <option value="ai-mvp">{"AI MVP Build"}</option>
                <option value="ai-standard">{"Standard AI Product — Core"}</option>
                <option value="ai-custom">{"Standard AI Product — Plus"}</option>
                <option value="automation">{"Workflow Automation"}</option>
                <option value="website">{"Website Development"}</option>
            </select>
            <textarea
                name="message"
                placeholder="Tell us about your project *"
                rows="6"
                value={(*message).clone()}
                onchange={let message = message.clone(); move |e: Event| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(area.value());
                }}
            />
            <button type="submit" class="submit-button">{"Send Message"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_fields_block_submission() {
        assert!(build_submission("", "jo@x.com", "", "", "Hi").is_none());
        assert!(build_submission("Jo", "", "", "", "Hi").is_none());
        assert!(build_submission("Jo", "jo@x.com", "", "", "").is_none());
        assert!(build_submission("  ", "jo@x.com", "", "", " \n ").is_none());
    }

    #[test]
    fn values_are_trimmed_and_service_maps_to_role() {
        let request =
            build_submission(" Jo ", " jo@x.com ", "", " ai-mvp ", " Hello there ").unwrap();
        assert_eq!(request.name, "Jo");
        assert_eq!(request.email, "jo@x.com");
        assert_eq!(request.role, "ai-mvp");
        assert_eq!(request.message, "Hello there");
        assert_eq!(request.company, "");
        assert_eq!(request.phone, "");
    }

    #[test]
    fn phone_is_prepended_to_the_message() {
        let request =
            build_submission("Jo", "jo@x.com", "+358 40 123", "website", "Need a site").unwrap();
        assert_eq!(request.phone, "+358 40 123");
        assert_eq!(request.message, "Phone: +358 40 123\n\nNeed a site");
    }
}
