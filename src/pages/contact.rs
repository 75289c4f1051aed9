//! Contact Page
//!
//! Enquiry form. Submitting validates the required fields, formats the
//! enquiry and hands it off to WhatsApp in a new browsing context.

use dioxus::prelude::*;
use phoenix_core::contact::EVENT_TYPES;
use phoenix_core::{ContactField, ContactForm, SiteError};
use phoenix_ui::{Button, ButtonVariant, Input, Select, TextArea};

use crate::components::open_external;
use crate::context::use_site_config;

/// Outcome of the last submit, shown under the form.
#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sent,
    Invalid(String),
}

fn error_message(error: &SiteError) -> String {
    match error {
        SiteError::InvalidContact("name") => "Please enter your name.".to_string(),
        SiteError::InvalidContact("phone") => "Please enter a phone number we can reach you on.".to_string(),
        other => other.to_string(),
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site_config();
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let mut update = move |field: ContactField, value: String| {
        form.write().set(field, value);
        if *status.peek() != SubmitStatus::Idle {
            status.set(SubmitStatus::Idle);
        }
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        match form.read().handoff_link(&site.whatsapp_phone) {
            Ok(url) => {
                tracing::info!("Handing enquiry off to WhatsApp");
                open_external(&url);
                status.set(SubmitStatus::Sent);
            }
            Err(e) => {
                tracing::debug!("Enquiry rejected: {}", e);
                status.set(SubmitStatus::Invalid(error_message(&e)));
            }
        }
    };

    let data = form.read().clone();
    let event_types: Vec<String> = EVENT_TYPES.iter().map(|t| t.to_string()).collect();

    rsx! {
        section { class: "page-hero",
            p { class: "eyebrow", "Get In Touch" }
            h1 {
                "Let's Plan Your "
                span { class: "text-gradient-gold", "Perfect Event" }
            }
            p {
                "Ready to create something extraordinary? We'd love to hear from you. "
                "Let's discuss how we can bring your vision to life."
            }
        }

        section { class: "section contact-section",
            div { class: "contact-grid",
                form { class: "contact-form", onsubmit: submit,
                    h2 { "Send Us a Message" }
                    p { class: "form-hint", "Fill out the form below and we'll connect with you on WhatsApp" }

                    div { class: "form-row",
                        Input {
                            name: "name".to_string(),
                            label: "Your Name".to_string(),
                            placeholder: "John Doe".to_string(),
                            value: data.name.clone(),
                            required: true,
                            oninput: move |v| update(ContactField::Name, v),
                        }
                        Input {
                            name: "phone".to_string(),
                            label: "Phone Number".to_string(),
                            input_type: "tel".to_string(),
                            placeholder: "+91 98765 43210".to_string(),
                            value: data.phone.clone(),
                            required: true,
                            oninput: move |v| update(ContactField::Phone, v),
                        }
                    }
                    Input {
                        name: "email".to_string(),
                        label: "Email Address".to_string(),
                        input_type: "email".to_string(),
                        placeholder: "john@example.com".to_string(),
                        value: data.email.clone(),
                        oninput: move |v| update(ContactField::Email, v),
                    }
                    div { class: "form-row",
                        Select {
                            name: "event_type".to_string(),
                            label: "Event Type".to_string(),
                            placeholder: "Select event type".to_string(),
                            options: event_types,
                            value: data.event_type.clone(),
                            onchange: move |v| update(ContactField::EventType, v),
                        }
                        Input {
                            name: "date".to_string(),
                            label: "Preferred Date".to_string(),
                            input_type: "date".to_string(),
                            value: data.date.clone(),
                            oninput: move |v| update(ContactField::Date, v),
                        }
                    }
                    TextArea {
                        name: "message".to_string(),
                        label: "Your Message".to_string(),
                        placeholder: "Tell us about your dream event...".to_string(),
                        value: data.message.clone(),
                        oninput: move |v| update(ContactField::Message, v),
                    }

                    {match status() {
                        SubmitStatus::Idle => rsx! {},
                        SubmitStatus::Sent => rsx! {
                            p { class: "form-success", role: "status",
                                "Redirecting to WhatsApp. You'll be connected with our team shortly!"
                            }
                        },
                        SubmitStatus::Invalid(message) => rsx! {
                            p { class: "form-error", role: "alert", "{message}" }
                        },
                    }}

                    Button {
                        variant: ButtonVariant::WhatsApp,
                        button_type: "submit".to_string(),
                        class: "btn-block".to_string(),
                        "\u{1F4AC} Send via WhatsApp"
                    }
                }

                aside { class: "contact-info",
                    h2 { "Contact Information" }
                    ul {
                        li { span { class: "info-label", "Visit Us" } "123 Event Street, Creative District, Mumbai 400001" }
                        li { span { class: "info-label", "Call Us" } "+91 123 456 7890" }
                        li { span { class: "info-label", "Email Us" } "hello@phoenixevents.com" }
                        li { span { class: "info-label", "Working Hours" } "Mon - Sat: 10:00 AM - 8:00 PM" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_have_friendly_messages() {
        assert_eq!(
            error_message(&SiteError::InvalidContact("name")),
            "Please enter your name."
        );
        assert!(error_message(&SiteError::InvalidContact("phone")).contains("phone"));
        assert!(error_message(&SiteError::InvalidPhone("abc".into())).contains("abc"));
    }
}
