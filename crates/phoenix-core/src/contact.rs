//! Contact hand-off to WhatsApp.
//!
//! The contact form never stores anything. Submitting builds a `wa.me` deep
//! link with the inquiry pre-filled and the UI opens it in a new browsing
//! context.

use crate::error::{SiteError, SiteResult};

/// Business WhatsApp number used by the site's CTAs.
pub const DEFAULT_WHATSAPP_PHONE: &str = "7066763276";

/// Greeting used by the floating WhatsApp button and the header CTA.
pub const GREETING: &str = "Hello, I would like to plan an event with Phoenix Events & Productions.";

/// Event types offered in the contact form's select.
pub const EVENT_TYPES: &[&str] = &[
    "Wedding",
    "Birthday Party",
    "Engagement",
    "Sangeet",
    "Haldi",
    "Mehendi",
    "Anniversary",
    "Corporate Event",
    "Car Launch",
    "Other",
];

/// Contact form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub date: String,
    pub message: String,
}

/// Which form input changed; used by the UI's single change handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    EventType,
    Date,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::EventType => self.event_type = value,
            ContactField::Date => self.date = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Name and phone are required; everything else may be blank.
    pub fn validate(&self) -> SiteResult<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::InvalidContact("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(SiteError::InvalidContact("phone"));
        }
        Ok(())
    }

    /// Inquiry text with WhatsApp bold markers around the labels.
    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hello! I would like to inquire about an event.\n\n\
             *Name:* {}\n\
             *Phone:* {}\n\
             *Email:* {}\n\
             *Event Type:* {}\n\
             *Preferred Date:* {}\n\
             *Message:* {}",
            self.name.trim(),
            self.phone.trim(),
            self.email.trim(),
            self.event_type,
            self.date,
            self.message.trim(),
        )
    }

    /// Validate and build the hand-off link to `business_phone`.
    pub fn handoff_link(&self, business_phone: &str) -> SiteResult<String> {
        self.validate()?;
        whatsapp_link(business_phone, &self.whatsapp_message())
    }
}

/// `https://wa.me/<digits>?text=<percent-encoded text>`.
///
/// Formatting characters in the phone number (`+`, spaces, dashes) are
/// dropped since wa.me only accepts digits.
pub fn whatsapp_link(phone: &str, text: &str) -> SiteResult<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(SiteError::InvalidPhone(phone.to_string()));
    }
    Ok(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(text)
    ))
}

/// WhatsApp link behind the "Plan this" button on each event card.
pub fn quick_inquiry_link(phone: &str, event_title: &str) -> SiteResult<String> {
    whatsapp_link(
        phone,
        &format!("Hello! I'm interested in planning a {} event.", event_title),
    )
}
