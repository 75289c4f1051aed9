//! Form Field Components
//!
//! Labelled text input, textarea and select used by the contact form.

use dioxus::prelude::*;

use crate::hooks::element_id;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    /// Input label text
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, date)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "name",
///         label: "Your Name",
///         value: name(),
///         oninput: move |s| name.set(s),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| element_id(&props.name));

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "{props.label}"
                if props.required {
                    span { class: "input-required", " *" }
                }
            }
            input {
                id: "{id}",
                class: "input-field",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    pub name: String,
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| element_id(&props.name));

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                name: "{props.name}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub value: String,
    pub onchange: EventHandler<String>,
    pub name: String,
    pub label: String,
    /// Selectable options
    pub options: Vec<String>,
    /// Shown while nothing is selected
    #[props(default = "Select an option".to_string())]
    pub placeholder: String,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = use_hook(|| element_id(&props.name));

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            select {
                id: "{id}",
                class: "input-field select",
                name: "{props.name}",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", disabled: true, selected: props.value.is_empty(), "{props.placeholder}" }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
        }
    }
}
