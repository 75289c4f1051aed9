//! Gallery filter pills.
//!
//! One pill per category with the number of photos it shows. Exactly one
//! pill is checked at a time, so the row is exposed as a radio group.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// `(category, item count)` pairs, "All" first
    pub categories: Vec<(String, usize)>,
    pub selected: String,
    pub on_select: EventHandler<String>,
}

/// ```rust,ignore
/// let counts = category_counts(&items)
///     .into_iter()
///     .map(|(name, n)| (name.to_string(), n))
///     .collect();
///
/// rsx! {
///     CategoryPills {
///         categories: counts,
///         selected: selected(),
///         on_select: move |cat| selected.set(cat),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let on_select = props.on_select;
    let selected = props.selected;

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Gallery category",
            for (name, count) in props.categories {
                {
                    let checked = name == selected;
                    let label = pill_label(&name, count);
                    let value = name.clone();
                    rsx! {
                        button {
                            key: "{name}",
                            class: if checked { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": "{checked}",
                            "aria-label": "{label}",
                            disabled: count == 0,
                            onclick: move |_| on_select.call(value.clone()),
                            "{name}"
                            span { class: "pill-count", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

fn pill_label(name: &str, count: usize) -> String {
    match count {
        1 => format!("{} (1 photo)", name),
        n => format!("{} ({} photos)", name, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_pluralises_count() {
        assert_eq!(pill_label("Decor", 1), "Decor (1 photo)");
        assert_eq!(pill_label("All", 6), "All (6 photos)");
        assert_eq!(pill_label("Corporate", 0), "Corporate (0 photos)");
    }
}
