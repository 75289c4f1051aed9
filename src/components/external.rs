//! Opening links outside the app window.

use dioxus::prelude::*;

/// Script that opens `url` in the system browser. The URL is embedded as a
/// JSON string so quotes in it cannot break out of the literal.
fn open_script(url: &str) -> String {
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.open({}, '_blank', 'noopener,noreferrer');", literal)
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    tracing::debug!(%url, "opening external link");
    let _ = document::eval(&open_script(url));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_quoted() {
        assert_eq!(
            open_script("https://wa.me/123?text=Hi%20there"),
            "window.open(\"https://wa.me/123?text=Hi%20there\", '_blank', 'noopener,noreferrer');"
        );
    }

    #[test]
    fn quotes_cannot_escape_the_literal() {
        let script = open_script("x\"); alert(1); (\"");
        assert!(script.starts_with("window.open(\"x\\\"); alert(1); (\\\"\""));
    }
}
