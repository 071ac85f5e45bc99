//! HTML to visible text

use scraper::{Html, Node};

/// Elements whose text never reaches the reader
const SKIPPED_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

/// Whitespace-joined visible text of an HTML document
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut parts: Vec<&str> = Vec::new();
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

/// Cheap sniff for an HTML body
pub fn looks_like_html(body: &str) -> bool {
    let head: String = body.chars().take(1024).collect::<String>().to_lowercase();
    head.contains("<html") || head.contains("<!doctype html") || head.contains("<body")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_skips_scripts() {
        let html = r#"
            <html>
              <head><title>Shop</title><style>.p { color: red }</style></head>
              <body>
                <h1>Basmati rice</h1>
                <script>var price = "$9999";</script>
                <p class="p">Now <b>Rs. 120</b> per kg</p>
              </body>
            </html>
        "#;
        let text = html_to_text(html);
        assert_eq!(text, "Basmati rice Now Rs. 120 per kg");
    }

    #[test]
    fn test_html_to_text_fragment() {
        assert_eq!(html_to_text("<p>$5</p>"), "$5");
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<!DOCTYPE html><html></html>"));
        assert!(looks_like_html("  <HTML lang=\"en\">"));
        assert!(!looks_like_html("plain text with $5"));
    }
}
