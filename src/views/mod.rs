// HTML rendering: explicit view-model to string, no template engine

pub mod workouts;

const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");

/// Wrap a rendered body in the shared layout. The layout owns the
/// "Tracking | " title prefix.
pub fn render_layout(title: &str, body: &str) -> String {
    LAYOUT_TEMPLATE
        .replace("{{title}}", title)
        .replace("{{body}}", body)
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn layout_carries_the_title_prefix() {
        let page = render_layout("Index", "<p>hello</p>");
        assert!(page.contains("<title>Tracking | Index</title>"));
        assert!(page.contains("<p>hello</p>"));
    }
}
