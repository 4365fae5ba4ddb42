use regex::Regex;

/// Renders chat text to an HTML fragment: `**bold**`, `*italic*` and bare
/// http(s) links. Purely presentational; keyword matching always runs on the
/// raw text, never on this output.
pub fn render_html(content: &str) -> String {
    let escaped = escape_html(content);
    let strong = Regex::new(r"\*\*(.*?)\*\*")
        .unwrap()
        .replace_all(&escaped, "<strong>$1</strong>")
        .into_owned();
    let emphasized = Regex::new(r"\*(.*?)\*")
        .unwrap()
        .replace_all(&strong, "<em>$1</em>")
        .into_owned();
    Regex::new(r"(https?://\S+)")
        .unwrap()
        .replace_all(
            &emphasized,
            r#"<a href="$1" target="_blank" class="underline">$1</a>"#,
        )
        .into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(render_html("where is my room"), "where is my room");
    }

    #[test]
    fn renders_bold_italic_and_links() {
        assert_eq!(
            render_html("**bold** and *italic* and https://example.com"),
            "<strong>bold</strong> and <em>italic</em> and \
             <a href=\"https://example.com\" target=\"_blank\" class=\"underline\">https://example.com</a>"
        );
    }

    #[test]
    fn double_asterisks_win_over_single() {
        assert_eq!(render_html("**loud**"), "<strong>loud</strong>");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(
            render_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_http_link_is_wrapped() {
        assert_eq!(
            render_html("see http://sust.edu"),
            "see <a href=\"http://sust.edu\" target=\"_blank\" class=\"underline\">http://sust.edu</a>"
        );
    }
}
