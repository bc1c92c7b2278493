use html_escape::encode_text;

/// Fenced code block construct.
///
/// A fence line is any line whose trimmed form starts with three
/// backticks; whatever follows the backticks on the opening line is the
/// language tag. The same predicate closes the block, so an unterminated
/// fence simply runs to end of input.
pub struct CodeFence;

impl CodeFence {
    /// The fence delimiter.
    pub const FENCE: &'static str = "```";

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::FENCE)
    }

    /// Language tag from an opening fence line (may be empty).
    pub fn language(line: &str) -> &str {
        line.trim()
            .strip_prefix(Self::FENCE)
            .unwrap_or_default()
            .trim()
    }

    /// Renders the block: a styled container with an optional language
    /// label, then `<pre><code>` holding the escaped body verbatim.
    pub fn render(language: &str, body: &[&str]) -> String {
        let mut html = String::from(
            r#"<div style="background: #282c34; border-radius: 6px; padding: 8px 12px; margin: 8px 0;">"#,
        );
        if !language.is_empty() {
            html.push_str(&format!(
                r#"<div style="font-size: 0.8em; opacity: 0.7;">{}</div>"#,
                encode_text(language)
            ));
        }
        html.push_str("<pre><code>");
        html.push_str(&encode_text(&body.join("\n")));
        html.push_str("</code></pre></div>");
        html
    }
}
