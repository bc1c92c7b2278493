use crate::render::inline;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) (.+)$").unwrap());

/// ATX-style heading construct, levels 1 through 6.
///
/// Seven or more `#` is not a heading: the anchored `#{1,6}` cannot leave
/// a space as the next character, so the line falls through to paragraph
/// handling in the render loop.
pub struct Heading;

impl Heading {
    /// Font size per level, largest first.
    const FONT_SIZES: [&'static str; 6] = ["2em", "1.7em", "1.4em", "1.2em", "1.1em", "1em"];

    /// Returns `(level, text)` when the line is a heading.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let caps = HEADING_RE.captures(line)?;
        let level = caps.get(1)?.len();
        let text = caps.get(2)?.as_str();
        Some((level, text))
    }

    pub fn render(level: usize, text: &str) -> String {
        let size = Self::FONT_SIZES[level - 1];
        format!(
            r#"<h{level} style="font-size: {size};">{}</h{level}>"#,
            inline::apply(text)
        )
    }
}
