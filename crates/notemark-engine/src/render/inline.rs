//! Inline span transformation for a single line of text.
//!
//! The input is escaped first, then a priority-ordered rule table runs
//! over the whole line, one global substitution pass per rule. Order
//! matters twice over: escaping must precede any tag synthesis, and the
//! image rule must precede the link rule so `![..](..)` is not swallowed
//! by the wider `[..](..)` pattern.
//!
//! Later passes must not rewrite the inside of tags earlier passes
//! produced (a URL containing `_` or `*` is not emphasis). Since the
//! input is escaped up front, every raw `<`..`>` region in the working
//! string is renderer-generated, so a match is skipped whenever either of
//! its endpoints falls inside one.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const BOLD_STYLE: &str = "font-weight: bold;";
const BOLD_ITALIC_STYLE: &str = "font-weight: bold; font-style: italic;";
const EMPHASIS_STYLE: &str = "color: #c678dd;";
const CODE_STYLE: &str = "font-weight: bold;";

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").unwrap());
static BOLD_ITALIC_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_ITALIC_UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
static STRIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static HIGHLIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^\^(.+?)\^\^").unwrap());
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

type RenderFn = fn(&Captures) -> String;

struct SpanRule {
    re: &'static Lazy<Regex>,
    render: RenderFn,
}

static RULES: [SpanRule; 10] = [
    SpanRule {
        re: &IMAGE_RE,
        render: |c| format!(r#"<img src="{}" alt="{}">"#, &c[2], &c[1]),
    },
    SpanRule {
        re: &LINK_RE,
        render: |c| format!(r#"<a href="{}" target="_blank">{}</a>"#, &c[2], &c[1]),
    },
    SpanRule {
        re: &BOLD_ITALIC_STAR_RE,
        render: |c| format!(r#"<strong style="{BOLD_ITALIC_STYLE}">{}</strong>"#, &c[1]),
    },
    SpanRule {
        re: &BOLD_ITALIC_UNDER_RE,
        render: |c| format!(r#"<strong style="{BOLD_ITALIC_STYLE}">{}</strong>"#, &c[1]),
    },
    SpanRule {
        re: &BOLD_RE,
        render: |c| format!(r#"<strong style="{BOLD_STYLE}">{}</strong>"#, &c[1]),
    },
    SpanRule {
        re: &ITALIC_STAR_RE,
        render: |c| format!(r#"<span style="{EMPHASIS_STYLE}">{}</span>"#, &c[1]),
    },
    SpanRule {
        re: &ITALIC_UNDER_RE,
        render: |c| format!(r#"<span style="{EMPHASIS_STYLE}">{}</span>"#, &c[1]),
    },
    SpanRule {
        re: &STRIKE_RE,
        render: |c| format!("<del>{}</del>", &c[1]),
    },
    SpanRule {
        re: &HIGHLIGHT_RE,
        render: |c| format!("<mark>{}</mark>", &c[1]),
    },
    SpanRule {
        re: &CODE_RE,
        render: |c| format!(r#"<code style="{CODE_STYLE}">{}</code>"#, &c[1]),
    },
];

/// Transforms one line of raw text into HTML-safe inline markup.
pub fn apply(line: &str) -> String {
    let mut text = html_escape::encode_text(line).into_owned();
    for rule in &RULES {
        text = replace_outside_tags(rule.re, &text, rule.render);
    }
    text
}

/// Global left-to-right substitution that refuses matches whose start or
/// end falls inside a previously generated tag. A refused occurrence is
/// left verbatim and scanning resumes one byte past its start.
fn replace_outside_tags(re: &Regex, input: &str, render: RenderFn) -> String {
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut search_from = 0;

    while search_from <= input.len() {
        let Some(caps) = re.captures_at(input, search_from) else {
            break;
        };
        let m = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
        if inside_tag(input, m.0) || inside_tag(input, m.1) {
            search_from = m.0 + 1;
            continue;
        }
        out.push_str(&input[copied..m.0]);
        out.push_str(&render(&caps));
        copied = m.1;
        // zero-width safety: always make forward progress
        search_from = m.1.max(m.0 + 1);
    }

    out.push_str(&input[copied..]);
    out
}

/// True when `pos` lies strictly inside a `<`..`>` region. The input was
/// escaped before any rule ran, so every raw angle bracket delimits a
/// renderer-generated tag.
fn inside_tag(s: &str, pos: usize) -> bool {
    let before = &s.as_bytes()[..pos];
    let open = before.iter().rposition(|&b| b == b'<');
    let close = before.iter().rposition(|&b| b == b'>');
    match (open, close) {
        (Some(o), Some(c)) => o > c,
        (Some(_), None) => true,
        _ => false,
    }
}
