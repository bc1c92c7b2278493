use crate::render::inline;

/// One line of a blockquote run: marker count plus the remaining text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    /// Number of leading `>` markers (1 = outermost quote).
    pub level: usize,
    /// Line content after the markers are stripped.
    pub text: String,
}

/// Blockquote construct.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote marker character.
    pub const MARKER: char = '>';

    /// A line belongs to a blockquote run when it starts with `>` after
    /// leading whitespace.
    pub fn opens(line: &str) -> bool {
        line.trim_start().starts_with(Self::MARKER)
    }

    /// Splits a quoted line into its nesting level and remaining text.
    ///
    /// Each `>` may be followed by at most one space that is consumed
    /// with it, so `> > a` and `>>a` both come out at level 2.
    pub fn split_markers(line: &str) -> QuoteLine {
        let mut rest = line.trim();
        let mut level = 0;
        while let Some(after) = rest.strip_prefix(Self::MARKER) {
            level += 1;
            rest = after.strip_prefix(' ').unwrap_or(after);
        }
        QuoteLine {
            level,
            text: rest.to_string(),
        }
    }

    /// Renders a contiguous run of quote lines as nested blockquotes.
    ///
    /// The first line's level is the base of this recursion step. Lines
    /// at the base level become sibling `<p>`s; any deeper line is
    /// accumulated (one level shallower) into a pending child run that is
    /// rendered recursively where the next base-level sibling resumes.
    /// A jump of more than one level therefore folds into a single extra
    /// nesting step.
    pub fn render_run(lines: &[QuoteLine]) -> String {
        let Some(first) = lines.first() else {
            return String::new();
        };
        let base = first.level;

        let mut html = String::from("<blockquote>");
        let mut pending: Vec<QuoteLine> = Vec::new();
        for line in lines {
            if line.level > base {
                pending.push(QuoteLine {
                    level: line.level - 1,
                    text: line.text.clone(),
                });
                continue;
            }
            if !pending.is_empty() {
                html.push_str(&Self::render_run(&pending));
                pending.clear();
            }
            html.push_str("<p>");
            html.push_str(&inline::apply(&line.text));
            html.push_str("</p>");
        }
        if !pending.is_empty() {
            html.push_str(&Self::render_run(&pending));
        }
        html.push_str("</blockquote>");
        html
    }
}
