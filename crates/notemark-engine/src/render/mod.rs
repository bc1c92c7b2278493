//! Markdown-to-HTML rendering.
//!
//! One forward scan over the lines of the input. Each iteration
//! classifies the line at the cursor, lets the matching block kind
//! consume as many lines as it needs, and appends one emitted block.
//! Inline spans are handled separately per line by [`inline`].
//!
//! ## Modules
//!
//! - **`cursor`**: line cursor with lookahead (`Lines`)
//! - **`kinds`**: one module per block construct, owning its delimiters
//! - **`inline`**: escaping plus the inline span rule table

pub mod cursor;
pub mod inline;
pub mod kinds;

use cursor::Lines;
use kinds::{BlockQuote, CodeFence, Heading, Table, ThematicBreak};

/// An emitted block. Blank-line breaks get their own variant so the
/// dedup check compares kinds, not output strings.
enum Block {
    Break,
    Html(String),
}

/// Renders note text to an HTML fragment.
///
/// Total over all inputs: malformed constructs fall through to paragraph
/// handling or run to end of input, and the empty string renders to the
/// empty string.
pub fn render(text: &str) -> String {
    let mut lines = Lines::new(text);
    let mut blocks: Vec<Block> = Vec::new();

    while let Some(line) = lines.peek() {
        if BlockQuote::opens(line) {
            blocks.push(Block::Html(quote_run(&mut lines)));
        } else if CodeFence::opens(line) {
            blocks.push(Block::Html(fenced_code(&mut lines)));
        } else if Table::opens(line, lines.peek_ahead(1)) {
            blocks.push(Block::Html(table(&mut lines)));
        } else if let Some((level, heading)) = Heading::parse(line) {
            lines.bump();
            blocks.push(Block::Html(Heading::render(level, heading)));
        } else if ThematicBreak::matches(line) {
            lines.bump();
            blocks.push(Block::Html(ThematicBreak::HTML.to_string()));
        } else if line.trim().is_empty() {
            lines.bump();
            if !blocks.is_empty() && !matches!(blocks.last(), Some(Block::Break)) {
                blocks.push(Block::Break);
            }
        } else {
            lines.bump();
            blocks.push(Block::Html(format!("<p>{}</p>", inline::apply(line.trim()))));
        }
    }

    // Per-line dedup only sees the immediately preceding block; collapse
    // any break runs that slipped through before joining.
    blocks.dedup_by(|a, b| matches!(a, Block::Break) && matches!(b, Block::Break));

    blocks
        .iter()
        .map(|b| match b {
            Block::Break => "<br>",
            Block::Html(html) => html.as_str(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Consumes every consecutive `>`-prefixed line and renders the run as a
/// nested quote tree.
fn quote_run(lines: &mut Lines<'_>) -> String {
    let mut run = Vec::new();
    while let Some(line) = lines.peek() {
        if !BlockQuote::opens(line) {
            break;
        }
        run.push(BlockQuote::split_markers(line));
        lines.bump();
    }
    BlockQuote::render_run(&run)
}

/// Consumes an opening fence, the body, and the closing fence if there is
/// one; an unterminated block runs to end of input.
fn fenced_code(lines: &mut Lines<'_>) -> String {
    let opening = lines.bump().unwrap_or_default();
    let language = CodeFence::language(opening);

    let mut body = Vec::new();
    while let Some(line) = lines.peek() {
        lines.bump();
        if CodeFence::opens(line) {
            break;
        }
        body.push(line);
    }
    CodeFence::render(language, &body)
}

/// Consumes the header line, the separator, and every following line that
/// still contains a pipe.
fn table(lines: &mut Lines<'_>) -> String {
    let header = lines.bump().unwrap_or_default();
    lines.bump(); // separator row

    let mut body = Vec::new();
    while let Some(line) = lines.peek() {
        if !Table::has_pipe(line) {
            break;
        }
        body.push(line);
        lines.bump();
    }
    Table::render(header, &body)
}
