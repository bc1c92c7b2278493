use crate::render::inline;

/// Pipe table construct.
///
/// Detection needs two lines of lookahead: the header line must contain a
/// pipe, and the very next line must be a separator row (pipes, dashes,
/// colons and spaces only). Without that separator the candidate lines
/// are not a table and fall back to paragraph handling one at a time.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// True when stripping `|`, `-`, `:` and spaces leaves nothing.
    pub fn is_separator(line: &str) -> bool {
        line.chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' '))
    }

    /// Header line plus separator lookahead.
    pub fn opens(line: &str, next: Option<&str>) -> bool {
        Self::has_pipe(line)
            && next.is_some_and(|n| Self::has_pipe(n) && Self::is_separator(n))
    }

    /// Splits a row into trimmed cells, dropping the empty boundary cells
    /// produced by leading/trailing pipes (`| a | b |`).
    fn cells(row: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = row.split(Self::PIPE).map(str::trim).collect();
        if cells.first() == Some(&"") {
            cells.remove(0);
        }
        if cells.last() == Some(&"") {
            cells.pop();
        }
        cells
    }

    pub fn render(header: &str, body: &[&str]) -> String {
        let mut html = String::from("<table><thead><tr>");
        for cell in Self::cells(header) {
            html.push_str(&format!("<th>{}</th>", inline::apply(cell)));
        }
        html.push_str("</tr></thead><tbody>");
        for row in body {
            html.push_str("<tr>");
            for cell in Self::cells(row) {
                html.push_str(&format!("<td>{}</td>", inline::apply(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}
