/// A cursor over the lines of a document.
///
/// Block parsing is line oriented: every construct starts at a line
/// boundary and consumes whole lines. The cursor owns the split once and
/// hands out `&'a str` slices of the original text, so lookahead does not
/// borrow the cursor itself and multi-line constructs can advance it
/// mid-inspection.
pub struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    /// Splits `text` into lines. `str::lines` semantics: `\n` separated,
    /// trailing `\r` stripped, empty input yields no lines.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Returns the current line without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Returns the line `n` past the current one without advancing.
    pub fn peek_ahead(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.pos + n).copied()
    }

    /// Advances past the current line, returning it.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Returns true when every line has been consumed.
    pub fn eof(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Lines::new("one\ntwo");
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some("one"));
        assert_eq!(cur.bump(), Some("one"));
        assert_eq!(cur.peek(), Some("two"));
        assert_eq!(cur.bump(), Some("two"));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let cur = Lines::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn peek_ahead_does_not_advance() {
        let cur = Lines::new("a\nb\nc");
        assert_eq!(cur.peek_ahead(0), Some("a"));
        assert_eq!(cur.peek_ahead(1), Some("b"));
        assert_eq!(cur.peek_ahead(2), Some("c"));
        assert_eq!(cur.peek_ahead(3), None);
        assert_eq!(cur.peek(), Some("a"));
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let mut cur = Lines::new("a\r\nb\r\n");
        assert_eq!(cur.bump(), Some("a"));
        assert_eq!(cur.bump(), Some("b"));
        assert!(cur.eof());
    }

    #[test]
    fn blank_lines_are_kept_as_empty_slices() {
        let mut cur = Lines::new("a\n\nb");
        cur.bump();
        assert_eq!(cur.peek(), Some(""));
    }
}
