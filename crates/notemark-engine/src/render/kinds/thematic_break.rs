/// Horizontal rule construct.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The trimmed line must equal one of these exactly.
    pub const MARKERS: [&'static str; 3] = ["---", "___", "***"];

    pub const HTML: &'static str = "<hr>";

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line.trim())
    }
}
