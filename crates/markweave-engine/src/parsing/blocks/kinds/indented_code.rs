/// Indented code block type.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static [u8] = b"    ";

    /// The line with its code indent removed, if it has one.
    pub fn strip_indent(line: &[u8]) -> Option<&[u8]> {
        line.strip_prefix(Self::INDENT)
            .or_else(|| line.strip_prefix(b"\t"))
    }
}
