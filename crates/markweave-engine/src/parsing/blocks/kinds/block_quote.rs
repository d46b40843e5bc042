/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in the
/// classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix byte.
    pub const PREFIX: u8 = b'>';

    /// Strips one blockquote prefix from a line, returning the offset where
    /// the quoted content starts.
    ///
    /// Up to three leading spaces are allowed before the `>`, and a single
    /// space after it belongs to the prefix. `> > x` yields `> x`, so nested
    /// quotes are peeled one level per recursion.
    pub fn strip_prefix(line: &[u8]) -> Option<usize> {
        let indent = line.iter().take(3).take_while(|&&c| c == b' ').count();
        if line.get(indent) != Some(&Self::PREFIX) {
            return None;
        }
        let mut i = indent + 1;
        if line.get(i) == Some(&b' ') {
            i += 1;
        }
        Some(i)
    }
}
