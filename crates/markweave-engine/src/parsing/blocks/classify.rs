/// Classification of a single line containing only local facts.
///
/// This is the first step of block parsing: a line is classified without
/// reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset of the line terminator (or the end of the data).
    pub end: usize,
    /// Offset of the next line.
    pub next: usize,
    /// Whether the line holds only whitespace.
    pub is_blank: bool,
}

impl LineClass {
    /// The line without its terminator.
    pub fn text<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end]
    }
}

/// Splits the normalised buffer into classified lines.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies the line starting at `start`.
    pub fn classify(&self, data: &[u8], start: usize) -> LineClass {
        let end = data[start..]
            .iter()
            .position(|&c| c == b'\n')
            .map_or(data.len(), |p| start + p);
        let next = (end + 1).min(data.len());
        LineClass {
            start,
            end,
            next,
            is_blank: data[start..end].iter().all(|c| c.is_ascii_whitespace()),
        }
    }

    /// All lines from `start` onwards.
    pub fn lines<'a>(&'a self, data: &'a [u8], start: usize) -> impl Iterator<Item = LineClass> + 'a {
        let mut at = start;
        std::iter::from_fn(move || {
            if at >= data.len() {
                return None;
            }
            let line = self.classify(data, at);
            at = line.next;
            Some(line)
        })
    }
}
