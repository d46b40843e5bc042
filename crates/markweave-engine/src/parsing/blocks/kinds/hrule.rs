/// Horizontal rule block type.
pub struct HRule;

impl HRule {
    pub const MARKERS: &'static [u8] = b"*-_";
    pub const MIN_MARKERS: usize = 3;

    /// Three or more of the same marker, optionally spaced out.
    pub fn matches(line: &[u8]) -> bool {
        let indent = line.iter().take(3).take_while(|&&c| c == b' ').count();
        let rest = &line[indent..];
        let Some(&marker) = rest.first() else {
            return false;
        };
        if !Self::MARKERS.contains(&marker) {
            return false;
        }
        let mut count = 0;
        for &c in rest {
            if c == marker {
                count += 1;
            } else if c != b' ' {
                return false;
            }
        }
        count >= Self::MIN_MARKERS
    }
}
