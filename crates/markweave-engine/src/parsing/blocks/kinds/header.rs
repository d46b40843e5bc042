/// ATX header block type with owned delimiter constant.
pub struct Header;

impl Header {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses `## text ##` into its level and text.
    ///
    /// With `space_required` the markers must be followed by a space, so
    /// `#hashtag` stays a paragraph. Closing markers and surrounding spaces
    /// are not part of the text.
    pub fn parse(line: &[u8], space_required: bool) -> Option<(u8, &[u8])> {
        let level = line.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if space_required && !rest.is_empty() && rest[0] != b' ' {
            return None;
        }

        let mut end = rest.len();
        while end > 0 && rest[end - 1] == b' ' {
            end -= 1;
        }
        let closing = rest[..end].iter().rev().take_while(|&&c| c == Self::MARKER).count();
        if closing > 0 && (closing == end || rest[end - closing - 1] == b' ') {
            end -= closing;
        }
        let start = rest[..end].iter().take_while(|&&c| c == b' ').count();
        let text = &rest[start..end];
        let trailing = text.iter().rev().take_while(|&&c| c == b' ').count();

        // level is at most MAX_LEVEL
        Some((level as u8, &text[..text.len() - trailing]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"# Title", Some((1, &b"Title"[..])))]
    #[case(b"### Deep ###", Some((3, &b"Deep"[..])))]
    #[case(b"###### six", Some((6, &b"six"[..])))]
    #[case(b"####### seven", None)]
    #[case(b"#", Some((1, &b""[..])))]
    #[case(b"# C#", Some((1, &b"C#"[..])))]
    #[case(b"plain", None)]
    fn parses(#[case] line: &[u8], #[case] expected: Option<(u8, &[u8])>) {
        assert_eq!(Header::parse(line, false), expected);
    }

    #[test]
    fn space_requirement() {
        assert_eq!(Header::parse(b"#tag", false), Some((1, &b"tag"[..])));
        assert_eq!(Header::parse(b"#tag", true), None);
        assert_eq!(Header::parse(b"# tag", true), Some((1, &b"tag"[..])));
    }
}
