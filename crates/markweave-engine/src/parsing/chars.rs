//! Byte classes shared by the block and span grammars. All ASCII-only.

/// ASCII punctuation.
pub fn is_punct(c: u8) -> bool {
    c.is_ascii_punctuation()
}

/// Space, tab, newline, carriage return, form feed or vertical tab.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b)
}

/// ASCII letter or digit.
pub fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Space or tab.
pub fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// `\n` or `\r`.
pub fn is_line_end(c: u8) -> bool {
    c == b'\n' || c == b'\r'
}

/// Number of bytes in the UTF-8 sequence starting at `bytes[0]`.
///
/// Malformed or truncated sequences count as a single byte, so a scan over
/// arbitrary bytes always advances.
pub fn utf8_len(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else {
        return 0;
    };
    let width = match lead {
        0x00..=0x7f => return 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return 1,
    };
    match bytes.get(..width) {
        Some(seq) if std::str::from_utf8(seq).is_ok() => width,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_matches_ascii_set() {
        for c in b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~" {
            assert!(is_punct(*c), "{} should be punctuation", *c as char);
        }
        assert!(!is_punct(b'a'));
        assert!(!is_punct(b' '));
    }

    #[test]
    fn whitespace_includes_form_feed_and_vertical_tab() {
        assert!(is_space(0x0c));
        assert!(is_space(0x0b));
        assert!(!is_space(b'x'));
    }

    #[test]
    fn utf8_len_counts_sequences() {
        assert_eq!(utf8_len(b"a"), 1);
        assert_eq!(utf8_len("é".as_bytes()), 2);
        assert_eq!(utf8_len("€".as_bytes()), 3);
        assert_eq!(utf8_len("🦀".as_bytes()), 4);
        assert_eq!(utf8_len(b""), 0);
    }

    #[test]
    fn utf8_len_treats_malformed_as_single_byte() {
        assert_eq!(utf8_len(&[0xff, b'a']), 1);
        assert_eq!(utf8_len(&[0xe2, 0x82]), 1);
        assert_eq!(utf8_len(&[0xc3, b'a']), 1);
    }
}
