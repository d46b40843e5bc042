//! # Tab Expansion
//!
//! Replaces tabs with spaces up to the next tab stop.
//!
//! When every tab sits in a leading run (the overwhelmingly common case of
//! indentation) the line is expanded without decoding any characters.
//! Otherwise columns are counted per UTF-8 character, not per byte.

use super::chars::utf8_len;

/// Default distance between tab stops.
pub const TAB_SIZE_DEFAULT: usize = 4;
/// Tab stop distance with `Extensions::TAB_SIZE_EIGHT`.
pub const TAB_SIZE_EIGHT: usize = 8;

/// Appends `line` to `out` with its tabs expanded to `tab_size` columns.
pub fn expand_tabs(out: &mut Vec<u8>, line: &[u8], tab_size: usize) {
    match leading_tabs(line) {
        Some(prefix) => expand_prefix(out, line, prefix, tab_size),
        None => expand_columns(out, line, tab_size),
    }
}

/// Number of leading tabs, or `None` if a tab appears after other content.
fn leading_tabs(line: &[u8]) -> Option<usize> {
    let prefix = line.iter().take_while(|&&c| c == b'\t').count();
    if line[prefix..].contains(&b'\t') {
        None
    } else {
        Some(prefix)
    }
}

fn expand_prefix(out: &mut Vec<u8>, line: &[u8], prefix: usize, tab_size: usize) {
    out.resize(out.len() + prefix * tab_size, b' ');
    out.extend_from_slice(&line[prefix..]);
}

fn expand_columns(out: &mut Vec<u8>, line: &[u8], tab_size: usize) {
    let tab_size = tab_size.max(1);
    let mut column = 0usize;
    let mut i = 0;

    while i < line.len() {
        let start = i;
        while i < line.len() && line[i] != b'\t' {
            i += utf8_len(&line[i..]);
            column += 1;
        }
        out.extend_from_slice(&line[start..i]);

        if i >= line.len() {
            break;
        }

        loop {
            out.push(b' ');
            column += 1;
            if column % tab_size == 0 {
                break;
            }
        }
        i += 1;
    }
}
