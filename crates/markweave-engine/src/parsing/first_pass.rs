//! # First Pass
//!
//! Prepares raw input for block parsing:
//!
//! - extracts reference definitions into the [`ReferenceTable`]
//! - expands tabs (unless `NO_EXPAND_TABS`)
//! - normalises `\r\n`, `\r` and `\n` to a single `\n`
//! - copies everything else
//!
//! The result never contains `\r`, and every line (including a final line
//! that had no terminator) ends in exactly one `\n`.

use crate::extensions::Extensions;

use super::{chars::is_line_end, reference::ReferenceTable, tabs::expand_tabs};

/// Runs the first pass over `input`, recording references into `refs`.
pub fn normalize(input: &[u8], extensions: Extensions, refs: &mut ReferenceTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 8 + 1);
    let tab_size = extensions.tab_size();
    let expand = !extensions.is_set(Extensions::NO_EXPAND_TABS);

    let mut beg = 0;
    while beg < input.len() {
        let consumed = refs.try_parse(&input[beg..]);
        if consumed > 0 {
            beg += consumed;
            continue;
        }

        let mut end = beg;
        while end < input.len() && !is_line_end(input[end]) {
            end += 1;
        }

        let line = &input[beg..end];
        if expand {
            expand_tabs(&mut out, line, tab_size);
        } else {
            out.extend_from_slice(line);
        }
        out.push(b'\n');

        if end < input.len() && input[end] == b'\r' {
            end += 1;
        }
        if end < input.len() && input[end] == b'\n' {
            end += 1;
        }
        beg = end;
    }

    log::debug!(
        "first pass: {} bytes in, {} bytes out, {} references",
        input.len(),
        out.len(),
        refs.len()
    );
    out
}
