//! # Inline Parsing
//!
//! Byte-oriented span parsing driven by a 256-entry dispatch table.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of inline-eligible blocks (paragraphs,
//! headers) after block parsing has separated them out. The parser copies
//! plain runs through `normal_text` and stops only at bytes with a registered
//! handler; which bytes those are depends on the renderer's slots and the
//! extensions, so a renderer without links never pays for `[`.
//!
//! ## Modules
//!
//! - **`dispatch`**: `DispatchTable` mapping trigger bytes to handlers
//! - **`kinds`**: one module per span kind with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` main loop
//!
//! ## Raw Zones
//!
//! Code spans take precedence: `` `*not em*` `` is a single code span, and
//! emphasis looking for its closer skips over code spans.

pub mod cursor;
pub mod dispatch;
pub mod kinds;
pub mod parser;

pub use dispatch::{DispatchTable, InlineHandler};
pub use parser::parse_inline;
