//! # Block Parsing
//!
//! The block-level half of the second pass. The pipeline hands the
//! normalised buffer to a [`BlockParser`]; the default one,
//! [`MarkdownBlockParser`], covers the common constructs and calls into the
//! inline parser for paragraph and header text.
//!
//! ## Parsing Steps
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (extent, blank status)
//!
//! 2. **Block Opening** (`open`): `try_open` decides which block, if any, a
//!    line starts; the matching `kinds` type then finds where it ends
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned delimiters (BlockQuote, CodeFence, Header, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` dispatch for detecting block openers
//! - **`parser`**: `MarkdownBlockParser`, driving renderer slots block by block
//!
//! ## Key Invariants
//!
//! - Every recursion (block quotes) goes through the nesting guard
//! - Fenced and indented code blocks are raw zones: no inline parsing inside
//! - A block whose slot the renderer lacks is consumed without output

pub mod classify;
pub mod kinds;
pub mod open;
pub mod parser;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, try_open};
pub use parser::MarkdownBlockParser;

use crate::{context::RenderContext, render::Renderer};

/// The block-level collaborator driven by the pipeline.
///
/// Implementations must bracket every nesting level with
/// [`RenderContext::enter`] and [`RenderContext::leave`], and copy content
/// verbatim when `enter` refuses.
pub trait BlockParser<R: Renderer> {
    /// Renders the block structure of `data` into `out`.
    fn parse_blocks(
        &self,
        out: &mut Vec<u8>,
        ctx: &mut RenderContext<'_, R>,
        opaque: &mut R::Opaque,
        data: &[u8],
    );
}
