//! Two-pass markdown parsing core.
//!
//! The engine does not produce any output format itself: it drives a
//! [`Renderer`] through its slots. See [`convert`] for the entry point.

pub mod context;
pub mod extensions;
pub mod parsing;
pub mod pipeline;
pub mod render;

// Re-export key types for easier usage
pub use context::{MAX_NESTING, NestingExceeded, RenderContext};
pub use extensions::Extensions;
pub use parsing::{
    blocks::{BlockParser, MarkdownBlockParser},
    inline::{DispatchTable, InlineHandler, parse_inline},
    reference::{Reference, ReferenceTable},
};
pub use pipeline::{ConvertError, VERSION, convert, convert_with};
pub use render::{LinkKind, ListFlags, NestedContent, Renderer, Slots, TableAlignment};
