//! # Renderer Contract
//!
//! The engine never produces output on its own. Every construct it
//! recognises is handed to a [`Renderer`], which writes into the output
//! buffer it is given.
//!
//! ## Slots
//!
//! A renderer advertises the constructs it handles through [`Renderer::slots`].
//! The engine (and the block/span collaborators it drives) only call a slot
//! method when the matching [`Slots`] bit is set:
//!
//! - **block** slots: an absent slot skips the block
//! - **span** slots: an absent slot, or one returning `false`, leaves the span
//!   in the output verbatim
//! - **low-level** slots (`ENTITY`, `NORMAL_TEXT`): an absent slot copies the
//!   input straight into the output
//! - **document** slots: called once before and once after the body
//!
//! Some slots gate features: without `LINK` or `IMAGE` no `[` is ever treated
//! as a link opener.
//!
//! ## Opaque state
//!
//! [`Renderer::Opaque`] is the caller's per-conversion state. The engine
//! threads a `&mut` to it through every slot call and never inspects it.

mod block_tags;
mod flags;

pub use block_tags::{BLOCK_TAGS, is_block_tag};
pub use flags::{LinkKind, ListFlags, TableAlignment};

use bitflags::bitflags;

bitflags! {
    /// The slots a [`Renderer`] implements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Slots: u32 {
        const BLOCK_CODE      = 1 << 0;
        const BLOCK_QUOTE     = 1 << 1;
        const BLOCK_HTML      = 1 << 2;
        const HEADER          = 1 << 3;
        const HRULE           = 1 << 4;
        const LIST            = 1 << 5;
        const LIST_ITEM       = 1 << 6;
        const PARAGRAPH       = 1 << 7;
        const TABLE           = 1 << 8;
        const TABLE_ROW       = 1 << 9;
        const TABLE_CELL      = 1 << 10;

        const AUTOLINK        = 1 << 11;
        const CODE_SPAN       = 1 << 12;
        const DOUBLE_EMPHASIS = 1 << 13;
        const EMPHASIS        = 1 << 14;
        const IMAGE           = 1 << 15;
        const LINE_BREAK      = 1 << 16;
        const LINK            = 1 << 17;
        const RAW_HTML_TAG    = 1 << 18;
        const TRIPLE_EMPHASIS = 1 << 19;
        const STRIKETHROUGH   = 1 << 20;

        const ENTITY          = 1 << 21;
        const NORMAL_TEXT     = 1 << 22;

        const DOCUMENT_HEADER = 1 << 23;
        const DOCUMENT_FOOTER = 1 << 24;

        /// Any of these activates the emphasis handler.
        const EMPHASIS_FAMILY = Self::EMPHASIS.bits()
            | Self::DOUBLE_EMPHASIS.bits()
            | Self::TRIPLE_EMPHASIS.bits();
    }
}

/// Callback handed to container slots (`header`, `list`, `paragraph`).
///
/// Renders the nested content into the buffer it is given and returns whether
/// anything was rendered.
pub type NestedContent<'a, O> = dyn FnMut(&mut Vec<u8>, &mut O) -> bool + 'a;

/// The capability contract between the engine and an output format.
///
/// Every method has an empty default body so implementors only write the
/// slots they advertise in [`slots`](Renderer::slots).
#[allow(unused_variables)]
pub trait Renderer {
    /// Per-conversion user state passed to every slot.
    type Opaque;

    /// The set of implemented slots.
    fn slots(&self) -> Slots;

    fn has_slot(&self, slot: Slots) -> bool {
        self.slots().intersects(slot)
    }

    // Block-level slots.

    fn block_code(&self, out: &mut Vec<u8>, text: &[u8], lang: &str, opaque: &mut Self::Opaque) {}

    fn block_quote(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) {}

    fn block_html(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) {}

    fn header(
        &self,
        out: &mut Vec<u8>,
        content: &mut NestedContent<'_, Self::Opaque>,
        level: u8,
        opaque: &mut Self::Opaque,
    ) {
    }

    fn hrule(&self, out: &mut Vec<u8>, opaque: &mut Self::Opaque) {}

    fn list(
        &self,
        out: &mut Vec<u8>,
        content: &mut NestedContent<'_, Self::Opaque>,
        flags: ListFlags,
        opaque: &mut Self::Opaque,
    ) {
    }

    fn list_item(
        &self,
        out: &mut Vec<u8>,
        text: &[u8],
        flags: ListFlags,
        opaque: &mut Self::Opaque,
    ) {
    }

    fn paragraph(
        &self,
        out: &mut Vec<u8>,
        content: &mut NestedContent<'_, Self::Opaque>,
        opaque: &mut Self::Opaque,
    ) {
    }

    fn table(
        &self,
        out: &mut Vec<u8>,
        header: &[u8],
        body: &[u8],
        columns: &[TableAlignment],
        opaque: &mut Self::Opaque,
    ) {
    }

    fn table_row(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) {}

    fn table_cell(
        &self,
        out: &mut Vec<u8>,
        text: &[u8],
        align: TableAlignment,
        opaque: &mut Self::Opaque,
    ) {
    }

    // Span-level slots. Returning `false` leaves the span verbatim.

    fn autolink(
        &self,
        out: &mut Vec<u8>,
        link: &[u8],
        kind: LinkKind,
        opaque: &mut Self::Opaque,
    ) -> bool {
        false
    }

    fn code_span(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn double_emphasis(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn emphasis(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn image(
        &self,
        out: &mut Vec<u8>,
        link: &[u8],
        title: &[u8],
        alt: &[u8],
        opaque: &mut Self::Opaque,
    ) -> bool {
        false
    }

    fn line_break(&self, out: &mut Vec<u8>, opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn link(
        &self,
        out: &mut Vec<u8>,
        link: &[u8],
        title: &[u8],
        content: &[u8],
        opaque: &mut Self::Opaque,
    ) -> bool {
        false
    }

    fn raw_html_tag(&self, out: &mut Vec<u8>, tag: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn triple_emphasis(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    fn strikethrough(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) -> bool {
        false
    }

    // Low-level slots.

    fn entity(&self, out: &mut Vec<u8>, entity: &[u8], opaque: &mut Self::Opaque) {}

    fn normal_text(&self, out: &mut Vec<u8>, text: &[u8], opaque: &mut Self::Opaque) {}

    // Document boundaries.

    fn document_header(&self, out: &mut Vec<u8>, opaque: &mut Self::Opaque) {}

    fn document_footer(&self, out: &mut Vec<u8>, opaque: &mut Self::Opaque) {}
}

/// Writes plain text through `normal_text`, or verbatim when the slot is absent.
pub(crate) fn write_text<R: Renderer>(
    renderer: &R,
    out: &mut Vec<u8>,
    text: &[u8],
    opaque: &mut R::Opaque,
) {
    if text.is_empty() {
        return;
    }
    if renderer.has_slot(Slots::NORMAL_TEXT) {
        renderer.normal_text(out, text, opaque);
    } else {
        out.extend_from_slice(text);
    }
}
