//! # Extensions
//!
//! Optional grammar features, selected by OR-ing flags together. The set is
//! fixed for the duration of a conversion.

use bitflags::bitflags;

use crate::parsing::tabs::{TAB_SIZE_DEFAULT, TAB_SIZE_EIGHT};

bitflags! {
    /// Parser extensions. Bit positions are stable and additive: a bit this
    /// version does not know about is carried along and ignored.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Extensions: u32 {
        /// Ignore emphasis markers inside words.
        const NO_INTRA_EMPHASIS = 1 << 0;
        /// Parse pipe tables.
        const TABLES            = 1 << 1;
        /// Parse ``` and ~~~ fenced code blocks.
        const FENCED_CODE       = 1 << 2;
        /// Detect bare URLs without angle brackets.
        const AUTOLINK          = 1 << 3;
        /// `~~text~~` strikethrough.
        const STRIKETHROUGH     = 1 << 4;
        /// Let raw HTML blocks end at a blank line instead of a closing tag.
        const LAX_HTML_BLOCKS   = 1 << 5;
        /// Require a space between the `#` run and the header text.
        const SPACE_HEADERS     = 1 << 6;
        /// Every newline inside a paragraph is a line break.
        const HARD_LINE_BREAK   = 1 << 7;
        /// Copy tabs through unexpanded.
        const NO_EXPAND_TABS    = 1 << 8;
        /// Tab stops every 8 columns instead of 4.
        const TAB_SIZE_EIGHT    = 1 << 9;
    }
}

impl Extensions {
    /// No extensions at all.
    pub fn basic() -> Self {
        Self::empty()
    }

    /// The commonly useful set of extensions.
    pub fn common() -> Self {
        Self::NO_INTRA_EMPHASIS
            | Self::TABLES
            | Self::FENCED_CODE
            | Self::AUTOLINK
            | Self::STRIKETHROUGH
            | Self::SPACE_HEADERS
    }

    /// Builds a set from a raw bitmask, keeping bits without a name.
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// True when every bit of `flag` is set.
    pub fn is_set(self, flag: Extensions) -> bool {
        self.contains(flag)
    }

    /// Width of a tab stop for the first pass.
    pub fn tab_size(self) -> usize {
        if self.is_set(Self::TAB_SIZE_EIGHT) {
            TAB_SIZE_EIGHT
        } else {
            TAB_SIZE_DEFAULT
        }
    }
}
