use bitflags::bitflags;

/// What kind of autolink was recognised. Exactly one value per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    NotAutolink,
    /// A URL with a scheme.
    Normal,
    /// A bare address; the `mailto:` prefix is not part of the link text.
    Email,
}

bitflags! {
    /// Flags passed to `list` and `list_item`. May be combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ListFlags: u8 {
        const ORDERED        = 1 << 0;
        const CONTAINS_BLOCK = 1 << 1;
        const END_OF_LIST    = 1 << 2;
    }
}

bitflags! {
    /// Column alignment passed to `table` and `table_cell`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TableAlignment: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const CENTER = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}
