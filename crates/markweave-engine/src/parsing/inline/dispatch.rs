use crate::{
    extensions::Extensions,
    render::{Renderer, Slots},
};

/// The span handler responsible for a trigger byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineHandler {
    /// `*`, `_` and (with strikethrough) `~`.
    Emphasis,
    /// `` ` ``
    CodeSpan,
    /// `\n`
    LineBreak,
    /// `[`, also covering images via a preceding `!`.
    Link,
    /// `<`: autolinks in angle brackets and raw HTML tags.
    LeftAngle,
    /// `\`
    Escape,
    /// `&`
    Entity,
    /// `:` of a bare URL.
    Autolink,
}

/// Maps every byte value to the handler that may start a span there.
///
/// Built once per conversion from the renderer's slots and the extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    handlers: [Option<InlineHandler>; 256],
}

impl DispatchTable {
    /// A table with no triggers at all.
    pub fn empty() -> Self {
        Self {
            handlers: [None; 256],
        }
    }

    /// Registers the handlers enabled by `slots` and `extensions`.
    pub fn build(slots: Slots, extensions: Extensions) -> Self {
        let mut table = Self::empty();

        if slots.intersects(Slots::EMPHASIS_FAMILY) {
            table.register(b'*', InlineHandler::Emphasis);
            table.register(b'_', InlineHandler::Emphasis);
            if extensions.is_set(Extensions::STRIKETHROUGH) {
                table.register(b'~', InlineHandler::Emphasis);
            }
        }
        if slots.contains(Slots::CODE_SPAN) {
            table.register(b'`', InlineHandler::CodeSpan);
        }
        if slots.contains(Slots::LINE_BREAK) {
            table.register(b'\n', InlineHandler::LineBreak);
        }
        if slots.intersects(Slots::IMAGE | Slots::LINK) {
            table.register(b'[', InlineHandler::Link);
        }

        // these fall back to verbatim output inside the handler
        table.register(b'<', InlineHandler::LeftAngle);
        table.register(b'\\', InlineHandler::Escape);
        table.register(b'&', InlineHandler::Entity);

        if extensions.is_set(Extensions::AUTOLINK) {
            table.register(b':', InlineHandler::Autolink);
        }

        log::trace!("dispatch table triggers: {:?}", table.triggers().collect::<Vec<_>>());
        table
    }

    /// Shorthand for building from a renderer's declared slots.
    pub fn for_renderer<R: Renderer>(renderer: &R, extensions: Extensions) -> Self {
        Self::build(renderer.slots(), extensions)
    }

    pub fn register(&mut self, trigger: u8, handler: InlineHandler) {
        self.handlers[usize::from(trigger)] = Some(handler);
    }

    pub fn get(&self, byte: u8) -> Option<InlineHandler> {
        self.handlers[usize::from(byte)]
    }

    pub fn is_trigger(&self, byte: u8) -> bool {
        self.get(byte).is_some()
    }

    /// All trigger bytes in ascending order.
    pub fn triggers(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.is_trigger(b))
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::empty()
    }
}
