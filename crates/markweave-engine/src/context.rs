//! # Render Context
//!
//! Per-conversion state shared by the block parser and the span handlers:
//! the renderer, the extensions, the reference and dispatch tables, the
//! nesting depth and the "inside a link" flag.
//!
//! ## Nesting guard
//!
//! Every recursive step (a block container, an inline span with nested
//! content) brackets its work with [`RenderContext::enter`] and
//! [`RenderContext::leave`]. Once [`MAX_NESTING`] levels are open, `enter`
//! refuses and the caller must copy the remaining content verbatim instead of
//! recursing. A conversion must end with every level closed; the orchestrator
//! checks [`RenderContext::is_balanced`].

use thiserror::Error;

use crate::{
    extensions::Extensions,
    parsing::{inline::DispatchTable, reference::ReferenceTable},
    render::Renderer,
};

/// Recursion ceiling for block and inline nesting.
pub const MAX_NESTING: usize = 16;

/// Returned by [`RenderContext::enter`] when the ceiling is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nesting depth limit of {limit} reached")]
pub struct NestingExceeded {
    pub limit: usize,
}

/// State for a single conversion. Never shared between conversions.
pub struct RenderContext<'r, R: Renderer> {
    renderer: &'r R,
    extensions: Extensions,
    refs: ReferenceTable,
    dispatch: DispatchTable,
    depth: usize,
    max_depth: usize,
    unbalanced_leave: bool,
    inside_link: bool,
}

impl<'r, R: Renderer> RenderContext<'r, R> {
    /// Creates a context and builds its dispatch table from the renderer's slots.
    pub fn new(renderer: &'r R, extensions: Extensions) -> Self {
        Self {
            renderer,
            extensions,
            refs: ReferenceTable::new(),
            dispatch: DispatchTable::for_renderer(renderer, extensions),
            depth: 0,
            max_depth: MAX_NESTING,
            unbalanced_leave: false,
            inside_link: false,
        }
    }

    /// The renderer, with the context's lifetime rather than a borrow of it.
    pub fn renderer(&self) -> &'r R {
        self.renderer
    }

    pub fn extensions(&self) -> Extensions {
        self.extensions
    }

    pub fn references(&self) -> &ReferenceTable {
        &self.refs
    }

    pub fn references_mut(&mut self) -> &mut ReferenceTable {
        &mut self.refs
    }

    pub fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Opens one nesting level.
    pub fn enter(&mut self) -> Result<(), NestingExceeded> {
        if self.depth >= self.max_depth {
            log::warn!(
                "nesting limit {} reached, rendering content verbatim",
                self.max_depth
            );
            return Err(NestingExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the level opened by the matching [`enter`](Self::enter).
    pub fn leave(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.unbalanced_leave = true,
        }
    }

    /// Current number of open levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// True when every `enter` has been matched by exactly one `leave`.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && !self.unbalanced_leave
    }

    /// Whether the inline parser is currently rendering link content.
    pub fn inside_link(&self) -> bool {
        self.inside_link
    }

    /// Sets the link flag, returning its previous value.
    pub fn set_inside_link(&mut self, inside: bool) -> bool {
        std::mem::replace(&mut self.inside_link, inside)
    }
}
