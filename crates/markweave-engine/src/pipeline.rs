//! # Pipeline
//!
//! `convert` runs one conversion end to end:
//!
//! 1. build the [`RenderContext`] (and with it the dispatch table)
//! 2. first pass: extract references, expand tabs, normalise line endings
//! 3. `document_header`, the block parser over the normalised buffer,
//!    `document_footer`
//! 4. check that every nesting level was closed

use thiserror::Error;

use crate::{
    context::RenderContext,
    extensions::Extensions,
    parsing::{
        blocks::{BlockParser, MarkdownBlockParser},
        first_pass,
    },
    render::{Renderer, Slots},
};

/// Version of the markdown dialect implemented here.
pub const VERSION: &str = "0.5";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A collaborator opened more nesting levels than it closed, or closed
    /// one it never opened. Never caused by input.
    #[error("nesting level did not return to zero (ended at {depth})")]
    NestingMismatch { depth: usize },
}

/// Converts `input` with the default block parser.
///
/// Returns `Ok(None)` when there is no renderer to render into.
pub fn convert<R: Renderer>(
    input: &[u8],
    renderer: Option<&R>,
    opaque: &mut R::Opaque,
    extensions: Extensions,
) -> Result<Option<Vec<u8>>, ConvertError> {
    convert_with(&MarkdownBlockParser, input, renderer, opaque, extensions)
}

/// Converts `input` with a caller-supplied block parser.
pub fn convert_with<R, P>(
    parser: &P,
    input: &[u8],
    renderer: Option<&R>,
    opaque: &mut R::Opaque,
    extensions: Extensions,
) -> Result<Option<Vec<u8>>, ConvertError>
where
    R: Renderer,
    P: BlockParser<R> + ?Sized,
{
    let Some(renderer) = renderer else {
        log::debug!("no renderer supplied, skipping conversion");
        return Ok(None);
    };

    let mut ctx = RenderContext::new(renderer, extensions);
    let normalized = first_pass::normalize(input, extensions, ctx.references_mut());

    let mut out = Vec::with_capacity(normalized.len() + normalized.len() / 2);
    if renderer.has_slot(Slots::DOCUMENT_HEADER) {
        renderer.document_header(&mut out, opaque);
    }

    parser.parse_blocks(&mut out, &mut ctx, opaque, &normalized);

    if renderer.has_slot(Slots::DOCUMENT_FOOTER) {
        renderer.document_footer(&mut out, opaque);
    }

    if !ctx.is_balanced() {
        log::error!(
            "nesting level ended at {} after rendering; block parser is unbalanced",
            ctx.depth()
        );
        return Err(ConvertError::NestingMismatch { depth: ctx.depth() });
    }

    log::debug!("second pass: {} bytes out", out.len());
    Ok(Some(out))
}
