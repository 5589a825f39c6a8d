//! Rendering-engine seam.
//!
//! The workbench treats graph layout as an external concern: anything that
//! can turn DOT text into SVG plugs in behind [`DotRenderer`]. The shipped
//! [`crate::VirtualDotRenderer`] is schematic only; a real Graphviz-backed
//! engine implements the same trait without the shell changing.

use crate::dot_outline::DotOutline;

/// Result of one render pass through an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraph {
    /// Produced SVG text. The shell treats this as an opaque payload.
    pub svg: String,
    /// Structural summary of the source that was rendered.
    pub outline: DotOutline,
}

/// A pluggable DOT-to-SVG engine.
///
/// `render` is synchronous from the shell's point of view; engines doing
/// asynchronous work internally hand back their result through the same
/// call. Failures are ordinary `anyhow` errors and surface as the preview
/// panel's error text, never as a panic.
pub trait DotRenderer {
    /// Short human-readable engine name for the preview header.
    fn engine_name(&self) -> &'static str;

    /// Renders `source` into SVG plus its outline.
    fn render(&self, source: &str) -> anyhow::Result<RenderedGraph>;
}
