//! Schematic DOT renderer.
//!
//! [`VirtualDotRenderer`] is the engine the workbench ships with. It does
//! no graph layout at all: it scans the source with [`crate::dot_outline`]
//! and emits a fixed-geometry SVG listing of the graph header, its nodes,
//! and its edges. That is enough to exercise the whole preview pipeline
//! (including its error path, via delimiter checking) while real layout
//! engines stay external.

use anyhow::Context;

use crate::dot_outline::{self, DotOutline};
use crate::traits::{DotRenderer, RenderedGraph};

const LINE_HEIGHT: f32 = 18.0;
const MARGIN: f32 = 12.0;
const CANVAS_WIDTH: f32 = 480.0;

pub struct VirtualDotRenderer;

impl VirtualDotRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VirtualDotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DotRenderer for VirtualDotRenderer {
    fn engine_name(&self) -> &'static str {
        "virtual (schematic, no layout)"
    }

    fn render(&self, source: &str) -> anyhow::Result<RenderedGraph> {
        dot_outline::check_delimiters(source).context("DOT source is not well formed")?;
        let outline = dot_outline::scan(source);
        let svg = schematic_svg(&outline);
        Ok(RenderedGraph { svg, outline })
    }
}

/// Escapes the five XML-special characters for text content.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn schematic_svg(outline: &DotOutline) -> String {
    let mut lines: Vec<String> = Vec::new();

    let name = outline.name.as_deref().unwrap_or("(unnamed)");
    let strict = if outline.strict { "strict " } else { "" };
    lines.push(format!(
        "{}{} {} | {} nodes, {} edges",
        strict,
        outline.kind,
        name,
        outline.node_count(),
        outline.edge_count()
    ));

    for node in &outline.nodes {
        lines.push(format!("node  {}", node));
    }
    for edge in &outline.edges {
        let op = if edge.directed { "->" } else { "--" };
        lines.push(format!("edge  {} {} {}", edge.from, op, edge.to));
    }

    let height = MARGIN * 2.0 + LINE_HEIGHT * lines.len() as f32;
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        CANVAS_WIDTH, height, CANVAS_WIDTH, height
    ));

    for (i, line) in lines.iter().enumerate() {
        let y = MARGIN + LINE_HEIGHT * (i as f32 + 1.0);
        let weight = if i == 0 { " font-weight=\"bold\"" } else { "" };
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"13\"{}>{}</text>\n",
            MARGIN,
            y,
            weight,
            escape_xml(line)
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_nodes_and_edges() {
        let renderer = VirtualDotRenderer::new();
        let rendered = renderer
            .render("digraph Flow { a -> b; b -> c; }")
            .expect("well-formed source renders");

        assert_eq!(rendered.outline.node_count(), 3);
        assert_eq!(rendered.outline.edge_count(), 2);
        assert!(rendered.svg.starts_with("<svg"));
        assert!(rendered.svg.contains("digraph Flow | 3 nodes, 2 edges"));
        assert!(rendered.svg.contains("edge  a -&gt; b"));
    }

    #[test]
    fn test_render_rejects_unbalanced_source() {
        let renderer = VirtualDotRenderer::new();
        let err = renderer.render("graph G { a -- b").unwrap_err();
        assert!(err.to_string().contains("not well formed"));
    }

    #[test]
    fn test_render_escapes_markup_in_names() {
        let renderer = VirtualDotRenderer::new();
        let rendered = renderer
            .render("graph { \"<b>\" -- \"x&y\"; }")
            .expect("quoted names render");
        assert!(rendered.svg.contains("&lt;b&gt;"));
        assert!(rendered.svg.contains("x&amp;y"));
        assert!(!rendered.svg.contains("<b>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = VirtualDotRenderer::new();
        let a = renderer.render("graph G { a -- b; }").unwrap();
        let b = renderer.render("graph G { a -- b; }").unwrap();
        assert_eq!(a, b);
    }
}
