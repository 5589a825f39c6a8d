//! The workspace panel-group composition.
//!
//! One group, six declared panels. The declaration order fixes the
//! ordinals the initial-selection hint refers to; the titles are the keys
//! every state transition uses. The content payload is just an identity
//! tag; the UI layer decides how each section is drawn.

use dotdeck::{panel_fields, PanelDescriptor, PanelField};

/// Group identifier shared by the workspace widget, the remote control,
/// and the content panels that jump views directly.
pub const WORKSPACE_GROUP_ID: &str = "graph-sections";

/// Identity of one workspace section; the opaque content payload of its
/// panel descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Graphs,
    DotGuide,
    Insert,
    Write,
    Preview,
}

/// Declared (ordinal, title, section) triples, in declaration order.
const SECTIONS: &[(u32, &str, SectionKind)] = &[
    (0, "About..", SectionKind::About),
    (1, "Graphs..", SectionKind::Graphs),
    (2, "Dot..", SectionKind::DotGuide),
    (3, "Insert..", SectionKind::Insert),
    (4, "Write..", SectionKind::Write),
    (5, "Preview..", SectionKind::Preview),
];

/// Title of the editor panel, used by external jump actions.
pub const WRITE_TITLE: &str = "Write..";
/// Title of the render inspector panel, used by external jump actions.
pub const PREVIEW_TITLE: &str = "Preview..";
/// Title of the DOT quick-reference panel.
pub const DOT_GUIDE_TITLE: &str = "Dot..";

/// Builds the descriptor sequence the workspace widget renders.
pub fn workspace_panels() -> Vec<PanelDescriptor<SectionKind>> {
    SECTIONS
        .iter()
        .map(|&(ordinal, title, kind)| PanelDescriptor::new(title, ordinal, kind))
        .collect()
}

/// Builds the registration fields for the workspace group.
pub fn workspace_fields() -> Vec<PanelField> {
    panel_fields(&workspace_panels())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_unique_titles_and_ordinals() {
        let fields = workspace_fields();
        assert_eq!(fields.len(), 6);
        for (i, field) in fields.iter().enumerate() {
            assert!(!fields[..i].iter().any(|f| f.title == field.title));
            assert!(!fields[..i].iter().any(|f| f.ordinal == field.ordinal));
        }
    }

    #[test]
    fn test_jump_titles_are_declared() {
        let fields = workspace_fields();
        for title in [WRITE_TITLE, PREVIEW_TITLE, DOT_GUIDE_TITLE] {
            assert!(fields.iter().any(|f| f.title == title));
        }
    }
}
