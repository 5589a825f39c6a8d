//! Pure panel extraction and layout planning.
//!
//! [`build_render_plan`] maps the declared panel descriptors plus the
//! current [`GroupState`] to a [`RenderPlan`]: a value describing exactly
//! what the panel group should draw. It is deterministic and side-effect
//! free, which is what makes the wizard and external-jump scenarios
//! testable without any UI in the loop.

use crate::panel_state::{DisplayMode, GroupState, PanelField, SplitAxis};

/// One declared child panel: a unique title, the ordinal the host assigned
/// for initial-selection hints, and an opaque content payload the core
/// never copies or mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDescriptor<C> {
    pub title: String,
    pub ordinal: u32,
    pub content: C,
}

impl<C> PanelDescriptor<C> {
    pub fn new(title: impl Into<String>, ordinal: u32, content: C) -> Self {
        Self {
            title: title.into(),
            ordinal,
            content,
        }
    }

    /// The store-facing part of this descriptor.
    pub fn field(&self) -> PanelField {
        PanelField::new(self.title.clone(), self.ordinal)
    }
}

/// Extracts the registration fields from a descriptor sequence.
pub fn panel_fields<C>(panels: &[PanelDescriptor<C>]) -> Vec<PanelField> {
    panels.iter().map(|p| p.field()).collect()
}

/// What the panel group should draw for the current state.
#[derive(Debug, PartialEq)]
pub enum RenderPlan<'a, C> {
    /// One panel filling the container.
    Single { panel: &'a PanelDescriptor<C> },
    /// Two panels along `axis`, sized by `weights` (already ratio-parsed).
    Split {
        first: &'a PanelDescriptor<C>,
        second: &'a PanelDescriptor<C>,
        weights: (f32, f32),
        axis: SplitAxis,
    },
    /// A visible title failed to resolve against the declared set; the
    /// unresolved titles are named so the UI can say which.
    Missing { titles: Vec<String> },
    /// Nothing is selected yet (state not available or no first slot);
    /// the UI shows a neutral "select a panel" hint.
    Placeholder,
}

/// Parses a `"A:B"` ratio string into two non-negative weights.
///
/// Anything that is not exactly two non-negative numbers separated by one
/// colon yields the safe `(1.0, 1.0)` fallback; malformed ratios are a
/// recovered condition, never an error.
pub fn parse_ratio(ratio: &str) -> (f32, f32) {
    let mut parts = ratio.split(':');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return (1.0, 1.0);
    };
    match (a.trim().parse::<f32>(), b.trim().parse::<f32>()) {
        (Ok(a), Ok(b)) if a >= 0.0 && b >= 0.0 && a.is_finite() && b.is_finite() => (a, b),
        _ => (1.0, 1.0),
    }
}

fn resolve<'a, C>(
    panels: &'a [PanelDescriptor<C>],
    title: &str,
) -> Option<&'a PanelDescriptor<C>> {
    panels.iter().find(|p| p.title == title)
}

/// Computes the render plan for `state` over the declared `panels`.
///
/// A split with both slots set resolves both titles; any miss produces an
/// explicit [`RenderPlan::Missing`] rather than a blank screen. Every
/// other state (single mode, or a split still mid-wizard) renders the
/// first slot alone, degrading to [`RenderPlan::Placeholder`] when it is
/// unset or unresolvable.
pub fn build_render_plan<'a, C>(
    panels: &'a [PanelDescriptor<C>],
    state: &GroupState,
) -> RenderPlan<'a, C> {
    let (first_title, second_title) = state.visible_titles();

    if state.display_mode() == DisplayMode::Split {
        if let (Some(first_title), Some(second_title)) = (first_title, second_title) {
            let first = resolve(panels, first_title);
            let second = resolve(panels, second_title);
            return match (first, second) {
                (Some(first), Some(second)) => RenderPlan::Split {
                    first,
                    second,
                    weights: parse_ratio(state.split_ratio()),
                    axis: state.axis(),
                },
                _ => {
                    let mut titles = Vec::new();
                    if first.is_none() {
                        titles.push(first_title.to_string());
                    }
                    if second.is_none() {
                        titles.push(second_title.to_string());
                    }
                    RenderPlan::Missing { titles }
                }
            };
        }
    }

    match first_title.and_then(|t| resolve(panels, t)) {
        Some(panel) => RenderPlan::Single { panel },
        None => RenderPlan::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel_state::{InitialSelection, WizardStep};

    fn demo_panels() -> Vec<PanelDescriptor<&'static str>> {
        vec![
            PanelDescriptor::new("Write..", 0, "editor"),
            PanelDescriptor::new("Preview..", 1, "render"),
            PanelDescriptor::new("Notes..", 2, "notes"),
        ]
    }

    fn demo_state(selection: InitialSelection) -> GroupState {
        GroupState::initial(&panel_fields(&demo_panels()), SplitAxis::Column, selection)
    }

    #[test]
    fn test_parse_ratio_table() {
        assert_eq!(parse_ratio("1:1"), (1.0, 1.0));
        assert_eq!(parse_ratio("3:2"), (3.0, 2.0));
        assert_eq!(parse_ratio("abc"), (1.0, 1.0));
        assert_eq!(parse_ratio(""), (1.0, 1.0));
        assert_eq!(parse_ratio("5:"), (1.0, 1.0));
        assert_eq!(parse_ratio("1:2:3"), (1.0, 1.0));
        assert_eq!(parse_ratio("-1:2"), (1.0, 1.0));
        assert_eq!(parse_ratio(" 4 : 3 "), (4.0, 3.0));
    }

    #[test]
    fn test_single_mode_plan() {
        let panels = demo_panels();
        let state = demo_state(InitialSelection::Single(1));
        match build_render_plan(&panels, &state) {
            RenderPlan::Single { panel } => assert_eq!(panel.content, "render"),
            other => panic!("expected single plan, got {:?}", other),
        }
    }

    #[test]
    fn test_split_plan_carries_weights_and_axis() {
        let panels = demo_panels();
        let state = demo_state(InitialSelection::None)
            .jump_to_split("Write..", "Preview..", "2:3", SplitAxis::Column)
            .unwrap();
        match build_render_plan(&panels, &state) {
            RenderPlan::Split {
                first,
                second,
                weights,
                axis,
            } => {
                assert_eq!(first.title, "Write..");
                assert_eq!(second.title, "Preview..");
                assert_eq!(weights, (2.0, 3.0));
                assert_eq!(axis, SplitAxis::Column);
            }
            other => panic!("expected split plan, got {:?}", other),
        }
    }

    #[test]
    fn test_split_mid_wizard_renders_first_alone() {
        let panels = demo_panels();
        let state = demo_state(InitialSelection::None).start_split("Notes..").unwrap();
        assert_eq!(state.wizard_step(), WizardStep::PickSecond);
        match build_render_plan(&panels, &state) {
            RenderPlan::Single { panel } => assert_eq!(panel.title, "Notes.."),
            other => panic!("expected single plan, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolvable_split_title_is_named() {
        // The state was built against a wider panel set than the one now
        // declared, so one side of the pair no longer resolves.
        let state = demo_state(InitialSelection::None)
            .jump_to_split("Write..", "Notes..", "1:1", SplitAxis::Row)
            .unwrap();
        let narrowed: Vec<PanelDescriptor<&str>> =
            demo_panels().into_iter().filter(|p| p.title != "Notes..").collect();
        match build_render_plan(&narrowed, &state) {
            RenderPlan::Missing { titles } => assert_eq!(titles, vec!["Notes..".to_string()]),
            other => panic!("expected missing plan, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_ratio_falls_back_in_plan() {
        let panels = demo_panels();
        let state = demo_state(InitialSelection::None)
            .jump_to_split("Write..", "Preview..", "broken", SplitAxis::Row)
            .unwrap();
        match build_render_plan(&panels, &state) {
            RenderPlan::Split { weights, .. } => assert_eq!(weights, (1.0, 1.0)),
            other => panic!("expected split plan, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_first_slot_is_placeholder() {
        let panels: Vec<PanelDescriptor<&str>> = Vec::new();
        let state = demo_state(InitialSelection::None);
        // No descriptors at all: the visible title cannot resolve.
        assert_eq!(build_render_plan(&panels, &state), RenderPlan::Placeholder);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let panels = demo_panels();
        let state = demo_state(InitialSelection::Pair(0, 2));
        let a = build_render_plan(&panels, &state);
        let b = build_render_plan(&panels, &state);
        assert_eq!(a, b);
    }
}
