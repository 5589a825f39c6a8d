//! Panel-group state record and its transition rules.
//!
//! One [`GroupState`] describes everything a panel group and its remote
//! control need to agree on: which panels exist, which are visible, whether
//! the group shows one panel or a split pair, and where the split-selection
//! wizard currently stands. Every transition is copy-on-write: a method
//! takes `&self` and returns a fresh record, so observers of the shared
//! cell never see a half-applied change.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which face of the remote control is shown while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlView {
    /// Panel selection (single / start-split) plus the wizard screens.
    Main,
    /// Direct ratio adjustment for an already established split pair.
    RatioPicker,
}

/// How many panels the group shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Single,
    Split,
}

/// Progress through the split-selection wizard. Only meaningful while the
/// user is mid-selection; a settled group is always `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Idle,
    PickSecond,
    PickRatio,
}

/// Layout axis for split mode: `Row` places the pair side by side,
/// `Column` stacks it top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitAxis {
    Row,
    Column,
}

impl SplitAxis {
    /// Returns the other axis.
    pub fn toggled(self) -> Self {
        match self {
            SplitAxis::Row => SplitAxis::Column,
            SplitAxis::Column => SplitAxis::Row,
        }
    }
}

impl Default for SplitAxis {
    fn default() -> Self {
        SplitAxis::Column
    }
}

/// What the store needs to know about one declared panel: its title and
/// the ordinal the host assigned to it. The ordinal is consulted only at
/// registration time to resolve the initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub title: String,
    pub ordinal: u32,
}

impl PanelField {
    pub fn new(title: impl Into<String>, ordinal: u32) -> Self {
        Self {
            title: title.into(),
            ordinal,
        }
    }
}

/// Optional ordinal hint supplied at registration: start with one specific
/// panel, with a specific split pair, or with the default (first declared).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSelection {
    None,
    Single(u32),
    Pair(u32, u32),
}

/// The shared state record for one panel-group instance.
///
/// Fields are private; the record changes only by replacing it whole with
/// the result of one of the transition methods (or, for external callers
/// that jump straight to a view, [`GroupState::jump_to_split`] /
/// [`GroupState::jump_to_single`]). Rejected transitions return `None`,
/// log a warning, and leave the caller's record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupState {
    is_control_open: bool,
    active_control_view: ControlView,
    panel_titles: Vec<String>,
    display_mode: DisplayMode,
    wizard_step: WizardStep,
    visible_titles: (Option<String>, Option<String>),
    split_ratio: String,
    axis: SplitAxis,
}

impl GroupState {
    /// Builds the initial record for a freshly registered group.
    ///
    /// A `Pair` of two resolvable, distinct ordinals starts the group in
    /// split mode at `1:1`; a resolvable `Single` ordinal starts it on that
    /// panel. Anything else (including a hint naming an unknown ordinal)
    /// degrades to single view of the first declared panel, with a warning
    /// so the mismatch stays visible.
    pub fn initial(fields: &[PanelField], axis: SplitAxis, selection: InitialSelection) -> Self {
        let titles: Vec<String> = fields.iter().map(|f| f.title.clone()).collect();
        let title_for = |ordinal: u32| {
            fields
                .iter()
                .find(|f| f.ordinal == ordinal)
                .map(|f| f.title.clone())
        };

        let mut display_mode = DisplayMode::Single;
        let mut visible_titles = (titles.first().cloned(), None);

        match selection {
            InitialSelection::Pair(a, b) if a != b => {
                match (title_for(a), title_for(b)) {
                    (Some(first), Some(second)) => {
                        display_mode = DisplayMode::Split;
                        visible_titles = (Some(first), Some(second));
                    }
                    _ => {
                        warn!(a, b, "initial split pair does not resolve, showing first panel");
                    }
                }
            }
            InitialSelection::Pair(a, b) => {
                warn!(a, b, "initial split pair is not distinct, showing first panel");
            }
            InitialSelection::Single(a) => match title_for(a) {
                Some(first) => visible_titles = (Some(first), None),
                None => {
                    warn!(ordinal = a, "initial panel ordinal does not resolve, showing first panel");
                }
            },
            InitialSelection::None => {}
        }

        Self {
            is_control_open: false,
            active_control_view: ControlView::Main,
            panel_titles: titles,
            display_mode,
            wizard_step: WizardStep::Idle,
            visible_titles,
            split_ratio: "1:1".to_string(),
            axis,
        }
    }

    // ===== Queries =====

    pub fn is_control_open(&self) -> bool {
        self.is_control_open
    }

    pub fn active_control_view(&self) -> ControlView {
        self.active_control_view
    }

    /// All declared titles, in declaration order.
    pub fn panel_titles(&self) -> &[String] {
        &self.panel_titles
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn wizard_step(&self) -> WizardStep {
        self.wizard_step
    }

    /// The currently visible titles. In single mode the second slot is
    /// always `None`.
    pub fn visible_titles(&self) -> (Option<&str>, Option<&str>) {
        (
            self.visible_titles.0.as_deref(),
            self.visible_titles.1.as_deref(),
        )
    }

    /// The raw split ratio string, e.g. `"3:2"`. May be malformed if an
    /// external caller stored garbage; rendering falls back to `1:1`.
    pub fn split_ratio(&self) -> &str {
        &self.split_ratio
    }

    pub fn axis(&self) -> SplitAxis {
        self.axis
    }

    fn is_declared(&self, title: &str) -> bool {
        self.panel_titles.iter().any(|t| t == title)
    }

    // ===== Transitions (copy-on-write) =====

    /// Shows `title` alone: any state -> single view, wizard reset,
    /// control closed. Rejected if the title is not declared.
    pub fn select_single(&self, title: &str) -> Option<Self> {
        if !self.is_declared(title) {
            warn!(title, "select_single: title not declared, ignoring");
            return None;
        }
        Some(Self {
            display_mode: DisplayMode::Single,
            wizard_step: WizardStep::Idle,
            visible_titles: (Some(title.to_string()), None),
            is_control_open: false,
            ..self.clone()
        })
    }

    /// Begins the split wizard with `title` as the first panel:
    /// Idle -> PickSecond. Rejected if the title is not declared.
    pub fn start_split(&self, title: &str) -> Option<Self> {
        if !self.is_declared(title) {
            warn!(title, "start_split: title not declared, ignoring");
            return None;
        }
        Some(Self {
            display_mode: DisplayMode::Split,
            wizard_step: WizardStep::PickSecond,
            visible_titles: (Some(title.to_string()), None),
            ..self.clone()
        })
    }

    /// Picks the second panel of the pair: PickSecond -> PickRatio.
    /// Rejected outside PickSecond, for an undeclared title, or when the
    /// pick repeats the first panel.
    pub fn pick_second(&self, title: &str) -> Option<Self> {
        if self.wizard_step != WizardStep::PickSecond {
            warn!(title, step = ?self.wizard_step, "pick_second outside PickSecond, ignoring");
            return None;
        }
        if !self.is_declared(title) {
            warn!(title, "pick_second: title not declared, ignoring");
            return None;
        }
        if self.visible_titles.0.as_deref() == Some(title) {
            warn!(title, "pick_second: same as first panel, ignoring");
            return None;
        }
        Some(Self {
            wizard_step: WizardStep::PickRatio,
            visible_titles: (self.visible_titles.0.clone(), Some(title.to_string())),
            ..self.clone()
        })
    }

    /// Stores the chosen ratio and settles the wizard: -> Idle, control
    /// closed. Accepts any string; malformed ratios are neutralized at
    /// render time by the `1:1` fallback.
    pub fn confirm_ratio(&self, ratio: &str) -> Self {
        Self {
            split_ratio: ratio.to_string(),
            wizard_step: WizardStep::Idle,
            is_control_open: false,
            ..self.clone()
        }
    }

    /// Opens or closes the control surface. Closing mid-wizard abandons
    /// the incomplete selection; opening always lands on the main view so
    /// the remote never resumes deep in a stale screen.
    pub fn toggle_control(&self) -> Self {
        let opening = !self.is_control_open;
        Self {
            is_control_open: opening,
            active_control_view: if opening {
                ControlView::Main
            } else {
                self.active_control_view
            },
            wizard_step: if opening { self.wizard_step } else { WizardStep::Idle },
            ..self.clone()
        }
    }

    /// Flips the split axis. Does not touch the wizard.
    pub fn toggle_axis(&self) -> Self {
        Self {
            axis: self.axis.toggled(),
            ..self.clone()
        }
    }

    /// Switches the open control to the direct ratio picker. Does not
    /// touch the wizard.
    pub fn open_ratio_picker(&self) -> Self {
        Self {
            active_control_view: ControlView::RatioPicker,
            ..self.clone()
        }
    }

    // ===== External jumps =====

    /// Jumps straight to a settled split view, bypassing the wizard. This
    /// is the supported entry point for collaborators that hold only the
    /// lookup key. Rejected if the titles are equal or not declared.
    pub fn jump_to_split(
        &self,
        first: &str,
        second: &str,
        ratio: &str,
        axis: SplitAxis,
    ) -> Option<Self> {
        if first == second {
            warn!(first, "jump_to_split: pair is not distinct, ignoring");
            return None;
        }
        if !self.is_declared(first) || !self.is_declared(second) {
            warn!(first, second, "jump_to_split: title not declared, ignoring");
            return None;
        }
        Some(Self {
            display_mode: DisplayMode::Split,
            wizard_step: WizardStep::Idle,
            visible_titles: (Some(first.to_string()), Some(second.to_string())),
            split_ratio: ratio.to_string(),
            axis,
            is_control_open: false,
            ..self.clone()
        })
    }

    /// Jumps straight to a single view of `title`. Same contract as
    /// [`GroupState::select_single`]; provided for symmetry with
    /// [`GroupState::jump_to_split`].
    pub fn jump_to_single(&self, title: &str) -> Option<Self> {
        self.select_single(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_fields() -> Vec<PanelField> {
        vec![
            PanelField::new("Write..", 0),
            PanelField::new("Preview..", 1),
            PanelField::new("Notes..", 2),
        ]
    }

    #[test]
    fn test_initial_defaults_to_first_panel() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None);
        assert_eq!(state.display_mode(), DisplayMode::Single);
        assert_eq!(state.visible_titles(), (Some("Write.."), None));
        assert_eq!(state.wizard_step(), WizardStep::Idle);
        assert_eq!(state.split_ratio(), "1:1");
        assert!(!state.is_control_open());
        assert_eq!(state.active_control_view(), ControlView::Main);
    }

    #[test]
    fn test_initial_single_ordinal() {
        let state = GroupState::initial(
            &three_fields(),
            SplitAxis::Row,
            InitialSelection::Single(2),
        );
        assert_eq!(state.display_mode(), DisplayMode::Single);
        assert_eq!(state.visible_titles(), (Some("Notes.."), None));
        assert_eq!(state.axis(), SplitAxis::Row);
    }

    #[test]
    fn test_initial_pair_starts_split() {
        let state = GroupState::initial(
            &three_fields(),
            SplitAxis::Column,
            InitialSelection::Pair(0, 1),
        );
        assert_eq!(state.display_mode(), DisplayMode::Split);
        assert_eq!(state.visible_titles(), (Some("Write.."), Some("Preview..")));
        assert_eq!(state.split_ratio(), "1:1");
        assert_eq!(state.wizard_step(), WizardStep::Idle);
    }

    #[test]
    fn test_initial_unresolved_hint_falls_back() {
        let state = GroupState::initial(
            &three_fields(),
            SplitAxis::Column,
            InitialSelection::Pair(0, 99),
        );
        assert_eq!(state.display_mode(), DisplayMode::Single);
        assert_eq!(state.visible_titles(), (Some("Write.."), None));

        let state = GroupState::initial(
            &three_fields(),
            SplitAxis::Column,
            InitialSelection::Single(42),
        );
        assert_eq!(state.visible_titles(), (Some("Write.."), None));
    }

    #[test]
    fn test_wizard_walkthrough() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None);

        let state = state.start_split("Write..").unwrap();
        assert_eq!(state.display_mode(), DisplayMode::Split);
        assert_eq!(state.wizard_step(), WizardStep::PickSecond);
        assert_eq!(state.visible_titles(), (Some("Write.."), None));

        let state = state.pick_second("Preview..").unwrap();
        assert_eq!(state.wizard_step(), WizardStep::PickRatio);
        assert_eq!(state.visible_titles(), (Some("Write.."), Some("Preview..")));

        let state = state.confirm_ratio("3:2");
        assert_eq!(state.wizard_step(), WizardStep::Idle);
        assert_eq!(state.split_ratio(), "3:2");
        assert!(!state.is_control_open());
    }

    #[test]
    fn test_pick_second_rejects_duplicate_and_unknown() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None)
            .start_split("Write..")
            .unwrap();

        assert!(state.pick_second("Write..").is_none());
        assert!(state.pick_second("Missing..").is_none());
        // The record the caller holds is untouched.
        assert_eq!(state.wizard_step(), WizardStep::PickSecond);
        assert_eq!(state.visible_titles(), (Some("Write.."), None));
    }

    #[test]
    fn test_pick_second_rejected_outside_wizard() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None);
        assert!(state.pick_second("Preview..").is_none());
    }

    #[test]
    fn test_select_single_clears_second_slot() {
        let state = GroupState::initial(
            &three_fields(),
            SplitAxis::Column,
            InitialSelection::Pair(0, 1),
        );
        let state = state.select_single("Notes..").unwrap();
        assert_eq!(state.display_mode(), DisplayMode::Single);
        assert_eq!(state.visible_titles(), (Some("Notes.."), None));
        assert!(!state.is_control_open());

        assert!(state.select_single("Missing..").is_none());
    }

    #[test]
    fn test_toggle_control_resets_wizard_and_view() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None);

        // Open, wander into the ratio picker, start a wizard, then close.
        let state = state.toggle_control();
        assert!(state.is_control_open());
        let state = state.open_ratio_picker();
        assert_eq!(state.active_control_view(), ControlView::RatioPicker);
        let state = state.start_split("Notes..").unwrap();

        let state = state.toggle_control();
        assert!(!state.is_control_open());
        assert_eq!(state.wizard_step(), WizardStep::Idle);

        // Reopening lands on the main view, not the stale ratio picker.
        let state = state.toggle_control();
        assert_eq!(state.active_control_view(), ControlView::Main);
    }

    #[test]
    fn test_toggle_axis_leaves_wizard_alone() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None)
            .start_split("Write..")
            .unwrap();
        let state = state.toggle_axis();
        assert_eq!(state.axis(), SplitAxis::Row);
        assert_eq!(state.wizard_step(), WizardStep::PickSecond);
        assert_eq!(state.toggle_axis().axis(), SplitAxis::Column);
    }

    #[test]
    fn test_jump_to_split_validates_pair() {
        let state = GroupState::initial(&three_fields(), SplitAxis::Column, InitialSelection::None);

        let jumped = state
            .jump_to_split("Write..", "Preview..", "2:3", SplitAxis::Column)
            .unwrap();
        assert_eq!(jumped.display_mode(), DisplayMode::Split);
        assert_eq!(jumped.wizard_step(), WizardStep::Idle);
        assert_eq!(jumped.split_ratio(), "2:3");
        assert_eq!(jumped.axis(), SplitAxis::Column);

        assert!(state.jump_to_split("Write..", "Write..", "1:1", SplitAxis::Row).is_none());
        assert!(state.jump_to_split("Write..", "Ghost..", "1:1", SplitAxis::Row).is_none());
    }
}
