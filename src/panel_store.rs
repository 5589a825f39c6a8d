//! Process-wide registry of panel-group state records.
//!
//! The registry maps a group identifier to one [`Observable`] holding that
//! group's [`GroupState`]. The map itself lives behind an observable as
//! well, so subscribers can react to groups being added or removed, while
//! in-group changes flow through each group's own cell. Components are
//! handed a cloneable [`PanelRegistry`] handle and a group id string; they
//! never hold a reference to each other.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::observable::{Observable, Subscription};
use crate::panel_state::{GroupState, InitialSelection, PanelField, SplitAxis};

type GroupMap = HashMap<String, Observable<GroupState>>;

/// Keyed registry of independently observable group states.
///
/// Cloning the registry clones the handle: all clones see the same groups.
/// The registry is the only writer of the map; every map change publishes a
/// whole new `HashMap` so map-level subscribers observe it.
#[derive(Clone)]
pub struct PanelRegistry {
    groups: Observable<GroupMap>,
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            groups: Observable::new(HashMap::new()),
        }
    }

    /// Registers a new panel group and builds its initial state.
    ///
    /// This is a logged no-op when `group_id` is already registered (the
    /// idempotency guard against duplicate mount effects), when `fields`
    /// is empty, or when `fields` carries a duplicate title (which would
    /// break title-based panel resolution).
    pub fn register(
        &self,
        group_id: &str,
        fields: &[PanelField],
        initial_axis: SplitAxis,
        initial: InitialSelection,
    ) {
        if self.lookup(group_id).is_some() {
            warn!(group_id, "panel group already registered, ignoring");
            return;
        }
        if fields.is_empty() {
            warn!(group_id, "panel group registered with no panels, ignoring");
            return;
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.title == field.title) {
                warn!(group_id, title = %field.title, "duplicate panel title, ignoring registration");
                return;
            }
        }

        let state = GroupState::initial(fields, initial_axis, initial);
        let mut next: GroupMap = self.groups.get();
        next.insert(group_id.to_string(), Observable::new(state));
        self.groups.set(next);
        info!(group_id, panels = fields.len(), "panel group registered");
    }

    /// Removes a group if present. Absent ids are a silent no-op and the
    /// map is only republished when a removal actually occurred.
    pub fn deregister(&self, group_id: &str) {
        let mut next: GroupMap = self.groups.get();
        if next.remove(group_id).is_some() {
            self.groups.set(next);
            info!(group_id, "panel group deregistered");
        }
    }

    /// Returns the live state cell for a group, or `None` when the group
    /// is not registered. A miss is a normal transient during mount
    /// ordering, not an error; callers render nothing and retry later.
    pub fn lookup(&self, group_id: &str) -> Option<Observable<GroupState>> {
        self.groups.with(|map| map.get(group_id).cloned())
    }

    /// Number of currently registered groups.
    pub fn group_count(&self) -> usize {
        self.groups.with(|map| map.len())
    }

    /// Subscribes to group additions and removals. In-group changes do not
    /// fire this; subscribe to the group's own cell for those.
    pub fn subscribe_groups(&self, callback: impl Fn(&GroupMap) + 'static) -> Subscription {
        self.groups.subscribe(callback)
    }

    /// Map version counter; bumps once per add or remove.
    pub fn map_version(&self) -> u64 {
        self.groups.version()
    }
}
