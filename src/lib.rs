//! dotdeck library: the panel coordination engine and the rendering seam.
//!
//! The engine half is UI-free: an observable value cell, the panel-group
//! state machine, the keyed registry, and the pure layout planner. The
//! seam half defines the pluggable DOT renderer contract plus the
//! schematic engine and sample sources the workbench ships with.

pub mod observable;
pub mod panel_state;
pub mod panel_store;
pub mod layout_plan;
pub mod traits;
pub mod dot_outline;
pub mod virtual_renderer;
pub mod sample_graphs;

// Export the reactive primitive
pub use observable::{Observable, Subscription};

// Export the panel engine
pub use panel_state::{
    ControlView, DisplayMode, GroupState, InitialSelection,
    PanelField, SplitAxis, WizardStep,
};
pub use panel_store::PanelRegistry;
pub use layout_plan::{build_render_plan, panel_fields, parse_ratio, PanelDescriptor, RenderPlan};

// Export the rendering seam
pub use traits::{DotRenderer, RenderedGraph};
pub use dot_outline::{DotEdge, DotOutline, GraphKind};
pub use virtual_renderer::VirtualDotRenderer;

// Export sample sources and the generator
pub use sample_graphs::{GraphSketch, SampleGraph, SAMPLES};
