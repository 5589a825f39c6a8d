//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the dotdeck
//! shell:
//! - Header panel (title, remote control, sample generator, error line)
//! - Panel group widget (renders the workspace per the shared state)
//! - Remote control (the detached panel-group controller)
//! - Section panels (about, graphs primer, DOT guide, insert, writer,
//!   preview)
//! - Status bar (memory, source outline, group count)
//! - Panel manager (panel orchestration and interaction funneling)

pub mod header;
pub mod panel_group;
pub mod remote_control;
pub mod about_panel;
pub mod edu_graphs_panel;
pub mod edu_dot_panel;
pub mod insert_panel;
pub mod writer_panel;
pub mod preview_panel;
pub mod status_bar;
pub mod panel_manager;
