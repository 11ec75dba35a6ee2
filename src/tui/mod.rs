//! The control panel — ratatui TUI presentation layer.
//!
//! ## Architecture (TEA)
//!
//! Model (`PanelApp`) + Update (message reducer) + View (render).
//! Immediate mode, no retained widget state. The runner owns the
//! terminal, the render clock, and the scan poller task; every state
//! change flows through one message channel, so all mutation happens on
//! the runner task.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
