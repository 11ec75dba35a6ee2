//! rfid-panel — terminal control panel for a remote RFID reader service.
//!
//! Thin front-end over the Reader Service HTTP API: start/stop inventory
//! scans, select-parameter operations, and tag memory write/lock. The
//! service owns the RFID protocol and the hardware; this crate owns a
//! TEA-style TUI and a 1 Hz poll of accumulated tag reads while a scan
//! is active.

pub mod reader;
pub mod tui;
