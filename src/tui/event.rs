//! Messages that drive the panel update loop.
//!
//! Command requests and poll ticks run as spawned tasks; their
//! completions come back through the panel channel as these messages,
//! with transport errors already folded to their description strings.

use crossterm::event::KeyEvent;

use crate::reader::{Command, Envelope};

/// Outcome of one HTTP call against the Reader Service.
pub type CallOutcome = Result<Envelope, String>;

/// Messages consumed by the panel reducer.
#[derive(Debug, Clone)]
pub enum PanelMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// A one-shot command finished.
    CommandDone {
        command: Command,
        outcome: CallOutcome,
    },
    /// A scan-poll tick finished.
    Poll(CallOutcome),
}
