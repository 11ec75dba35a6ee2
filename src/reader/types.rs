//! Wire contract with the Reader Service.

use serde::Deserialize;

/// Response envelope returned by every Reader Service endpoint.
///
/// The service omits `message` on successful data polls and omits `data`
/// on plain commands; absent fields decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<String>,
}

/// A one-shot command against the Reader Service.
///
/// All commands are body-less POSTs; parameters (select masks, memory
/// payloads, lock targets) are defaulted server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartInventory,
    StopInventory,
    GetSelect,
    SetSelect,
    SetSelectMode,
    WriteMemory,
    LockMemory,
}

impl Command {
    /// Endpoint path relative to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Command::StartInventory => "/inventory/start",
            Command::StopInventory => "/inventory/stop",
            Command::GetSelect => "/select/get",
            Command::SetSelect => "/select/set",
            Command::SetSelectMode => "/select/mode",
            Command::WriteMemory => "/memory/write",
            Command::LockMemory => "/memory/lock",
        }
    }

    /// Short label for the commands pane.
    pub fn label(self) -> &'static str {
        match self {
            Command::StartInventory => "start inventory",
            Command::StopInventory => "stop inventory",
            Command::GetSelect => "get select params",
            Command::SetSelect => "set select params",
            Command::SetSelectMode => "set select mode",
            Command::WriteMemory => "write tag memory",
            Command::LockMemory => "lock tag memory",
        }
    }
}
