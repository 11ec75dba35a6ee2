//! Typed HTTP client for the Reader Service.
//!
//! No panel awareness — the command set, the response envelope, and the
//! transport errors, nothing else.

pub mod client;
pub mod types;

pub use client::{ReaderClient, ReaderError, DEFAULT_BASE_URL};
pub use types::{Command, Envelope};
