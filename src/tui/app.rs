//! PanelApp — the TEA model.
//!
//! All state lives here. Update receives PanelMessages, mutates state.
//! View reads state to produce ratatui widgets. No side effects in
//! update: HTTP calls happen in runner-spawned tasks, and the poller is
//! created/destroyed by the runner in lockstep with the scan state.

use tracing::{debug, warn};

use crate::reader::Command;

use super::event::{CallOutcome, PanelMessage};
use super::input;

/// Scan lifecycle. `Active` is entered only on a confirmed start reply,
/// so the panel never claims to be scanning while the server disagrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    /// Start command in flight.
    Starting,
    /// Server confirmed the scan; the poller runs.
    Active,
    /// Stop command in flight.
    Stopping,
}

impl ScanState {
    /// Status-bar label.
    pub fn label(self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Starting => "starting",
            ScanState::Active => "scanning",
            ScanState::Stopping => "stopping",
        }
    }
}

/// The control panel state (TEA model).
pub struct PanelApp {
    /// Reader Service base URL (title bar).
    pub base_url: String,
    /// Last success message from a completed command, or empty.
    pub status: String,
    /// Last failure message, or empty. Never non-empty together with
    /// `status`: each completed command sets exactly one of the two.
    pub error: String,
    /// Scan lifecycle state.
    pub scan: ScanState,
    /// Tag identifiers in arrival order; duplicates kept. Cleared on the
    /// confirmed transition into `Active`.
    pub tags: Vec<String>,
    /// Command pending dispatch (set by input, consumed by the runner).
    pub pending_command: Option<Command>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Scroll offset for the results pane.
    pub tag_scroll: u16,
    /// When true, keep the results pane pinned to the tail.
    pub tag_auto_scroll: bool,
    /// Viewport height of the results pane (set by the renderer).
    pub viewport_height: u16,
}

impl PanelApp {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            status: String::new(),
            error: String::new(),
            scan: ScanState::Idle,
            tags: Vec::new(),
            pending_command: None,
            should_quit: false,
            tag_scroll: 0,
            tag_auto_scroll: true,
            viewport_height: 0,
        }
    }

    /// Apply one message.
    pub fn update(&mut self, msg: PanelMessage) {
        match msg {
            PanelMessage::Input(key) => input::handle_key(self, key),
            PanelMessage::CommandDone { command, outcome } => {
                self.finish_command(command, outcome);
            }
            PanelMessage::Poll(outcome) => self.apply_poll(outcome),
        }
    }

    /// Request the inventory toggle. Ignored while a toggle is in flight.
    pub fn toggle_inventory(&mut self) {
        match self.scan {
            ScanState::Idle => {
                self.pending_command = Some(Command::StartInventory);
                self.scan = ScanState::Starting;
            }
            ScanState::Active => {
                self.pending_command = Some(Command::StopInventory);
                self.scan = ScanState::Stopping;
            }
            ScanState::Starting | ScanState::Stopping => {}
        }
    }

    /// Queue a one-shot command for the runner.
    pub fn dispatch(&mut self, command: Command) {
        self.pending_command = Some(command);
    }

    fn finish_command(&mut self, command: Command, outcome: CallOutcome) {
        let succeeded = match outcome {
            Ok(env) if env.success => {
                self.status = env.message;
                self.error.clear();
                true
            }
            Ok(env) => {
                self.error = env.message;
                self.status.clear();
                false
            }
            Err(desc) => {
                self.error = desc;
                self.status.clear();
                false
            }
        };

        match (command, self.scan, succeeded) {
            (Command::StartInventory, ScanState::Starting, true) => {
                self.scan = ScanState::Active;
                self.tags.clear();
                self.tag_scroll = 0;
                self.tag_auto_scroll = true;
            }
            (Command::StartInventory, ScanState::Starting, false) => {
                self.scan = ScanState::Idle;
            }
            (Command::StopInventory, ScanState::Stopping, true) => {
                self.scan = ScanState::Idle;
            }
            (Command::StopInventory, ScanState::Stopping, false) => {
                // Server is still scanning; stay active and show the error.
                self.scan = ScanState::Active;
            }
            _ => {}
        }
    }

    /// Append a poll result. Only `Active` accepts data, so a completion
    /// that straggles in after stop is dropped. Failures are diagnostic
    /// only and never reach the `error` field.
    fn apply_poll(&mut self, outcome: CallOutcome) {
        if self.scan != ScanState::Active {
            return;
        }
        match outcome {
            Ok(env) if env.success => {
                if !env.data.is_empty() {
                    self.tags.extend(env.data);
                }
            }
            Ok(env) => debug!(message = %env.message, "inventory poll reported failure"),
            Err(desc) => warn!(error = %desc, "inventory poll failed"),
        }
    }

    pub fn scroll_down(&mut self) {
        self.tag_scroll = self.tag_scroll.saturating_add(1);
        self.tag_auto_scroll = false;
    }

    pub fn scroll_up(&mut self) {
        self.tag_scroll = self.tag_scroll.saturating_sub(1);
        self.tag_auto_scroll = false;
    }

    /// Jump to the tail and re-enable auto-scroll.
    pub fn scroll_to_tail(&mut self) {
        self.tag_auto_scroll = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Envelope;

    fn app() -> PanelApp {
        PanelApp::new("http://localhost:5000/api")
    }

    fn ok(message: &str) -> CallOutcome {
        Ok(Envelope {
            success: true,
            message: message.into(),
            data: vec![],
        })
    }

    fn fail(message: &str) -> CallOutcome {
        Ok(Envelope {
            success: false,
            message: message.into(),
            data: vec![],
        })
    }

    fn poll_data(tags: &[&str]) -> CallOutcome {
        Ok(Envelope {
            success: true,
            message: String::new(),
            data: tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    fn done(app: &mut PanelApp, command: Command, outcome: CallOutcome) {
        app.update(PanelMessage::CommandDone { command, outcome });
    }

    /// Drive the panel into a confirmed active scan.
    fn start_scan(app: &mut PanelApp) {
        app.toggle_inventory();
        assert_eq!(app.pending_command.take(), Some(Command::StartInventory));
        done(app, Command::StartInventory, ok("scan started"));
        assert_eq!(app.scan, ScanState::Active);
    }

    #[test]
    fn success_sets_status_and_clears_error() {
        let mut app = app();
        app.error = "stale error".into();

        done(&mut app, Command::SetSelect, ok("select params applied"));

        assert_eq!(app.status, "select params applied");
        assert!(app.error.is_empty());
    }

    #[test]
    fn failure_sets_error_and_clears_status() {
        let mut app = app();
        app.status = "stale status".into();

        done(&mut app, Command::GetSelect, fail("reader not connected"));

        assert_eq!(app.error, "reader not connected");
        assert!(app.status.is_empty());
    }

    #[test]
    fn transport_error_sets_error_and_clears_status() {
        let mut app = app();
        app.status = "stale status".into();

        done(
            &mut app,
            Command::WriteMemory,
            Err("HTTP error: connection refused".into()),
        );

        assert_eq!(app.error, "HTTP error: connection refused");
        assert!(app.status.is_empty());
    }

    #[test]
    fn at_most_one_outcome_field_after_any_completion() {
        let mut app = app();
        let outcomes = [
            ok("ok"),
            fail("bad"),
            Err("transport".into()),
            ok("ok again"),
        ];
        for outcome in outcomes {
            done(&mut app, Command::SetSelectMode, outcome);
            assert!(
                app.status.is_empty() || app.error.is_empty(),
                "status and error both set: {:?} / {:?}",
                app.status,
                app.error
            );
        }
    }

    #[test]
    fn toggle_when_idle_requests_start() {
        let mut app = app();
        app.toggle_inventory();
        assert_eq!(app.pending_command, Some(Command::StartInventory));
        assert_eq!(app.scan, ScanState::Starting);
    }

    #[test]
    fn confirmed_start_activates_and_clears_previous_tags() {
        let mut app = app();
        app.tags = vec!["LEFTOVER1".into(), "LEFTOVER2".into()];

        start_scan(&mut app);

        assert!(app.tags.is_empty());
        assert_eq!(app.status, "scan started");
    }

    #[test]
    fn failed_start_returns_to_idle() {
        let mut app = app();
        app.toggle_inventory();
        app.pending_command.take();

        done(&mut app, Command::StartInventory, fail("serial port busy"));

        assert_eq!(app.scan, ScanState::Idle);
        assert_eq!(app.error, "serial port busy");
    }

    #[test]
    fn toggle_when_active_requests_stop() {
        let mut app = app();
        start_scan(&mut app);

        app.toggle_inventory();
        assert_eq!(app.pending_command, Some(Command::StopInventory));
        assert_eq!(app.scan, ScanState::Stopping);

        done(&mut app, Command::StopInventory, ok("scan stopped"));
        assert_eq!(app.scan, ScanState::Idle);
    }

    #[test]
    fn failed_stop_stays_active() {
        let mut app = app();
        start_scan(&mut app);
        app.toggle_inventory();
        app.pending_command.take();

        done(&mut app, Command::StopInventory, fail("stop failed"));

        assert_eq!(app.scan, ScanState::Active);
        assert_eq!(app.error, "stop failed");
    }

    #[test]
    fn toggle_ignored_while_in_flight() {
        let mut app = app();
        app.toggle_inventory();
        app.pending_command.take();

        // Second toggle while the start is still in flight does nothing.
        app.toggle_inventory();
        assert_eq!(app.pending_command, None);
        assert_eq!(app.scan, ScanState::Starting);
    }

    #[test]
    fn polls_append_in_arrival_order() {
        let mut app = app();
        start_scan(&mut app);

        app.update(PanelMessage::Poll(poll_data(&["E200001"])));
        app.update(PanelMessage::Poll(poll_data(&["E200002", "E200003"])));

        assert_eq!(app.tags, vec!["E200001", "E200002", "E200003"]);
    }

    #[test]
    fn duplicate_tags_are_kept() {
        let mut app = app();
        start_scan(&mut app);

        app.update(PanelMessage::Poll(poll_data(&["E200001"])));
        app.update(PanelMessage::Poll(poll_data(&["E200001"])));

        assert_eq!(app.tags, vec!["E200001", "E200001"]);
    }

    #[test]
    fn poll_failure_and_empty_data_leave_state_untouched() {
        let mut app = app();
        start_scan(&mut app);
        app.update(PanelMessage::Poll(poll_data(&["E200001"])));

        app.update(PanelMessage::Poll(fail("read timeout")));
        app.update(PanelMessage::Poll(poll_data(&[])));
        app.update(PanelMessage::Poll(Err("connection reset".into())));

        assert_eq!(app.tags, vec!["E200001"]);
        // Poll failures are suppressed from the user-visible error field.
        assert!(app.error.is_empty());
        assert_eq!(app.status, "scan started");
    }

    #[test]
    fn stale_poll_after_stop_is_dropped() {
        let mut app = app();
        start_scan(&mut app);
        app.toggle_inventory();
        app.pending_command.take();
        done(&mut app, Command::StopInventory, ok("scan stopped"));

        // In-flight tick completes after the stop was confirmed.
        app.update(PanelMessage::Poll(poll_data(&["E200009"])));

        assert!(app.tags.is_empty());
        assert_eq!(app.scan, ScanState::Idle);
    }

    #[test]
    fn select_failure_scenario() {
        // operator flow: "get select params" against a dead reader
        let mut app = app();
        done(&mut app, Command::GetSelect, fail("reader not connected"));
        assert_eq!(app.error, "reader not connected");
        assert!(app.status.is_empty());
    }

    #[test]
    fn manual_scroll_disables_auto_scroll() {
        let mut app = app();
        assert!(app.tag_auto_scroll);
        app.scroll_down();
        assert!(!app.tag_auto_scroll);
        assert_eq!(app.tag_scroll, 1);
        app.scroll_to_tail();
        assert!(app.tag_auto_scroll);
    }
}
