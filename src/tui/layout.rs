//! Control panel layout.
//!
//! ```text
//! ┌ RFID Control Panel — http://localhost:5000/api ──┐
//! │ ┌ Commands ────────┐ ┌ Scan Results (3) ───────┐ │
//! │ │ i start inventory│ │ E20000123               │ │
//! │ │ g get select …   │ │ …                       │ │
//! │ └──────────────────┘ └─────────────────────────┘ │
//! ├──────────────────────────────────────────────────┤
//! │ [scanning] last status or error                  │
//! └──────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::reader::Command;

use super::app::{PanelApp, ScanState};

/// Draw the full panel layout.
pub fn draw(f: &mut Frame, app: &mut PanelApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(5),    // content
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    draw_title(f, app, outer[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(outer[1]);

    draw_commands(f, app, content[0]);
    draw_results(f, app, content[1]);
    draw_status_bar(f, app, outer[2]);
}

fn draw_title(f: &mut Frame, app: &PanelApp, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " RFID Control Panel ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {}", app.base_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_commands(f: &mut Frame, app: &PanelApp, area: Rect) {
    let block = Block::default()
        .title(" Commands ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let toggle_label = match app.scan {
        ScanState::Idle => Command::StartInventory.label(),
        ScanState::Starting => "starting…",
        ScanState::Active => Command::StopInventory.label(),
        ScanState::Stopping => "stopping…",
    };

    let rows: Vec<(&str, &str)> = vec![
        ("i", toggle_label),
        ("g", Command::GetSelect.label()),
        ("s", Command::SetSelect.label()),
        ("m", Command::SetSelectMode.label()),
        ("w", Command::WriteMemory.label()),
        ("l", Command::LockMemory.label()),
        ("q", "quit"),
    ];

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(key, key_style),
                Span::raw("  "),
                Span::raw(label),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_results(f: &mut Frame, app: &mut PanelApp, area: Rect) {
    let block = Block::default()
        .title(format!(" Scan Results ({}) ", app.tags.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = if app.tags.is_empty() {
        let hint = match app.scan {
            ScanState::Active => "Scanning — no tags seen yet.",
            _ => "No scan running. Press i to start inventory.",
        };
        vec![Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.tags
            .iter()
            .map(|tag| Line::from(Span::raw(tag.as_str())))
            .collect()
    };

    // Scroll clamping
    let inner_height = area.height.saturating_sub(2) as u32;
    let total_lines = lines.len() as u32;
    let max_scroll = total_lines.saturating_sub(inner_height);
    let max_scroll_u16 = max_scroll.min(u16::MAX as u32) as u16;
    let scroll = if app.tag_auto_scroll {
        max_scroll_u16
    } else {
        app.tag_scroll.min(max_scroll_u16)
    };
    app.tag_scroll = scroll;
    app.viewport_height = inner_height.min(u16::MAX as u32) as u16;

    let para = Paragraph::new(lines).block(block).scroll((scroll, 0));
    f.render_widget(para, area);

    if total_lines > inner_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll_u16 as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draw_status_bar(f: &mut Frame, app: &PanelApp, area: Rect) {
    let scan_style = match app.scan {
        ScanState::Active => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ScanState::Starting | ScanState::Stopping => Style::default().fg(Color::Yellow),
        ScanState::Idle => Style::default().fg(Color::DarkGray),
    };

    let mut spans = vec![
        Span::styled(format!("[{}]", app.scan.label()), scan_style),
        Span::raw(" "),
    ];
    if !app.error.is_empty() {
        spans.push(Span::styled(
            app.error.as_str(),
            Style::default().fg(Color::Red),
        ));
    } else if !app.status.is_empty() {
        spans.push(Span::styled(
            app.status.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
