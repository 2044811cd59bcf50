//! Main Application
//!
//! The App owns the TUI lifecycle as a thin form surface:
//! - Event loop (keyboard, resize)
//! - ConfigStore holding the authoritative configuration
//! - Focus ring over the panel's controls
//!
//! Every frame rebuilds the panel from a fresh configuration snapshot; user
//! interaction only dispatches edit intents to the store. The surface never
//! mutates configuration directly.

use std::io;
use std::time::Duration;

use console_core::panels::TransportSecurityPanel;
use console_core::{ConfigDispatcher, ConsoleToml};
use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::Terminal;

use crate::form::{self, FocusId};
use crate::store::ConfigStore;
use crate::theme;

/// Main application state.
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Owner of the authoritative configuration.
    store: ConfigStore,
    /// Whether the current user may edit the configuration.
    can_edit: bool,
    /// Whether mutual TLS may be combined with other schemes.
    multi_level: bool,
    /// Index into the focus ring.
    focus: usize,
}

impl App {
    /// Create the app from loaded configuration.
    #[must_use]
    pub fn new(config: &ConsoleToml) -> Self {
        Self {
            running: true,
            store: ConfigStore::new(config.api.to_configuration()),
            can_edit: config.permissions.can_edit,
            multi_level: config.permissions.multi_level_security,
            focus: 0,
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render the initial frame immediately
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Resize(..) => {}
                            _ => {}
                        }
                    }
                }

                // Idle tick so dispatched intents show up promptly
                _ = tokio::time::sleep(Duration::from_millis(100)) => {}
            }

            self.store.drain();
            self.render(terminal)?;
        }

        Ok(())
    }

    /// Build the panel from the current snapshot.
    fn panel(&self) -> TransportSecurityPanel {
        TransportSecurityPanel::new(self.store.snapshot(), self.multi_level, !self.can_edit)
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            KeyCode::Tab | KeyCode::Down | KeyCode::Right => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Left => self.move_focus(-1),

            KeyCode::Char(' ') | KeyCode::Enter => self.activate(),

            _ => {}
        }
    }

    /// Move focus through the ring, wrapping at either end.
    fn move_focus(&mut self, delta: i32) {
        let targets = form::focus_targets(&self.panel());
        if targets.is_empty() {
            return;
        }
        let len = targets.len() as i32;
        let current = self.focus.min(targets.len() - 1) as i32;
        self.focus = ((current + delta).rem_euclid(len)) as usize;
    }

    /// Interact with the focused control, dispatching the resulting intent.
    ///
    /// Disabled controls produce no intent, so this is a no-op for them.
    fn activate(&mut self) {
        let panel = self.panel();
        let targets = form::focus_targets(&panel);
        let Some(target) = targets.get(self.focus) else {
            return;
        };

        let intent = match target {
            FocusId::Transport(value) => panel.toggle_transport(value),
            FocusId::MutualSsl => panel.toggle_mutual_ssl(),
            FocusId::Mandatory(value) => panel.select_mandatory(value),
        };

        if let Some(intent) = intent {
            self.store.dispatcher().dispatch(intent);
        }
    }

    /// Render the form and the status bar.
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let panel = self.panel();
        let targets = form::focus_targets(&panel);

        // The ring shrinks when mutual TLS is unchecked; keep focus valid
        if !targets.is_empty() && self.focus >= targets.len() {
            self.focus = targets.len() - 1;
        }
        let focus = targets.get(self.focus);

        let read_only = !self.can_edit;
        terminal.draw(|frame| {
            let area = frame.area();
            let form_area = ratatui::layout::Rect {
                height: area.height.saturating_sub(1),
                ..area
            };
            let buf = frame.buffer_mut();

            form::render_panel(buf, form_area, &panel, focus);

            let status = if read_only {
                " read-only | Esc quit | Tab/arrows move".to_string()
            } else {
                " Tab/arrows move | Space toggle | Esc quit".to_string()
            };
            buf.set_string(
                area.x,
                area.y + area.height.saturating_sub(1),
                &status,
                Style::default().fg(theme::STATUS),
            );
        })?;

        Ok(())
    }
}
