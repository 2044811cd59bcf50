//! Form Rendering
//!
//! Renders the control tree built by `console-core` into a terminal buffer.
//! Layout is a fixed vertical walk over the panel: heading, transport
//! toggles, the validation slot (always one reserved line, so a message
//! appearing never shifts the form), the mutual-TLS toggle, the
//! mandatory/optional selector, and the certificate sub-panel.

use console_core::panels::{CheckState, RadioOption, Toggle, TransportSecurityPanel};
use console_core::panels::TRANSPORT_LEVEL_HEADING;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Identifies a focusable control within the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusId {
    /// A transport toggle, by token.
    Transport(String),
    /// The mutual-TLS toggle.
    MutualSsl,
    /// A mandatory/optional radio option, by value.
    Mandatory(String),
}

/// Focusable controls of the panel, in visual order.
///
/// Disabled controls stay in the ring - they can be focused (so the user can
/// see them described in the status bar) but interaction emits nothing.
pub fn focus_targets(panel: &TransportSecurityPanel) -> Vec<FocusId> {
    let mut targets: Vec<FocusId> = panel
        .transports()
        .toggles()
        .iter()
        .map(|t| FocusId::Transport(t.value.clone()))
        .collect();

    targets.push(FocusId::MutualSsl);

    if let Some(group) = panel.mandatory() {
        targets.extend(
            group
                .options
                .iter()
                .map(|o| FocusId::Mandatory(o.value.clone())),
        );
    }

    targets
}

/// Checkbox glyph for a state.
pub fn check_glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
    }
}

/// One rendered checkbox line.
pub fn toggle_line(toggle: &Toggle) -> String {
    format!("{} {}", check_glyph(toggle.state), toggle.label)
}

/// One rendered radio option.
pub fn radio_line(option: &RadioOption, selected: Option<&str>) -> String {
    let glyph = if selected == Some(option.value.as_str()) {
        "(*)"
    } else {
        "( )"
    };
    format!("{} {}", glyph, option.label)
}

fn control_style(enabled: bool, focused: bool) -> Style {
    let base = if enabled {
        Style::default().fg(theme::CONTROL)
    } else {
        Style::default().fg(theme::DISABLED)
    };
    if focused {
        base.fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn put_line(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y >= area.y + area.height {
        return;
    }
    let max = (area.x + area.width).saturating_sub(x) as usize;
    if max == 0 {
        return;
    }
    // Clip to the buffer width by display width, not char count
    let mut clipped = String::new();
    for ch in text.chars() {
        let mut candidate = clipped.clone();
        candidate.push(ch);
        if candidate.width() > max {
            break;
        }
        clipped = candidate;
    }
    buf.set_string(x, y, &clipped, style);
}

/// Render the whole panel into `area` of `buf`, highlighting `focus`.
pub fn render_panel(
    buf: &mut Buffer,
    area: Rect,
    panel: &TransportSecurityPanel,
    focus: Option<&FocusId>,
) {
    if area.width < 20 || area.height < 10 {
        return;
    }

    let x = area.x + 1;
    let mut y = area.y;

    put_line(
        buf,
        area,
        x,
        y,
        TRANSPORT_LEVEL_HEADING,
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::UNDERLINED),
    );
    y += 2;

    put_line(buf, area, x, y, "Transports", Style::default().fg(theme::HELPER));
    y += 1;
    for toggle in panel.transports().toggles() {
        let is_focused = matches!(focus, Some(FocusId::Transport(v)) if *v == toggle.value);
        put_line(
            buf,
            area,
            x + 2,
            y,
            &toggle_line(toggle),
            control_style(toggle.enabled, is_focused),
        );
        y += 1;
    }

    // Validation slot: one line, always reserved
    let message = panel
        .transports()
        .validation()
        .message
        .as_deref()
        .unwrap_or("");
    put_line(buf, area, x + 2, y, message, Style::default().fg(theme::ERROR_RED));
    y += 2;

    let mutual = panel.mutual_ssl();
    let is_focused = matches!(focus, Some(FocusId::MutualSsl));
    put_line(
        buf,
        area,
        x,
        y,
        &toggle_line(mutual),
        control_style(mutual.enabled, is_focused),
    );
    y += 1;

    if let Some(group) = panel.mandatory() {
        let mut rx = x + 2;
        for option in &group.options {
            let line = radio_line(option, group.selected.as_deref());
            let is_focused = matches!(focus, Some(FocusId::Mandatory(v)) if *v == option.value);
            put_line(buf, area, rx, y, &line, control_style(group.enabled, is_focused));
            rx = rx
                .saturating_add(u16::try_from(line.width()).unwrap_or(u16::MAX))
                .saturating_add(3);
        }
        y += 1;

        let wrap_width = usize::from(area.width.saturating_sub(4)).max(20);
        for helper_line in textwrap::wrap(&group.helper, wrap_width) {
            put_line(
                buf,
                area,
                x + 2,
                y,
                &helper_line,
                Style::default().fg(theme::HELPER),
            );
            y += 1;
        }
    }
    y += 1;

    if let Some(certs) = panel.certificates() {
        put_line(buf, area, x, y, "Certificates", Style::default().fg(theme::HELPER));
        y += 1;
        if certs.certificates.is_empty() {
            put_line(
                buf,
                area,
                x + 2,
                y,
                "No certificates uploaded",
                Style::default().fg(theme::DISABLED),
            );
        } else {
            for cert in &certs.certificates {
                put_line(
                    buf,
                    area,
                    x + 2,
                    y,
                    &cert.alias,
                    Style::default().fg(theme::CONTROL),
                );
                y += 1;
            }
        }
    }
}
