//! Theme and Colors
//!
//! Palette for the configuration form surface. Muted console colors; the
//! accent marks the focused control.

use ratatui::style::Color;

/// Panel headings and focused-control accent.
pub const ACCENT: Color = Color::Cyan;

/// Enabled control text.
pub const CONTROL: Color = Color::Rgb(220, 220, 220);

/// Disabled control text.
pub const DISABLED: Color = Color::Rgb(110, 110, 110);

/// Helper/advisory text.
pub const HELPER: Color = Color::Rgb(150, 150, 150);

/// Validation message red.
pub const ERROR_RED: Color = Color::Rgb(255, 90, 90);

/// Status bar text.
pub const STATUS: Color = Color::DarkGray;
