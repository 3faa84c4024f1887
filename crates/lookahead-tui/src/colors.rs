//! Palette for the autocomplete screen, named by what each color marks.

use ratatui::style::Color;

/// Behind everything
pub const BACKDROP: Color = Color::Rgb(0x11, 0x14, 0x1b);
/// Search box, result list and status line
pub const WIDGET: Color = Color::Rgb(0x1a, 0x1f, 0x29);
/// Shared-context mirror panel
pub const MIRROR: Color = Color::Rgb(0x22, 0x28, 0x34);

pub const TEXT: Color = Color::Rgb(0xdc, 0xe2, 0xec);
pub const MUTED: Color = Color::Rgb(0x9a, 0xa4, 0xb5);
pub const BORDER: Color = Color::Rgb(0x4b, 0x55, 0x67);

/// Border of the search box while the list is shown
pub const FOCUS: Color = Color::Rgb(0x7a, 0xb8, 0xf5);

pub const LOADING: Color = Color::Rgb(0xf0, 0xc6, 0x74);
pub const CALL_OK: Color = Color::Rgb(0x8f, 0xd1, 0x9e);
pub const CALL_FAILED: Color = Color::Rgb(0xf2, 0x8b, 0x82);
