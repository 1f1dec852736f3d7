//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Ctrl+S works on all platforms; terminals on macOS rarely forward Cmd.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy hint for the submissions panel, naming the platform paste shortcut
#[cfg(target_os = "macos")]
pub const COPY_HINT: &str = "y:copy JSON (Cmd+V to paste)";

#[cfg(not(target_os = "macos"))]
pub const COPY_HINT: &str = "y:copy JSON (Ctrl+V to paste)";
