//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers that turn `s` into the submit shortcut
/// - macOS: CONTROL or SUPER (Ctrl+S and Cmd+S)
/// - Linux/Windows: CONTROL (Ctrl+S)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether a character key pressed with `modifiers` types text.
///
/// Shift alone types. Ctrl+Alt together is how Windows terminals report
/// AltGr, which types characters like `@` on many layouts.
pub fn is_text_input(modifiers: KeyModifiers) -> bool {
    let held = modifiers.difference(KeyModifiers::SHIFT);
    held.is_empty() || held == KeyModifiers::CONTROL.union(KeyModifiers::ALT)
}
