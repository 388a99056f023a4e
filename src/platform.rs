//! Platform-specific configuration

/// Submit shortcut display
/// - macOS: "⌃S" (Control, not Cmd, since the terminal owns Cmd shortcuts)
/// - Linux/Windows: "^S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "⌃S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "^S";
