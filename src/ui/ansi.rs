// Shared ANSI/VT100 control sequences used across the UI.

/// Hide the cursor.
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
/// Show the cursor.
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");

// Urgency tiers
pub const FG_RED: &str = crate::csi!("31m");
pub const FG_YELLOW: &str = crate::csi!("33m");
pub const FG_GREEN: &str = crate::csi!("32m");
pub const FG_BLUE: &str = crate::csi!("34m");

/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
