//! Timing and layout values for the interactive screen.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the title header
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the inventory form
pub const FORM_HEIGHT: u16 = 3;

/// Height of the status line
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Share of the remaining height given to the role list
pub const ROLE_LIST_PERCENT: u16 = 45;

/// Columns used to lay out the role list
pub const ROLE_LIST_COLUMNS: usize = 2;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// Lines scrolled per PageUp/PageDown in the preview
pub const PREVIEW_SCROLL_STEP: u16 = 5;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
