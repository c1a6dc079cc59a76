//! Modal dialogs for the TUI

pub mod confirm;
