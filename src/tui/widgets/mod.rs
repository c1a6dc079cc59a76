//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::{parse_number, TextInput};
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
