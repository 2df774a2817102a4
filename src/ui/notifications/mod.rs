// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Load failures surface as error toasts that stay until dismissed; config
//! and state problems as warnings that fade after five seconds. At most
//! three toasts are visible, the rest wait in a queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::failure("notification-statistics-error", &err));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
