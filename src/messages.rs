//! User-facing message table

use strum::EnumMessage;
use strum_macros::EnumMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMessage)]
pub enum Message {
    #[strum(message = "Пользователь не найден")]
    UserNotFound,

    #[strum(message = "Пользователь удален")]
    UserDeleted,

    /// Payload of the in-memory store's lookup miss
    #[strum(message = "User not found")]
    EphemeralUserNotFound,

    #[strum(message = "Internal Server Error")]
    InternalError,
}

impl Message {
    pub fn text(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_message_has_text() {
        for message in [
            Message::UserNotFound,
            Message::UserDeleted,
            Message::EphemeralUserNotFound,
            Message::InternalError,
        ] {
            assert!(!message.text().is_empty(), "{message:?} has no text");
        }
    }

    #[test]
    fn test_display_uses_text() {
        assert_eq!(Message::UserNotFound.to_string(), "Пользователь не найден");
        assert_eq!(Message::EphemeralUserNotFound.to_string(), "User not found");
    }
}
