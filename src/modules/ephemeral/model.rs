use crate::messages::Message;
use serde::{Deserialize, Serialize};

/// A user held in process memory. Serialized as `{"name", "id"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

/// Result of a lookup by id. A miss is still a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserLookup {
    Found(User),
    Missing { error: &'static str },
}

impl UserLookup {
    pub fn missing() -> Self {
        UserLookup::Missing {
            error: Message::EphemeralUserNotFound.text(),
        }
    }
}

impl From<Option<User>> for UserLookup {
    fn from(user: Option<User>) -> Self {
        user.map_or_else(UserLookup::missing, UserLookup::Found)
    }
}
