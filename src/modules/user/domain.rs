use super::entity;
use crate::messages::Message;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<entity::Model> for UserResponse {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Largest offset or limit the database accepts
const MAX_BOUND: u64 = i64::MAX as u64;

impl ListParams {
    /// Rows to skip, capped to what the database accepts
    pub fn offset(&self) -> u64 {
        self.skip.min(MAX_BOUND)
    }

    /// Page size, capped the same way; the cap is effectively "no limit"
    pub fn page_size(&self) -> u64 {
        self.limit.min(MAX_BOUND)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub status: &'static str,
    pub message: &'static str,
}

impl DeleteConfirmation {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: Message::UserDeleted.text(),
        }
    }
}
