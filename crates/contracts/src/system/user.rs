use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::record::ensure;
use crate::shared::{DecodeError, StoreRecord};

/// `currentUser`; absent means logged out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

impl StoreRecord for UserProfile {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "user without id")
    }
}
