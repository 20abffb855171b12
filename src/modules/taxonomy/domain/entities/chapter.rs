use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Leaf node nested under a child category. Siblings are ordered by
/// `position`, then by name.
///
/// The chapter relation is schema-optional: a deployment without the
/// table simply has no chapter layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub is_active: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
