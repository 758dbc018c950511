use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Visibility of a moderated piece of content. Starts visible; `remove` is
/// one-way and records who removed it and when. Re-instatement is a
/// moderation-queue concern outside this core.
#[derive(Debug, Clone, Default)]
pub struct ModerationState {
    removal: Option<Removal>,
}

#[derive(Debug, Clone)]
pub struct Removal {
    pub removed_by: UserId,
    pub removed_at: DateTime<Utc>,
}

impl ModerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.removal.is_none()
    }

    /// Idempotent; the first removal's metadata is kept.
    pub fn remove(&mut self, removed_by: UserId, removed_at: DateTime<Utc>) {
        if self.removal.is_none() {
            self.removal = Some(Removal {
                removed_by,
                removed_at,
            });
        }
    }

    pub fn removal(&self) -> Option<&Removal> {
        self.removal.as_ref()
    }
}
