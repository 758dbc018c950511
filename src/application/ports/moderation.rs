// src/application/ports/moderation.rs
use crate::domain::news::entity::NewsItem;
use crate::domain::news::revision::NewsRevision;

/// Decides whether a submitted revision may skip the approval queue
/// (trusted author, freshly created item, and so on). The decision is
/// owned by the embedding platform; the core only consults it.
pub trait ApprovalPolicy: Send + Sync {
    fn may_auto_approve(&self, item: &NewsItem, revision: &NewsRevision) -> bool;
}
