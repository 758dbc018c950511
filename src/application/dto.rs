// src/application/dto.rs
use crate::domain::news::comments::Comment;
use crate::domain::news::entity::NewsItem;
use crate::domain::news::revision::{ApprovalStatus, NewsRevision};
use crate::domain::news::workflow::EditOutcome;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_id: i64,
    pub vote_tally: i64,
    pub views: u64,
    pub visible: bool,
    pub edited: bool,
    pub has_pending_edits: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub last_touched_by: Option<i64>,
}

impl From<&NewsItem> for NewsDto {
    fn from(item: &NewsItem) -> Self {
        let current = item.current_revision();
        Self {
            id: item.id().into(),
            title: current.title().as_str().to_owned(),
            slug: current.slug().as_str().to_owned(),
            body: current.body().as_str().to_owned(),
            author_id: item.author().into(),
            vote_tally: item.vote_tally(),
            views: item.views(),
            visible: item.is_visible(),
            edited: item.is_edited(),
            has_pending_edits: item.has_pending_edits(),
            created_at: item.created_at(),
            last_updated_at: item.last_updated_at(),
            last_touched_by: item.last_touched_by().map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RevisionDto {
    pub version: u32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub edit_author_id: i64,
    pub status: ApprovalStatus,
    pub recorded_at: DateTime<Utc>,
}

impl From<&NewsRevision> for RevisionDto {
    fn from(revision: &NewsRevision) -> Self {
        Self {
            version: revision.version(),
            title: revision.title().as_str().to_owned(),
            slug: revision.slug().as_str().to_owned(),
            body: revision.body().as_str().to_owned(),
            edit_author_id: revision.edit_author().into(),
            status: revision.status(),
            recorded_at: revision.recorded_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: u64,
    pub author_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().0,
            author_id: comment.author().into(),
            body: comment.body().as_str().to_owned(),
            created_at: comment.created_at(),
        }
    }
}

/// Result of an edit submission: the item as persisted plus which side of
/// the approval fork the revision landed on.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitEditResult {
    pub news: NewsDto,
    pub outcome: EditOutcome,
}
