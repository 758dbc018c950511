use crate::domain::news::moderation::ModerationState;
use crate::domain::news::value_objects::CommentBody;
use crate::domain::user::{UserId, Viewer};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub u64);

#[derive(Debug, Clone)]
pub struct Comment {
    id: CommentId,
    author: UserId,
    body: CommentBody,
    created_at: DateTime<Utc>,
    moderation: ModerationState,
}

impl Comment {
    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn body(&self) -> &CommentBody {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_visible(&self) -> bool {
        self.moderation.is_visible()
    }

    /// A removed comment stays visible to its author and to moderators.
    pub fn visible_for(&self, viewer: Option<&Viewer>) -> bool {
        self.is_visible()
            || viewer.is_some_and(|v| v.moderator || v.is_author_of(self.author))
    }

    pub(crate) fn hide(&mut self, moderator: UserId, at: DateTime<Utc>) {
        self.moderation.remove(moderator, at);
    }
}

/// Insertion-ordered thread. The thread hands out comment ids and applies
/// each comment's own visibility predicate; it does not decide moderation
/// policy itself.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    entries: Vec<Comment>,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        author: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> &Comment {
        let index = self.entries.len();
        let comment = Comment {
            id: CommentId(index as u64 + 1),
            author,
            body,
            created_at,
            moderation: ModerationState::new(),
        };
        self.entries.push(comment);
        &self.entries[index]
    }

    pub fn visible_for(&self, viewer: Option<&Viewer>) -> Vec<&Comment> {
        self.entries
            .iter()
            .filter(|comment| comment.visible_for(viewer))
            .collect()
    }

    pub fn get_mut(&mut self, id: CommentId) -> Option<&mut Comment> {
        self.entries.iter_mut().find(|comment| comment.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.entries.iter()
    }
}
