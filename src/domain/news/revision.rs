use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::value_objects::{NewsBody, NewsSlug, NewsTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

/// One revision of a news item's content. Created `Pending`; the only
/// mutation it ever undergoes is the single transition to `Approved`.
#[derive(Debug, Clone)]
pub struct NewsRevision {
    version: u32,
    title: NewsTitle,
    slug: NewsSlug,
    body: NewsBody,
    edit_author: UserId,
    status: ApprovalStatus,
    recorded_at: DateTime<Utc>,
}

impl NewsRevision {
    pub fn new(
        title: NewsTitle,
        slug: NewsSlug,
        body: NewsBody,
        edit_author: UserId,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            // the aggregate stamps the real version when it appends
            version: 0,
            title,
            slug,
            body,
            edit_author,
            status: ApprovalStatus::Pending,
            recorded_at,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn title(&self) -> &NewsTitle {
        &self.title
    }

    pub fn slug(&self) -> &NewsSlug {
        &self.slug
    }

    pub fn body(&self) -> &NewsBody {
        &self.body
    }

    pub fn edit_author(&self) -> UserId {
        self.edit_author
    }

    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// Pending → Approved, at most once.
    pub(crate) fn approve(&mut self) -> DomainResult<()> {
        if self.is_approved() {
            return Err(DomainError::InvalidState(format!(
                "revision {} is already approved",
                self.version
            )));
        }
        self.status = ApprovalStatus::Approved;
        Ok(())
    }

    pub(crate) fn stamp_version(&mut self, version: u32) {
        self.version = version;
    }
}
