use super::NewsQueryService;
use crate::{
    application::{
        dto::RevisionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsId, user::Viewer},
};

impl NewsQueryService {
    /// Revision history in submission order. Moderators and the item author
    /// see pending revisions too; everyone else sees approved ones only.
    pub async fn revision_history(
        &self,
        viewer: Option<&Viewer>,
        id: i64,
    ) -> ApplicationResult<Vec<RevisionDto>> {
        let id = NewsId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let privileged =
            viewer.is_some_and(|v| v.moderator || v.is_author_of(item.author()));
        let revisions = item
            .history()
            .iter()
            .filter(|revision| privileged || revision.is_approved())
            .map(RevisionDto::from)
            .collect();
        Ok(revisions)
    }

    pub async fn pending_revisions(&self, id: i64) -> ApplicationResult<Vec<RevisionDto>> {
        let id = NewsId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        Ok(item
            .history()
            .iter()
            .filter(|revision| revision.is_pending())
            .map(RevisionDto::from)
            .collect())
    }
}
