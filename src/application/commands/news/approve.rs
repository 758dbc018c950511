use super::{NewsCommandService, capability::ensure_moderator};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsId, user::Viewer},
};

pub struct ApproveRevisionCommand {
    pub id: i64,
    pub version: u32,
}

impl NewsCommandService {
    /// Moderator approval of a queued revision: it becomes the current
    /// content and the touch metadata moves to its edit author.
    pub async fn approve_revision(
        &self,
        actor: &Viewer,
        command: ApproveRevisionCommand,
    ) -> ApplicationResult<NewsDto> {
        ensure_moderator(actor)?;

        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        item.approve_revision(command.version, self.clock.now())?;
        self.write_repo.save(&item).await?;

        tracing::info!(
            news_id = command.id,
            version = command.version,
            "pending revision approved"
        );
        Ok((&item).into())
    }
}
