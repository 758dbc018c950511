use super::{NewsCommandService, capability::ensure_moderator};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{news::NewsId, user::Viewer},
};

pub struct RemoveNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    /// One-way removal from public view. The item keeps its state and stays
    /// reachable through the moderator preview rules.
    pub async fn remove_news(
        &self,
        actor: &Viewer,
        command: RemoveNewsCommand,
    ) -> ApplicationResult<()> {
        ensure_moderator(actor)?;

        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        item.hide(actor.id, self.clock.now());
        self.write_repo.save(&item).await?;

        tracing::info!(news_id = command.id, "news item removed from view");
        Ok(())
    }
}
