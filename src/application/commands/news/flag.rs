use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{Flag, NewsId},
        user::Viewer,
    },
};

pub struct FlagNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    /// The check-then-act guard lives here: `FlagSet::add` itself is
    /// append-only and does not deduplicate.
    pub async fn flag_news(
        &self,
        actor: &Viewer,
        command: FlagNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        if item.flagged_by(actor.id) {
            return Err(ApplicationError::conflict("already flagged by this user"));
        }
        item.add_flag(Flag::new(actor.id, self.clock.now()));
        self.write_repo.save(&item).await?;

        tracing::info!(news_id = command.id, "news item flagged");
        Ok((&item).into())
    }
}
