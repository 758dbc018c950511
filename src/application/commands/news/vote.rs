use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{NewsId, Vote, VoteDirection},
        user::Viewer,
    },
};

/// `direction: None` retracts the actor's active vote, if any.
pub struct CastVoteCommand {
    pub id: i64,
    pub direction: Option<VoteDirection>,
}

impl NewsCommandService {
    pub async fn cast_vote(
        &self,
        actor: &Viewer,
        command: CastVoteCommand,
    ) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let previous = item.active_vote(actor.id).cloned();
        let current = command
            .direction
            .map(|direction| Vote::new(actor.id, direction, self.clock.now()));
        item.cast_vote(previous.as_ref(), current);
        self.write_repo.save(&item).await?;

        tracing::debug!(
            news_id = command.id,
            tally = item.vote_tally(),
            "vote substituted"
        );
        Ok((&item).into())
    }
}
