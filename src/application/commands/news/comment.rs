use super::{NewsCommandService, capability::ensure_moderator};
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{CommentBody, CommentId, NewsId},
        user::Viewer,
    },
};

pub struct AddCommentCommand {
    pub id: i64,
    pub body: String,
}

pub struct HideCommentCommand {
    pub id: i64,
    pub comment_id: u64,
}

impl NewsCommandService {
    pub async fn add_comment(
        &self,
        actor: &Viewer,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let body = CommentBody::new(command.body)?;
        let dto = CommentDto::from(item.add_comment(actor.id, body, self.clock.now()));
        self.write_repo.save(&item).await?;
        Ok(dto)
    }

    pub async fn hide_comment(
        &self,
        actor: &Viewer,
        command: HideCommentCommand,
    ) -> ApplicationResult<()> {
        ensure_moderator(actor)?;

        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        item.hide_comment(CommentId(command.comment_id), actor.id, self.clock.now())?;
        self.write_repo.save(&item).await?;

        tracing::info!(
            news_id = command.id,
            comment_id = command.comment_id,
            "comment hidden"
        );
        Ok(())
    }
}
