use super::NewsCommandService;
use crate::{
    application::{
        dto::SubmitEditResult,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{NewsBody, NewsId, NewsRevision, NewsTitle},
        user::Viewer,
    },
};

pub struct SubmitEditCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl NewsCommandService {
    /// Submit a new revision of an existing item. The revision always joins
    /// the history; the injected policy decides whether it also becomes the
    /// current content or waits for a moderator.
    pub async fn submit_edit(
        &self,
        actor: &Viewer,
        command: SubmitEditCommand,
    ) -> ApplicationResult<SubmitEditResult> {
        let id = NewsId::new(command.id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let title = NewsTitle::new(command.title)?;
        let body = NewsBody::new(command.body)?;
        let slug = self
            .slug_service
            .generate_unique_slug(&title, item.id())
            .await?;

        let now = self.clock.now();
        let revision = NewsRevision::new(title, slug, body, actor.id, now);
        let outcome = item.submit_edit(revision, self.policy.as_ref(), now)?;
        self.write_repo.save(&item).await?;

        tracing::info!(
            news_id = command.id,
            ?outcome,
            "edit submitted"
        );
        Ok(SubmitEditResult {
            news: (&item).into(),
            outcome,
        })
    }
}
