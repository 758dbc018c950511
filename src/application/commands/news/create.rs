use super::NewsCommandService;
use crate::{
    application::{dto::NewsDto, error::ApplicationResult},
    domain::{
        news::{NewsBody, NewsItem, NewsRevision, NewsTitle},
        user::Viewer,
    },
};

pub struct CreateNewsCommand {
    pub title: String,
    pub body: String,
}

impl NewsCommandService {
    pub async fn create_news(
        &self,
        actor: &Viewer,
        command: CreateNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let title = NewsTitle::new(command.title)?;
        let body = NewsBody::new(command.body)?;
        let id = self.write_repo.allocate_id().await?;
        let slug = self.slug_service.generate_unique_slug(&title, id).await?;

        let now = self.clock.now();
        let revision = NewsRevision::new(title, slug, body, actor.id, now);
        let item = NewsItem::create(id, revision, actor.id, now)?;
        self.write_repo.save(&item).await?;

        tracing::info!(news_id = i64::from(item.id()), "news item created");
        Ok((&item).into())
    }
}
