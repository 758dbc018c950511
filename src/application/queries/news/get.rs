use super::NewsQueryService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{NewsId, NewsItem, NewsSlug},
        user::Viewer,
    },
};

impl NewsQueryService {
    /// Fetch by id, applying the visibility rules: a removed item surfaces
    /// as not-found unless the viewer passes the moderator-preview
    /// predicate. Hidden-ness is not leaked to ordinary viewers.
    pub async fn get_news(&self, viewer: Option<&Viewer>, id: i64) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        Self::checked(viewer, item)
    }

    pub async fn get_news_by_slug(
        &self,
        viewer: Option<&Viewer>,
        slug: &str,
    ) -> ApplicationResult<NewsDto> {
        let slug = NewsSlug::new(slug)?;
        let item = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        Self::checked(viewer, item)
    }

    fn checked(viewer: Option<&Viewer>, item: NewsItem) -> ApplicationResult<NewsDto> {
        // the capability gate is ours; the author exclusion is the domain's
        let preview = viewer.is_some_and(|v| v.moderator)
            && item.is_visible_for_moderator_and_not_author(viewer);
        if item.is_visible() || preview {
            Ok((&item).into())
        } else {
            Err(ApplicationError::not_found("news item not found"))
        }
    }
}
