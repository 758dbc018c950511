use super::NewsQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsId, user::Viewer},
};

impl NewsQueryService {
    /// The comment thread as the given viewer may see it, in insertion
    /// order. Each comment applies its own visibility predicate.
    pub async fn visible_comments(
        &self,
        viewer: Option<&Viewer>,
        id: i64,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let id = NewsId::new(id)?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        Ok(item
            .visible_comments_for(viewer)
            .into_iter()
            .map(CommentDto::from)
            .collect())
    }
}
