use super::NewsCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::news::NewsId;

impl NewsCommandService {
    /// Bump the view counter and return the new count. A mutation rather
    /// than a query: the caller's transaction boundary makes the
    /// read-modify-write atomic.
    pub async fn record_view(&self, id: i64) -> ApplicationResult<u64> {
        let id = NewsId::new(id)?;
        let mut item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        item.record_view();
        self.write_repo.save(&item).await?;
        Ok(item.views())
    }
}
