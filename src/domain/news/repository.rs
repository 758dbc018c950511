use crate::domain::errors::DomainResult;
use crate::domain::news::entity::NewsItem;
use crate::domain::news::value_objects::{NewsId, NewsSlug};
use async_trait::async_trait;

/// Persistence port, write half. `save` persists the whole aggregate —
/// history, ledger, flags, comments, moderation state — as one unit; the
/// implementation decides atomicity and the core assumes all-or-nothing.
/// Identity assignment stays a persistence concern, so the port hands out
/// ids and `NewsItem::create` stays a pure domain operation.
#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn allocate_id(&self) -> DomainResult<NewsId>;
    async fn save(&self, item: &NewsItem) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsItem>>;
    /// Lookup by the current revision's slug.
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<NewsItem>>;
}
