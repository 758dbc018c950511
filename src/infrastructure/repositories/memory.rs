use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::entity::NewsItem;
use crate::domain::news::repository::{NewsReadRepository, NewsWriteRepository};
use crate::domain::news::value_objects::{NewsId, NewsSlug};
use async_trait::async_trait;

/// In-memory repository. Each `save` replaces the stored aggregate with a
/// clone in one mutex-guarded step, which is the all-or-nothing unit the
/// domain assumes; loads hand out clones, so callers mutate a private copy
/// and nothing is visible until they save.
#[derive(Default)]
pub struct InMemoryNewsRepository {
    items: Mutex<HashMap<i64, NewsItem>>,
    next_id: AtomicI64,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<i64, NewsItem>>> {
        self.items
            .lock()
            .map_err(|_| DomainError::Persistence("news store mutex poisoned".into()))
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepository {
    async fn allocate_id(&self) -> DomainResult<NewsId> {
        NewsId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn save(&self, item: &NewsItem) -> DomainResult<()> {
        let mut items = self.lock()?;
        items.insert(item.id().into(), item.clone());
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsItem>> {
        let items = self.lock()?;
        Ok(items.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<NewsItem>> {
        let items = self.lock()?;
        Ok(items.values().find(|item| item.slug() == slug).cloned())
    }
}
