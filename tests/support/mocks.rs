// tests/support/mocks.rs
use std::sync::Arc;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use bulletin_core::application::ports::moderation::ApprovalPolicy;
use bulletin_core::application::ports::time::Clock;
use bulletin_core::application::services::ApplicationServices;
use bulletin_core::domain::news::{
    NewsItem, NewsReadRepository, NewsRevision, NewsWriteRepository,
};
use bulletin_core::infrastructure::{DefaultSlugGenerator, InMemoryNewsRepository};

/// Deterministic clock that advances by one second per `now` call.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        self.start + Duration::seconds(*ticks)
    }
}

pub struct AllowAllPolicy;

impl ApprovalPolicy for AllowAllPolicy {
    fn may_auto_approve(&self, _item: &NewsItem, _revision: &NewsRevision) -> bool {
        true
    }
}

pub struct DenyAllPolicy;

impl ApprovalPolicy for DenyAllPolicy {
    fn may_auto_approve(&self, _item: &NewsItem, _revision: &NewsRevision) -> bool {
        false
    }
}

/// Auto-approves edits made by the item's own author, queues the rest —
/// the shape a real trust policy takes.
pub struct AuthorOnlyPolicy;

impl ApprovalPolicy for AuthorOnlyPolicy {
    fn may_auto_approve(&self, item: &NewsItem, revision: &NewsRevision) -> bool {
        revision.edit_author() == item.author()
    }
}

/// Full service stack over the in-memory repository.
pub fn services_with_policy(policy: Arc<dyn ApprovalPolicy>) -> ApplicationServices {
    let repo = Arc::new(InMemoryNewsRepository::new());
    let write_repo: Arc<dyn NewsWriteRepository> = repo.clone();
    let read_repo: Arc<dyn NewsReadRepository> = repo;
    ApplicationServices::new(
        write_repo,
        read_repo,
        policy,
        Arc::new(DefaultSlugGenerator),
        Arc::new(SteppingClock::new(Utc::now())),
    )
}
