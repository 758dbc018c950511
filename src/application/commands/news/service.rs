// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{moderation::ApprovalPolicy, time::Clock},
    domain::news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) slug_service: Arc<NewsSlugService>,
    pub(super) policy: Arc<dyn ApprovalPolicy>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        slug_service: Arc<NewsSlugService>,
        policy: Arc<dyn ApprovalPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            policy,
            clock,
        }
    }
}
