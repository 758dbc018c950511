// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::news::NewsCommandService,
        ports::{moderation::ApprovalPolicy, time::Clock, util::SlugGenerator},
        queries::news::NewsQueryService,
    },
    domain::news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
};

/// Wiring bundle: builds the command and query services from the injected
/// ports. This is the crate's configuration surface — embedders pass their
/// own repository, policy, clock, and slug generator.
pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
}

impl ApplicationServices {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        policy: Arc<dyn ApprovalPolicy>,
        slug_generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_service = Arc::new(NewsSlugService::new(
            Arc::clone(&read_repo),
            slug_generator,
        ));
        let news_commands = Arc::new(NewsCommandService::new(
            write_repo,
            Arc::clone(&read_repo),
            slug_service,
            policy,
            clock,
        ));
        let news_queries = Arc::new(NewsQueryService::new(read_repo));
        Self {
            news_commands,
            news_queries,
        }
    }
}
