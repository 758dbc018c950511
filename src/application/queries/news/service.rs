// src/application/queries/news/service.rs
use std::sync::Arc;

use crate::domain::news::NewsReadRepository;

pub struct NewsQueryService {
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
}

impl NewsQueryService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>) -> Self {
        Self { read_repo }
    }
}
