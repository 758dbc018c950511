// src/domain/news/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::news::repository::NewsReadRepository;
use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsTitle};

/// Domain service responsible for producing unique slugs for news items.
/// The slug is derived deterministically from the title; a title with no
/// sluggable characters falls back to the item id, and collisions with
/// another item's current slug get a numeric suffix. The item's own current
/// slug never counts as a collision, so re-slugging on an edit is stable.
pub struct NewsSlugService {
    read_repo: Arc<dyn NewsReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl NewsSlugService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &NewsTitle,
        id: NewsId,
    ) -> DomainResult<NewsSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("news-{}", i64::from(id))
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = NewsSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if existing.id() == id => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
