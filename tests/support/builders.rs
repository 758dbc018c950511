// tests/support/builders.rs
use chrono::Utc;

use bulletin_core::domain::news::*;
use bulletin_core::domain::user::UserId;

pub struct RevisionBuilder {
    title: String,
    body: String,
    edit_author: i64,
}

impl RevisionBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test News".into(),
            body: "Test body".into(),
            edit_author: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn edit_author(mut self, id: i64) -> Self {
        self.edit_author = id;
        self
    }

    pub fn build(self) -> NewsRevision {
        NewsRevision::new(
            NewsTitle::new(&self.title).unwrap(),
            NewsSlug::new(slug::slugify(&self.title)).unwrap(),
            NewsBody::new(self.body).unwrap(),
            UserId::new(self.edit_author).unwrap(),
            Utc::now(),
        )
    }
}

pub struct NewsBuilder {
    id: i64,
    author: i64,
    title: String,
}

impl NewsBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            author: 1,
            title: "Test News".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author: i64) -> Self {
        self.author = author;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> NewsItem {
        let revision = RevisionBuilder::new()
            .title(self.title)
            .edit_author(self.author)
            .build();
        NewsItem::create(
            NewsId::new(self.id).unwrap(),
            revision,
            UserId::new(self.author).unwrap(),
            Utc::now(),
        )
        .unwrap()
    }
}
