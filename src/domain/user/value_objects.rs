// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// The identity an operation is performed or observed as. Users and their
/// roles live in an external directory; the core only needs to know who the
/// viewer is and whether they carry the moderator capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub moderator: bool,
}

impl Viewer {
    pub fn user(id: UserId) -> Self {
        Self {
            id,
            moderator: false,
        }
    }

    pub fn moderator(id: UserId) -> Self {
        Self {
            id,
            moderator: true,
        }
    }

    pub fn is_author_of(&self, author: UserId) -> bool {
        self.id == author
    }
}
