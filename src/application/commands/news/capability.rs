// src/application/commands/news/capability.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::Viewer;

pub(super) fn ensure_moderator(actor: &Viewer) -> ApplicationResult<()> {
    if actor.moderator {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "moderator capability required",
        ))
    }
}
