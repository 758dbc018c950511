mod approve;
mod capability;
mod comment;
mod create;
mod flag;
mod remove;
mod service;
mod submit_edit;
mod view;
mod vote;

pub use approve::ApproveRevisionCommand;
pub use comment::{AddCommentCommand, HideCommentCommand};
pub use create::CreateNewsCommand;
pub use flag::FlagNewsCommand;
pub use remove::RemoveNewsCommand;
pub use service::NewsCommandService;
pub use submit_edit::SubmitEditCommand;
pub use vote::CastVoteCommand;
