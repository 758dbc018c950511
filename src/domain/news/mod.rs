pub mod comments;
pub mod entity;
pub mod flags;
pub mod moderation;
pub mod repository;
pub mod revision;
pub mod services;
pub mod value_objects;
pub mod votes;
pub mod workflow;

pub use comments::{Comment, CommentId, CommentThread};
pub use entity::NewsItem;
pub use flags::{Flag, FlagSet};
pub use moderation::ModerationState;
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use revision::{ApprovalStatus, NewsRevision};
pub use value_objects::{CommentBody, NewsBody, NewsId, NewsSlug, NewsTitle};
pub use votes::{Vote, VoteDirection, VoteLedger};
pub use workflow::{EditOutcome, EditWorkflow};
