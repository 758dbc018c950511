use crate::application::ports::moderation::ApprovalPolicy;
use crate::domain::errors::DomainResult;
use crate::domain::news::entity::NewsItem;
use crate::domain::news::revision::NewsRevision;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    NoNeedToApprove,
    PendingApproval,
}

/// Stateless orchestrator for edit submissions. Consults the injected
/// policy once per submission: approved revisions are installed as current,
/// rejected ones are queued in history as pending. This and the moderator
/// approval path are the only places the current pointer moves.
pub struct EditWorkflow<'a> {
    policy: &'a dyn ApprovalPolicy,
}

impl<'a> EditWorkflow<'a> {
    pub fn new(policy: &'a dyn ApprovalPolicy) -> Self {
        Self { policy }
    }

    pub fn update(
        &self,
        item: &mut NewsItem,
        mut revision: NewsRevision,
        now: DateTime<Utc>,
    ) -> DomainResult<EditOutcome> {
        if self.policy.may_auto_approve(item, &revision) {
            revision.approve()?;
            item.install_approved(revision, now);
            Ok(EditOutcome::NoNeedToApprove)
        } else {
            item.enqueue_pending(revision);
            Ok(EditOutcome::PendingApproval)
        }
    }
}
