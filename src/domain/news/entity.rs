// src/domain/news/entity.rs
use crate::application::ports::moderation::ApprovalPolicy;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::comments::{Comment, CommentId, CommentThread};
use crate::domain::news::flags::{Flag, FlagSet};
use crate::domain::news::moderation::ModerationState;
use crate::domain::news::revision::NewsRevision;
use crate::domain::news::value_objects::{CommentBody, NewsId, NewsSlug};
use crate::domain::news::votes::{Vote, VoteLedger};
use crate::domain::news::workflow::{EditOutcome, EditWorkflow};
use crate::domain::user::{UserId, Viewer};
use chrono::{DateTime, Utc};

/// Aggregate root for one moderated, versioned news item.
///
/// `history` is append-only and always contains the current revision; the
/// running `vote_tally` is maintained exclusively through ledger
/// substitution deltas. Every operation is a synchronous in-memory state
/// transition — callers serialize access per item and persist the whole
/// aggregate as one unit.
#[derive(Debug, Clone)]
pub struct NewsItem {
    id: NewsId,
    author: UserId,
    current: usize,
    history: Vec<NewsRevision>,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
    last_touched_by: Option<UserId>,
    views: u64,
    vote_tally: i64,
    votes: VoteLedger,
    flags: FlagSet,
    comments: CommentThread,
    moderation: ModerationState,
}

impl NewsItem {
    /// The initial revision bypasses the approval queue: it is installed
    /// approved, as the item's first and current revision. Passing a
    /// revision that was already approved elsewhere is rejected.
    pub fn create(
        id: NewsId,
        mut initial: NewsRevision,
        author: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        initial.approve()?;
        initial.stamp_version(1);
        Ok(Self {
            id,
            author,
            current: 0,
            history: vec![initial],
            created_at: now,
            last_updated_at: now,
            last_touched_by: None,
            views: 0,
            vote_tally: 0,
            votes: VoteLedger::new(),
            flags: FlagSet::new(),
            comments: CommentThread::new(),
            moderation: ModerationState::new(),
        })
    }

    pub fn id(&self) -> NewsId {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn current_revision(&self) -> &NewsRevision {
        &self.history[self.current]
    }

    pub fn slug(&self) -> &NewsSlug {
        self.current_revision().slug()
    }

    pub fn history(&self) -> &[NewsRevision] {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }

    pub fn last_touched_by(&self) -> Option<UserId> {
        self.last_touched_by
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn vote_tally(&self) -> i64 {
        self.vote_tally
    }

    pub fn votes(&self) -> &VoteLedger {
        &self.votes
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn comments(&self) -> &CommentThread {
        &self.comments
    }

    // --- edit workflow -----------------------------------------------------

    /// Submit a new revision. The injected policy decides between immediate
    /// installation and the pending queue; either way the revision joins the
    /// history.
    pub fn submit_edit(
        &mut self,
        revision: NewsRevision,
        policy: &dyn ApprovalPolicy,
        now: DateTime<Utc>,
    ) -> DomainResult<EditOutcome> {
        EditWorkflow::new(policy).update(self, revision, now)
    }

    /// Moderator approval of a queued revision, addressed by version.
    /// Rejects versions outside this item's history and revisions that are
    /// already approved. On success the revision becomes current and the
    /// touch metadata moves to its edit author.
    pub fn approve_revision(&mut self, version: u32, now: DateTime<Utc>) -> DomainResult<()> {
        let index = self
            .history
            .iter()
            .position(|revision| revision.version() == version)
            .ok_or_else(|| {
                DomainError::InvalidState(format!(
                    "revision {version} does not belong to news {}",
                    i64::from(self.id)
                ))
            })?;
        self.history[index].approve()?;
        let edit_author = self.history[index].edit_author();
        self.current = index;
        self.touched_by(edit_author, now);
        Ok(())
    }

    pub fn is_edited(&self) -> bool {
        self.history.len() > 1
    }

    pub fn has_pending_edits(&self) -> bool {
        self.history.iter().any(NewsRevision::is_pending)
    }

    pub(crate) fn install_approved(&mut self, revision: NewsRevision, now: DateTime<Utc>) {
        let edit_author = revision.edit_author();
        self.append(revision);
        self.current = self.history.len() - 1;
        self.touched_by(edit_author, now);
    }

    pub(crate) fn enqueue_pending(&mut self, revision: NewsRevision) {
        self.append(revision);
    }

    fn append(&mut self, mut revision: NewsRevision) {
        revision.stamp_version(self.history.len() as u32 + 1);
        self.history.push(revision);
    }

    fn touched_by(&mut self, user: UserId, now: DateTime<Utc>) {
        self.last_touched_by = Some(user);
        self.last_updated_at = now;
    }

    // --- votes -------------------------------------------------------------

    /// Substitute `previous` with `current` in the ledger and fold the delta
    /// into the running tally. First votes pass `previous = None`,
    /// retractions pass `current = None`.
    pub fn cast_vote(&mut self, previous: Option<&Vote>, current: Option<Vote>) {
        self.vote_tally += self.votes.substitute(previous, current);
    }

    pub fn active_vote(&self, voter: UserId) -> Option<&Vote> {
        self.votes.active_vote(voter)
    }

    // --- flags -------------------------------------------------------------

    pub fn flagged_by(&self, user: UserId) -> bool {
        self.flags.contains(user)
    }

    /// Appends unconditionally. Callers check `flagged_by` first; see
    /// `FlagSet` for the duplicate behavior when they do not.
    pub fn add_flag(&mut self, flag: Flag) {
        self.flags.add(flag);
    }

    // --- visibility --------------------------------------------------------

    pub fn hide(&mut self, moderator: UserId, now: DateTime<Utc>) {
        self.moderation.remove(moderator, now);
    }

    pub fn is_visible(&self) -> bool {
        self.moderation.is_visible()
    }

    /// Moderator preview of hidden content. Always false for the author:
    /// authors do not get their own hidden items back through the moderator
    /// view.
    pub fn is_visible_for_moderator_and_not_author(&self, viewer: Option<&Viewer>) -> bool {
        !self.is_visible() && viewer.is_some_and(|v| !v.is_author_of(self.author))
    }

    pub fn moderation(&self) -> &ModerationState {
        &self.moderation
    }

    // --- comments ----------------------------------------------------------

    pub fn add_comment(
        &mut self,
        author: UserId,
        body: CommentBody,
        now: DateTime<Utc>,
    ) -> &Comment {
        self.comments.add(author, body, now)
    }

    pub fn visible_comments_for(&self, viewer: Option<&Viewer>) -> Vec<&Comment> {
        self.comments.visible_for(viewer)
    }

    pub fn hide_comment(
        &mut self,
        id: CommentId,
        moderator: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let comment = self.comments.get_mut(id).ok_or_else(|| {
            DomainError::NotFound(format!("comment {} not found", id.0))
        })?;
        comment.hide(moderator, now);
        Ok(())
    }

    // --- views -------------------------------------------------------------

    pub fn record_view(&mut self) {
        self.views += 1;
    }
}
