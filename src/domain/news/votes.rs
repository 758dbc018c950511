use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn weight(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter: UserId,
    pub direction: VoteDirection,
    pub cast_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(voter: UserId, direction: VoteDirection, cast_at: DateTime<Utc>) -> Self {
        Self {
            voter,
            direction,
            cast_at,
        }
    }

    pub fn weight(&self) -> i64 {
        self.direction.weight()
    }
}

/// At most one active vote per voter. The ledger never exposes a way to
/// store a second vote for the same voter; all changes go through
/// `substitute`, which reports the signed tally delta for the caller to
/// apply.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    by_voter: HashMap<UserId, Vote>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `previous` with `current` and return the tally delta:
    /// first vote (`previous` absent), retraction (`current` absent), or a
    /// change of direction. Both absent is a no-op with delta zero.
    pub fn substitute(&mut self, previous: Option<&Vote>, current: Option<Vote>) -> i64 {
        let mut delta = 0;
        if let Some(prev) = previous {
            self.by_voter.remove(&prev.voter);
            delta -= prev.weight();
        }
        if let Some(cur) = current {
            delta += cur.weight();
            self.by_voter.insert(cur.voter, cur);
        }
        delta
    }

    pub fn active_vote(&self, voter: UserId) -> Option<&Vote> {
        self.by_voter.get(&voter)
    }

    pub fn len(&self) -> usize {
        self.by_voter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_voter.is_empty()
    }

    /// Sum of the active weights. The aggregate keeps its own running tally;
    /// this exists so callers and tests can check the two never diverge.
    pub fn tally(&self) -> i64 {
        self.by_voter.values().map(Vote::weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    fn vote(id: i64, direction: VoteDirection) -> Vote {
        Vote::new(voter(id), direction, Utc::now())
    }

    #[test]
    fn first_vote_inserts_with_its_weight() {
        let mut ledger = VoteLedger::new();
        let delta = ledger.substitute(None, Some(vote(1, VoteDirection::Up)));
        assert_eq!(delta, 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.tally(), 1);
    }

    #[test]
    fn retraction_removes_and_negates() {
        let mut ledger = VoteLedger::new();
        let v = vote(1, VoteDirection::Down);
        ledger.substitute(None, Some(v.clone()));
        let delta = ledger.substitute(Some(&v), None);
        assert_eq!(delta, 1);
        assert!(ledger.is_empty());
        assert_eq!(ledger.tally(), 0);
    }

    #[test]
    fn change_of_direction_replaces_and_reweights() {
        let mut ledger = VoteLedger::new();
        let up = vote(1, VoteDirection::Up);
        ledger.substitute(None, Some(up.clone()));
        let down = vote(1, VoteDirection::Down);
        let delta = ledger.substitute(Some(&up), Some(down));
        assert_eq!(delta, -2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.tally(), -1);
    }

    #[test]
    fn unchanged_vote_is_a_zero_delta() {
        let mut ledger = VoteLedger::new();
        let v = vote(1, VoteDirection::Up);
        ledger.substitute(None, Some(v.clone()));
        let delta = ledger.substitute(Some(&v), Some(v.clone()));
        assert_eq!(delta, 0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.active_vote(voter(1)), Some(&v));
    }

    #[test]
    fn both_absent_is_a_no_op() {
        let mut ledger = VoteLedger::new();
        assert_eq!(ledger.substitute(None, None), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn one_active_vote_per_voter_across_sequences() {
        let mut ledger = VoteLedger::new();
        let mut tally = 0;
        let mut last: Option<Vote> = None;
        for direction in [
            VoteDirection::Up,
            VoteDirection::Down,
            VoteDirection::Down,
            VoteDirection::Up,
        ] {
            let next = vote(7, direction);
            tally += ledger.substitute(last.as_ref(), Some(next.clone()));
            last = Some(next);
            assert_eq!(ledger.len(), 1);
            assert_eq!(ledger.tally(), tally);
        }
    }

    #[test]
    fn cast_then_retract_round_trips_the_tally() {
        let mut ledger = VoteLedger::new();
        ledger.substitute(None, Some(vote(1, VoteDirection::Up)));
        let before = ledger.tally();
        let v = vote(2, VoteDirection::Down);
        let cast = ledger.substitute(None, Some(v.clone()));
        let retract = ledger.substitute(Some(&v), None);
        assert_eq!(cast + retract, 0);
        assert_eq!(ledger.tally(), before);
    }
}
