use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub flagger: UserId,
    pub raised_at: DateTime<Utc>,
}

impl Flag {
    pub fn new(flagger: UserId, raised_at: DateTime<Utc>) -> Self {
        Self { flagger, raised_at }
    }
}

/// Append-only record of who reported the item. `add` does not deduplicate:
/// callers are expected to check `contains` first, and the flag command in
/// the application layer is the place that does. Skipping the check stores
/// a second entry for the same user.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    entries: Vec<Flag>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.entries.iter().any(|flag| flag.flagger == user)
    }

    pub fn add(&mut self, flag: Flag) {
        self.entries.push(flag);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.entries.iter()
    }
}
