use crate::view::Shared;
use std::collections::VecDeque;

/// How many entries `recentActivity` keeps.
pub const ACTIVITY_LIMIT: usize = 5;

/// The `recentActivity` list: newest entry first, bounded.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Shared<VecDeque<String>>,
    limit: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_limit(ACTIVITY_LIMIT)
    }
}

impl ActivityLog {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Shared::default(),
            limit,
        }
    }

    pub fn push(&self, message: impl Into<String>) {
        let message = message.into();
        let limit = self.limit;
        self.entries.update(|entries| {
            entries.push_front(message);
            entries.truncate(limit);
        });
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.with(|entries| entries.iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.entries.with(VecDeque::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
