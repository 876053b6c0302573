//! Bounded FIFO of the most recent picks.
use std::collections::VecDeque;

use crate::catalog::SuggestionId;

pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

#[derive(Clone, Debug)]
pub struct RecentPicks {
    entries: VecDeque<SuggestionId>,
    capacity: usize,
}

impl Default for RecentPicks {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl RecentPicks {
    /// A capacity of 0 is clamped to 1 so the queue always remembers the last pick.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `id`, evicting the oldest entry once over capacity.
    pub fn push(&mut self, id: SuggestionId) {
        self.entries.push_back(id);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn contains(&self, id: &SuggestionId) -> bool {
        self.entries.contains(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SuggestionId> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&SuggestionId> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryKey;

    fn id(i: usize) -> SuggestionId {
        SuggestionId::new(CategoryKey::Chill, i)
    }

    #[test]
    fn fourth_push_evicts_the_first() {
        let mut recent = RecentPicks::default();
        for i in 0..4 {
            recent.push(id(i));
        }
        assert_eq!(recent.len(), 3);
        assert!(!recent.contains(&id(0)));
        let order: Vec<usize> = recent.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(recent.last(), Some(&id(3)));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut recent = RecentPicks::with_capacity(0);
        recent.push(id(1));
        recent.push(id(2));
        assert_eq!(recent.capacity(), 1);
        assert_eq!(recent.len(), 1);
        assert!(recent.contains(&id(2)));
    }
}
