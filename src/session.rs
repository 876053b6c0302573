//! Mutable per-page state, owned by the display controller.
use crate::catalog::{CategoryKey, SuggestionId};
use crate::controller::TimerHandle;
use crate::history::{DEFAULT_HISTORY_CAPACITY, RecentPicks};

/// Where the two-phase display currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A pick was made and its reveal is scheduled on `timer`.
    Pending { pick: SuggestionId, timer: TimerHandle },
}

#[derive(Clone, Debug)]
pub struct SessionState {
    pub active_category: CategoryKey,
    pub recent_picks: RecentPicks,
    pub phase: Phase,
}

impl SessionState {
    pub fn new(default_category: CategoryKey) -> Self {
        Self {
            active_category: default_category,
            recent_picks: RecentPicks::with_capacity(DEFAULT_HISTORY_CAPACITY),
            phase: Phase::Idle,
        }
    }

    /// True from the moment a pick starts until its reveal runs.
    pub fn busy(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(CategoryKey::default())
    }
}
