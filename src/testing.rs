//! In-process stand-ins for the browser: a renderer that records calls and a
//! scheduler driven by a virtual clock. Used by unit and integration tests.
use std::collections::BTreeMap;

use rand::Rng;

use crate::catalog::{CategoryKey, SuggestionRecord};
use crate::controller::{DisplayController, Renderer, Resolution, Scheduler, TimerHandle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCall {
    Pending(String),
    Result { title: String, twist: Option<String> },
    ActiveCategory(CategoryKey),
    Celebration,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn results(&self) -> impl Iterator<Item = &RenderCall> {
        self.calls.iter().filter(|c| matches!(c, RenderCall::Result { .. }))
    }
}

impl Renderer for RecordingRenderer {
    fn show_pending(&mut self, message: &str) {
        self.calls.push(RenderCall::Pending(message.to_string()));
    }

    fn show_result(&mut self, suggestion: &SuggestionRecord, twist: Option<&str>) {
        self.calls.push(RenderCall::Result {
            title: suggestion.title.to_string(),
            twist: twist.map(str::to_string),
        });
    }

    fn set_active_category_indicator(&mut self, category: CategoryKey) {
        self.calls.push(RenderCall::ActiveCategory(category));
    }

    fn fire_celebration_effect(&mut self) {
        self.calls.push(RenderCall::Celebration);
    }
}

/// Scheduler over a virtual millisecond clock. Nothing fires until
/// [`ManualScheduler::advance`] moves time past a task's due time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<u64, u64>, // handle id -> due time
    cancelled: Vec<TimerHandle>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn due_at(&self, handle: TimerHandle) -> Option<u64> {
        self.pending.get(&handle.id()).copied()
    }

    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Move the clock forward and return the tasks that came due, earliest first.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerHandle> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<(u64, u64)> = self
            .pending
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&id, &at)| (at, id))
            .collect();
        due.sort_unstable();
        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| TimerHandle::new(id)).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay_ms: u32) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle.id(), self.now_ms + u64::from(delay_ms));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.pending.remove(&handle.id()).is_some() {
            self.cancelled.push(handle);
        }
    }
}

impl<R: Renderer, G: Rng> DisplayController<R, ManualScheduler, G> {
    /// Advance virtual time and deliver every due task to the controller, the
    /// way the browser event loop would.
    pub fn advance(&mut self, ms: u64) -> Vec<Resolution> {
        let fired = self.scheduler_mut().advance(ms);
        fired
            .into_iter()
            .filter_map(|handle| self.on_timer_fired(handle))
            .collect()
    }
}
