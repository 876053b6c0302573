//! Two-phase display controller (pending -> resolved).
//!
//! A generate trigger picks immediately, records the pick in history, shows a
//! "thinking" view and schedules a single-shot reveal. Triggers that arrive
//! while a reveal is pending are dropped. Category switches are accepted in
//! any phase and never touch history or the pending reveal.
//!
//! Rendering and timers are injected through [`Renderer`] and [`Scheduler`] so
//! the state machine runs unchanged in the browser and in native tests.
use log::{debug, warn};
use rand::Rng;

use crate::catalog::{Catalog, CategoryKey, SuggestionId, SuggestionRecord};
use crate::config::PickerConfig;
use crate::error::ConfigurationError;
use crate::input::Command;
use crate::modifier;
use crate::selector;
use crate::session::{Phase, SessionState};

pub const THINKING_MESSAGES: &[&str] = &[
    "Checking the Tube...",
    "Consulting the weather...",
    "Asking a Londoner...",
    "Scanning the skyline...",
    "Checking pub opening hours...",
    "Looking for the best spots...",
    "Consulting the spirit of London...",
    "Planning your perfect moment...",
];

// --- Collaborator seams ------------------------------------------------------

/// Presentation side of the picker.
pub trait Renderer {
    fn show_pending(&mut self, message: &str);
    fn show_result(&mut self, suggestion: &SuggestionRecord, twist: Option<&str>);
    fn set_active_category_indicator(&mut self, category: CategoryKey);
    /// Cosmetic only; must not call back into the controller.
    fn fire_celebration_effect(&mut self);
}

/// Opaque id of a scheduled single-shot task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Single-shot timers. When a task fires, its owner must call
/// [`DisplayController::on_timer_fired`] with the returned handle.
pub trait Scheduler {
    fn schedule_once(&mut self, delay_ms: u32) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

// --- Outcomes ----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    Started { pick: SuggestionId, timer: TimerHandle },
    IgnoredBusy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub pick: SuggestionId,
    pub twist: Option<&'static str>,
}

// --- Controller --------------------------------------------------------------

pub struct DisplayController<R, S, G> {
    catalog: &'static Catalog,
    config: PickerConfig,
    session: SessionState,
    renderer: R,
    scheduler: S,
    rng: G,
}

impl<R: Renderer, S: Scheduler, G: Rng> DisplayController<R, S, G> {
    /// Validates catalog and config up front; a controller that exists can
    /// always pick.
    pub fn new(
        catalog: &'static Catalog,
        config: PickerConfig,
        renderer: R,
        scheduler: S,
        rng: G,
    ) -> Result<Self, ConfigurationError> {
        catalog.validate()?;
        config.validate()?;
        let session = SessionState::new(config.default_category);
        let mut controller = Self {
            catalog,
            config,
            session,
            renderer,
            scheduler,
            rng,
        };
        let initial = controller.session.active_category;
        controller.renderer.set_active_category_indicator(initial);
        Ok(controller)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), ConfigurationError> {
        match command {
            Command::Generate => self.on_generate_requested().map(|_| ()),
            Command::SelectCategory(category) => {
                self.on_category_requested(category);
                Ok(())
            }
        }
    }

    /// Idle -> Pending. No-op while a reveal is pending.
    pub fn on_generate_requested(&mut self) -> Result<GenerateOutcome, ConfigurationError> {
        if self.session.busy() {
            debug!("generate ignored: reveal already pending");
            return Ok(GenerateOutcome::IgnoredBusy);
        }

        let category = self.session.active_category;
        let selection = selector::pick(
            self.catalog,
            category,
            &self.session.recent_picks,
            &mut self.rng,
        )?;
        if selection.history_reset {
            debug!("history covers every '{category}' entry, resetting");
            self.session.recent_picks.clear();
        }
        self.session.recent_picks.push(selection.id);

        let message = THINKING_MESSAGES[self.rng.gen_range(0..THINKING_MESSAGES.len())];
        self.renderer.show_pending(message);
        let timer = self.scheduler.schedule_once(self.config.thinking_delay_ms);
        self.session.phase = Phase::Pending {
            pick: selection.id,
            timer,
        };
        debug!(
            "picked {category}#{} (history {}), reveal in {} ms",
            selection.id.index,
            self.session.recent_picks.len(),
            self.config.thinking_delay_ms
        );
        Ok(GenerateOutcome::Started {
            pick: selection.id,
            timer,
        })
    }

    /// Pending -> Idle. Ignores handles that do not belong to the pending reveal.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> Option<Resolution> {
        let pick = match self.session.phase {
            Phase::Pending { pick, timer } if timer == handle => pick,
            _ => {
                warn!("stale timer {} fired, ignoring", handle.id());
                return None;
            }
        };

        let twist = modifier::maybe_modify(&mut self.rng, modifier::DEFAULT_TWIST_CHANCE);
        match self.catalog.get(pick) {
            Some(record) => {
                self.renderer.show_result(record, twist);
                self.renderer.fire_celebration_effect();
            }
            // Ids come from the validated catalog, so this only trips on a
            // programming error.
            None => warn!("pending pick {pick:?} is not in the catalog"),
        }
        self.session.phase = Phase::Idle;
        debug!("revealed {}#{} (twist: {})", pick.category, pick.index, twist.is_some());
        Some(Resolution { pick, twist })
    }

    /// Allowed in any phase. Leaves history and any pending reveal alone.
    pub fn on_category_requested(&mut self, category: CategoryKey) {
        self.session.active_category = category;
        self.renderer.set_active_category_indicator(category);
        debug!("category -> {category}");
    }

    /// Cancels an in-flight reveal. Only used when the page shell shuts down.
    pub fn teardown(&mut self) {
        if let Phase::Pending { timer, .. } = self.session.phase {
            self.scheduler.cancel(timer);
            self.session.phase = Phase::Idle;
            debug!("teardown cancelled timer {}", timer.id());
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingRenderer, RenderCall};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestController = DisplayController<RecordingRenderer, ManualScheduler, StdRng>;

    fn controller(config: PickerConfig) -> TestController {
        DisplayController::new(
            Catalog::builtin(),
            config,
            RecordingRenderer::default(),
            ManualScheduler::default(),
            StdRng::seed_from_u64(42),
        )
        .unwrap()
    }

    #[test]
    fn construction_marks_default_category() {
        let c = controller(PickerConfig::default());
        assert_eq!(
            c.renderer().calls(),
            &[RenderCall::ActiveCategory(CategoryKey::Chill)]
        );
        assert!(!c.session().busy());
    }

    #[test]
    fn generate_enters_pending_and_records_history() {
        let mut c = controller(PickerConfig::default());
        let outcome = c.on_generate_requested().unwrap();
        let GenerateOutcome::Started { pick, timer } = outcome else {
            panic!("expected a started pick, got {outcome:?}");
        };
        assert!(c.session().busy());
        assert_eq!(c.session().recent_picks.last(), Some(&pick));
        assert_eq!(c.scheduler().pending_count(), 1);
        assert_eq!(c.scheduler().due_at(timer), Some(1000));
        assert!(matches!(
            c.renderer().calls().last(),
            Some(RenderCall::Pending(msg)) if THINKING_MESSAGES.contains(&msg.as_str())
        ));
    }

    #[test]
    fn busy_trigger_changes_nothing() {
        let mut c = controller(PickerConfig::default());
        c.on_generate_requested().unwrap();
        let before = (
            c.session().active_category,
            c.session().recent_picks.iter().copied().collect::<Vec<_>>(),
            c.session().phase,
        );
        let calls_before = c.renderer().calls().len();

        assert_eq!(c.on_generate_requested().unwrap(), GenerateOutcome::IgnoredBusy);

        let after = (
            c.session().active_category,
            c.session().recent_picks.iter().copied().collect::<Vec<_>>(),
            c.session().phase,
        );
        assert_eq!(before, after);
        assert_eq!(c.renderer().calls().len(), calls_before);
        assert_eq!(c.scheduler().pending_count(), 1);
    }

    #[test]
    fn timer_resolves_and_returns_to_idle() {
        let mut c = controller(PickerConfig::default());
        let GenerateOutcome::Started { pick, timer } = c.on_generate_requested().unwrap() else {
            panic!("expected a started pick");
        };
        let resolution = c.on_timer_fired(timer).unwrap();
        assert_eq!(resolution.pick, pick);
        assert!(!c.session().busy());

        let calls = c.renderer().calls();
        let n = calls.len();
        let record = c.catalog().get(pick).unwrap();
        assert_eq!(
            calls[n - 2],
            RenderCall::Result {
                title: record.title.to_string(),
                twist: resolution.twist.map(str::to_string),
            }
        );
        assert_eq!(calls[n - 1], RenderCall::Celebration);
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut c = controller(PickerConfig::default());
        c.on_generate_requested().unwrap();
        assert!(c.on_timer_fired(TimerHandle::new(9_999)).is_none());
        assert!(c.session().busy());
    }

    #[test]
    fn history_never_exceeds_three_over_many_reveals() {
        let mut c = controller(PickerConfig::default());
        for _ in 0..10 {
            let GenerateOutcome::Started { timer, .. } = c.on_generate_requested().unwrap()
            else {
                panic!("expected a started pick");
            };
            c.on_timer_fired(timer).unwrap();
            assert!(c.session().recent_picks.len() <= 3);
        }
        assert_eq!(c.session().recent_picks.len(), 3);
    }

    #[test]
    fn category_switch_keeps_history_and_busy() {
        let mut c = controller(PickerConfig::default());
        c.on_generate_requested().unwrap();
        let history: Vec<_> = c.session().recent_picks.iter().copied().collect();

        c.on_category_requested(CategoryKey::Culture);

        assert_eq!(c.session().active_category, CategoryKey::Culture);
        assert!(c.session().busy());
        assert_eq!(c.session().recent_picks.iter().copied().collect::<Vec<_>>(), history);
        assert_eq!(
            c.renderer().calls().last(),
            Some(&RenderCall::ActiveCategory(CategoryKey::Culture))
        );
    }

    #[test]
    fn teardown_cancels_pending_reveal() {
        let mut c = controller(PickerConfig::default());
        c.on_generate_requested().unwrap();
        c.teardown();
        assert!(!c.session().busy());
        assert_eq!(c.scheduler().pending_count(), 0);
        assert_eq!(c.scheduler().cancelled().len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let result = DisplayController::new(
            Catalog::builtin(),
            PickerConfig {
                thinking_delay_ms: 0,
                ..PickerConfig::default()
            },
            RecordingRenderer::default(),
            ManualScheduler::default(),
            StdRng::seed_from_u64(1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut c = controller(PickerConfig::default());
        c.dispatch(Command::SelectCategory(CategoryKey::Adventurous)).unwrap();
        c.dispatch(Command::Generate).unwrap();
        let pick = *c.session().recent_picks.last().unwrap();
        assert_eq!(pick.category, CategoryKey::Adventurous);
    }
}
