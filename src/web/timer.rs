// `setTimeout`-backed scheduler for the reveal timer.
use std::collections::HashMap;

use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::controller::{Scheduler, TimerHandle};

pub struct WindowScheduler {
    window: Window,
    next_id: u64,
    live: HashMap<u64, i32>, // our handle id -> browser timeout id
    on_fire: fn(TimerHandle),
}

impl WindowScheduler {
    /// `on_fire` runs on the event loop once a task's delay has elapsed.
    pub fn new(window: Window, on_fire: fn(TimerHandle)) -> Self {
        Self {
            window,
            next_id: 0,
            live: HashMap::new(),
            on_fire,
        }
    }

    /// Forget a task that has already run.
    pub fn mark_fired(&mut self, handle: TimerHandle) {
        self.live.remove(&handle.id());
    }
}

impl Scheduler for WindowScheduler {
    fn schedule_once(&mut self, delay_ms: u32) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;

        let on_fire = self.on_fire;
        let callback = Closure::once_into_js(move || on_fire(handle));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(timeout_id) => {
                self.live.insert(handle.id(), timeout_id);
            }
            Err(err) => error!("setTimeout failed for timer {}: {err:?}", handle.id()),
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timeout_id) = self.live.remove(&handle.id()) {
            self.window.clear_timeout_with_handle(timeout_id);
        }
    }
}
