//! Browser shell.
//!
//! Owns the single [`DisplayController`] in a thread-local, installs the DOM
//! listeners (generate button, category pills, keyboard) and routes the reveal
//! timer back into the controller. Each `start` looks up the page afresh and
//! binds new listeners; nothing is installed unless every lookup succeeds, and
//! `stop` detaches the listeners again.
use std::cell::RefCell;

use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, window};

mod confetti;
mod console;
mod dom_renderer;
mod markup;
mod timer;

pub use console::init_logging;

use crate::catalog::{Catalog, CategoryKey};
use crate::config::PickerConfig;
use crate::controller::{DisplayController, TimerHandle};
use crate::input::{Command, key_binding};
use dom_renderer::{DomRenderer, GENERATE_BUTTON_ID, mode_pills, require_id};
use timer::WindowScheduler;

type WebController = DisplayController<DomRenderer, WindowScheduler, SmallRng>;

thread_local! {
    static PICKER: RefCell<Option<WebController>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Option<Listeners>> = const { RefCell::new(None) };
}

pub fn start(config: PickerConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if PICKER.with(|cell| cell.borrow().is_some()) {
        warn!("picker already running, restarting");
        stop();
    }

    let renderer = DomRenderer::attach(&win, &doc, &config)?;
    let listeners = Listeners::bind(&doc)?;
    let scheduler = WindowScheduler::new(win.clone(), on_reveal_timer);
    let controller = DisplayController::new(
        Catalog::builtin(),
        config,
        renderer,
        scheduler,
        SmallRng::from_entropy(),
    )?;

    PICKER.with(|cell| cell.replace(Some(controller)));
    LISTENERS.with(|cell| cell.replace(Some(listeners)));

    info!("London activity picker loaded! Press Enter/Space to generate, or 1/2/3 for modes.");
    Ok(())
}

/// Detach listeners and drop the controller, cancelling a pending reveal.
pub fn stop() {
    drop(LISTENERS.with(|cell| cell.borrow_mut().take()));
    if let Some(mut controller) = PICKER.with(|cell| cell.borrow_mut().take()) {
        controller.teardown();
        debug!("picker stopped");
    }
}

pub fn dispatch(command: Command) {
    with_picker(|picker| {
        if let Err(err) = picker.dispatch(command) {
            error!("{err}");
        }
    });
}

pub fn select_mode(mode: &str) -> Result<(), JsValue> {
    let category = CategoryKey::from_mode(mode)
        .ok_or_else(|| JsValue::from_str(&format!("unknown category '{mode}'")))?;
    dispatch(Command::SelectCategory(category));
    Ok(())
}

fn with_picker(f: impl FnOnce(&mut WebController)) {
    PICKER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(picker) => f(picker),
            None => debug!("picker not started, event dropped"),
        },
        Err(_) => warn!("picker busy in another callback, event dropped"),
    });
}

fn on_reveal_timer(handle: TimerHandle) {
    with_picker(|picker| {
        picker.scheduler_mut().mark_fired(handle);
        picker.on_timer_fired(handle);
    });
}

// --- Listeners ---------------------------------------------------------------

type Handler = Closure<dyn FnMut(Event)>;

/// DOM listeners bound by one `start`. Dropping detaches them, so a partly
/// bound set is cleaned up when binding fails halfway.
struct Listeners {
    bound: Vec<(EventTarget, &'static str, Handler)>,
}

impl Listeners {
    fn bind(doc: &Document) -> Result<Self, JsValue> {
        let mut listeners = Listeners { bound: Vec::new() };

        // Generate button
        let button = require_id(doc, GENERATE_BUTTON_ID)?;
        listeners.add(
            button.into(),
            "click",
            Closure::wrap(Box::new(move |_evt: Event| {
                dispatch(Command::Generate);
            }) as Box<dyn FnMut(_)>),
        )?;

        // Category pills
        for (mode, pill) in mode_pills(doc)? {
            listeners.add(
                pill.into(),
                "click",
                Closure::wrap(Box::new(move |_evt: Event| {
                    dispatch(Command::SelectCategory(mode));
                }) as Box<dyn FnMut(_)>),
            )?;
        }

        // Keyboard shortcuts
        listeners.add(
            doc.clone().into(),
            "keydown",
            Closure::wrap(Box::new(move |evt: Event| {
                let Some(key) = evt.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                    return;
                };
                let Some(command) = key_binding(&key) else {
                    return;
                };
                if command == Command::Generate {
                    // Keeps Space from scrolling and Enter from also clicking a focused button.
                    evt.prevent_default();
                }
                dispatch(command);
            }) as Box<dyn FnMut(_)>),
        )?;

        Ok(listeners)
    }

    fn add(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        handler: Handler,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
        self.bound.push((target, kind, handler));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, kind, handler) in self.bound.drain(..) {
            if let Err(err) =
                target.remove_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())
            {
                warn!("could not detach {kind} listener: {err:?}");
            }
        }
    }
}
