//! London activity picker core crate.
//!
//! Pick a category, press generate, get a suggestion from a fixed curated
//! catalog after a short "thinking" pause. The last few picks are excluded so
//! the same suggestion does not come straight back, and roughly a third of
//! reveals carry a small London twist.
//!
//! The state machine ([`controller::DisplayController`]) is independent of the
//! browser: rendering and timers are traits, and randomness is any
//! [`rand::Rng`]. The `web` module plugs in the DOM, `setTimeout` and the
//! console logger and exposes the JS entry points below.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod input;
pub mod modifier;
pub mod selector;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod web;

pub use catalog::{Catalog, CategoryKey, Energy, SuggestionId, SuggestionRecord};
pub use config::PickerConfig;
pub use controller::{
    DisplayController, GenerateOutcome, Renderer, Resolution, Scheduler, TimerHandle,
};
pub use error::ConfigurationError;
pub use input::{Command, key_binding};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    web::init_logging();
}

// -----------------------------------------------------------------------------
// JS entry points
// -----------------------------------------------------------------------------

/// Attach to the page and start listening for triggers, with default settings.
#[wasm_bindgen]
pub fn start_picker() -> Result<(), JsValue> {
    web::start(PickerConfig::default())
}

/// Like `start_picker`, with overrides from a JSON object, e.g.
/// `{"thinking_delay_ms": 600, "default_category": "culture"}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_picker_with_config(json: &str) -> Result<(), JsValue> {
    web::start(PickerConfig::from_json(json)?)
}

/// Programmatic generate trigger (same path as the button and Enter/Space).
#[wasm_bindgen]
pub fn generate() {
    web::dispatch(Command::Generate);
}

/// Programmatic category switch; `mode` is `chill`, `adventurous` or `culture`.
#[wasm_bindgen]
pub fn select_category(mode: &str) -> Result<(), JsValue> {
    web::select_mode(mode)
}

#[wasm_bindgen]
pub fn stop_picker() {
    web::stop();
}
