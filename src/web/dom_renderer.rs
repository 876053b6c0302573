// Renderer over the page markup (see www/index.html).
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::confetti::ConfettiBurst;
use super::markup::{pending_markup, result_markup};
use crate::catalog::{CategoryKey, SuggestionRecord};
use crate::config::PickerConfig;
use crate::controller::Renderer;

pub const OUTPUT_CARD_ID: &str = "output-card";
pub const CARD_CONTENT_SELECTOR: &str = ".card-content";
pub const CONFETTI_ID: &str = "confetti";
pub const MODE_PILL_SELECTOR: &str = ".mode-pill";
pub const GENERATE_BUTTON_ID: &str = "generate-btn";

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub struct DomRenderer {
    window: Window,
    output_card: Element,
    card_content: Element,
    pills: Vec<(CategoryKey, Element)>,
    confetti: ConfettiBurst,
}

impl DomRenderer {
    /// Look up every element the picker draws into. Missing elements are an
    /// error: the page is not set up for the picker.
    pub fn attach(
        window: &Window,
        document: &Document,
        config: &PickerConfig,
    ) -> Result<Self, JsValue> {
        let output_card = require_id(document, OUTPUT_CARD_ID)?;
        let card_content = output_card
            .query_selector(CARD_CONTENT_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("no .card-content inside #output-card"))?;
        let confetti_box = require_id(document, CONFETTI_ID)?;

        let confetti = ConfettiBurst::new(
            window.clone(),
            document.clone(),
            confetti_box,
            config.confetti_particles,
            config.confetti_lifetime_ms,
            SmallRng::from_entropy(),
        );

        Ok(Self {
            window: window.clone(),
            output_card,
            card_content,
            pills: mode_pills(document)?,
            confetti,
        })
    }

    fn reveal_card(&self) {
        if let Err(err) = self.output_card.class_list().add_1("visible") {
            error!("could not show output card: {err:?}");
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

impl Renderer for DomRenderer {
    fn show_pending(&mut self, message: &str) {
        self.card_content.set_inner_html(&pending_markup(message));
        self.reveal_card();
    }

    fn show_result(&mut self, suggestion: &SuggestionRecord, twist: Option<&str>) {
        self.card_content.set_inner_html(&result_markup(suggestion, twist));
        self.reveal_card();
    }

    fn set_active_category_indicator(&mut self, category: CategoryKey) {
        for (mode, pill) in &self.pills {
            let classes = pill.class_list();
            let toggled = if *mode == category {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
            if let Err(err) = toggled {
                error!("could not update pill '{mode}': {err:?}");
            }
        }
    }

    fn fire_celebration_effect(&mut self) {
        if self.prefers_reduced_motion() {
            debug!("reduced motion requested, skipping confetti");
            return;
        }
        if let Err(err) = self.confetti.burst() {
            error!("confetti burst failed: {err:?}");
        }
    }
}

pub fn require_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no #{id} element")))
}

/// Every `.mode-pill` with a recognised `data-mode`.
pub fn mode_pills(document: &Document) -> Result<Vec<(CategoryKey, Element)>, JsValue> {
    let nodes = document.query_selector_all(MODE_PILL_SELECTOR)?;
    let mut pills = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match el.get_attribute("data-mode").as_deref().and_then(CategoryKey::from_mode) {
            Some(mode) => pills.push((mode, el)),
            None => debug!("ignoring .mode-pill without a known data-mode"),
        }
    }
    Ok(pills)
}
