//! Browser platform layer
//!
//! Handles the page side of the intranet:
//! - DOM form adapter (`DomForm`)
//! - Auto-save registration with disposable handles
//! - Page binding for `[data-auto-save]` forms
//! - Template utilities exported to JS

pub mod dom_form;
pub mod page;

pub use dom_form::DomForm;
pub use page::{AutoSaveHandle, PageBindings, bind_page, register_auto_save};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Intranet drafts loaded");
}

/// Grade as a colored span, out of 20 by default
#[wasm_bindgen(js_name = formatGrade)]
pub fn format_grade(grade: f64, max_grade: Option<f64>) -> String {
    crate::grades::format_grade(grade, max_grade)
}

#[wasm_bindgen(js_name = calculateAverage)]
pub fn calculate_average(grades: &[f64]) -> f64 {
    crate::grades::calculate_average(grades)
}

/// French long date; falls back to the input when it is not an ISO date
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str) -> String {
    crate::dates::format_date_fr(date).unwrap_or_else(|| date.to_string())
}
