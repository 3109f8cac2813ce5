//! `HtmlFormElement` adapter

use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::draft::FormFields;

/// Live view of a form element's fields
#[derive(Debug, Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Every control carrying this name (radio groups have several)
    fn controls_named(&self, name: &str) -> Vec<Element> {
        let elements = self.form.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter(|el| el.get_attribute("name").as_deref() == Some(name))
            .collect()
    }
}

impl FormFields for DomForm {
    fn form_id(&self) -> Option<String> {
        Some(self.form.id())
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            log::warn!("Cannot read form data for '{}'", self.form.id());
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };

        // Files are not strings and stay out of the draft
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn has_field(&self, name: &str) -> bool {
        !self.controls_named(name).is_empty()
    }

    fn set_field_value(&mut self, name: &str, value: &str) -> bool {
        let controls = self.controls_named(name);
        for control in &controls {
            if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
                match input.type_().as_str() {
                    "checkbox" | "radio" => input.set_checked(input.value() == value),
                    "file" => {}
                    _ => input.set_value(value),
                }
            } else if let Some(textarea) = control.dyn_ref::<HtmlTextAreaElement>() {
                textarea.set_value(value);
            } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
                select.set_value(value);
            }
        }
        !controls.is_empty()
    }
}
