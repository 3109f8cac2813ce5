//! Auto-save wiring for forms on the page

use std::collections::BTreeSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

use super::dom_form::DomForm;
use crate::config::{AutoSaveConfig, FieldSelection};
use crate::consts::AUTO_SAVE_ATTRIBUTE;
use crate::draft::{DraftManager, Registration};
use crate::persistence::LocalStorage;

type PageStore = Rc<LocalStorage>;

/// Live auto-save on one form. Listeners are removed on `dispose()` or drop.
#[wasm_bindgen]
pub struct AutoSaveHandle {
    form: HtmlFormElement,
    registration: Rc<Registration<PageStore>>,
    on_input: Closure<dyn FnMut(Event)>,
    on_submit: Closure<dyn FnMut(Event)>,
}

impl AutoSaveHandle {
    /// Restore the form's draft and start listening; `None` for forms without an id
    fn attach(manager: &Rc<DraftManager<PageStore>>, form: HtmlFormElement) -> Option<Self> {
        let mut dom_form = DomForm::new(form.clone());
        let registration = Rc::new(manager.register(&mut dom_form)?);

        let on_input = {
            let registration = Rc::clone(&registration);
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                registration.field_changed(&dom_form);
            })
        };
        let on_submit = {
            let registration = Rc::clone(&registration);
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                registration.submitted();
            })
        };

        if let Err(err) = form.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()) {
            log::warn!("Cannot listen to input on '{}': {:?}", registration.form_id(), err);
        }
        if let Err(err) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
            log::warn!("Cannot listen to submit on '{}': {:?}", registration.form_id(), err);
        }

        Some(Self {
            form,
            registration,
            on_input,
            on_submit,
        })
    }
}

#[wasm_bindgen]
impl AutoSaveHandle {
    #[wasm_bindgen(getter, js_name = formId)]
    pub fn form_id(&self) -> String {
        self.registration.form_id().to_string()
    }

    #[wasm_bindgen(getter, js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.registration.storage_key()
    }

    /// Stop auto-saving this form
    pub fn dispose(self) {}
}

impl Drop for AutoSaveHandle {
    fn drop(&mut self) {
        let _ = self
            .form
            .remove_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref());
        let _ = self
            .form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref());
    }
}

/// Enable auto-save on a single form
#[wasm_bindgen(js_name = registerAutoSave)]
pub fn register_auto_save(form: HtmlFormElement, storage_key_prefix: Option<String>) -> Option<AutoSaveHandle> {
    let mut config = AutoSaveConfig::default();
    if let Some(prefix) = storage_key_prefix {
        config = config.with_prefix(prefix);
    }
    let manager = Rc::new(DraftManager::new(Rc::new(LocalStorage::open()), config));
    AutoSaveHandle::attach(&manager, form)
}

/// Auto-save handles for every bound form on the page
#[wasm_bindgen]
#[derive(Default)]
pub struct PageBindings {
    handles: Vec<AutoSaveHandle>,
}

#[wasm_bindgen]
impl PageBindings {
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.handles.len()
    }

    /// Ids of the forms being auto-saved
    #[wasm_bindgen(js_name = formIds)]
    pub fn form_ids(&self) -> Vec<String> {
        self.handles.iter().map(AutoSaveHandle::form_id).collect()
    }

    /// Stop auto-saving every bound form
    pub fn dispose(self) {}
}

/// Bind every `[data-auto-save]` form in the document. Call once the DOM is ready.
///
/// The attribute value selects the fields (`"name,email"`); empty means all.
/// Form ids share one storage key space, so a repeated id is bound only once.
#[wasm_bindgen(js_name = bindPage)]
pub fn bind_page() -> PageBindings {
    let mut bindings = PageBindings::default();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return bindings;
    };

    let forms = match document.query_selector_all(&format!("[{}]", AUTO_SAVE_ATTRIBUTE)) {
        Ok(forms) => forms,
        Err(err) => {
            log::warn!("Cannot query auto-save forms: {:?}", err);
            return bindings;
        }
    };

    let store: PageStore = Rc::new(LocalStorage::open());
    let mut seen_ids = BTreeSet::new();
    for i in 0..forms.length() {
        let Some(form) = forms.item(i).and_then(|node| node.dyn_into::<HtmlFormElement>().ok()) else {
            continue;
        };

        let form_id = form.id().trim().to_string();
        if !form_id.is_empty() && !seen_ids.insert(form_id.clone()) {
            log::warn!("Duplicate auto-save form id '{}', skipping", form_id);
            continue;
        }

        let selection = FieldSelection::from_attribute(&form.get_attribute(AUTO_SAVE_ATTRIBUTE).unwrap_or_default());
        let config = AutoSaveConfig::default().with_fields(selection);
        let manager = Rc::new(DraftManager::new(Rc::clone(&store), config));

        match AutoSaveHandle::attach(&manager, form) {
            Some(handle) => bindings.handles.push(handle),
            None => log::debug!("Skipping auto-save form without id"),
        }
    }

    log::info!("Auto-save enabled on {} forms", bindings.handles.len());
    bindings
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::draft::FormFields;
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIELDS: &str = r#"
        <input type="text" name="name">
        <input type="radio" name="level" value="6e">
        <input type="radio" name="level" value="5e">
        <input type="checkbox" name="consent" value="yes">
        <input type="file" name="attachment">
    "#;

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    fn make_form(id: &str) -> HtmlFormElement {
        let form: HtmlFormElement = document().create_element("form").unwrap().dyn_into().unwrap();
        form.set_id(id);
        form.set_inner_html(FIELDS);
        document().body().unwrap().append_child(&form).unwrap();
        form
    }

    fn input(form: &HtmlFormElement, selector: &str) -> HtmlInputElement {
        form.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
    }

    fn fire(form: &HtmlFormElement, kind: &str) {
        let event = Event::new(kind).unwrap();
        form.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_snapshot_skips_files_and_unchecked() {
        let form = make_form("snapshot-form");
        input(&form, "input[name=name]").set_value("Jon");
        input(&form, "input[value='5e']").set_checked(true);

        let snapshot = DomForm::new(form.clone()).snapshot();
        assert_eq!(
            snapshot,
            vec![
                ("name".to_string(), "Jon".to_string()),
                ("level".to_string(), "5e".to_string()),
            ]
        );

        input(&form, "input[name=consent]").set_checked(true);
        let snapshot = DomForm::new(form.clone()).snapshot();
        assert!(snapshot.contains(&("consent".to_string(), "yes".to_string())));
        assert!(snapshot.iter().all(|(name, _)| name != "attachment"));
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_set_value_checks_matching_toggles() {
        let form = make_form("toggle-form");
        let mut dom_form = DomForm::new(form.clone());

        assert!(dom_form.set_field_value("level", "5e"));
        assert!(input(&form, "input[value='5e']").checked());
        assert!(!input(&form, "input[value='6e']").checked());

        assert!(dom_form.set_field_value("consent", "yes"));
        assert!(input(&form, "input[name=consent]").checked());
        assert!(dom_form.set_field_value("consent", "no"));
        assert!(!input(&form, "input[name=consent]").checked());

        assert!(!dom_form.set_field_value("ghost", "x"));
        assert!(!dom_form.has_field("ghost"));
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_register_restores_draft() {
        storage()
            .set_item(
                "test.restore.restore-form",
                r#"{"consent":"yes","ghost":"x","level":"6e","name":"Jo"}"#,
            )
            .unwrap();
        let form = make_form("restore-form");

        let handle = register_auto_save(form.clone(), Some("test.restore.".to_string())).unwrap();
        assert_eq!(handle.storage_key(), "test.restore.restore-form");
        assert_eq!(input(&form, "input[name=name]").value(), "Jo");
        assert!(input(&form, "input[value='6e']").checked());
        assert!(input(&form, "input[name=consent]").checked());
        assert!(form.query_selector("[name=ghost]").unwrap().is_none());

        handle.dispose();
        storage().remove_item("test.restore.restore-form").unwrap();
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_input_saves_until_disposed() {
        let key = "test.dispose.dispose-form";
        let form = make_form("dispose-form");
        let handle = register_auto_save(form.clone(), Some("test.dispose.".to_string())).unwrap();

        input(&form, "input[name=name]").set_value("Jon");
        fire(&form, "input");
        let saved = storage().get_item(key).unwrap().unwrap();
        assert_eq!(saved, r#"{"name":"Jon"}"#);

        storage().remove_item(key).unwrap();
        handle.dispose();

        input(&form, "input[name=name]").set_value("Jonathan");
        fire(&form, "input");
        assert_eq!(storage().get_item(key).unwrap(), None);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_submit_clears_draft() {
        let key = "test.submit.submit-form";
        let form = make_form("submit-form");
        let handle = register_auto_save(form.clone(), Some("test.submit.".to_string())).unwrap();

        input(&form, "input[name=name]").set_value("Jon");
        fire(&form, "input");
        assert!(storage().get_item(key).unwrap().is_some());

        fire(&form, "submit");
        assert_eq!(storage().get_item(key).unwrap(), None);

        drop(handle);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_form_without_id_is_not_registered() {
        let form = make_form("");
        assert!(register_auto_save(form.clone(), None).is_none());
        form.remove();
    }

    #[wasm_bindgen_test]
    fn test_bind_page_skips_duplicate_ids() {
        let first = make_form("dup-form");
        let second = make_form("dup-form");
        for form in [&first, &second] {
            form.set_attribute(AUTO_SAVE_ATTRIBUTE, "name").unwrap();
        }

        let bindings = bind_page();
        let bound = bindings.form_ids().iter().filter(|id| *id == "dup-form").count();
        assert_eq!(bound, 1);

        bindings.dispose();
        storage().remove_item("form_dup-form").unwrap();
        first.remove();
        second.remove();
    }
}
