//! Intranet Drafts entry point
//!
//! The browser build is driven from JS (`bindPage()` once the DOM is ready).
//! The native build replays a draft session against an in-memory store.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    log::info!("Intranet drafts (native) starting...");
    log::info!("Browser build: `wasm-pack build --target web`, then call bindPage()");

    println!("\nReplaying contact form session...");
    replay_contact_form();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn replay_contact_form() {
    use intranet_drafts::{
        AutoSaveConfig, DraftManager, FormFields, KeyValueStore, MemoryForm, MemoryStore, RestoreOutcome,
    };
    use std::rc::Rc;

    let store = Rc::new(MemoryStore::new());
    let manager = Rc::new(DraftManager::new(Rc::clone(&store), AutoSaveConfig::default()));
    let blank = MemoryForm::new("contact-form")
        .with_field("name", "")
        .with_field("email", "");

    // First visit: type a name
    let mut form = blank.clone();
    let Some(registration) = manager.register(&mut form) else {
        println!("✗ Form was not registered");
        return;
    };
    for value in ["J", "Jo", "Jon"] {
        form.set_field_value("name", value);
        registration.field_changed(&form);
    }
    drop(registration);

    let stored = store.get("form_contact-form").ok().flatten();
    println!("  stored draft: {}", stored.as_deref().unwrap_or("<none>"));

    // Reload: draft comes back
    let mut reloaded = blank.clone();
    match manager.initialize(&mut reloaded) {
        RestoreOutcome::Restored { applied, .. } => println!("  restored fields: {}", applied.join(", ")),
        other => println!("  unexpected restore outcome: {:?}", other),
    }
    assert_eq!(reloaded.value("name"), Some("Jon"), "Draft should be restored");

    // Submit: draft is gone
    manager.on_submit(&reloaded);
    let mut after_submit = blank.clone();
    assert_eq!(
        manager.initialize(&mut after_submit),
        RestoreOutcome::NoDraft,
        "Draft should be cleared on submit"
    );

    // Full storage: edits still go through
    let full = DraftManager::new(MemoryStore::with_quota(0), AutoSaveConfig::default());
    let mut form = blank;
    form.set_field_value("email", "jon@example.org");
    full.on_field_change(&form);
    assert_eq!(form.value("email"), Some("jon@example.org"));

    println!("✓ Draft session replayed!");
}
