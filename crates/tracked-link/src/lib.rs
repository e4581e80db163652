pub mod analytics;
pub mod app;
pub mod components;
pub mod config;
pub mod destination;
pub mod fragment;
pub mod link;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    // The server embeds its config in the page; without it the client falls
    // back to defaults.
    let config = config::AppConfig::from_document().unwrap_or_default();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}
