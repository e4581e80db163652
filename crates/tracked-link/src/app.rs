use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::analytics::Analytics;
use crate::config::{AppConfig, CONFIG_ELEMENT_ID};
use crate::pages::{DocsPage, HomePage};

/// Document shell rendered around [`App`] on the server.
///
/// Embeds the `AppConfig` from context so the hydrated client sees the same
/// settings as the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let config_json = config
        .to_embedded_json()
        .inspect_err(|e| tracing::error!("Link config not embedded: {:#}", e))
        .ok();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
                {config_json.map(|json| view! {
                    <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=json></script>
                })}
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Sink used when analytics is enabled: the browser console once hydrated,
/// `tracing` on the server.
fn default_analytics() -> Analytics {
    #[cfg(feature = "hydrate")]
    {
        Analytics::new(crate::analytics::ConsoleSink)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Analytics::new(crate::analytics::TracingSink)
    }
}

/// Make the link style, and the analytics sink when enabled, available to
/// every `Link` below the current owner.
pub fn provide_link_context(config: AppConfig) {
    provide_context(config.style);
    if config.analytics_enabled {
        provide_context(default_analytics());
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<AppConfig>().unwrap_or_default();
    provide_link_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/tracked-link.css" />
        <Title text="tracked-link" />
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs/intro") view=DocsPage />
            </Routes>
        </Router>
    }
}
