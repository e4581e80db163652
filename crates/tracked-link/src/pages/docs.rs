use leptos::prelude::*;

use crate::components::Link;
use crate::fragment::{Fragment, Tag};

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8">
            <h1 class="font-bold mb-4">"Introduction"</h1>
            <p>
                "Render links with "
                <code>"<Link to=... content=... />"</code>
                ". Destinations with a scheme such as "
                <Link to="https://www.rfc-editor.org/rfc/rfc3986" content=Fragment::node(Tag::Code, "https:") />
                " leave the app; everything else goes through the router."
            </p>
            <p class="mt-4">
                <Link to="/" content="\u{2190} back" />
            </p>
        </main>
    }
}
