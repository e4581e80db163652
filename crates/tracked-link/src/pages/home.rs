use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::{Link, Section};
use crate::fragment::{Fragment, Tag};

#[component]
pub fn HomePage() -> impl IntoView {
    let (clicks, set_clicks) = signal(0u32);
    let count_click = Callback::new(move |_: MouseEvent| set_clicks.update(|n| *n += 1));

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8">
            <header class="mb-8 text-center">
                <h1 class="font-bold">"tracked-link"</h1>
            </header>

            <Section id="internal" title="Internal">
                <p>
                    "Routed without a page load: "
                    <Link to="/docs/intro" content=vec!["Go", "to", "docs"] />
                </p>
            </Section>

            <Section id="external" title="External">
                <ul>
                    <li>
                        <Link
                            to="https://leptos.dev"
                            content=Fragment::Sequence(vec![
                                Fragment::node(Tag::Strong, "Leptos"),
                                "website".into(),
                            ])
                        />
                    </li>
                    <li>
                        // mailto stays in the current window
                        <Link to="mailto:hello@example.com" content="Mail us" />
                    </li>
                    <li>
                        <Link
                            to="https://github.com/leptos-rs/leptos"
                            content=Fragment::node(Tag::Span, Fragment::icon("github"))
                            aria_label="Leptos on GitHub"
                        />
                    </li>
                </ul>
            </Section>

            <Section id="handlers" title="Handlers">
                <p>
                    <Link to="/docs/intro" content="Counted and tracked" on_click=count_click />
                    " \u{00B7} "
                    <Link to="/docs/intro" content="Counted, not tracked" on_click=count_click no_track=true />
                </p>
                <p class="text-sm">"Clicks: " {clicks}</p>
            </Section>
        </main>
    }
}
