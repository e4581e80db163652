use leptos::prelude::*;

use super::Link;
use crate::fragment::Fragment;

/// Titled block with a self-link anchor. The anchor is not tracked.
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor = format!("#{}", id);

    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">
                {title}
                <Link to=anchor content=Fragment::icon("anchor") aria_label="Link to this section" class="section-anchor" no_track=true />
            </h2>
            <div class="pl-4">{children()}</div>
        </section>
    }
}
