use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::analytics::Analytics;
use crate::config::LinkStyle;
use crate::fragment::Fragment;
use crate::link::{ClickTracker, LinkKind, LinkPlan};

/// Everything a replacement element needs to stand in for the default anchor.
pub struct LinkParts {
    pub href: String,
    pub external: bool,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub class: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
    /// Caller's handler followed by analytics; attach it to the element's click.
    pub on_click: Callback<MouseEvent>,
    /// Content, plus the off-screen new-window note for external links.
    pub children: AnyView,
}

/// Renders a link from its parts in place of `<a>` / the router's `<A>`.
///
/// The router intercepts clicks on any same-origin `<a href>`, so an
/// anchor-based replacement keeps in-app navigation for internal links.
pub type LinkElement = Callback<LinkParts, AnyView>;

/// Click handler running the caller's callback, then the tracker.
pub(crate) fn click_handler<E: 'static>(
    tracker: ClickTracker,
    on_click: Option<Callback<E>>,
) -> impl Fn(E) + Clone + Send + Sync + 'static {
    move |ev: E| {
        let handler = on_click.as_ref().map(|cb| move |ev: E| cb.run(ev));
        tracker.dispatch(ev, handler);
    }
}

/// Hyperlink that routes internal destinations through the router and
/// reports clicks as analytics events.
///
/// External destinations (anything with a URI scheme) render a plain anchor
/// followed by an off-screen note for screen readers; `http`/`https` ones
/// also open in a new window with `rel="noopener"`.
#[component]
pub fn Link(
    /// Route path or absolute URI
    #[prop(into)]
    to: String,
    /// Rendered inside the anchor; its text doubles as the analytics label
    #[prop(into)]
    content: Fragment,
    /// Runs before the analytics event is captured
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Skip analytics for this link
    #[prop(optional)]
    no_track: bool,
    /// Merged after the link's own classes
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Sink for click events; defaults to the one in context
    #[prop(optional)]
    analytics: Option<Analytics>,
    /// Defaults to the style in context, then to the built-in rules
    #[prop(optional)]
    style: Option<LinkStyle>,
    /// Replaces the rendered element in both branches
    #[prop(optional)]
    element: Option<LinkElement>,
) -> impl IntoView {
    let style = style.or_else(use_context::<LinkStyle>).unwrap_or_default();
    let analytics = analytics.or_else(use_context::<Analytics>);

    let plan = LinkPlan::new(&to, &content, class.as_deref(), &style);
    let handle_click = click_handler(plan.tracker(analytics, no_track), on_click);

    let target = plan.target();
    let rel = plan.rel();
    let content = content.into_any_view();
    let external = plan.is_external();
    let note = external.then(|| view! { <span class=style.hidden_class>{style.new_window_text}</span> });

    if let Some(element) = element {
        return element.run(LinkParts {
            href: plan.href,
            external,
            target,
            rel,
            class: plan.class,
            title,
            aria_label,
            on_click: Callback::new(handle_click),
            children: view! { {content} {note} }.into_any(),
        });
    }

    match plan.kind {
        LinkKind::External { .. } => view! {
            <a
                href=plan.href
                target=target
                rel=rel
                class=plan.class
                title=title
                aria-label=aria_label
                on:click=handle_click
            >
                {content}
                {note}
            </a>
        }
        .into_any(),
        LinkKind::Internal => view! {
            <A
                href=plan.href
                attr:class=plan.class
                attr:title=title
                attr:aria-label=aria_label
                on:click=handle_click
            >
                {content}
            </A>
        }
        .into_any(),
    }
}
