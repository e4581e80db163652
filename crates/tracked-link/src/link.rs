//! Everything [`Link`](crate::components::Link) decides before it renders.
//!
//! Kept free of views so the branch choice, attributes and click order can be
//! checked without a DOM.

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::LinkStyle;
use crate::destination::{is_external, opens_new_window};
use crate::fragment::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Plain anchor; `new_window` only for `http`/`https`.
    External { new_window: bool },
    /// Rendered through the router.
    Internal,
}

/// Render description for a single link, built fresh on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPlan {
    pub href: String,
    pub kind: LinkKind,
    /// Analytics label: the content text, or `href` when there is none.
    pub label: String,
    pub class: Option<String>,
}

impl LinkPlan {
    pub fn new(to: &str, content: &Fragment, class: Option<&str>, style: &LinkStyle) -> Self {
        let kind = if is_external(to) {
            LinkKind::External {
                new_window: opens_new_window(to),
            }
        } else {
            LinkKind::Internal
        };

        let text = content.text();
        let label = if text.is_empty() { to.to_string() } else { text };

        let class = match kind {
            LinkKind::External { .. } => merge_classes(&[Some(style.external_class.as_str()), class]),
            LinkKind::Internal => merge_classes(&[class]),
        };

        Self {
            href: to.to_string(),
            kind,
            label,
            class,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.kind, LinkKind::External { .. })
    }

    pub fn target(&self) -> Option<&'static str> {
        matches!(self.kind, LinkKind::External { new_window: true }).then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        matches!(self.kind, LinkKind::External { new_window: true }).then_some("noopener")
    }

    pub fn tracker(&self, analytics: Option<Analytics>, no_track: bool) -> ClickTracker {
        ClickTracker {
            label: self.label.clone(),
            to: self.href.clone(),
            analytics: if no_track { None } else { analytics },
        }
    }
}

/// Space-joins the given classes, skipping missing and blank ones.
pub fn merge_classes(classes: &[Option<&str>]) -> Option<String> {
    let merged = classes
        .iter()
        .flatten()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!merged.is_empty()).then_some(merged)
}

/// Click behaviour of a link: caller's handler first, then one analytics event.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    label: String,
    to: String,
    /// `None` when tracking is opted out or no sink is available.
    analytics: Option<Analytics>,
}

impl ClickTracker {
    pub fn is_tracking(&self) -> bool {
        self.analytics.is_some()
    }

    pub fn dispatch<E>(&self, event: E, handler: Option<impl FnOnce(E)>) {
        if let Some(handler) = handler {
            handler(event);
        }
        if let Some(analytics) = &self.analytics {
            analytics.capture_event(AnalyticsEvent::click(&self.label, &self.to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::tests::RecordingSink;
    use crate::fragment::Tag;
    use std::cell::RefCell;

    fn plan(to: &str, content: impl Into<Fragment>) -> LinkPlan {
        LinkPlan::new(to, &content.into(), None, &LinkStyle::default())
    }

    #[test]
    fn web_links_open_new_window() {
        let plan = plan("https://example.com", "Example");
        assert_eq!(plan.kind, LinkKind::External { new_window: true });
        assert_eq!(plan.target(), Some("_blank"));
        assert_eq!(plan.rel(), Some("noopener"));
        assert_eq!(plan.class.as_deref(), Some("relative"));
    }

    #[test]
    fn other_schemes_stay_in_place() {
        let plan = plan("mailto:a@b.com", "Mail us");
        assert!(plan.is_external());
        assert_eq!(plan.target(), None);
        assert_eq!(plan.rel(), None);
    }

    #[test]
    fn routes_are_internal() {
        for to in ["/docs/intro", "", "docs", "#top"] {
            let plan = plan(to, "x");
            assert_eq!(plan.kind, LinkKind::Internal, "{to:?}");
            assert_eq!(plan.target(), None);
            assert_eq!(plan.rel(), None);
            assert_eq!(plan.class, None);
        }
    }

    #[test]
    fn label_comes_from_content() {
        assert_eq!(plan("/docs", vec!["Go", "to", "docs"]).label, "Go to docs");
    }

    #[test]
    fn label_falls_back_to_destination() {
        let icon_only = Fragment::node(Tag::Span, Fragment::icon("github"));
        assert_eq!(plan("https://github.com", icon_only).label, "https://github.com");
        assert_eq!(plan("/home", Fragment::Empty).label, "/home");
    }

    #[test]
    fn caller_classes_follow_component_classes() {
        let style = LinkStyle::default();
        let external = LinkPlan::new("https://x.dev", &"x".into(), Some("underline font-bold"), &style);
        assert_eq!(external.class.as_deref(), Some("relative underline font-bold"));

        let internal = LinkPlan::new("/x", &"x".into(), Some("underline"), &style);
        assert_eq!(internal.class.as_deref(), Some("underline"));
    }

    #[test]
    fn merge_skips_blanks() {
        assert_eq!(merge_classes(&[None, Some("  "), Some("a"), Some(" b ")]).as_deref(), Some("a b"));
        assert_eq!(merge_classes(&[None, Some("")]), None);
    }

    #[test]
    fn tracked_click_runs_handler_then_captures_once() {
        let sink = RecordingSink::default();
        let order = RefCell::new(Vec::new());
        let tracker = plan("/docs/intro", "Intro").tracker(Some(Analytics::new(sink.clone())), false);
        assert!(tracker.is_tracking());

        tracker.dispatch(7, Some(|ev: i32| {
            assert_eq!(ev, 7);
            assert!(sink.events().is_empty(), "handler must run before capture");
            order.borrow_mut().push("handler");
        }));

        assert_eq!(*order.borrow(), ["handler"]);
        assert_eq!(sink.events(), [AnalyticsEvent::click("Intro", "/docs/intro")]);
    }

    #[test]
    fn no_track_skips_capture_but_not_handler() {
        let sink = RecordingSink::default();
        let calls = RefCell::new(0);
        let tracker = plan("https://example.com", "Example").tracker(Some(Analytics::new(sink.clone())), true);
        assert!(!tracker.is_tracking());

        tracker.dispatch((), Some(|_| *calls.borrow_mut() += 1));

        assert_eq!(*calls.borrow(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn missing_handler_is_a_no_op() {
        let sink = RecordingSink::default();
        let tracker = plan("/", Fragment::Empty).tracker(Some(Analytics::new(sink.clone())), false);

        tracker.dispatch((), None::<fn(())>);

        assert_eq!(sink.events(), [AnalyticsEvent::click("/", "/")]);
    }

    #[test]
    fn no_sink_means_no_capture() {
        let tracker = plan("/", "Home").tracker(None, false);
        assert!(!tracker.is_tracking());
        tracker.dispatch((), None::<fn(())>);
    }
}
