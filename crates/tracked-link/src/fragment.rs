//! Link content as a small render tree.
//!
//! `Fragment` is what callers hand to [`Link`](crate::components::Link). It renders to a
//! Leptos view and, unlike opaque `Children`, can be walked to recover the
//! visible text for analytics labels.

use leptos::prelude::*;

/// Inline elements a fragment node may render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Span,
    Strong,
    Em,
    Code,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fragment {
    Text(String),
    Integer(i64),
    Number(f64),
    Sequence(Vec<Fragment>),
    /// Composite element wrapping nested content.
    Node {
        tag: Tag,
        class: Option<String>,
        children: Box<Fragment>,
    },
    /// Decorative glyph, no text of its own.
    Icon(String),
    #[default]
    Empty,
}

impl Fragment {
    pub fn node(tag: Tag, children: impl Into<Fragment>) -> Self {
        Fragment::Node {
            tag,
            class: None,
            children: Box::new(children.into()),
        }
    }

    pub fn icon(name: impl Into<String>) -> Self {
        Fragment::Icon(name.into())
    }

    /// Set the class of a node; no effect on other variants.
    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        if let Fragment::Node { class, .. } = &mut self {
            *class = Some(value.into());
        }
        self
    }

    /// Flattened, trimmed text content of the tree.
    pub fn text(&self) -> String {
        match self {
            Fragment::Sequence(items) => {
                let parts: Vec<String> = items.iter().map(Fragment::text).collect();
                parts.join(" ").trim().to_string()
            }
            Fragment::Node { children, .. } => children.text(),
            Fragment::Text(text) => text.clone(),
            Fragment::Integer(n) => n.to_string(),
            Fragment::Number(n) => format_number(*n),
            Fragment::Icon(_) | Fragment::Empty => String::new(),
        }
    }

    pub fn into_any_view(self) -> AnyView {
        match self {
            Fragment::Text(text) => text.into_any(),
            Fragment::Integer(n) => n.to_string().into_any(),
            Fragment::Number(n) => format_number(n).into_any(),
            Fragment::Sequence(items) => items
                .into_iter()
                .map(Fragment::into_any_view)
                .collect_view()
                .into_any(),
            Fragment::Node { tag, class, children } => {
                let inner = children.into_any_view();
                match tag {
                    Tag::Span => view! { <span class=class>{inner}</span> }.into_any(),
                    Tag::Strong => view! { <strong class=class>{inner}</strong> }.into_any(),
                    Tag::Em => view! { <em class=class>{inner}</em> }.into_any(),
                    Tag::Code => view! { <code class=class>{inner}</code> }.into_any(),
                }
            }
            Fragment::Icon(name) => {
                view! { <span class=format!("icon icon-{}", name) aria-hidden="true"></span> }.into_any()
            }
            Fragment::Empty => ().into_any(),
        }
    }
}

/// Formats `n` the way browsers print numbers: `Infinity`, no negative zero,
/// and exponent notation outside `[1e-6, 1e21)`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<i64> for Fragment {
    fn from(n: i64) -> Self {
        Fragment::Integer(n)
    }
}

impl From<i32> for Fragment {
    fn from(n: i32) -> Self {
        Fragment::Integer(n.into())
    }
}

impl From<u32> for Fragment {
    fn from(n: u32) -> Self {
        Fragment::Integer(n.into())
    }
}

impl From<f64> for Fragment {
    fn from(n: f64) -> Self {
        Fragment::Number(n)
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(items: Vec<T>) -> Self {
        Fragment::Sequence(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_text_is_unchanged() {
        assert_eq!(Fragment::from("Hello").text(), "Hello");
    }

    #[test]
    fn sequence_joins_with_spaces() {
        assert_eq!(Fragment::from(vec!["Go", "to", "docs"]).text(), "Go to docs");
    }

    #[test]
    fn sequence_is_trimmed_but_inner_text_is_not() {
        let content = Fragment::Sequence(vec![Fragment::Empty, "Read".into(), Fragment::icon("arrow")]);
        assert_eq!(content.text(), "Read");

        // only the joined result is trimmed
        assert_eq!(Fragment::from(" padded ").text(), " padded ");
    }

    #[test]
    fn nodes_recurse_into_children() {
        let content = Fragment::Sequence(vec![
            "Open".into(),
            Fragment::node(Tag::Strong, vec![Fragment::from("the"), Fragment::node(Tag::Em, "manual")]),
        ]);
        assert_eq!(content.text(), "Open the manual");
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(Fragment::from(3_i32).text(), "3");
        assert_eq!(Fragment::from(2.5).text(), "2.5");
        assert_eq!(Fragment::from(vec![Fragment::from("Page"), Fragment::from(42u32)]).text(), "Page 42");
    }

    #[test]
    fn integers_are_exact() {
        assert_eq!(Fragment::from(i64::MAX).text(), "9223372036854775807");
        assert_eq!(Fragment::from(-7_i32).text(), "-7");
    }

    #[test]
    fn special_floats_print_like_a_browser() {
        assert_eq!(Fragment::Number(f64::INFINITY).text(), "Infinity");
        assert_eq!(Fragment::Number(f64::NEG_INFINITY).text(), "-Infinity");
        assert_eq!(Fragment::Number(f64::NAN).text(), "NaN");
        assert_eq!(Fragment::Number(-0.0).text(), "0");
    }

    #[test]
    fn large_and_tiny_floats_use_exponents() {
        assert_eq!(Fragment::Number(1e21).text(), "1e+21");
        assert_eq!(Fragment::Number(-2.5e22).text(), "-2.5e+22");
        assert_eq!(Fragment::Number(1e-7).text(), "1e-7");
        assert_eq!(Fragment::Number(123456789012345680000.0).text(), "123456789012345680000");
        assert_eq!(Fragment::Number(0.000001).text(), "0.000001");
    }

    #[test]
    fn node_without_text_is_empty() {
        let content = Fragment::node(Tag::Span, Fragment::icon("external")).with_class("badge");
        assert_eq!(content.text(), "");
        assert_eq!(Fragment::Empty.text(), "");
        assert_eq!(Fragment::Sequence(vec![]).text(), "");
    }

    #[test]
    fn with_class_only_touches_nodes() {
        assert_eq!(Fragment::from("plain").with_class("x"), Fragment::from("plain"));
        let Fragment::Node { class, .. } = Fragment::node(Tag::Code, "cargo").with_class("mono") else {
            panic!("expected node");
        };
        assert_eq!(class.as_deref(), Some("mono"));
    }
}
