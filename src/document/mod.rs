mod html;

pub use html::HtmlDocument;

use std::fmt;

/// A structural match against one element: any combination of tag name,
/// class, id and a substring of the element's text content.
///
/// The text test follows jQuery's `:contains`, i.e. it looks at the
/// concatenated text of the element and all of its descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query<'q> {
    pub tag: Option<&'q str>,
    pub class: Option<&'q str>,
    pub id: Option<&'q str>,
    pub contains: Option<&'q str>,
}

impl<'q> Query<'q> {
    pub fn tag(tag: &'q str) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }

    pub fn class(class: &'q str) -> Self {
        Self {
            class: Some(class),
            ..Self::default()
        }
    }

    pub fn id(id: &'q str) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn containing(self, text: &'q str) -> Self {
        Self {
            contains: Some(text),
            ..self
        }
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = self.id {
            write!(f, "#{id}")?;
        }
        if let Some(class) = self.class {
            write!(f, ".{class}")?;
        }
        if let Some(text) = self.contains {
            write!(f, ":contains('{text}')")?;
        }
        Ok(())
    }
}

/// Read-only view of one element in a parsed HTML tree.
///
/// Adapters implement the primitive navigation; everything the extractors
/// search with is built on top of it here, so the extractors never see the
/// parsing library.
pub trait DomNode: Clone {
    fn tag_name(&self) -> &str;
    fn id(&self) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;

    /// Nearest ancestor that is an element.
    fn parent(&self) -> Option<Self>;
    /// Next sibling that is an element, skipping text and comments.
    fn next_sibling(&self) -> Option<Self>;
    /// Previous sibling that is an element, skipping text and comments.
    fn prev_sibling(&self) -> Option<Self>;
    /// Element children in document order.
    fn children(&self) -> Vec<Self>;
    /// Text of this element and all descendants, concatenated.
    fn text(&self) -> String;

    fn matches(&self, query: &Query<'_>) -> bool {
        if let Some(tag) = query.tag {
            if !self.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = query.id {
            if self.id() != Some(id) {
                return false;
            }
        }
        if let Some(class) = query.class {
            if !self.has_class(class) {
                return false;
            }
        }
        match query.contains {
            Some(text) => self.text().contains(text),
            None => true,
        }
    }

    /// All element descendants in document (pre-)order, excluding `self`.
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }

    fn find_all(&self, query: &Query<'_>) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.matches(query))
            .collect()
    }

    fn find_first(&self, query: &Query<'_>) -> Option<Self> {
        self.descendants().into_iter().find(|n| n.matches(query))
    }

    /// Nearest ancestor with the given tag name.
    fn ancestor(&self, tag: &str) -> Option<Self> {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.tag_name().eq_ignore_ascii_case(tag) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    /// CSS `:first-child`.
    fn is_first_child(&self) -> bool {
        self.prev_sibling().is_none()
    }
}
