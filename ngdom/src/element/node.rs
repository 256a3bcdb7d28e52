use super::Content;
use crate::types::{AttributeKey, AttributeValue, Attributes};

/// A markup node.
///
/// The tag is fixed at construction. Attributes are keyed by closed
/// [`AttributeKey`] enums and a second write to the same key replaces the
/// first. Children are owned and kept in insertion order.
///
/// Equality and hashing are structural: tag, attributes, binding and
/// content, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    tag: &'static str,
    attributes: Attributes,
    binding: Option<String>,
    content: Content,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            binding: None,
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    // Identity
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    // Attributes
    pub fn attr(mut self, key: impl AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn set_attribute(&mut self, key: impl AttributeKey, value: impl Into<AttributeValue>) {
        let value = value.into();
        log::trace!("[element] <{}> {}={:?}", self.tag, key.key(), value);
        self.attributes.insert(key.key(), value);
    }

    pub fn remove_attribute(&mut self, key: impl AttributeKey) -> Option<AttributeValue> {
        self.attributes.remove(key.key())
    }

    pub fn attribute(&self, key: impl AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key.key())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    // Binding
    /// Bind the element to a model expression, rendered as `ng-model`.
    pub fn bind(mut self, expression: impl Into<String>) -> Self {
        self.set_binding(expression);
        self
    }

    pub fn set_binding(&mut self, expression: impl Into<String>) {
        self.binding = Some(expression.into());
    }

    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable view of the children. The slice cannot grow or shrink.
    pub fn children_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }
}
