//! Read-only capabilities shared by elements and the components wrapping them.
//!
//! Components hold an [`Element`] by composition and expose these so a
//! serializer can walk any of them the same way.

use crate::element::Element;
use crate::types::{AttributeKey, AttributeValue, Attributes};

pub trait HasAttributes {
    fn attributes(&self) -> &Attributes;

    fn attribute(&self, key: impl AttributeKey) -> Option<&AttributeValue> {
        self.attributes().get(key.key())
    }
}

pub trait HasChildren {
    fn children(&self) -> &[Element];
}

pub trait Bindable {
    /// The bound model expression, if any.
    fn binding(&self) -> Option<&str>;
}

impl HasAttributes for Element {
    fn attributes(&self) -> &Attributes {
        Element::attributes(self)
    }
}

impl HasChildren for Element {
    fn children(&self) -> &[Element] {
        Element::children(self)
    }
}

impl Bindable for Element {
    fn binding(&self) -> Option<&str> {
        Element::binding(self)
    }
}
