use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ngdom::{
    AttributeValue, Bindable, Content, Element, GlobalAttribute, HasAttributes, HasChildren,
};

fn hash_of(element: &Element) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_last_write_wins() {
    let el = Element::div()
        .attr(GlobalAttribute::Title, "first")
        .attr(GlobalAttribute::Title, "second");

    assert_eq!(el.attributes().len(), 1);
    assert_eq!(
        el.attribute(GlobalAttribute::Title),
        Some(&AttributeValue::Text("second".into()))
    );
}

#[test]
fn test_attribute_value_types() {
    let el = Element::div()
        .attr(GlobalAttribute::Id, "x")
        .attr(GlobalAttribute::Class, true)
        .attr(GlobalAttribute::Style, 42i64);

    let id = el.attribute(GlobalAttribute::Id).unwrap();
    let class = el.attribute(GlobalAttribute::Class).unwrap();
    let style = el.attribute(GlobalAttribute::Style).unwrap();

    assert_eq!(id.as_str(), Some("x"));
    assert_eq!(class.as_bool(), Some(true));
    assert_eq!(style.as_integer(), Some(42));
    assert_eq!(style.as_str(), None);
}

#[test]
fn test_remove_attribute() {
    let mut el = Element::div().attr(GlobalAttribute::Id, "x");
    assert!(el.remove_attribute(GlobalAttribute::Id).is_some());
    assert!(el.attributes().is_empty());
    assert!(el.remove_attribute(GlobalAttribute::Id).is_none());
}

#[test]
fn test_capability_traits_match_inherent_accessors() {
    fn title_of(node: &impl HasAttributes) -> Option<&AttributeValue> {
        node.attribute(GlobalAttribute::Title)
    }
    fn child_count(node: &impl HasChildren) -> usize {
        node.children().len()
    }
    fn bound(node: &impl Bindable) -> Option<&str> {
        node.binding()
    }

    let el = Element::div()
        .attr(GlobalAttribute::Title, "t")
        .bind("vm.value")
        .child(Element::span());

    assert_eq!(title_of(&el), Some(&AttributeValue::Text("t".into())));
    assert_eq!(child_count(&el), 1);
    assert_eq!(bound(&el), Some("vm.value"));
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_children_keep_insertion_order() {
    let el = Element::div()
        .child(Element::new("a"))
        .with_children([Element::new("b"), Element::new("c")]);

    let tags: Vec<_> = el.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, ["a", "b", "c"]);
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::div().text("hello").child(Element::span());
    assert_eq!(el.text_content(), None);
    assert_eq!(el.children().len(), 1);
}

#[test]
fn test_children_mut_edits_in_place() {
    let mut el = Element::div().child(Element::span());
    el.children_mut()[0].set_attribute(GlobalAttribute::Id, "inner");

    assert_eq!(
        el.children()[0].attribute(GlobalAttribute::Id),
        Some(&AttributeValue::Text("inner".into()))
    );
}

#[test]
fn test_leaf_has_no_children() {
    let mut el = Element::span().text("leaf");
    assert!(el.children().is_empty());
    assert!(el.children_mut().is_empty());
    assert_eq!(el.content(), &Content::Text("leaf".into()));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_structural_equality_and_hash() {
    let a = Element::div()
        .attr(GlobalAttribute::Id, "x")
        .attr(GlobalAttribute::Title, "t")
        .child(Element::span().text("s"));
    let b = Element::div()
        .attr(GlobalAttribute::Title, "t")
        .attr(GlobalAttribute::Id, "x")
        .child(Element::span().text("s"));

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_equality_sees_nested_children() {
    let a = Element::span().attr(GlobalAttribute::Id, "1");
    let b = Element::span().attr(GlobalAttribute::Id, "2");
    assert_ne!(Element::div().child(a), Element::div().child(b));
}

#[test]
fn test_equality_sees_binding() {
    let a = Element::div().bind("a");
    let b = Element::div().bind("b");
    assert_ne!(a, b);
    assert_ne!(Element::div(), Element::span());
}
