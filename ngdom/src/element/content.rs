use super::Element;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}
