mod attribute;

pub use attribute::{AttributeKey, AttributeValue, Attributes, GlobalAttribute};
