//! Builder for the AngularUI `ui-select` widget.
//!
//! [`UiSelect`] produces an [`ngdom::Element`] tree for the widget and
//! [`UiSelectModule`] declares the `ui.select` client-side dependency.

pub mod attribute;
pub mod error;
pub mod info;
pub mod module;
pub mod options;
pub mod select;
pub mod theme;

pub use attribute::{ChoicesAttribute, MatchAttribute, UiSelectAttribute};
pub use error::{Error, Result};
pub use info::ComponentInfo;
pub use module::UiSelectModule;
pub use options::UiSelectOptions;
pub use select::UiSelect;
pub use theme::Theme;
