pub mod element;
pub mod error;
pub mod module;
pub mod render;
pub mod traits;
pub mod types;

pub use element::{Content, Element};
pub use error::{Error, Result};
pub use module::{AngularModule, ModuleRegistry};
pub use render::{to_html, write_html};
pub use traits::{Bindable, HasAttributes, HasChildren};
pub use types::*;
