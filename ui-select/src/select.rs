//! The `<ui-select>` widget builder.

use ngdom::{
    AttributeKey, AttributeValue, Attributes, Bindable, Element, GlobalAttribute, HasAttributes,
    HasChildren,
};

use crate::attribute::{ChoicesAttribute, MatchAttribute, UiSelectAttribute};
use crate::info::ComponentInfo;
use crate::theme::Theme;

pub const TAG: &str = "ui-select";
pub const MATCH_TAG: &str = "ui-select-match";
pub const CHOICES_TAG: &str = "ui-select-choices";

const MATCH: usize = 0;
const CHOICES: usize = 1;

/// A ui-select dropdown.
///
/// Construction creates the two structural children, the selected match
/// display followed by the choices list, in that order. They are never
/// replaced and nothing else is appended to the root; only their own
/// attributes change afterwards.
///
/// Setters are not validated. Values go straight into the markup and the
/// widget decides what to make of them.
///
/// # Example
///
/// ```
/// use ui_select::{Theme, UiSelect};
///
/// let select = UiSelect::new("name", "Pick a person", "person in people", "person.name")
///     .close_on_select(true)
///     .theme(Theme::Bootstrap)
///     .model("vm.person");
///
/// assert_eq!(select.as_element().children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiSelect {
    element: Element,
}

impl UiSelect {
    pub const INFO: ComponentInfo = ComponentInfo {
        name: "Angular UI Select",
        description: "A native AngularJS implementation of Select2/Selectize by the AngularUI Team",
        url: "https://angular-ui.github.io/ui-select",
    };

    /// Create a new select.
    ///
    /// `variable_name` is the property of the selected item shown in the
    /// match display, `item_repeat` the `repeat` expression over the
    /// choices, and `display` the expression bound into each choice.
    pub fn new(
        variable_name: impl AsRef<str>,
        placeholder: impl Into<String>,
        item_repeat: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        let selected_text = format!("{{{{$select.selected.{}}}}}", variable_name.as_ref());
        let selected = Element::new(MATCH_TAG)
            .attr(MatchAttribute::Placeholder, placeholder.into())
            .text(selected_text);

        let choices = Element::new(CHOICES_TAG)
            .attr(ChoicesAttribute::Repeat, item_repeat.into())
            .child(Element::div().attr(ChoicesAttribute::BindHtml, display.into()));

        log::debug!("[ui-select] built for {}", variable_name.as_ref());

        Self {
            element: Element::new(TAG).child(selected).child(choices),
        }
    }

    fn set(mut self, key: impl AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.element.set_attribute(key, value);
        self
    }

    /// Close a multi-select after an item is picked.
    pub fn close_on_select(self, close_on_select: bool) -> Self {
        self.set(UiSelectAttribute::CloseOnSelect, close_on_select)
    }

    /// Attach the dropdown to the document body instead of inline.
    pub fn append_to_body(self, append_to_body: bool) -> Self {
        self.set(UiSelectAttribute::AppendToBody, append_to_body)
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set(UiSelectAttribute::Disabled, disabled)
    }

    /// Bind the selection to a model expression.
    pub fn model(mut self, variable_name: impl Into<String>) -> Self {
        self.element.set_binding(variable_name);
        self
    }

    pub fn search_enabled(self, search_enabled: bool) -> Self {
        self.set(UiSelectAttribute::SearchEnabled, search_enabled)
    }

    /// Clear the search box after an option is selected.
    pub fn reset_search_input(self, reset_search_input: bool) -> Self {
        self.set(UiSelectAttribute::ResetSearchInput, reset_search_input)
    }

    pub fn theme(self, theme: Theme) -> Self {
        self.set(UiSelectAttribute::Theme, theme.to_string())
    }

    /// Enable tagging mode.
    ///
    /// Takes the name of a scope function that receives the new tag as a
    /// string and returns the value pushed onto the items array.
    pub fn tagging(self, tagging: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::Tagging, tagging.into())
    }

    /// Label shown next to new tags in the dropdown. `"false"` hides new
    /// tags from the dropdown entirely.
    pub fn tagging_label(self, tagging_label: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::TaggingLabel, tagging_label.into())
    }

    /// Keys that create a new tag, separated by `|`.
    pub fn tagging_tokens(self, tagging_tokens: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::TaggingTokens, tagging_tokens.into())
    }

    pub fn autofocus(self, autofocus: bool) -> Self {
        self.set(UiSelectAttribute::Autofocus, autofocus)
    }

    /// Skip the focusser element after an item is selected.
    pub fn skip_focusser(self, skip_focusser: bool) -> Self {
        self.set(UiSelectAttribute::SkipFocusser, skip_focusser)
    }

    /// Scope function called with the pasted text.
    pub fn paste(self, paste: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::Paste, paste.into())
    }

    /// Maximum number of selected items in multiple mode.
    pub fn limit(self, limit: i64) -> Self {
        self.set(UiSelectAttribute::Limit, limit)
    }

    /// Show a spinner while `refresh` is running.
    pub fn spinner_enabled(self, spinner_enabled: bool) -> Self {
        self.set(UiSelectAttribute::SpinnerEnabled, spinner_enabled)
    }

    pub fn spinner_class(self, spinner_class: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::SpinnerClass, spinner_class.into())
    }

    /// Id of the inner search input, for `<label for=...>`.
    pub fn input_id(self, input_id: impl Into<String>) -> Self {
        self.set(UiSelectAttribute::InputId, input_id.into())
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.set(GlobalAttribute::Title, title.into())
    }

    // Structural children

    /// Show a clear button on the match display.
    pub fn allow_clear(mut self, allow_clear: bool) -> Self {
        self.element.children_mut()[MATCH].set_attribute(MatchAttribute::AllowClear, allow_clear);
        self
    }

    /// Scope function that reloads the choices as the search text changes.
    pub fn refresh(mut self, refresh: impl Into<String>) -> Self {
        self.element.children_mut()[CHOICES]
            .set_attribute(ChoicesAttribute::Refresh, refresh.into());
        self
    }

    /// Debounce for `refresh`, in milliseconds.
    pub fn refresh_delay(mut self, delay_ms: i64) -> Self {
        self.element.children_mut()[CHOICES]
            .set_attribute(ChoicesAttribute::RefreshDelay, delay_ms);
        self
    }

    pub fn selected_match(&self) -> &Element {
        &self.element.children()[MATCH]
    }

    pub fn choices(&self) -> &Element {
        &self.element.children()[CHOICES]
    }

    // Structural access

    pub fn tag(&self) -> &'static str {
        self.element.tag()
    }

    pub fn as_element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    pub fn to_html(&self) -> String {
        ngdom::to_html(&self.element)
    }

    pub fn write_html(&self, writer: impl std::io::Write) -> crate::Result<()> {
        ngdom::write_html(&self.element, writer)?;
        Ok(())
    }
}

impl HasAttributes for UiSelect {
    fn attributes(&self) -> &Attributes {
        self.element.attributes()
    }
}

impl HasChildren for UiSelect {
    fn children(&self) -> &[Element] {
        self.element.children()
    }
}

impl Bindable for UiSelect {
    fn binding(&self) -> Option<&str> {
        self.element.binding()
    }
}

impl From<UiSelect> for Element {
    fn from(select: UiSelect) -> Self {
        select.element
    }
}

impl AsRef<Element> for UiSelect {
    fn as_ref(&self) -> &Element {
        &self.element
    }
}
