//! Attribute keys understood by the ui-select directives.

use std::str::FromStr;

use ngdom::AttributeKey;

use crate::error::Error;

/// Options on the `<ui-select>` root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSelectAttribute {
    CloseOnSelect,
    AppendToBody,
    Disabled,
    SearchEnabled,
    ResetSearchInput,
    Theme,
    Tagging,
    TaggingLabel,
    TaggingTokens,
    Autofocus,
    SkipFocusser,
    Paste,
    Limit,
    SpinnerEnabled,
    SpinnerClass,
    InputId,
}

impl UiSelectAttribute {
    pub const ALL: [UiSelectAttribute; 16] = [
        Self::CloseOnSelect,
        Self::AppendToBody,
        Self::Disabled,
        Self::SearchEnabled,
        Self::ResetSearchInput,
        Self::Theme,
        Self::Tagging,
        Self::TaggingLabel,
        Self::TaggingTokens,
        Self::Autofocus,
        Self::SkipFocusser,
        Self::Paste,
        Self::Limit,
        Self::SpinnerEnabled,
        Self::SpinnerClass,
        Self::InputId,
    ];
}

impl AttributeKey for UiSelectAttribute {
    fn key(&self) -> &'static str {
        match self {
            Self::CloseOnSelect => "close-on-select",
            Self::AppendToBody => "append-to-body",
            Self::Disabled => "disabled",
            Self::SearchEnabled => "search-enabled",
            Self::ResetSearchInput => "reset-search-input",
            Self::Theme => "theme",
            Self::Tagging => "tagging",
            Self::TaggingLabel => "tagging-label",
            Self::TaggingTokens => "tagging-tokens",
            Self::Autofocus => "autofocus",
            Self::SkipFocusser => "skip-focusser",
            Self::Paste => "paste",
            Self::Limit => "limit",
            Self::SpinnerEnabled => "spinner-enabled",
            Self::SpinnerClass => "spinner-class",
            Self::InputId => "input-id",
        }
    }
}

impl FromStr for UiSelectAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.key() == s)
            .ok_or_else(|| Error::UnknownAttribute(s.to_string()))
    }
}

/// Options on the `<ui-select-match>` child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchAttribute {
    Placeholder,
    AllowClear,
}

impl AttributeKey for MatchAttribute {
    fn key(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::AllowClear => "allow-clear",
        }
    }
}

/// Options on the `<ui-select-choices>` child and its item template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoicesAttribute {
    Repeat,
    Refresh,
    RefreshDelay,
    /// Set on the item template inside the choices.
    BindHtml,
}

impl AttributeKey for ChoicesAttribute {
    fn key(&self) -> &'static str {
        match self {
            Self::Repeat => "repeat",
            Self::Refresh => "refresh",
            Self::RefreshDelay => "refresh-delay",
            Self::BindHtml => "ng-bind-html",
        }
    }
}
