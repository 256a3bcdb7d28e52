//! Serde-loadable widget defaults.

use serde::Deserialize;

use crate::select::UiSelect;
use crate::theme::Theme;

/// Optional settings applied to a [`UiSelect`] in one go.
///
/// Field names match the rendered attribute keys, so a host can keep
/// widget defaults in a JSON or TOML file:
///
/// ```
/// let options: ui_select::UiSelectOptions =
///     serde_json::from_str(r#"{ "theme": "select2", "search-enabled": false }"#).unwrap();
/// assert_eq!(options.theme, Some(ui_select::Theme::Select2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UiSelectOptions {
    pub close_on_select: Option<bool>,
    pub append_to_body: Option<bool>,
    pub disabled: Option<bool>,
    pub model: Option<String>,
    pub search_enabled: Option<bool>,
    pub reset_search_input: Option<bool>,
    pub theme: Option<Theme>,
    pub tagging: Option<String>,
    pub tagging_label: Option<String>,
    pub tagging_tokens: Option<String>,
    pub autofocus: Option<bool>,
    pub skip_focusser: Option<bool>,
    pub paste: Option<String>,
    pub limit: Option<i64>,
    pub spinner_enabled: Option<bool>,
    pub spinner_class: Option<String>,
    pub input_id: Option<String>,
    pub title: Option<String>,
}

impl UiSelect {
    /// Apply every option that is set. Unset options leave the select as is.
    pub fn options(self, options: UiSelectOptions) -> Self {
        let UiSelectOptions {
            close_on_select,
            append_to_body,
            disabled,
            model,
            search_enabled,
            reset_search_input,
            theme,
            tagging,
            tagging_label,
            tagging_tokens,
            autofocus,
            skip_focusser,
            paste,
            limit,
            spinner_enabled,
            spinner_class,
            input_id,
            title,
        } = options;

        let mut select = self;
        if let Some(v) = close_on_select {
            select = select.close_on_select(v);
        }
        if let Some(v) = append_to_body {
            select = select.append_to_body(v);
        }
        if let Some(v) = disabled {
            select = select.disabled(v);
        }
        if let Some(v) = model {
            select = select.model(v);
        }
        if let Some(v) = search_enabled {
            select = select.search_enabled(v);
        }
        if let Some(v) = reset_search_input {
            select = select.reset_search_input(v);
        }
        if let Some(v) = theme {
            select = select.theme(v);
        }
        if let Some(v) = tagging {
            select = select.tagging(v);
        }
        if let Some(v) = tagging_label {
            select = select.tagging_label(v);
        }
        if let Some(v) = tagging_tokens {
            select = select.tagging_tokens(v);
        }
        if let Some(v) = autofocus {
            select = select.autofocus(v);
        }
        if let Some(v) = skip_focusser {
            select = select.skip_focusser(v);
        }
        if let Some(v) = paste {
            select = select.paste(v);
        }
        if let Some(v) = limit {
            select = select.limit(v);
        }
        if let Some(v) = spinner_enabled {
            select = select.spinner_enabled(v);
        }
        if let Some(v) = spinner_class {
            select = select.spinner_class(v);
        }
        if let Some(v) = input_id {
            select = select.input_id(v);
        }
        if let Some(v) = title {
            select = select.title(v);
        }
        select
    }
}
