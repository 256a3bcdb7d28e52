use ngdom::{AttributeValue, Bindable, HasAttributes};
use ui_select::{Error, Theme, UiSelect, UiSelectAttribute, UiSelectOptions};

fn people() -> UiSelect {
    UiSelect::new("name", "Pick a person", "person in people", "person.name")
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_default_options_change_nothing() {
    assert_eq!(people().options(UiSelectOptions::default()), people());
}

#[test]
fn test_options_from_json() {
    let options: UiSelectOptions = serde_json::from_str(
        r#"{
            "theme": "selectize",
            "close-on-select": false,
            "limit": 4,
            "model": "vm.people",
            "tagging-tokens": "ENTER|,"
        }"#,
    )
    .unwrap();

    let select = people().options(options);

    assert_eq!(select.attributes().len(), 4);
    assert_eq!(
        select.attribute(UiSelectAttribute::Theme),
        Some(&AttributeValue::Text("selectize".into()))
    );
    assert_eq!(
        select.attribute(UiSelectAttribute::CloseOnSelect),
        Some(&AttributeValue::Bool(false))
    );
    assert_eq!(
        select.attribute(UiSelectAttribute::Limit),
        Some(&AttributeValue::Integer(4))
    );
    assert_eq!(select.binding(), Some("vm.people"));
}

#[test]
fn test_options_match_setters() {
    let options = UiSelectOptions {
        disabled: Some(true),
        title: Some("People".into()),
        ..Default::default()
    };

    let expected = people().disabled(true).title("People");
    assert_eq!(people().options(options), expected);
}

#[test]
fn test_options_reject_unknown_theme() {
    let json = r#"{ "theme": "material" }"#;
    let result: Result<UiSelectOptions, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_theme_display_and_parse() {
    for theme in Theme::ALL {
        assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
    }
    assert_eq!("Select2".parse::<Theme>().unwrap(), Theme::Select2);

    match "material".parse::<Theme>() {
        Err(Error::UnknownTheme(name)) => assert_eq!(name, "material"),
        other => panic!("expected an unknown theme error, got {other:?}"),
    }
}

#[test]
fn test_attribute_parse() {
    assert_eq!(
        "skip-focusser".parse::<UiSelectAttribute>().unwrap(),
        UiSelectAttribute::SkipFocusser
    );
    assert!(matches!(
        "close_on_select".parse::<UiSelectAttribute>(),
        Err(Error::UnknownAttribute(_))
    ));
}
