use ngdom::{AngularModule, ModuleRegistry};
use ui_select::UiSelectModule;

#[test]
fn test_module_name() {
    assert_eq!(UiSelectModule::new().name(), "ui.select");
    assert_eq!(UiSelectModule.name(), UiSelectModule::NAME);
}

#[test]
fn test_module_has_no_render_function() {
    assert_eq!(UiSelectModule::new().render_function(), None);
    assert_eq!(UiSelectModule.render_function(), None);
}

#[test]
fn test_module_registers_once() {
    let mut registry = ModuleRegistry::new();
    assert!(registry.register(UiSelectModule::new()));
    assert!(!registry.register(UiSelectModule::new()));

    let script = registry.render_script("app");
    assert_eq!(script, "angular.module('app', ['ui.select']);");
}
