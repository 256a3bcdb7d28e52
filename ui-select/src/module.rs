use ngdom::AngularModule;

/// Declares the `ui.select` AngularJS module.
///
/// The dependency name is all the host needs to wire in the client-side
/// library, so no render function is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiSelectModule;

impl UiSelectModule {
    pub const NAME: &'static str = "ui.select";

    pub fn new() -> Self {
        Self
    }
}

impl AngularModule for UiSelectModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render_function(&self) -> Option<String> {
        None
    }
}
