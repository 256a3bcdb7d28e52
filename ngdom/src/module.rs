//! AngularJS module declarations.
//!
//! Plugins declare the client-side module they depend on; the registry
//! gathers them into the application's bootstrap script.

use std::fmt::Write;

/// A client-side AngularJS module a component depends on.
pub trait AngularModule: Send + Sync {
    /// Dependency name passed to `angular.module`.
    fn name(&self) -> &str;

    /// Extra script emitted once at render time, if any.
    fn render_function(&self) -> Option<String> {
        None
    }
}

/// Registry of the modules an application depends on.
///
/// Modules are kept in registration order. A second module with an
/// already registered name is ignored.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn AngularModule>>,
}

impl ModuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. Returns false if its name was already present.
    pub fn register(&mut self, module: impl AngularModule + 'static) -> bool {
        if self.contains(module.name()) {
            log::debug!("[modules] {} already registered, skipping", module.name());
            return false;
        }

        log::debug!("[modules] registered {}", module.name());
        self.modules.push(Box::new(module));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.name() == name)
    }

    /// Dependency names in registration order.
    pub fn dependencies(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Render the bootstrap script for `app_name`.
    ///
    /// The first line declares the application module with every
    /// dependency; each module's render function follows on its own line.
    pub fn render_script(&self, app_name: &str) -> String {
        let deps = self
            .dependencies()
            .iter()
            .map(|name| format!("'{name}'"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut script = format!("angular.module('{app_name}', [{deps}]);");
        for function in self.modules.iter().filter_map(|m| m.render_function()) {
            if function.is_empty() {
                continue;
            }
            let _ = write!(script, "\n{function}");
        }
        script
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.dependencies())
            .finish()
    }
}
