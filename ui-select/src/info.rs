/// Descriptive metadata a host shows for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}
