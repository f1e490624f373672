//! Logging facilities for Floatfield.
//!
//! Floatfield uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("floatfield=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] can be used in filter directives to focus on
//! a single subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "floatfield_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "floatfield_core::signal";
    /// UI task queue target.
    pub const DISPATCH: &str = "floatfield_core::dispatch";
    /// Widget lifecycle target (focus, editing, delegate calls).
    pub const FIELD: &str = "floatfield::field";
    /// Label and placeholder animation target.
    pub const ANIMATION: &str = "floatfield::animation";
    /// Layout resource loading target.
    pub const RESOURCE: &str = "floatfield::resource";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::DISPATCH,
            targets::FIELD,
            targets::ANIMATION,
            targets::RESOURCE,
        ] {
            assert!(target.starts_with("floatfield"));
            assert!(target.contains("::"));
        }
        assert_eq!(targets::CORE, "floatfield_core");
    }
}
