//! Error types for Floatfield.

/// A specialized Result type for Floatfield operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised while constructing a field widget.
///
/// Resource loading is the only fallible step. Once a widget exists, its
/// setters, animations and event handlers cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The named layout resource is not bundled with the widget.
    #[error("Layout resource '{name}' could not be found")]
    ResourceNotFound { name: String },

    /// The layout resource exists but is not valid.
    #[error("Failed to parse layout resource '{name}': {source}")]
    ResourceParse {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    /// The layout resource does not define an element the widget needs.
    #[error("Layout resource '{resource}' has no '{element}' element")]
    MissingElement { resource: String, element: String },
}

impl FieldError {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    /// Create a parse error.
    pub fn parse(name: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ResourceParse {
            name: name.into(),
            source,
        }
    }

    /// Create a missing-element error.
    pub fn missing_element(resource: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingElement {
            resource: resource.into(),
            element: element.into(),
        }
    }
}
