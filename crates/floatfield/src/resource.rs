//! The layout resource bundled with the field widget.
//!
//! The widget's three visual elements (text input, floating label and error
//! label) are described by a TOML layout resource embedded at compile time
//! with `include_dir!`. The resource also carries per-device toggle metrics
//! and the default style.
//!
//! A field cannot exist without its layout, so a missing or malformed
//! resource is reported as a [`FieldError`] at construction time.
//!
//! # Example
//!
//! ```ignore
//! use floatfield::resource::{DeviceClass, LayoutBundle};
//!
//! let layout = LayoutBundle::embedded().load("floating_field")?;
//! let style = layout.style_for(DeviceClass::Compact);
//! ```

use std::time::Duration;

use floatfield_core::logging::targets;
use floatfield_core::{FieldError, Result};
use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::style::FieldStyle;

static RESOURCES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Name of the layout resource the field loads by default.
pub const DEFAULT_LAYOUT: &str = "floating_field";

/// Coarse device class used to pick sizes.
///
/// Injected through [`LayoutConfig`] instead of being queried from the
/// platform, so the same widget can be laid out for either class anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Phone-sized screens.
    #[default]
    Compact,
    /// Tablet-sized screens.
    Large,
}

/// Layout choices injected by the host when creating a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Device class used for font and toggle sizing.
    pub device_class: DeviceClass,
    /// Name of the bundled layout resource to load.
    pub resource: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            device_class: DeviceClass::default(),
            resource: DEFAULT_LAYOUT.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Default layout for the given device class.
    pub fn for_device(device_class: DeviceClass) -> Self {
        Self {
            device_class,
            ..Self::default()
        }
    }

    /// Use a different bundled layout resource.
    pub fn with_resource(mut self, name: impl Into<String>) -> Self {
        self.resource = name.into();
        self
    }
}

/// Size and placement of the visibility toggle for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ToggleMetrics {
    /// Width and height of the (square) button.
    pub size: f32,
    /// Gap between the button and the field's trailing edge.
    #[serde(default = "default_trailing_margin")]
    pub trailing_margin: f32,
}

fn default_trailing_margin() -> f32 {
    10.0
}

impl ToggleMetrics {
    const COMPACT: Self = Self {
        size: 25.0,
        trailing_margin: 10.0,
    };
    const LARGE: Self = Self {
        size: 90.0,
        trailing_margin: 10.0,
    };
}

/// Resting and floated font sizes for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FontSizes {
    pub before: f32,
    pub after: f32,
}

/// A fully validated layout resource.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResource {
    name: String,
    field_size: Size,
    input_frame: Rect,
    label_frame: Rect,
    error_frame: Rect,
    toggle_compact: ToggleMetrics,
    toggle_large: ToggleMetrics,
    fonts_compact: Option<FontSizes>,
    fonts_large: Option<FontSizes>,
    style: FieldStyle,
}

impl LayoutResource {
    /// Parse and validate a layout resource from TOML text.
    pub fn from_toml(name: &str, text: &str) -> Result<Self> {
        let raw: RawLayout = toml::from_str(text).map_err(|source| {
            tracing::error!(target: targets::RESOURCE, resource = name, %source, "malformed layout resource");
            FieldError::parse(name, source)
        })?;

        let element = |frame: Option<ElementSpec>, element: &str| {
            frame.map(|spec| spec.frame).ok_or_else(|| {
                tracing::error!(target: targets::RESOURCE, resource = name, element, "layout element missing");
                FieldError::missing_element(name, element)
            })
        };

        let input_frame = element(raw.input, "input")?;
        let label_frame = element(raw.label, "label")?;
        let error_frame = element(raw.error_label, "error_label")?;

        let defaults = FieldStyle::default();
        let style = FieldStyle {
            before_color: raw.style.before_color.unwrap_or(defaults.before_color),
            after_color: raw.style.after_color.unwrap_or(defaults.after_color),
            required_color: raw.style.required_color.unwrap_or(defaults.required_color),
            error_color: raw.style.error_color.unwrap_or(defaults.error_color),
            animation_duration: raw
                .style
                .animation_duration_ms
                .map_or(defaults.animation_duration, Duration::from_millis),
            horizontal_offset: raw.style.horizontal_offset.unwrap_or(defaults.horizontal_offset),
            ..defaults
        };

        let field_size = raw.field.unwrap_or(Size::new(
            input_frame.max_x().max(label_frame.max_x()),
            input_frame.y + input_frame.height,
        ));

        tracing::debug!(target: targets::RESOURCE, resource = name, "layout resource loaded");

        Ok(Self {
            name: name.to_string(),
            field_size,
            input_frame,
            label_frame,
            error_frame,
            toggle_compact: raw.toggle.compact.unwrap_or(ToggleMetrics::COMPACT),
            toggle_large: raw.toggle.large.unwrap_or(ToggleMetrics::LARGE),
            fonts_compact: raw.fonts.compact,
            fonts_large: raw.fonts.large,
            style,
        })
    }

    /// The resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overall size of the field.
    pub fn field_size(&self) -> Size {
        self.field_size
    }

    /// Frame of the text input.
    pub fn input_frame(&self) -> Rect {
        self.input_frame
    }

    /// Frame of the floating label at rest.
    pub fn label_frame(&self) -> Rect {
        self.label_frame
    }

    /// Frame of the error label.
    pub fn error_frame(&self) -> Rect {
        self.error_frame
    }

    /// Toggle metrics for a device class.
    pub fn toggle_metrics(&self, device_class: DeviceClass) -> ToggleMetrics {
        match device_class {
            DeviceClass::Compact => self.toggle_compact,
            DeviceClass::Large => self.toggle_large,
        }
    }

    /// Default style for a device class.
    pub fn style_for(&self, device_class: DeviceClass) -> FieldStyle {
        let fonts = match device_class {
            DeviceClass::Compact => self.fonts_compact,
            DeviceClass::Large => self.fonts_large,
        };
        let mut style = self.style.clone();
        if let Some(fonts) = fonts {
            style.before_font_size = fonts.before;
            style.after_font_size = fonts.after;
        }
        style
    }
}

/// The set of layout resources compiled into the crate.
#[derive(Clone, Copy)]
pub struct LayoutBundle {
    dir: &'static Dir<'static>,
}

impl LayoutBundle {
    /// The bundle embedded in this crate.
    pub fn embedded() -> Self {
        Self { dir: &RESOURCES }
    }

    /// Check whether a layout with this name is bundled.
    pub fn contains(&self, name: &str) -> bool {
        self.dir.get_file(Self::file_name(name)).is_some()
    }

    /// Load and validate a bundled layout.
    pub fn load(&self, name: &str) -> Result<LayoutResource> {
        let text = self
            .dir
            .get_file(Self::file_name(name))
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| {
                tracing::error!(target: targets::RESOURCE, resource = name, "layout resource not bundled");
                FieldError::not_found(name)
            })?;
        LayoutResource::from_toml(name, text)
    }

    fn file_name(name: &str) -> String {
        format!("{name}.toml")
    }
}

#[derive(Debug, Deserialize)]
struct RawLayout {
    field: Option<Size>,
    input: Option<ElementSpec>,
    label: Option<ElementSpec>,
    error_label: Option<ElementSpec>,
    #[serde(default)]
    toggle: RawToggle,
    #[serde(default)]
    style: RawStyle,
    #[serde(default)]
    fonts: RawFonts,
}

#[derive(Debug, Deserialize)]
struct ElementSpec {
    frame: Rect,
}

#[derive(Debug, Default, Deserialize)]
struct RawToggle {
    compact: Option<ToggleMetrics>,
    large: Option<ToggleMetrics>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFonts {
    compact: Option<FontSizes>,
    large: Option<FontSizes>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    before_color: Option<Color>,
    after_color: Option<Color>,
    required_color: Option<Color>,
    error_color: Option<Color>,
    animation_duration_ms: Option<u64>,
    horizontal_offset: Option<f32>,
}
