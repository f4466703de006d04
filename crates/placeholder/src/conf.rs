//! Placeholder configuration.
//!
//! [`Conf`] is the resolved, immutable configuration a controller is built
//! with. [`Options`] carries per-call overrides; every field left `None`
//! falls back to the page's defaults.

use crate::deferred::CancellationCheck;
use crate::selector::FieldSelector;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_ATTR: &str = "placeholder";
pub const DEFAULT_COLOR: &str = "silver";
pub const DEFAULT_CSS_CLASS: &str = "placeholder";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conf {
    /// Whether placeholders are emulated at all.
    pub enabled: bool,
    /// Fields picked out of form targets.
    pub elements: FieldSelector,
    /// Attribute holding the placeholder text. Empty disables the lookup.
    pub attr: String,
    /// Text color while the placeholder is shown. Empty leaves color alone.
    pub color: String,
    /// Class added while the placeholder is shown. Empty adds none.
    pub css_class: String,
    /// Fallback text when the attribute is missing or empty.
    pub message: String,
    pub cancellation: CancellationCheck,
}

impl Conf {
    /// Defaults for a platform with or without native placeholder support.
    /// Emulation is only enabled where native support is missing.
    pub fn defaults(native_placeholder_support: bool) -> Self {
        Self {
            enabled: !native_placeholder_support,
            elements: FieldSelector::default(),
            attr: DEFAULT_ATTR.to_string(),
            color: DEFAULT_COLOR.to_string(),
            css_class: DEFAULT_CSS_CLASS.to_string(),
            message: String::new(),
            cancellation: CancellationCheck::default(),
        }
    }

    /// Resolve `options` over `self`.
    pub fn merge(&self, options: &Options) -> Conf {
        Conf {
            enabled: options.enabled.unwrap_or(self.enabled),
            elements: options
                .elements
                .clone()
                .unwrap_or_else(|| self.elements.clone()),
            attr: pick(&options.attr, &self.attr),
            color: pick(&options.color, &self.color),
            css_class: pick(&options.css_class, &self.css_class),
            message: pick(&options.message, &self.message),
            cancellation: options.cancellation.unwrap_or(self.cancellation),
        }
    }

    /// Apply overrides in place; used to edit page-wide defaults.
    pub fn update(&mut self, options: &Options) {
        *self = self.merge(options);
    }
}

fn pick(over: &Option<String>, base: &str) -> String {
    over.clone().unwrap_or_else(|| base.to_string())
}

/// Per-call overrides.
///
/// ```
/// use placeholder::Options;
///
/// let opts = Options::from_toml_str(r##"
///     color = "#ff8888"
///     cssClass = "hint"
///     elements = ":text,textarea"
/// "##).unwrap();
/// assert_eq!(opts.css_class.as_deref(), Some("hint"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub enabled: Option<bool>,
    pub elements: Option<FieldSelector>,
    pub attr: Option<String>,
    pub color: Option<String>,
    pub css_class: Option<String>,
    pub message: Option<String>,
    pub cancellation: Option<CancellationCheck>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.message().to_string()))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn elements(mut self, elements: FieldSelector) -> Self {
        self.elements = Some(elements);
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn cancellation(mut self, check: CancellationCheck) -> Self {
        self.cancellation = Some(check);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid placeholder options: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
