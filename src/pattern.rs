//! The textual template a resolver signature has to fit.
//!
//! A pattern is a literal receiver prefix, a function name, a literal leading
//! context parameter, the captured parameter list and a suffix running up to
//! the opening `{` of the body.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEADING_PARAM, DEFAULT_RECEIVER_PREFIX};
use crate::error::Result;

/// Name of the capture group holding the function name.
pub const NAME_GROUP: &str = "name";
/// Name of the capture group holding the parameter list.
pub const PARAMS_GROUP: &str = "params";

/// Characters the captured parameter list may consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptureClass {
    /// Only `.`, `[` and `]`. Real parameter lists containing identifiers,
    /// commas or spaces do not match.
    Narrow,
    /// Anything but parentheses and braces, newlines included.
    #[default]
    ParamList,
}

impl CaptureClass {
    /// Regex fragment for one or more characters of this class.
    pub fn regex_fragment(&self) -> &'static str {
        match self {
            CaptureClass::Narrow => r"[.\[\]]+",
            CaptureClass::ParamList => r"[^(){}]+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shape of a resolver signature whose parameter list gets captured.
pub struct SignaturePattern {
    /// Literal text the signature starts with, e.g. `func (r *Resolver) `.
    #[serde(default = "default_receiver_prefix")]
    pub receiver_prefix: String,
    /// Literal first parameter, followed in the source by a comma.
    #[serde(default = "default_leading_param")]
    pub leading_param: String,
    /// Characters allowed in the captured parameter list.
    #[serde(default)]
    pub capture_class: CaptureClass,
}

impl Default for SignaturePattern {
    fn default() -> Self {
        Self {
            receiver_prefix: default_receiver_prefix(),
            leading_param: default_leading_param(),
            capture_class: CaptureClass::default(),
        }
    }
}

fn default_receiver_prefix() -> String {
    DEFAULT_RECEIVER_PREFIX.to_string()
}

fn default_leading_param() -> String {
    DEFAULT_LEADING_PARAM.to_string()
}

impl SignaturePattern {
    /// Same pattern with a different capture class.
    pub fn with_capture_class(mut self, capture_class: CaptureClass) -> Self {
        self.capture_class = capture_class;
        self
    }

    /// Regex source for this pattern. Literal parts are escaped.
    pub fn to_regex_source(&self) -> String {
        format!(
            r"{prefix}(?P<{name}>[A-Za-z_][A-Za-z0-9_]*)\({leading},\s*(?P<{params}>{class})\)[^{{\n]*\{{",
            prefix = regex::escape(&self.receiver_prefix),
            name = NAME_GROUP,
            leading = regex::escape(&self.leading_param),
            params = PARAMS_GROUP,
            class = self.capture_class.regex_fragment(),
        )
    }

    /// Compiles the pattern.
    pub fn compile(&self) -> Result<Regex> {
        let source = self.to_regex_source();
        log::debug!("Compiling signature pattern: {}", source);
        Ok(Regex::new(&source)?)
    }
}
