//! Builds the `args struct { ... }` declaration that replaces a resolver's
//! positional parameters.
//!
//! A captured list such as `id string, first, last *int32` becomes
//!
//! ```text
//! args struct {
//! 	Id    string
//! 	First *int32
//! 	Last  *int32
//! }
//! ```
//!
//! Field names are exported (first letter upper-cased) and types are aligned
//! the way gofmt aligns struct fields.

use crate::constants::ARGS_PARAM_NAME;
use crate::error::{Result, SigScanError};

/// One field of the generated struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsField {
    pub name: String,
    pub ty: String,
}

/// The struct parameter built from a captured parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsBlock {
    pub fields: Vec<ArgsField>,
}

impl ArgsBlock {
    /// Parses a captured parameter list.
    ///
    /// Tokens are split on commas and trimmed. Empty tokens (a trailing comma
    /// in a multi-line list) are skipped. A token holding only a name takes
    /// the type of the next typed token, as in Go's `a, b string`.
    pub fn parse(params: &str) -> Result<Self> {
        let tokens: Vec<&str> = params
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(SigScanError::InvalidParameter(
                "parameter list is empty".to_string(),
            ));
        }

        let mut fields = Vec::with_capacity(tokens.len());
        let mut pending: Vec<&str> = Vec::new();

        for token in tokens {
            match token.split_once(char::is_whitespace) {
                Some((name, ty)) => {
                    let ty = normalize_type(ty.trim());
                    for grouped in pending.drain(..) {
                        fields.push(ArgsField {
                            name: export_name(grouped),
                            ty: ty.clone(),
                        });
                    }
                    fields.push(ArgsField {
                        name: export_name(name),
                        ty,
                    });
                }
                None => pending.push(token),
            }
        }

        if let Some(untyped) = pending.first() {
            return Err(SigScanError::InvalidParameter(format!(
                "parameter '{}' has no type",
                untyped
            )));
        }

        Ok(Self { fields })
    }

    /// Go source for the struct parameter, including the `args` name.
    pub fn render(&self) -> String {
        if let [field] = self.fields.as_slice() {
            return format!("{} struct{{ {} {} }}", ARGS_PARAM_NAME, field.name, field.ty);
        }

        let width = self
            .fields
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{} struct {{\n", ARGS_PARAM_NAME);
        for field in &self.fields {
            out.push_str(&format!("\t{:<width$} {}\n", field.name, field.ty, width = width));
        }
        out.push('}');
        out
    }
}

/// Upper-cases the first letter so the field is exported.
fn export_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Variadic parameters become slices; struct fields cannot be variadic.
fn normalize_type(ty: &str) -> String {
    match ty.strip_prefix("...") {
        Some(elem) => format!("[]{}", elem),
        None => ty.to_string(),
    }
}
