use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

use crate::error::Result;
use crate::pattern::{SignaturePattern, NAME_GROUP, PARAMS_GROUP};

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(|| Extractor {
    pattern: SignaturePattern::default(),
    regex: Regex::new(&SignaturePattern::default().to_regex_source())
        .expect("default signature pattern is a valid regex"),
});

/// One qualifying signature found in a source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureMatch<'a> {
    /// Resolver method name
    pub name: &'a str,
    /// Captured parameter list following the leading context parameter
    pub params: &'a str,
    /// Byte range of `params` in the source
    pub params_span: Range<usize>,
    /// Byte range of the whole signature, up to and including the `{`
    pub span: Range<usize>,
    /// 1-based line the signature starts on
    pub line_number: usize,
}

/// Compiled signature pattern
#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: SignaturePattern,
    regex: Regex,
}

impl Extractor {
    /// Compiles `pattern` into an extractor.
    pub fn new(pattern: SignaturePattern) -> Result<Self> {
        let regex = pattern.compile()?;
        Ok(Self { pattern, regex })
    }

    /// The shared extractor for the default resolver pattern.
    pub fn default_ref() -> &'static Extractor {
        &DEFAULT_EXTRACTOR
    }

    pub fn pattern(&self) -> &SignaturePattern {
        &self.pattern
    }

    /// Captured parameter lists of every match, in source order.
    pub fn extract<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(source)
            .filter_map(|caps| caps.name(PARAMS_GROUP).map(|m| m.as_str()))
    }

    /// Full match details, in source order.
    pub fn matches<'a>(&'a self, source: &'a str) -> impl Iterator<Item = SignatureMatch<'a>> + 'a {
        let mut line = 1;
        let mut line_cursor = 0;
        self.regex.captures_iter(source).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let name = caps.name(NAME_GROUP)?;
            let params = caps.name(PARAMS_GROUP)?;
            // Matches arrive in order, so newlines are only counted once.
            line += source[line_cursor..whole.start()].matches('\n').count();
            line_cursor = whole.start();
            Some(SignatureMatch {
                name: name.as_str(),
                params: params.as_str(),
                params_span: params.range(),
                span: whole.range(),
                line_number: line,
            })
        })
    }

    /// First qualifying signature, if any.
    pub fn first_match<'a>(&'a self, source: &'a str) -> Option<SignatureMatch<'a>> {
        self.matches(source).next()
    }
}

/// Extracts the parameter list of every resolver signature in `source`
/// using the default pattern.
///
/// Input that contains no qualifying signature yields an empty sequence.
pub fn extract(source: &str) -> impl Iterator<Item = &str> {
    Extractor::default_ref().extract(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::CaptureClass;

    const TWO_RESOLVERS: &str = r#"
func (r *Resolver) MenuCreate(ctx context.Context, input MenuCreateInput) (*MenuCreate, error) {
	panic(fmt.Errorf("not implemented"))
}

func (r *Resolver) MenuUpdate(ctx context.Context, id string, input MenuInput) (*MenuUpdate, error) {
	panic(fmt.Errorf("not implemented"))
}
"#;

    fn narrow() -> Extractor {
        Extractor::new(SignaturePattern::default().with_capture_class(CaptureClass::Narrow)).unwrap()
    }

    #[test]
    fn test_no_signatures_yields_nothing() {
        assert_eq!(extract("").count(), 0);
        assert_eq!(extract("package graphql\n\nvar x = 42\n").count(), 0);
        assert_eq!(extract("func (r *Resolver) Broken(ctx context.Context").count(), 0);
    }

    #[test]
    fn test_single_signature() {
        let source = "func (r *Resolver) Foo(ctx context.Context, a []int) (*X, error) {";
        let found: Vec<&str> = extract(source).collect();
        assert_eq!(found, vec!["a []int"]);
    }

    #[test]
    fn test_two_signatures_in_order() {
        let found: Vec<&str> = extract(TWO_RESOLVERS).collect();
        assert_eq!(found, vec!["input MenuCreateInput", "id string, input MenuInput"]);
    }

    #[test]
    fn test_extract_is_repeatable() {
        let first: Vec<&str> = extract(TWO_RESOLVERS).collect();
        let second: Vec<&str> = extract(TWO_RESOLVERS).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_free_function_and_other_receivers_ignored() {
        let source = r#"
func Foo(ctx context.Context, id string) (*X, error) {
}
func (r *mutationResolver) Bar(ctx context.Context, id string) (*X, error) {
}
func (r *Resolver) Baz(id string) (*X, error) {
}
"#;
        assert_eq!(extract(source).count(), 0);
    }

    #[test]
    fn test_already_converted_signature_ignored() {
        let source = "func (r *Resolver) InvoiceRequestDelete(ctx context.Context, args struct{ Id string }) (*InvoiceRequestDelete, error) {";
        assert_eq!(extract(source).count(), 0);
        assert_eq!(narrow().extract(source).count(), 0);
    }

    #[test]
    fn test_narrow_class_only_captures_dots_and_brackets() {
        let extractor = narrow();
        let source = "func (r *Resolver) Foo(ctx context.Context, a []int) (*X, error) {\n\
                      func (r *Resolver) Bar(ctx context.Context, []) (*X, error) {\n\
                      func (r *Resolver) Baz(ctx context.Context, ...) (*X, error) {";
        let found: Vec<&str> = extractor.extract(source).collect();
        assert_eq!(found, vec!["[]", "..."]);
    }

    #[test]
    fn test_multiline_parameter_list() {
        let source = "func (r *Resolver) Foo(ctx context.Context,\n\tid string,\n\tfirst *int32,\n) (*X, error) {";
        let found: Vec<&str> = extract(source).collect();
        assert_eq!(found, vec!["id string,\n\tfirst *int32,\n"]);
    }

    #[test]
    fn test_matches_report_names_spans_and_lines() {
        let matches: Vec<SignatureMatch> = Extractor::default_ref().matches(TWO_RESOLVERS).collect();
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].name, "MenuCreate");
        assert_eq!(matches[0].line_number, 2);
        assert_eq!(&TWO_RESOLVERS[matches[0].params_span.clone()], "input MenuCreateInput");
        assert!(TWO_RESOLVERS[matches[0].span.clone()].ends_with('{'));

        assert_eq!(matches[1].name, "MenuUpdate");
        assert_eq!(matches[1].line_number, 6);
    }

    #[test]
    fn test_first_match() {
        let first = Extractor::default_ref().first_match(TWO_RESOLVERS).unwrap();
        assert_eq!(first.name, "MenuCreate");
        assert!(Extractor::default_ref().first_match("package graphql").is_none());
    }

    #[test]
    fn test_signature_without_return_tuple() {
        let source = "func (r *Resolver) Ping(ctx context.Context, msg string) string {";
        let found: Vec<&str> = extract(source).collect();
        assert_eq!(found, vec!["msg string"]);
    }
}
