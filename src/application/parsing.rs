//! # Parameter Parsing
//!
//! Handlers declare how their parameters look; the host does the actual
//! parsing. A [`ParamSpec`] pairs a parameter name with a regex fragment and
//! a grouping rule, a [`CommandParser`] compiles an ordered list of specs
//! into one anchored pattern, and a successful parse yields a [`Params`] set
//! for the handler to query.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use crate::domain::error::{HandlerError, ParseSpecError};

/// How a parameter's regex fragment is grouped into the overall pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Exactly once. Rendered as `<name>` in syntax descriptions.
    Regular,
    /// At most once. Rendered as `_name_`.
    Optional,
    /// At least once. Rendered as `+name+`.
    Repeat,
    /// Any number of times. Rendered as `*name*`.
    OptionalRepeat,
}

impl Grouping {
    /// Appends the parameter's regex as a named capture group, wrapped
    /// according to this grouping rule. Occurrences are separated by
    /// whitespace or the end of input.
    fn append_group(self, out: &mut String, name: &str, pattern: &str) {
        match self {
            Grouping::Regular => {
                out.push_str(&format!("(?P<{name}>{pattern})(?:\\s+|$)"));
            }
            Grouping::Optional => {
                out.push_str(&format!("(?:(?P<{name}>{pattern})(?:\\s+|$))?"));
            }
            Grouping::Repeat => {
                out.push_str(&format!("(?P<{name}>(?:(?:{pattern})(?:\\s+|$))+)"));
            }
            Grouping::OptionalRepeat => {
                out.push_str(&format!("(?P<{name}>(?:(?:{pattern})(?:\\s*|$))*)"));
            }
        }
    }

    /// Decorates a parameter name so a syntax description makes the grouping
    /// visible, e.g. `_name_` for an optional parameter.
    pub fn decorate(self, name: &str) -> String {
        match self {
            Grouping::Regular => format!("<{name}>"),
            Grouping::Optional => format!("_{name}_"),
            Grouping::Repeat => format!("+{name}+"),
            Grouping::OptionalRepeat => format!("*{name}*"),
        }
    }
}

/// A parameter-parsing specification: a name paired with the regex fragment
/// that matches the parameter's raw form.
///
/// The fragment must not contain capture groups of its own; use
/// non-capturing `(?:...)` groups for alternation.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: String,
    pattern: String,
    grouping: Grouping,
}

impl ParamSpec {
    pub fn new(name: &str, pattern: &str) -> ParamSpec {
        ParamSpec::with_grouping(name, pattern, Grouping::Regular)
    }

    pub fn optional(name: &str, pattern: &str) -> ParamSpec {
        ParamSpec::with_grouping(name, pattern, Grouping::Optional)
    }

    pub fn repeat(name: &str, pattern: &str) -> ParamSpec {
        ParamSpec::with_grouping(name, pattern, Grouping::Repeat)
    }

    pub fn optional_repeat(name: &str, pattern: &str) -> ParamSpec {
        ParamSpec::with_grouping(name, pattern, Grouping::OptionalRepeat)
    }

    pub fn with_grouping(name: &str, pattern: &str, grouping: Grouping) -> ParamSpec {
        ParamSpec {
            name: name.to_string(),
            pattern: pattern.to_string(),
            grouping,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Parameter names double as regex capture group names.
    fn has_valid_name(&self) -> bool {
        let mut chars = self.name.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

/// A parsable specification of a command's parameters. If the raw input
/// matches the specification, this parser can extract the parameters from it.
///
/// Matching is case-insensitive and covers the whole input.
#[derive(Debug, Clone)]
pub struct CommandParser {
    specs: Vec<ParamSpec>,
    // None marks the "no parameters expected" sentinel.
    regex: Option<Regex>,
}

impl CommandParser {
    /// A parser matching a command invoked without any parameters.
    pub fn empty() -> CommandParser {
        CommandParser {
            specs: Vec::new(),
            regex: None,
        }
    }

    /// Compiles the given specs, in order, into a single parser. An empty
    /// spec list yields the same sentinel as [`CommandParser::empty`].
    pub fn new(specs: Vec<ParamSpec>) -> Result<CommandParser, ParseSpecError> {
        if specs.is_empty() {
            return Ok(CommandParser::empty());
        }

        let mut seen = std::collections::HashSet::new();
        for spec in &specs {
            if !spec.has_valid_name() {
                return Err(ParseSpecError::InvalidName(spec.name.clone()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ParseSpecError::DuplicateName(spec.name.clone()));
            }
        }

        let mut body = String::with_capacity(150);
        for spec in &specs {
            spec.grouping.append_group(&mut body, &spec.name, &spec.pattern);
        }

        let regex = RegexBuilder::new(&format!("^{body}$"))
            .case_insensitive(true)
            .build()
            .map_err(|err| Self::blame_spec(&specs, err))?;

        Ok(CommandParser {
            specs,
            regex: Some(regex),
        })
    }

    // A combined pattern only fails to compile because of one of the
    // user-supplied fragments; find which one.
    fn blame_spec(specs: &[ParamSpec], err: regex::Error) -> ParseSpecError {
        for spec in specs {
            if let Err(sub) = Regex::new(&spec.pattern) {
                return ParseSpecError::BadPattern {
                    name: spec.name.clone(),
                    source: Box::new(sub),
                };
            }
        }
        ParseSpecError::BadPattern {
            name: specs[0].name.clone(),
            source: Box::new(err),
        }
    }

    /// Whether this parser declares no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Checks if the raw input matches the specifications of this parser.
    pub fn matches(&self, input: &str) -> bool {
        match &self.regex {
            None => input.trim().is_empty(),
            Some(regex) => regex.is_match(input),
        }
    }

    /// Parses the raw input into a parameter set, or `None` when the input
    /// does not match this parser's specifications.
    ///
    /// Optional parameters that did not appear are simply absent from the
    /// returned set.
    pub fn parse(&self, input: &str) -> Option<Params> {
        let Some(regex) = &self.regex else {
            return input.trim().is_empty().then(Params::empty);
        };
        let captures = regex.captures(input)?;
        let mut values = BTreeMap::new();
        for spec in &self.specs {
            if let Some(capture) = captures.name(&spec.name) {
                let raw = capture.as_str().trim_end();
                if !raw.is_empty() {
                    values.insert(spec.name.clone(), raw.to_string());
                }
            }
        }
        Some(Params { values })
    }

    /// A description of the syntax declared by this parser, with each
    /// parameter name decorated according to its grouping.
    pub fn syntax_description(&self) -> String {
        self.specs
            .iter()
            .map(|spec| spec.grouping.decorate(&spec.name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The parameters the host parsed out of the raw input: a mapping from
/// parameter name to raw value, queried by presence check and lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn empty() -> Params {
        Params::default()
    }

    /// Builds a parameter set directly from name/value pairs. Mostly useful
    /// for hosts that extract parameters by other means, and for tests.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Params
    where
        N: Into<String>,
        V: Into<String>,
    {
        Params {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Like [`Params::get`] but failing with
    /// [`HandlerError::MissingParam`] when the parameter is absent.
    pub fn require(&self, name: &str) -> Result<&str, HandlerError> {
        self.get(name)
            .ok_or_else(|| HandlerError::MissingParam(name.to_string()))
    }

    pub fn int(&self, name: &str) -> Result<i64, HandlerError> {
        let raw = self.require(name)?;
        raw.trim().parse().map_err(|_| HandlerError::InvalidParam {
            name: name.to_string(),
            value: raw.to_string(),
        })
    }

    pub fn float(&self, name: &str) -> Result<f64, HandlerError> {
        let raw = self.require(name)?;
        raw.trim().parse().map_err(|_| HandlerError::InvalidParam {
            name: name.to_string(),
            value: raw.to_string(),
        })
    }

    /// True only when the parameter is present and reads `true` (ignoring
    /// case). Absent or non-boolean values count as false.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// The individual occurrences of a repeated parameter, split on
    /// whitespace.
    pub fn values(&self, name: &str) -> Option<Vec<&str>> {
        self.get(name).map(|v| v.split_whitespace().collect())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_param() {
        let parser = CommandParser::new(vec![ParamSpec::new("name", "[A-Za-z]+")]).unwrap();
        assert!(parser.matches("Alice"));
        assert!(!parser.matches("Alice Smith"));
        assert!(!parser.matches(""));

        let params = parser.parse("Alice").unwrap();
        assert_eq!(params.get("name"), Some("Alice"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let parser = CommandParser::new(vec![ParamSpec::new("answer", "yes|no")]).unwrap();
        assert!(parser.matches("YES"));
        assert_eq!(parser.parse("No").unwrap().get("answer"), Some("No"));
    }

    #[test]
    fn test_optional_param_may_be_absent() {
        let parser = CommandParser::new(vec![
            ParamSpec::new("event", "wave|war"),
            ParamSpec::optional("id", "\\d+"),
        ])
        .unwrap();

        let params = parser.parse("wave 17").unwrap();
        assert_eq!(params.get("event"), Some("wave"));
        assert_eq!(params.int("id").unwrap(), 17);

        let params = parser.parse("wave").unwrap();
        assert!(params.contains("event"));
        assert!(!params.contains("id"));
    }

    #[test]
    fn test_repeat_param_collects_occurrences() {
        let parser = CommandParser::new(vec![ParamSpec::repeat("users", "[a-z]+")]).unwrap();
        let params = parser.parse("alice bob carol").unwrap();
        assert_eq!(params.values("users").unwrap(), vec!["alice", "bob", "carol"]);
        assert!(!parser.matches(""));
    }

    #[test]
    fn test_optional_repeat_matches_nothing_at_all() {
        let parser = CommandParser::new(vec![ParamSpec::optional_repeat("users", "[a-z]+")]).unwrap();
        assert!(parser.matches(""));
        let params = parser.parse("").unwrap();
        assert!(!params.contains("users"));
    }

    #[test]
    fn test_empty_parser_sentinel() {
        let parser = CommandParser::empty();
        assert!(parser.is_empty());
        assert!(parser.matches(""));
        assert!(parser.matches("   "));
        assert!(!parser.matches("anything"));

        let params = parser.parse("").unwrap();
        assert!(params.is_empty());
        assert!(parser.parse("anything").is_none());
    }

    #[test]
    fn test_empty_spec_list_is_the_sentinel() {
        let parser = CommandParser::new(Vec::new()).unwrap();
        assert!(parser.is_empty());
    }

    #[test]
    fn test_non_matching_input_parses_to_none() {
        let parser = CommandParser::new(vec![ParamSpec::new("id", "\\d+")]).unwrap();
        assert!(parser.parse("baloo").is_none());
    }

    #[test]
    fn test_syntax_description_decoration() {
        let parser = CommandParser::new(vec![
            ParamSpec::new("event", "wave|war"),
            ParamSpec::optional("id", "\\d+"),
            ParamSpec::repeat("users", "[a-z]+"),
            ParamSpec::optional_repeat("tags", "\\S+"),
        ])
        .unwrap();
        assert_eq!(parser.syntax_description(), "<event> _id_ +users+ *tags*");
        assert_eq!(CommandParser::empty().syntax_description(), "");
    }

    #[test]
    fn test_duplicate_param_name_is_rejected() {
        let err = CommandParser::new(vec![
            ParamSpec::new("id", "\\d+"),
            ParamSpec::optional("id", "\\d+"),
        ])
        .unwrap_err();
        assert!(matches!(err, ParseSpecError::DuplicateName(name) if name == "id"));
    }

    #[test]
    fn test_invalid_param_name_is_rejected() {
        let err = CommandParser::new(vec![ParamSpec::new("2fast", "\\d+")]).unwrap_err();
        assert!(matches!(err, ParseSpecError::InvalidName(_)));
    }

    #[test]
    fn test_bad_pattern_is_blamed_on_its_spec() {
        let err = CommandParser::new(vec![
            ParamSpec::new("ok", "\\d+"),
            ParamSpec::new("broken", "[unclosed"),
        ])
        .unwrap_err();
        assert!(matches!(err, ParseSpecError::BadPattern { name, .. } if name == "broken"));
    }

    #[test]
    fn test_typed_getters() {
        let params = Params::from_pairs([
            ("int", "1"),
            ("notint", "baloo"),
            ("long", "100000000000000000"),
            ("boolean", "true"),
            ("notboolean", "1"),
            ("double", "42.05234"),
            ("string", "something"),
            ("array", "true false apa bapa"),
        ]);

        assert_eq!(params.int("int").unwrap(), 1);
        assert_eq!(params.int("long").unwrap(), 100_000_000_000_000_000);
        assert_eq!(params.float("double").unwrap(), 42.05234);
        assert_eq!(params.get("string"), Some("something"));
        assert!(params.flag("boolean"));
        assert!(!params.flag("notboolean"));
        assert!(!params.flag("missing"));
        assert_eq!(
            params.values("array").unwrap(),
            vec!["true", "false", "apa", "bapa"]
        );

        assert!(matches!(
            params.int("notint"),
            Err(HandlerError::InvalidParam { .. })
        ));
        assert!(matches!(
            params.int("missing"),
            Err(HandlerError::MissingParam(_))
        ));
        assert!(matches!(
            params.float("notint"),
            Err(HandlerError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_params_emptiness() {
        assert!(Params::empty().is_empty());
        assert!(!Params::from_pairs([("a", "b")]).is_empty());
    }
}
