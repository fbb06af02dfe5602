//! Parameter typing and default stripping
//!
//! Operations accept dozens of optional parameters with sensible
//! server-side defaults; sending every default explicitly would bloat
//! requests and risk drifting from the server's own defaults over time.
//! `changed_params` reduces a full argument set down to the entries that
//! actually differ from the schema defaults, enforcing the schema types
//! along the way.

use super::operation::Operation;
use crate::api::error::Error;

/// A caller-supplied parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// The schema default for one parameter.
///
/// `Mandatory` marks a parameter with no default: it must always be
/// supplied and is always typed as a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Mandatory,
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "string",
            ParamValue::Int(_) => "integer",
            ParamValue::Bool(_) => "boolean",
        }
    }

    /// Truthiness coercion used when diffing boolean-defaulted parameters.
    ///
    /// Matches loose HTTP parameter semantics: an empty string and `"0"`
    /// are false, any other string is true; integers are true when
    /// non-zero.
    fn truthy(&self) -> bool {
        match self {
            ParamValue::Str(s) => !s.is_empty() && s != "0",
            ParamValue::Int(n) => *n != 0,
            ParamValue::Bool(b) => *b,
        }
    }

    /// Wire representation of the value for a query string or form body.
    pub fn to_wire(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Strip extra and default-valued parameters for an operation.
///
/// Walks `args` in order and keeps an entry when the schema for `op`
/// recognizes it and its value differs from the schema default:
///
/// - unknown names are dropped silently (the caller side may carry extras
///   the target operation does not recognize);
/// - mandatory entries are dropped wholesale when `keep_mandatory` is
///   false (they are already embedded in the route path), otherwise their
///   value must be a string and is kept unconditionally;
/// - string comparisons trim the caller value first but keep the original
///   untrimmed value on inclusion;
/// - boolean comparisons coerce the caller value to its truthiness and
///   keep the coerced value, so no type mismatch is possible here;
/// - integer comparisons are direct equality.
///
/// Fails with [`Error::TypeMismatch`] when a value's type does not match
/// its schema default. Output preserves the input ordering.
pub fn changed_params(
    args: &[(&str, ParamValue)],
    op: Operation,
    keep_mandatory: bool,
) -> Result<Vec<(String, ParamValue)>, Error> {
    let schema = op.schema();
    let mut changed = Vec::new();

    for (name, value) in args {
        let Some((_, default)) = schema.iter().find(|(k, _)| k == name) else {
            continue;
        };

        match default {
            ParamDefault::Mandatory => {
                if !keep_mandatory {
                    continue;
                }
                if !matches!(value, ParamValue::Str(_)) {
                    return Err(type_mismatch(name, "string", value));
                }
                changed.push((name.to_string(), value.clone()));
            }
            ParamDefault::Str(d) => {
                let ParamValue::Str(s) = value else {
                    return Err(type_mismatch(name, "string", value));
                };
                // Trimming is only used for the comparison; the value is
                // kept unchanged.
                if s.trim() != *d {
                    changed.push((name.to_string(), value.clone()));
                }
            }
            ParamDefault::Int(d) => {
                let ParamValue::Int(n) = value else {
                    return Err(type_mismatch(name, "integer", value));
                };
                if n != d {
                    changed.push((name.to_string(), value.clone()));
                }
            }
            ParamDefault::Bool(d) => {
                let coerced = value.truthy();
                if coerced != *d {
                    changed.push((name.to_string(), ParamValue::Bool(coerced)));
                }
            }
        }
    }

    Ok(changed)
}

fn type_mismatch(name: &str, expected: &'static str, value: &ParamValue) -> Error {
    Error::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: value.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_val(s: &str) -> ParamValue {
        ParamValue::from(s)
    }

    /// Full argument set for the global search method, all at defaults.
    fn search_defaults() -> Vec<(&'static str, ParamValue)> {
        vec![
            ("query", str_val("cat")),
            ("lang", str_val("")),
            ("labellang", str_val("")),
            ("vocab", str_val("")),
            ("type", str_val("")),
            ("parent", str_val("")),
            ("group", str_val("")),
            ("maxhits", ParamValue::Int(0)),
            ("offset", ParamValue::Int(0)),
            ("fields", str_val("")),
            ("unique", ParamValue::Bool(false)),
        ]
    }

    #[test]
    fn test_all_defaults_yields_only_mandatory_keys() {
        let changed = changed_params(&search_defaults(), Operation::Search, true).unwrap();
        assert_eq!(changed, vec![("query".to_string(), str_val("cat"))]);
    }

    #[test]
    fn test_mandatory_dropped_when_not_kept() {
        let changed = changed_params(&search_defaults(), Operation::Search, false).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_whitespace_only_string_equals_empty_default() {
        let args = [("uri", str_val("x")), ("lang", str_val(" "))];
        let changed = changed_params(&args, Operation::Label, true).unwrap();
        assert_eq!(changed, vec![("uri".to_string(), str_val("x"))]);
    }

    #[test]
    fn test_changed_string_kept_untrimmed() {
        let args = [("uri", str_val("x")), ("lang", str_val(" fi "))];
        let changed = changed_params(&args, Operation::Label, true).unwrap();
        assert_eq!(changed[1], ("lang".to_string(), str_val(" fi ")));
    }

    #[test]
    fn test_truthy_integer_coerced_for_boolean_default() {
        let args = [("unique", ParamValue::Int(1))];
        let changed = changed_params(&args, Operation::Search, true).unwrap();
        assert_eq!(changed, vec![("unique".to_string(), ParamValue::Bool(true))]);
    }

    #[test]
    fn test_falsy_values_match_false_default() {
        for falsy in [ParamValue::Int(0), str_val(""), str_val("0")] {
            let args = [("unique", falsy)];
            let changed = changed_params(&args, Operation::Search, true).unwrap();
            assert!(changed.is_empty());
        }
    }

    #[test]
    fn test_boolean_default_true_strips_true() {
        let args = [("external", ParamValue::Bool(true))];
        let changed = changed_params(&args, Operation::Mappings, true).unwrap();
        assert!(changed.is_empty());

        let args = [("external", ParamValue::Bool(false))];
        let changed = changed_params(&args, Operation::Mappings, true).unwrap();
        assert_eq!(
            changed,
            vec![("external".to_string(), ParamValue::Bool(false))]
        );
    }

    #[test]
    fn test_integer_where_string_expected_fails() {
        let args = [("uri", str_val("x")), ("lang", ParamValue::Int(3))];
        let err = changed_params(&args, Operation::Label, true).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { name, expected: "string", actual: "integer" } if name == "lang"
        ));
    }

    #[test]
    fn test_string_where_integer_expected_fails() {
        let args = [("maxhits", str_val("10"))];
        let err = changed_params(&args, Operation::Search, true).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { name, expected: "integer", actual: "string" } if name == "maxhits"
        ));
    }

    #[test]
    fn test_mandatory_requires_string() {
        let args = [("query", ParamValue::Int(7))];
        let err = changed_params(&args, Operation::Search, true).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_keys_dropped_silently() {
        let args = [
            ("query", str_val("cat")),
            ("labellang", str_val("fi")),
            ("bogus", str_val("zzz")),
        ];
        // labellang exists for global search but not for vocabulary search.
        let changed = changed_params(&args, Operation::VocabularySearch, true).unwrap();
        assert_eq!(changed, vec![("query".to_string(), str_val("cat"))]);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let args = [
            ("unique", ParamValue::Bool(true)),
            ("query", str_val("cat")),
            ("maxhits", ParamValue::Int(5)),
        ];
        let changed = changed_params(&args, Operation::Search, true).unwrap();
        let keys: Vec<&str> = changed.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["unique", "query", "maxhits"]);
    }
}
