//! Skosmos API operation registry
//!
//! One `Operation` variant per logical API method, with the route template
//! and parameter schema attached as static match tables. Keeping the
//! catalogue a closed enum gives exhaustiveness checking wherever an
//! operation is dispatched on, instead of stringly-typed lookups.

use super::params::ParamDefault;
use super::params::ParamDefault::{Bool, Int, Mandatory, Str};

/// A logical Skosmos REST API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /* Global methods */
    Vocabularies,
    Search,
    Label,
    Data,
    Types,
    /* Vocabulary-specific methods */
    VocabularyInfo,
    VocabularyTypes,
    VocabularyTopConcepts,
    VocabularyData,
    VocabularySearch,
    VocabularyLookup,
    VocabularyStatistics,
    LabelStatistics,
    VocabularyIndex,
    VocabularyIndexLetter,
    VocabularyGroups,
    VocabularyNew,
    VocabularyModified,
    /* Concept-specific methods */
    VocabularyLabel,
    Broader,
    BroaderTransitive,
    Narrower,
    NarrowerTransitive,
    Related,
    Children,
    GroupMembers,
    Hierarchy,
    Mappings,
}

/// Expected shape of an operation's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// JSON, decoded strictly.
    Json,
    /// Raw serialization bytes (Turtle, RDF/XML, MARCXML, ...), passed
    /// through untouched.
    Raw,
}

/// Schema shared by operations taking only a vocabulary id and a label
/// language.
const VOCAB: &[(&str, ParamDefault)] = &[("vocid", Mandatory), ("lang", Str(""))];

/// Schema shared by the concept hierarchy operations.
const CONCEPT: &[(&str, ParamDefault)] = &[
    ("vocid", Mandatory),
    ("uri", Mandatory),
    ("lang", Str("")),
];

/// Schema shared by the change-list operations (`new`, `modified`).
const CHANGE_LIST: &[(&str, ParamDefault)] = &[
    ("vocid", Mandatory),
    ("lang", Str("")),
    ("offset", Int(0)),
    ("limit", Int(200)),
];

impl Operation {
    /// Every operation in the catalogue, for exhaustive table checks.
    pub const ALL: [Operation; 28] = [
        Operation::Vocabularies,
        Operation::Search,
        Operation::Label,
        Operation::Data,
        Operation::Types,
        Operation::VocabularyInfo,
        Operation::VocabularyTypes,
        Operation::VocabularyTopConcepts,
        Operation::VocabularyData,
        Operation::VocabularySearch,
        Operation::VocabularyLookup,
        Operation::VocabularyStatistics,
        Operation::LabelStatistics,
        Operation::VocabularyIndex,
        Operation::VocabularyIndexLetter,
        Operation::VocabularyGroups,
        Operation::VocabularyNew,
        Operation::VocabularyModified,
        Operation::VocabularyLabel,
        Operation::Broader,
        Operation::BroaderTransitive,
        Operation::Narrower,
        Operation::NarrowerTransitive,
        Operation::Related,
        Operation::Children,
        Operation::GroupMembers,
        Operation::Hierarchy,
        Operation::Mappings,
    ];

    /// URL route template relative to the REST API base URL.
    ///
    /// Placeholders are enclosed in curly braces and are substituted from
    /// path values (see `route::substitute`). A trailing slash is
    /// meaningful: `{vocid}/` and `{vocid}/index/` address different
    /// resources than their slashless forms would.
    pub fn route(self) -> &'static str {
        match self {
            Operation::Vocabularies => "vocabularies",
            Operation::Search => "search",
            Operation::Label => "label",
            Operation::Data => "data",
            Operation::Types => "types",
            Operation::VocabularyInfo => "{vocid}/",
            Operation::VocabularyTypes => "{vocid}/types",
            Operation::VocabularyTopConcepts => "{vocid}/topConcepts",
            Operation::VocabularyData => "{vocid}/data",
            Operation::VocabularySearch => "{vocid}/search",
            Operation::VocabularyLookup => "{vocid}/lookup",
            Operation::VocabularyStatistics => "{vocid}/vocabularyStatistics",
            Operation::LabelStatistics => "{vocid}/labelStatistics",
            Operation::VocabularyIndex => "{vocid}/index/",
            Operation::VocabularyIndexLetter => "{vocid}/index/{letter}",
            Operation::VocabularyGroups => "{vocid}/groups",
            Operation::VocabularyNew => "{vocid}/new",
            Operation::VocabularyModified => "{vocid}/modified",
            Operation::VocabularyLabel => "{vocid}/label",
            Operation::Broader => "{vocid}/broader",
            Operation::BroaderTransitive => "{vocid}/broaderTransitive",
            Operation::Narrower => "{vocid}/narrower",
            Operation::NarrowerTransitive => "{vocid}/narrowerTransitive",
            Operation::Related => "{vocid}/related",
            Operation::Children => "{vocid}/children",
            Operation::GroupMembers => "{vocid}/groupMembers",
            Operation::Hierarchy => "{vocid}/hierarchy",
            Operation::Mappings => "{vocid}/mappings",
        }
    }

    /// Parameter schema in wire order.
    ///
    /// Each entry pairs a parameter name with its default value; the
    /// default's type is the parameter's expected type. `Mandatory`
    /// entries have no default, must always be supplied, and are typed as
    /// strings. Route placeholders are always `Mandatory` entries of the
    /// same name.
    pub fn schema(self) -> &'static [(&'static str, ParamDefault)] {
        match self {
            Operation::Vocabularies | Operation::Types => &[("lang", Mandatory)],
            Operation::Search => &[
                ("query", Mandatory),
                ("lang", Str("")),
                ("labellang", Str("")),
                ("vocab", Str("")),
                ("type", Str("")),
                ("parent", Str("")),
                ("group", Str("")),
                ("maxhits", Int(0)),
                ("offset", Int(0)),
                ("fields", Str("")),
                ("unique", Bool(false)),
            ],
            Operation::Label => &[("uri", Mandatory), ("lang", Str(""))],
            Operation::Data => &[("uri", Mandatory), ("format", Str(""))],
            Operation::VocabularyInfo
            | Operation::VocabularyTypes
            | Operation::VocabularyStatistics
            | Operation::LabelStatistics
            | Operation::VocabularyIndex
            | Operation::VocabularyGroups => VOCAB,
            Operation::VocabularyTopConcepts => &[
                ("vocid", Mandatory),
                ("lang", Str("")),
                ("scheme", Str("")),
            ],
            Operation::VocabularyData => &[
                ("vocid", Mandatory),
                ("format", Str("")),
                ("uri", Str("")),
                ("lang", Str("")),
            ],
            Operation::VocabularySearch => &[
                ("vocid", Mandatory),
                ("query", Mandatory),
                ("lang", Str("")),
                ("type", Str("")),
                ("parent", Str("")),
                ("group", Str("")),
                ("maxhits", Int(0)),
                ("offset", Int(0)),
                ("fields", Str("")),
                ("unique", Bool(false)),
            ],
            Operation::VocabularyLookup => &[
                ("vocid", Mandatory),
                ("label", Mandatory),
                ("lang", Str("")),
            ],
            Operation::VocabularyIndexLetter => &[
                ("vocid", Mandatory),
                ("letter", Mandatory),
                ("lang", Str("")),
            ],
            Operation::VocabularyNew | Operation::VocabularyModified => CHANGE_LIST,
            Operation::VocabularyLabel
            | Operation::Broader
            | Operation::BroaderTransitive
            | Operation::Narrower
            | Operation::NarrowerTransitive
            | Operation::Related
            | Operation::Children
            | Operation::GroupMembers
            | Operation::Hierarchy => CONCEPT,
            Operation::Mappings => &[
                ("vocid", Mandatory),
                ("uri", Mandatory),
                ("external", Bool(true)),
                ("clang", Str("")),
                ("lang", Str("")),
            ],
        }
    }

    /// What the response body is expected to contain.
    ///
    /// The data retrieval methods return whatever serialization the
    /// `format` parameter selected; everything else is JSON.
    pub fn payload(self) -> Payload {
        match self {
            Operation::Data | Operation::VocabularyData => Payload::Raw,
            _ => Payload::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull the `{...}` placeholder names out of a route template.
    fn placeholders(route: &str) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = route;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            found.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        found
    }

    #[test]
    fn test_every_placeholder_has_a_mandatory_schema_entry() {
        for op in Operation::ALL {
            let schema = op.schema();
            for name in placeholders(op.route()) {
                let entry = schema.iter().find(|(k, _)| *k == name);
                assert_eq!(
                    entry,
                    Some(&(name, ParamDefault::Mandatory)),
                    "{op:?}: placeholder '{{{name}}}' must be a mandatory schema entry"
                );
            }
        }
    }

    #[test]
    fn test_schema_names_are_unique_per_operation() {
        for op in Operation::ALL {
            let schema = op.schema();
            for (i, (name, _)) in schema.iter().enumerate() {
                assert!(
                    !schema[i + 1..].iter().any(|(k, _)| k == name),
                    "{op:?}: duplicate schema entry '{name}'"
                );
            }
        }
    }

    #[test]
    fn test_only_data_methods_return_raw_payloads() {
        for op in Operation::ALL {
            let expected = matches!(op, Operation::Data | Operation::VocabularyData);
            assert_eq!(op.payload() == Payload::Raw, expected, "{op:?}");
        }
    }

    #[test]
    fn test_index_routes_differ_by_trailing_segment() {
        assert_eq!(Operation::VocabularyIndex.route(), "{vocid}/index/");
        assert_eq!(
            Operation::VocabularyIndexLetter.route(),
            "{vocid}/index/{letter}"
        );
    }
}
