//! Skosmos API client
//!
//! One async method per catalogue operation. Every method follows the
//! same pipeline: build the full ordered argument set, strip defaults
//! through `changed_params`, (for searches) normalize the query term,
//! then hand hierarchy segments and the remaining parameters to the HTTP
//! layer and decode the outcome.
//!
//! Vocabulary and letter identifiers travel as URL hierarchy segments,
//! never as query parameters; operations whose remaining mandatory
//! parameters belong in the query string (`query`, `uri`, `label`) diff
//! with `keep_mandatory = true` and simply leave the path values out of
//! the argument set.

use serde_json::Value;
use tracing::warn;

use crate::api::error::Error;
use crate::api::http::{ClientConfig, Method, RestClient, RestResponse};
use crate::rest::operation::Operation;
use crate::rest::params::{changed_params, ParamValue};
use crate::rest::query::normalize_query;
use crate::rest::route::{route_segments, substitute};

/// Optional parameters accepted by the search methods.
///
/// Defaults mirror the server-side defaults, so a `SearchParams::default()`
/// contributes nothing to the query string. Fields not recognized by the
/// vocabulary-specific search (`labellang`, `vocab`) are stripped by the
/// parameter diff when searching inside one vocabulary.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Language of labels to match, e.g. "en" or "fi".
    pub lang: String,
    /// Language of labels to return (global search only).
    pub labellang: String,
    /// Space-separated list of vocabulary ids to query (global search only).
    pub vocab: String,
    /// Concept type to restrict the search to; wire name `type`.
    pub concept_type: String,
    /// Broader concept URI to restrict the search to.
    pub parent: String,
    /// Group URI to restrict the search to.
    pub group: String,
    /// Maximum number of results, 0 for the server default.
    pub maxhits: i64,
    /// Offset of the first result for paging.
    pub offset: i64,
    /// Space-separated list of extra fields to include in the results.
    pub fields: String,
    /// Return each concept only once even when it matches several labels.
    pub unique: bool,
}

impl SearchParams {
    fn to_args(&self, query: &str) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("query", ParamValue::from(query)),
            ("lang", ParamValue::from(self.lang.as_str())),
            ("labellang", ParamValue::from(self.labellang.as_str())),
            ("vocab", ParamValue::from(self.vocab.as_str())),
            ("type", ParamValue::from(self.concept_type.as_str())),
            ("parent", ParamValue::from(self.parent.as_str())),
            ("group", ParamValue::from(self.group.as_str())),
            ("maxhits", ParamValue::Int(self.maxhits)),
            ("offset", ParamValue::Int(self.offset)),
            ("fields", ParamValue::from(self.fields.as_str())),
            ("unique", ParamValue::Bool(self.unique)),
        ]
    }
}

/// Client for the Skosmos REST API.
///
/// Holds a pooled HTTP client and the base URL; safe to share across
/// tasks, every method takes `&self` and carries no call state between
/// requests.
pub struct SkosmosClient {
    rest: RestClient,
}

impl SkosmosClient {
    /// Create a client from the given configuration.
    ///
    /// Fails with [`Error::MissingBaseUrl`] when the configuration has no
    /// REST API base URL.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// The configured REST API base URL.
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    /* Global methods */

    /// Available vocabularies.
    pub async fn vocabularies(&self, lang: &str) -> Result<Value, Error> {
        let args = [("lang", ParamValue::from(lang))];
        self.request_json(Operation::Vocabularies, &["vocabularies"], &args, true)
            .await
    }

    /// Search concepts and collections by query term across vocabularies.
    pub async fn search(&self, query: &str, params: &SearchParams) -> Result<Value, Error> {
        self.packed_search(query, None, params, false, false).await
    }

    /// Labels for the requested concept.
    pub async fn label(&self, uri: &str, lang: &str) -> Result<Value, Error> {
        let args = [("uri", ParamValue::from(uri)), ("lang", ParamValue::from(lang))];
        self.request_json(Operation::Label, &["label"], &args, true)
            .await
    }

    /// RDF data of the requested concept, in the serialization selected by
    /// `format` (e.g. "text/turtle"). Returned unparsed.
    pub async fn data(&self, uri: &str, format: &str) -> Result<String, Error> {
        let args = [
            ("uri", ParamValue::from(uri)),
            ("format", ParamValue::from(format)),
        ];
        let response = self
            .request(Operation::Data, &["data"], &args, true)
            .await?;
        Ok(response.body)
    }

    /// Information about concept types across vocabularies.
    pub async fn types(&self, lang: &str) -> Result<Value, Error> {
        let args = [("lang", ParamValue::from(lang))];
        self.request_json(Operation::Types, &["types"], &args, true)
            .await
    }

    /* Vocabulary-specific methods */

    /// General information about the vocabulary.
    pub async fn vocabulary_info(&self, vocid: &str, lang: &str) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(Operation::VocabularyInfo, &[vocid, ""], &args, false)
            .await
    }

    /// Information about the concept types used in the vocabulary.
    pub async fn vocabulary_types(&self, vocid: &str, lang: &str) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(Operation::VocabularyTypes, &[vocid, "types"], &args, false)
            .await
    }

    /// Top concepts of the vocabulary, optionally within one concept
    /// scheme.
    pub async fn vocabulary_top_concepts(
        &self,
        vocid: &str,
        lang: &str,
        scheme: &str,
    ) -> Result<Value, Error> {
        let args = [
            ("vocid", ParamValue::from(vocid)),
            ("lang", ParamValue::from(lang)),
            ("scheme", ParamValue::from(scheme)),
        ];
        self.request_json(
            Operation::VocabularyTopConcepts,
            &[vocid, "topConcepts"],
            &args,
            false,
        )
        .await
    }

    /// RDF data of the whole vocabulary, or of one concept when `uri` is
    /// given. MARCXML is available for whole vocabularies where the
    /// server supports it. Returned unparsed.
    pub async fn vocabulary_data(
        &self,
        vocid: &str,
        format: &str,
        uri: &str,
        lang: &str,
    ) -> Result<String, Error> {
        let args = [
            ("vocid", ParamValue::from(vocid)),
            ("format", ParamValue::from(format)),
            ("uri", ParamValue::from(uri)),
            ("lang", ParamValue::from(lang)),
        ];
        let response = self
            .request(Operation::VocabularyData, &[vocid, "data"], &args, false)
            .await?;
        Ok(response.body)
    }

    /// Search concepts and collections within one vocabulary.
    pub async fn vocabulary_search(
        &self,
        vocid: &str,
        query: &str,
        params: &SearchParams,
    ) -> Result<Value, Error> {
        self.packed_search(query, Some(vocid), params, false, false)
            .await
    }

    /// Look up a concept by its label within one vocabulary.
    pub async fn vocabulary_lookup(
        &self,
        vocid: &str,
        label: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        let args = [
            ("label", ParamValue::from(label)),
            ("lang", ParamValue::from(lang)),
        ];
        self.request_json(Operation::VocabularyLookup, &[vocid, "lookup"], &args, true)
            .await
    }

    /// Number of concepts, collections and deprecated resources in the
    /// vocabulary.
    pub async fn vocabulary_statistics(&self, vocid: &str, lang: &str) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(
            Operation::VocabularyStatistics,
            &[vocid, "vocabularyStatistics"],
            &args,
            false,
        )
        .await
    }

    /// Number of labels by language in the vocabulary.
    pub async fn vocabulary_label_statistics(
        &self,
        vocid: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(
            Operation::LabelStatistics,
            &[vocid, "labelStatistics"],
            &args,
            false,
        )
        .await
    }

    /// Initial letters of labels in the given language.
    pub async fn vocabulary_index(&self, vocid: &str, lang: &str) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(Operation::VocabularyIndex, &[vocid, "index", ""], &args, false)
            .await
    }

    /// Concepts whose labels start with the given letter.
    pub async fn vocabulary_index_letter(
        &self,
        vocid: &str,
        letter: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        let args = [
            ("vocid", ParamValue::from(vocid)),
            ("letter", ParamValue::from(letter)),
            ("lang", ParamValue::from(lang)),
        ];
        self.request_json(
            Operation::VocabularyIndexLetter,
            &[vocid, "index", letter],
            &args,
            false,
        )
        .await
    }

    /// Concept groups of the vocabulary.
    pub async fn vocabulary_groups(&self, vocid: &str, lang: &str) -> Result<Value, Error> {
        let args = vocab_args(vocid, lang);
        self.request_json(Operation::VocabularyGroups, &[vocid, "groups"], &args, false)
            .await
    }

    /// New concepts in the vocabulary, most recent first.
    pub async fn vocabulary_new(
        &self,
        vocid: &str,
        lang: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Value, Error> {
        let args = change_list_args(vocid, lang, offset, limit);
        self.request_json(Operation::VocabularyNew, &[vocid, "new"], &args, false)
            .await
    }

    /// Modified concepts in the vocabulary, most recent first.
    pub async fn vocabulary_modified(
        &self,
        vocid: &str,
        lang: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Value, Error> {
        let args = change_list_args(vocid, lang, offset, limit);
        self.request_json(Operation::VocabularyModified, &[vocid, "modified"], &args, false)
            .await
    }

    /* Concept-specific methods */

    /// Labels for one concept in the vocabulary.
    pub async fn vocabulary_label(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::VocabularyLabel, vocid, "label", uri, lang)
            .await
    }

    /// Broader concepts of the requested concept.
    pub async fn vocabulary_broader(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::Broader, vocid, "broader", uri, lang)
            .await
    }

    /// Broader transitive hierarchy for the requested concept.
    pub async fn vocabulary_broader_transitive(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(
            Operation::BroaderTransitive,
            vocid,
            "broaderTransitive",
            uri,
            lang,
        )
        .await
    }

    /// Narrower concepts of the requested concept.
    pub async fn vocabulary_narrower(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::Narrower, vocid, "narrower", uri, lang)
            .await
    }

    /// Narrower transitive hierarchy for the requested concept.
    pub async fn vocabulary_narrower_transitive(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(
            Operation::NarrowerTransitive,
            vocid,
            "narrowerTransitive",
            uri,
            lang,
        )
        .await
    }

    /// Related concepts of the requested concept.
    pub async fn vocabulary_related(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::Related, vocid, "related", uri, lang)
            .await
    }

    /// Narrower concepts and sub-groups of the requested concept or group.
    pub async fn vocabulary_children(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::Children, vocid, "children", uri, lang)
            .await
    }

    /// Members of the requested concept group.
    pub async fn vocabulary_group_members(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::GroupMembers, vocid, "groupMembers", uri, lang)
            .await
    }

    /// Full hierarchy context for the requested concept.
    pub async fn vocabulary_hierarchy(
        &self,
        vocid: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        self.concept_request(Operation::Hierarchy, vocid, "hierarchy", uri, lang)
            .await
    }

    /// Mappings to and from the requested concept. `external` controls
    /// whether mappings into other vocabularies on the same server are
    /// included.
    pub async fn vocabulary_mappings(
        &self,
        vocid: &str,
        uri: &str,
        external: bool,
        clang: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        let args = [
            ("uri", ParamValue::from(uri)),
            ("external", ParamValue::Bool(external)),
            ("clang", ParamValue::from(clang)),
            ("lang", ParamValue::from(lang)),
        ];
        self.request_json(Operation::Mappings, &[vocid, "mappings"], &args, true)
            .await
    }

    /// Search with packed parameters and optional truncation wildcards.
    ///
    /// Targets the vocabulary-specific search when `vocid` is given —
    /// substituting the trimmed id into the route, never transmitting it
    /// as a query parameter — and the global search otherwise.
    pub async fn packed_search(
        &self,
        query: &str,
        vocid: Option<&str>,
        params: &SearchParams,
        left_truncation: bool,
        right_truncation: bool,
    ) -> Result<Value, Error> {
        let normalized = normalize_query(query, left_truncation, right_truncation);
        let args = params.to_args(&normalized);

        match vocid {
            Some(vocid) => {
                let route = substitute(
                    Operation::VocabularySearch.route(),
                    &[("vocid", vocid.trim())],
                );
                let segments = route_segments(&route);
                self.request_json(Operation::VocabularySearch, &segments, &args, true)
                    .await
            }
            None => {
                self.request_json(Operation::Search, &["search"], &args, true)
                    .await
            }
        }
    }

    /* Internals */

    async fn request(
        &self,
        op: Operation,
        segments: &[&str],
        args: &[(&str, ParamValue)],
        keep_mandatory: bool,
    ) -> Result<RestResponse, Error> {
        let params = changed_params(args, op, keep_mandatory)?;
        self.rest.execute(Method::Get, segments, &params).await
    }

    async fn request_json(
        &self,
        op: Operation,
        segments: &[&str],
        args: &[(&str, ParamValue)],
        keep_mandatory: bool,
    ) -> Result<Value, Error> {
        let response = self.request(op, segments, args, keep_mandatory).await?;
        decode_json(&response)
    }

    async fn concept_request(
        &self,
        op: Operation,
        vocid: &str,
        segment: &str,
        uri: &str,
        lang: &str,
    ) -> Result<Value, Error> {
        let args = [("uri", ParamValue::from(uri)), ("lang", ParamValue::from(lang))];
        self.request_json(op, &[vocid, segment], &args, true).await
    }
}

fn vocab_args(vocid: &str, lang: &str) -> [(&'static str, ParamValue); 2] {
    [
        ("vocid", ParamValue::from(vocid)),
        ("lang", ParamValue::from(lang)),
    ]
}

fn change_list_args(
    vocid: &str,
    lang: &str,
    offset: i64,
    limit: i64,
) -> [(&'static str, ParamValue); 4] {
    [
        ("vocid", ParamValue::from(vocid)),
        ("lang", ParamValue::from(lang)),
        ("offset", ParamValue::Int(offset)),
        ("limit", ParamValue::Int(limit)),
    ]
}

/// Decode a successful response body as strict JSON.
///
/// Raises [`Error::InvalidResponse`] carrying the original status line
/// and body when the server returned something the caller cannot handle
/// as JSON.
pub(crate) fn decode_json(response: &RestResponse) -> Result<Value, Error> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(
            "decoding JSON response failed: {}, response content: {}",
            e, response.body
        );
        Error::InvalidResponse(response.detail())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::params::changed_params;

    fn response(status: u16, reason: &str, body: &str) -> RestResponse {
        RestResponse {
            status,
            reason: reason.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decode_json_object() {
        let value = decode_json(&response(200, "OK", r#"{"vocabularies": []}"#)).unwrap();
        assert!(value["vocabularies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_decode_non_json_carries_status_line() {
        let err = decode_json(&response(200, "OK", "not json")).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(detail) if detail == "200 OK : not json"));
    }

    #[test]
    fn test_default_search_params_transmit_only_the_query() {
        let args = SearchParams::default().to_args("cat");
        let changed = changed_params(&args, Operation::Search, true).unwrap();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].0, "query");
    }

    #[test]
    fn test_vocab_search_drops_global_only_fields() {
        let params = SearchParams {
            labellang: "fi".to_string(),
            vocab: "yso".to_string(),
            unique: true,
            ..SearchParams::default()
        };
        let args = params.to_args("cat");
        let changed = changed_params(&args, Operation::VocabularySearch, true).unwrap();
        let keys: Vec<&str> = changed.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["query", "unique"]);
    }

    #[test]
    fn test_pretty_reencoded_json_is_semantically_equal() {
        let body = r#"{"uri":"http://www.yso.fi/onto/yso/p1","prefLabel":"käsite","hits":3}"#;
        let decoded = decode_json(&response(200, "OK", body)).unwrap();
        let pretty = serde_json::to_string_pretty(&decoded).unwrap();
        let reparsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(decoded, reparsed);
    }
}
