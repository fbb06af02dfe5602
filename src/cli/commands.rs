//! Subcommand dispatch
//!
//! Builds the client from the general options, calls the matching API
//! method and writes the result. Invalid input (type mismatches, bad
//! option values) is distinguished from request failures so the process
//! can exit 2 versus 1.

use std::path::Path;

use serde_json::Value;

use crate::api::client::{SearchParams, SkosmosClient};
use crate::api::error::Error;
use crate::api::http::ClientConfig;
use crate::cli::args::{Cli, Command, SearchOpts};
use crate::cli::io::write_output;

/// Serialization formats the pretty-printer can re-encode.
const JSON_FORMATS: [&str; 3] = ["", "application/json", "application/ld+json"];

/// A failed command, split by exit code.
pub enum CommandError {
    /// Invalid input; exits 2.
    Invalid(anyhow::Error),
    /// Request or output failure; exits 1.
    Failed(anyhow::Error),
}

/// Map an API error onto the exit-code split.
fn classify(err: Error) -> CommandError {
    match err {
        Error::TypeMismatch { .. } => CommandError::Invalid(err.into()),
        _ => CommandError::Failed(err.into()),
    }
}

fn fail(err: anyhow::Error) -> CommandError {
    CommandError::Failed(err)
}

impl SearchOpts {
    fn to_params(&self, labellang: &str, vocab: &str) -> SearchParams {
        SearchParams {
            lang: self.lang.clone(),
            labellang: labellang.to_string(),
            vocab: vocab.to_string(),
            concept_type: self.concept_type.clone(),
            parent: self.parent.clone(),
            group: self.group.clone(),
            maxhits: self.maxhits,
            offset: self.offset,
            fields: self.fields.clone(),
            unique: self.unique,
        }
    }
}

/// Run one parsed command to completion.
pub async fn execute(cli: Cli) -> Result<(), CommandError> {
    let config = match cli.general.service {
        Some(service) => ClientConfig::with_base_url(service),
        None => ClientConfig::default(),
    };
    let client = SkosmosClient::new(&config).map_err(classify)?;

    let output = cli.general.output.as_deref();
    let pretty = cli.general.pretty_json;

    match cli.command {
        Command::Vocabularies { lang } => {
            let result = client.vocabularies(&lang).await.map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Search {
            query,
            labellang,
            vocab,
            opts,
        } => {
            let params = opts.to_params(&labellang, &vocab);
            let result = client.search(&query, &params).await.map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Label { uri, lang } => {
            let result = client.label(&uri, &lang).await.map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Data { uri, format } => {
            let body = client.data(&uri, &format).await.map_err(classify)?;
            write_data(&body, &format, pretty, output)
        }
        Command::Types { lang } => {
            let result = client.types(&lang).await.map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyInfo(args) => {
            let result = client
                .vocabulary_info(&args.vocid, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyTypes(args) => {
            let result = client
                .vocabulary_types(&args.vocid, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyTopConcepts { vocid, lang, scheme } => {
            let result = client
                .vocabulary_top_concepts(&vocid, &lang, &scheme)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyData {
            vocid,
            format,
            uri,
            lang,
        } => {
            let body = client
                .vocabulary_data(&vocid, &format, &uri, &lang)
                .await
                .map_err(classify)?;
            write_data(&body, &format, pretty, output)
        }
        Command::VocabularySearch { vocid, query, opts } => {
            let params = opts.to_params("", "");
            let result = client
                .vocabulary_search(&vocid, &query, &params)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyLookup { vocid, label, lang } => {
            let result = client
                .vocabulary_lookup(&vocid, &label, &lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyStatistics(args) => {
            let result = client
                .vocabulary_statistics(&args.vocid, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::LabelStatistics(args) => {
            let result = client
                .vocabulary_label_statistics(&args.vocid, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyIndex { vocid, letter, lang } => {
            let result = match letter {
                Some(letter) => client.vocabulary_index_letter(&vocid, &letter, &lang).await,
                None => client.vocabulary_index(&vocid, &lang).await,
            }
            .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyGroups(args) => {
            let result = client
                .vocabulary_groups(&args.vocid, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyNew {
            vocid,
            lang,
            offset,
            limit,
        } => {
            let result = client
                .vocabulary_new(&vocid, &lang, offset, limit)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyModified {
            vocid,
            lang,
            offset,
            limit,
        } => {
            let result = client
                .vocabulary_modified(&vocid, &lang, offset, limit)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::VocabularyLabel(args) => {
            let result = client
                .vocabulary_label(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Broader(args) => {
            let result = client
                .vocabulary_broader(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::BroaderTransitive(args) => {
            let result = client
                .vocabulary_broader_transitive(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Narrower(args) => {
            let result = client
                .vocabulary_narrower(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::NarrowerTransitive(args) => {
            let result = client
                .vocabulary_narrower_transitive(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Related(args) => {
            let result = client
                .vocabulary_related(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Children(args) => {
            let result = client
                .vocabulary_children(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::GroupMembers(args) => {
            let result = client
                .vocabulary_group_members(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Hierarchy(args) => {
            let result = client
                .vocabulary_hierarchy(&args.vocid, &args.uri, &args.lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
        Command::Mappings {
            vocid,
            uri,
            external,
            clang,
            lang,
        } => {
            let result = client
                .vocabulary_mappings(&vocid, &uri, external, &clang, &lang)
                .await
                .map_err(classify)?;
            write_json(&result, pretty, output)
        }
    }
}

/// Serialize and write a decoded JSON result.
fn write_json(value: &Value, pretty: bool, output: Option<&Path>) -> Result<(), CommandError> {
    let serialized = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| fail(e.into()))?;
    write_output(&serialized, output, true).map_err(fail)
}

/// Write a raw data-method body.
///
/// Non-JSON serializations are passed through verbatim. JSON-ish formats
/// honor `--pretty-json` when the body actually parses; a body that does
/// not parse is passed through untouched.
fn write_data(
    body: &str,
    format: &str,
    pretty: bool,
    output: Option<&Path>,
) -> Result<(), CommandError> {
    let format = format.trim();
    if pretty && JSON_FORMATS.contains(&format) {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            return write_json(&value, true, output);
        }
    }
    write_output(body, output, false).map_err(fail)
}
