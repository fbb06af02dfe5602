//! CLI argument definitions using clap
//!
//! The subcommand tree mirrors the operation catalogue: mandatory schema
//! parameters are positional, optional ones are long flags whose default
//! is the schema default. General options apply to every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Client for the Skosmos vocabulary REST API
#[derive(Parser, Debug)]
#[command(name = "skosmos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub general: GeneralOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GeneralOpts {
    /// The base URL of the Skosmos instance followed by /rest/v1
    #[arg(long, global = true)]
    pub service: Option<String>,

    /// Output file name. Default is to use standard output
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty_json: bool,

    /// Log file name. Default is to use standard error
    #[arg(short = 'O', long, global = true)]
    pub log: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Optional search parameters accepted by both search subcommands.
#[derive(Args, Debug, Clone)]
pub struct SearchOpts {
    /// Language of labels to match, e.g. "en" or "fi"
    #[arg(long, default_value = "")]
    pub lang: String,

    /// Limit search to concepts of the given type, e.g. "skos:Concept"
    #[arg(long = "type", default_value = "")]
    pub concept_type: String,

    /// Limit search to concepts with the given broader concept URI
    #[arg(long, default_value = "")]
    pub parent: String,

    /// Limit search to concepts in the given group URI
    #[arg(long, default_value = "")]
    pub group: String,

    /// Maximum number of results, 0 for the server default
    #[arg(long, default_value_t = 0)]
    pub maxhits: i64,

    /// Offset of the first result for paging
    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// Space-separated list of extra fields to include in the results
    #[arg(long, default_value = "")]
    pub fields: String,

    /// Return each concept only once even when several labels match
    #[arg(long)]
    pub unique: bool,
}

/// Positional vocabulary id plus the label language flag.
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
    pub vocid: String,

    /// Label language, e.g. "en" or "fi"
    #[arg(long, default_value = "")]
    pub lang: String,
}

/// Arguments shared by the concept hierarchy subcommands.
#[derive(Args, Debug)]
pub struct ConceptArgs {
    /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
    pub vocid: String,

    /// URI of the concept
    pub uri: String,

    /// Label language, e.g. "en" or "fi"
    #[arg(long, default_value = "")]
    pub lang: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Available vocabularies
    Vocabularies {
        /// Language of labels, e.g. "en" or "fi"
        lang: String,
    },

    /// Search concepts and collections by query term
    Search {
        /// The term to search for
        query: String,

        /// Language of labels to return, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        labellang: String,

        /// Space-separated list of vocabulary ids to query, e.g. "yso allars"
        #[arg(long, default_value = "")]
        vocab: String,

        #[command(flatten)]
        opts: SearchOpts,
    },

    /// Labels for the requested concept
    Label {
        /// URI of the concept
        uri: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,
    },

    /// RDF data of the requested concept
    Data {
        /// URI of the concept
        uri: String,

        /// The MIME type of the serialization format, e.g. "text/turtle" or "application/rdf+xml"
        #[arg(long, default_value = "")]
        format: String,
    },

    /// Information about concept types across vocabularies
    Types {
        /// Language of labels, e.g. "en" or "fi"
        lang: String,
    },

    /// General information about the vocabulary
    VocabularyInfo(VocabArgs),

    /// Information about the concept types used in the vocabulary
    VocabularyTypes(VocabArgs),

    /// Top concepts of the vocabulary
    VocabularyTopConcepts {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,

        /// URI of the concept scheme whose top concepts to return
        #[arg(long, default_value = "")]
        scheme: String,
    },

    /// RDF data of the whole vocabulary or a specific concept. If the
    /// vocabulary has support for it, MARCXML data is available for the
    /// whole vocabulary in each language
    VocabularyData {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// The MIME type of the serialization format, e.g. "text/turtle" or "application/rdf+xml"
        #[arg(long, default_value = "")]
        format: String,

        /// URI of the desired concept. When no uri parameter is given, the whole vocabulary is returned instead
        #[arg(long, default_value = "")]
        uri: String,

        /// RDF language code when the requested resource for the MIME type is language specific, e.g. "fi" or "en"
        #[arg(long, default_value = "")]
        lang: String,
    },

    /// Search concepts and collections within one vocabulary
    VocabularySearch {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// The term to search for
        query: String,

        #[command(flatten)]
        opts: SearchOpts,
    },

    /// Look up a concept by its label within one vocabulary
    VocabularyLookup {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// The label to look up
        label: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,
    },

    /// Number of concepts, collections and deprecated resources in the vocabulary
    VocabularyStatistics(VocabArgs),

    /// Number of labels by language in the vocabulary
    LabelStatistics(VocabArgs),

    /// Initial letters of labels (skos:prefLabel, skos:altLabel) in the
    /// given language, or the concepts for one initial letter. The special
    /// value "0-9" indicates labels starting with a number and "!*" labels
    /// starting with a special character
    VocabularyIndex {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// An initial letter from the index
        letter: Option<String>,

        /// Language of labels, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,
    },

    /// Concept groups of the vocabulary
    VocabularyGroups(VocabArgs),

    /// New concepts in the vocabulary, most recent first
    VocabularyNew {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,

        /// Offset of the first result for paging
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Maximum number of results
        #[arg(long, default_value_t = 200)]
        limit: i64,
    },

    /// Modified concepts in the vocabulary, most recent first
    VocabularyModified {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,

        /// Offset of the first result for paging
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Maximum number of results
        #[arg(long, default_value_t = 200)]
        limit: i64,
    },

    /// Labels for one concept in the vocabulary
    VocabularyLabel(ConceptArgs),

    /// Broader concepts of the requested concept
    Broader(ConceptArgs),

    /// Broader transitive hierarchy for the requested concept
    BroaderTransitive(ConceptArgs),

    /// Narrower concepts of the requested concept
    Narrower(ConceptArgs),

    /// Narrower transitive hierarchy for the requested concept
    NarrowerTransitive(ConceptArgs),

    /// Related concepts of the requested concept
    Related(ConceptArgs),

    /// Narrower concepts and sub-groups of the requested concept or group
    Children(ConceptArgs),

    /// Members of the requested concept group
    GroupMembers(ConceptArgs),

    /// Full hierarchy context for the requested concept
    Hierarchy(ConceptArgs),

    /// Mappings to and from the requested concept
    Mappings {
        /// A Skosmos vocabulary identifier e.g. "stw" or "yso"
        vocid: String,

        /// URI of the concept
        uri: String,

        /// Include mappings into other vocabularies on the same server
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        external: bool,

        /// Content language of the mapped concepts, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        clang: String,

        /// Label language, e.g. "en" or "fi"
        #[arg(long, default_value = "")]
        lang: String,
    },
}
