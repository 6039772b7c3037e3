//! Two small command-line utilities built around a streaming JSON front end:
//! `jsonfmt`, which validates and reformats JSON documents, and
//! `gh-templates`, which writes GitHub issue/PR template files.
//!
//! The streaming tokenizer and event parser live in the `json-stream`
//! sub-crate. This crate adds the in-memory value tree, the builder that
//! turns structural events into a tree, canonical serialization, ANSI
//! highlighting, and the pipeline that strings them together for the CLI.

pub mod builder;
pub mod highlight;
pub mod pipeline;
pub mod templates;
pub mod value;
pub mod writer;

pub use builder::{read_document, BuildError, DocumentBuilder, ReadError};
pub use pipeline::{FormatConfig, Pipeline, PipelineError};
pub use value::JsonValue;
