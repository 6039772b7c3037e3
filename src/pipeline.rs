use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use json_stream::JsonSyntaxError;
use thiserror::Error;
use tracing::debug;

use crate::builder::{self, BuildError, ReadError};
use crate::writer;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Immutable per-invocation configuration.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Spaces per indentation level; 0 selects compact output.
    pub indent: usize,
    /// Accepted for CLI compatibility; key order is currently always
    /// preserved as encountered in the source document.
    pub sort_keys: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            indent: 2,
            sort_keys: false,
        }
    }
}

/// Everything that can go wrong in one validate/format run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Syntax(#[from] JsonSyntaxError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("document builder failed after validation: {0}")]
    Build(#[from] BuildError),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ReadError> for PipelineError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Syntax(e) => PipelineError::Syntax(e),
            ReadError::Build(e) => PipelineError::Build(e),
        }
    }
}

/// Adapts an `io::Read` into the byte iterator the streaming parser wants.
///
/// A read error ends the iteration early and the parser reports a truncated
/// document; open, create and write failures surface as
/// [`PipelineError::Io`] from the pipeline itself.
struct ByteReader<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
}

impl<R> ByteReader<R> {
    fn new(inner: R) -> Self {
        ByteReader {
            inner,
            buf: vec![0; 8192],
            pos: 0,
            len: 0,
        }
    }
}

impl<R: Read> Iterator for ByteReader<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos == self.len {
            self.len = self.inner.read(&mut self.buf).ok()?;
            self.pos = 0;
            if self.len == 0 {
                return None;
            }
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Some(b)
    }
}

/// Runs the validate / build / serialize sequence for one CLI invocation.
///
/// The input stream is consumed whole by each phase, so the file is opened
/// once for validation and once more for formatting.
pub struct Pipeline {
    config: FormatConfig,
}

impl Pipeline {
    pub fn new(config: FormatConfig) -> Self {
        if config.sort_keys {
            debug!("sort-keys requested; key order is preserved as encountered");
        }
        Pipeline { config }
    }

    /// Streams the document once, checking syntax only. Memory use is
    /// bounded by nesting depth, not document size.
    pub fn validate(&self, input: &Path) -> Result<(), PipelineError> {
        let file = File::open(input)?;
        json_stream::validate(ByteReader::new(file))?;
        Ok(())
    }

    /// Re-reads the document, rebuilds the full value tree in memory and
    /// serializes it with the configured indentation.
    pub fn format(&self, input: &Path) -> Result<Vec<u8>, PipelineError> {
        let file = File::open(input)?;
        let value = builder::read_document(ByteReader::new(file))?;
        Ok(writer::write_value(&value, self.config.indent)?)
    }

    /// Formats `input` and writes the result to `output`. The write is
    /// direct; a failure partway through can leave a partial file behind.
    pub fn format_to_file(&self, input: &Path, output: &Path) -> Result<(), PipelineError> {
        let bytes = self.format(input)?;
        let mut file = File::create(output)?;
        file.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn validates_a_wellformed_document() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, r#"{"a": [1, 2.5, null], "b": "x"}"#);
        let pipeline = Pipeline::new(FormatConfig::default());
        assert!(pipeline.validate(&input).is_ok());
    }

    #[test]
    fn reports_syntax_errors_with_their_offset() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "[1,2,");
        let pipeline = Pipeline::new(FormatConfig::default());
        match pipeline.validate(&input) {
            Err(PipelineError::Syntax(e)) => assert_eq!(e.location().byte_offset, 5),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let pipeline = Pipeline::new(FormatConfig::default());
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            pipeline.validate(&missing),
            Err(PipelineError::Io(_))
        ));
    }

    #[test]
    fn format_round_trips_structurally() {
        let dir = TempDir::new().unwrap();
        let source = r#"{"b": 1, "a": [true, {"c": "d\n"}], "e": -2.5e3}"#;
        let input = write_input(&dir, source);
        let pipeline = Pipeline::new(FormatConfig::default());
        let formatted = pipeline.format(&input).unwrap();

        let before: serde_json::Value = serde_json::from_str(source).unwrap();
        let after: serde_json::Value = serde_json::from_slice(&formatted).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn format_to_file_writes_the_destination() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, r#"{"b":1,"a":2}"#);
        let output = dir.path().join("out.json");
        let pipeline = Pipeline::new(FormatConfig::default());
        pipeline.format_to_file(&input, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"b\": 1,\n  \"a\": 2\n}"
        );
    }

    #[test]
    fn large_flat_documents_stream_through() {
        let dir = TempDir::new().unwrap();
        let mut doc = String::from("[0");
        for i in 1..10_000 {
            doc.push_str(&format!(",{i}"));
        }
        doc.push(']');
        let input = write_input(&dir, &doc);
        let pipeline = Pipeline::new(FormatConfig { indent: 0, sort_keys: false });
        assert!(pipeline.validate(&input).is_ok());
        let formatted = pipeline.format(&input).unwrap();
        assert_eq!(formatted, doc.as_bytes());
    }
}
