use std::str::FromStr;

use indexmap::IndexMap;
use json_stream::{JsonSyntaxError, ScalarValue, StreamEvent, StreamParser};
use thiserror::Error;

use crate::value::JsonValue;

/// Error raised when an event stream does not describe exactly one complete
/// document. The pipeline always validates before building, so any of these
/// means the validator and the builder disagree about the document shape.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("container close event with no open container")]
    UnbalancedClose,
    #[error("key event outside of an object")]
    KeyOutsideObject,
    #[error("object closed while a key was still waiting for its value")]
    DanglingKey,
    #[error("value event inside an object with no pending key")]
    MissingKey,
    #[error("event stream ended with {0} container(s) still open")]
    UnclosedContainers(usize),
    #[error("event stream ended with no value")]
    Empty,
    #[error("more than one top-level value")]
    MultipleRoots,
}

/// Rebuilds a full value tree from structural events, one event at a time.
///
/// The builder holds a stack of open-container frames; a completed value is
/// attached to the innermost open container, or becomes the root when the
/// stack is empty.
#[derive(Default)]
pub struct DocumentBuilder {
    frames: Vec<Frame>,
    root: Option<JsonValue>,
}

enum Frame {
    Array(Vec<JsonValue>),
    Object(IndexMap<String, JsonValue>, Option<String>),
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: StreamEvent) -> Result<(), BuildError> {
        match event {
            StreamEvent::BeginObject => {
                self.frames.push(Frame::Object(IndexMap::new(), None));
                Ok(())
            }
            StreamEvent::Key(key) => match self.frames.last_mut() {
                Some(Frame::Object(_, pending)) => {
                    *pending = Some(key);
                    Ok(())
                }
                _ => Err(BuildError::KeyOutsideObject),
            },
            StreamEvent::EndObject => match self.frames.pop() {
                Some(Frame::Object(members, None)) => self.place(JsonValue::Object(members)),
                Some(Frame::Object(_, Some(_))) => Err(BuildError::DanglingKey),
                _ => Err(BuildError::UnbalancedClose),
            },
            StreamEvent::BeginArray => {
                self.frames.push(Frame::Array(Vec::new()));
                Ok(())
            }
            StreamEvent::EndArray => match self.frames.pop() {
                Some(Frame::Array(items)) => self.place(JsonValue::Array(items)),
                _ => Err(BuildError::UnbalancedClose),
            },
            StreamEvent::Scalar(scalar) => {
                let value = match scalar {
                    ScalarValue::Number(n) => JsonValue::Number(n),
                    ScalarValue::Bool(b) => JsonValue::Bool(b),
                    ScalarValue::String(s) => JsonValue::String(s),
                    ScalarValue::Null => JsonValue::Null,
                };
                self.place(value)
            }
        }
    }

    /// The open-container stack must be empty and exactly one completed root
    /// value present, otherwise the document was unbalanced.
    pub fn finish(self) -> Result<JsonValue, BuildError> {
        if !self.frames.is_empty() {
            return Err(BuildError::UnclosedContainers(self.frames.len()));
        }
        self.root.ok_or(BuildError::Empty)
    }

    fn place(&mut self, value: JsonValue) -> Result<(), BuildError> {
        match self.frames.last_mut() {
            None => {
                if self.root.is_some() {
                    return Err(BuildError::MultipleRoots);
                }
                self.root = Some(value);
                Ok(())
            }
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Frame::Object(members, pending)) => match pending.take() {
                Some(key) => {
                    members.insert(key, value);
                    Ok(())
                }
                None => Err(BuildError::MissingKey),
            },
        }
    }
}

/// Error from parsing a complete document out of a byte stream.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Syntax(#[from] JsonSyntaxError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Parses a complete document from an iterator over bytes. Unlike
/// [`json_stream::validate`], this holds the whole value tree in memory.
pub fn read_document<I: Iterator<Item = u8>>(bytes: I) -> Result<JsonValue, ReadError> {
    let mut parser = StreamParser::new(bytes);
    let mut builder = DocumentBuilder::new();
    while let Some(event) = parser.next_event()? {
        builder.apply(event)?;
    }
    Ok(builder.finish()?)
}

impl FromStr for JsonValue {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_document(s.bytes())
    }
}
