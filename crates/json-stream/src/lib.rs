//! Streaming parser for JSON. This crate provides a pull-based parser which
//! yields the structural events `BeginObject`, `Key`, `EndObject`,
//! `BeginArray`, `EndArray`, and `Scalar` while scanning a document in a
//! single forward pass.
//!
//! Nothing about the document is retained between events, so arbitrarily
//! large documents can be checked for well-formedness with memory
//! proportional to their nesting depth. Errors carry the byte offset, line
//! and column at which the document stopped making sense.
//!
//! ```
//! use json_stream::{StreamEvent, StreamParser};
//!
//! let doc = r#"{"name": "a", "sizes": [1, 2]}"#;
//! let mut parser = StreamParser::new(doc.bytes());
//! let mut events = Vec::new();
//! while let Some(event) = parser.next_event().unwrap() {
//!     events.push(event);
//! }
//! assert_eq!(events.len(), 9);
//! assert_eq!(events[1], StreamEvent::Key(String::from("name")));
//! ```

mod stream;
mod tokenizer;

pub use stream::*;
pub use tokenizer::*;
