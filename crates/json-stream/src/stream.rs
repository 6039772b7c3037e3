use crate::tokenizer::{
    JsonNumber, JsonSyntaxError, JsonToken, JsonTokenizer, SpannedToken, SyntaxResult,
};

/// A structural event, produced in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    BeginObject,
    Key(String),
    EndObject,
    BeginArray,
    EndArray,
    Scalar(ScalarValue),
}

/// A leaf value carried by [`StreamEvent::Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Number(JsonNumber),
    Bool(bool),
    String(String),
    Null,
}

/// Drives the tokenizer through exactly one JSON document and yields one
/// [`StreamEvent`] per call.
///
/// Memory use is proportional to the nesting depth of the document, never to
/// its size: the only state is a stack of open-container frames.
pub struct StreamParser<I: Iterator<Item = u8>> {
    tokenizer: JsonTokenizer<I>,
    frames: Vec<Frame>,
}

#[derive(Debug, Clone)]
enum Frame {
    /// Expecting any value; the token has not been read yet.
    Value,
    /// Expecting any value; the token has already been read.
    ValueWith(SpannedToken),
    /// Just consumed '{'; expecting a key or '}'.
    ObjectOpen,
    /// Holding the token that must be a member key.
    ObjectKeyWith(SpannedToken),
    /// Just finished a member value; expecting ',' or '}'.
    ObjectMember,
    /// Just consumed '['; expecting an item or ']'.
    ArrayOpen,
    /// Just finished an item; expecting ',' or ']'.
    ArrayItem,
}

impl<I: Iterator<Item = u8>> StreamParser<I> {
    pub fn new(bytes: I) -> Self {
        StreamParser {
            tokenizer: JsonTokenizer::new(bytes),
            frames: vec![Frame::Value],
        }
    }

    /// Returns the next structural event, or `None` once the document is
    /// complete. After `None`, only trailing whitespace is allowed in the
    /// input.
    pub fn next_event(&mut self) -> SyntaxResult<Option<StreamEvent>> {
        while let Some(frame) = self.frames.last().cloned() {
            match frame {
                Frame::Value => {
                    let token = self.require_token()?;
                    *self.frames.last_mut().unwrap() = Frame::ValueWith(token);
                }
                Frame::ValueWith(spanned) => {
                    let scalar = match spanned.token {
                        JsonToken::ObjOpen => {
                            *self.frames.last_mut().unwrap() = Frame::ObjectOpen;
                            return Ok(Some(StreamEvent::BeginObject));
                        }
                        JsonToken::ArrayOpen => {
                            *self.frames.last_mut().unwrap() = Frame::ArrayOpen;
                            return Ok(Some(StreamEvent::BeginArray));
                        }
                        JsonToken::Number(n) => ScalarValue::Number(n),
                        JsonToken::String(s) => ScalarValue::String(s),
                        JsonToken::True => ScalarValue::Bool(true),
                        JsonToken::False => ScalarValue::Bool(false),
                        JsonToken::Null => ScalarValue::Null,
                        other => {
                            return Err(JsonSyntaxError::new(
                                format!("expected a value, found {other:?}"),
                                spanned.start,
                            ));
                        }
                    };
                    self.frames.pop();
                    return Ok(Some(StreamEvent::Scalar(scalar)));
                }
                Frame::ObjectOpen => {
                    let token = self.require_token()?;
                    if token.token == JsonToken::ObjClose {
                        self.frames.pop();
                        return Ok(Some(StreamEvent::EndObject));
                    }
                    *self.frames.last_mut().unwrap() = Frame::ObjectKeyWith(token);
                }
                Frame::ObjectKeyWith(spanned) => {
                    let key = match spanned.token {
                        JsonToken::String(s) => s,
                        other => {
                            return Err(JsonSyntaxError::new(
                                format!("object key must be a string, found {other:?}"),
                                spanned.start,
                            ));
                        }
                    };
                    let colon = self.require_token()?;
                    if colon.token != JsonToken::Colon {
                        return Err(JsonSyntaxError::new(
                            format!("expected ':' after object key, found {:?}", colon.token),
                            colon.start,
                        ));
                    }
                    *self.frames.last_mut().unwrap() = Frame::ObjectMember;
                    self.frames.push(Frame::Value);
                    return Ok(Some(StreamEvent::Key(key)));
                }
                Frame::ObjectMember => {
                    let token = self.require_token()?;
                    match token.token {
                        JsonToken::Comma => {
                            let key = self.require_token()?;
                            *self.frames.last_mut().unwrap() = Frame::ObjectKeyWith(key);
                        }
                        JsonToken::ObjClose => {
                            self.frames.pop();
                            return Ok(Some(StreamEvent::EndObject));
                        }
                        other => {
                            return Err(JsonSyntaxError::new(
                                format!("expected ',' or '}}' in object, found {other:?}"),
                                token.start,
                            ));
                        }
                    }
                }
                Frame::ArrayOpen => {
                    let token = self.require_token()?;
                    if token.token == JsonToken::ArrayClose {
                        self.frames.pop();
                        return Ok(Some(StreamEvent::EndArray));
                    }
                    *self.frames.last_mut().unwrap() = Frame::ArrayItem;
                    self.frames.push(Frame::ValueWith(token));
                }
                Frame::ArrayItem => {
                    let token = self.require_token()?;
                    match token.token {
                        JsonToken::Comma => self.frames.push(Frame::Value),
                        JsonToken::ArrayClose => {
                            self.frames.pop();
                            return Ok(Some(StreamEvent::EndArray));
                        }
                        other => {
                            return Err(JsonSyntaxError::new(
                                format!("expected ',' or ']' in array, found {other:?}"),
                                token.start,
                            ));
                        }
                    }
                }
            }
        }

        // The document is complete; only whitespace may remain.
        if let Some(trailing) = self.tokenizer.next_token()? {
            return Err(JsonSyntaxError::new(
                format!("trailing data after document: {:?}", trailing.token),
                trailing.start,
            ));
        }
        Ok(None)
    }

    fn require_token(&mut self) -> SyntaxResult<SpannedToken> {
        match self.tokenizer.next_token()? {
            Some(token) => Ok(token),
            None => Err(JsonSyntaxError::new(
                String::from("unexpected end of document"),
                self.tokenizer.location(),
            )),
        }
    }
}

/// Scans a whole document, discarding the events. This is the validation
/// entry point: a single forward pass with memory bounded by nesting depth.
pub fn validate<I: Iterator<Item = u8>>(bytes: I) -> Result<(), JsonSyntaxError> {
    let mut parser = StreamParser::new(bytes);
    while parser.next_event()?.is_some() {}
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn events(s: &str) -> (Vec<StreamEvent>, Option<JsonSyntaxError>) {
        let mut parser = StreamParser::new(s.bytes());
        let mut v = Vec::new();
        loop {
            match parser.next_event() {
                Ok(Some(event)) => v.push(event),
                Ok(None) => return (v, None),
                Err(e) => return (v, Some(e)),
            }
        }
    }

    #[test]
    fn emits_events_in_document_order() {
        let s = r#"{"key1": 1234, "key2": [true], "key3": "value" }"#;
        let (v, e) = events(s);
        assert!(e.is_none());
        assert_eq!(
            v,
            vec![
                StreamEvent::BeginObject,
                StreamEvent::Key(String::from("key1")),
                StreamEvent::Scalar(ScalarValue::Number(JsonNumber::Int(1234))),
                StreamEvent::Key(String::from("key2")),
                StreamEvent::BeginArray,
                StreamEvent::Scalar(ScalarValue::Bool(true)),
                StreamEvent::EndArray,
                StreamEvent::Key(String::from("key3")),
                StreamEvent::Scalar(ScalarValue::String(String::from("value"))),
                StreamEvent::EndObject,
            ]
        );
    }

    #[test]
    fn empty_containers() {
        let (v, e) = events(r#"{"a": {}, "b": []}"#);
        assert!(e.is_none());
        assert_eq!(v.len(), 8);
    }

    #[test]
    fn scalar_roots_are_valid_documents() {
        assert!(validate("null".bytes()).is_ok());
        assert!(validate(" 42 ".bytes()).is_ok());
        assert!(validate(r#""hi""#.bytes()).is_ok());
    }

    #[test]
    fn missing_value_after_colon() {
        let err = validate(r#"{"a":}"#.bytes()).unwrap_err();
        assert!(err.description().contains("expected a value"));
        assert_eq!(err.location().byte_offset, 5);
    }

    #[test]
    fn truncated_array_reports_eof() {
        let err = validate("[1,2,".bytes()).unwrap_err();
        assert!(err.description().contains("end of document"));
        assert_eq!(err.location().byte_offset, 5);
    }

    #[test]
    fn unterminated_string_reports_eof() {
        let err = validate(r#""unterminated"#.bytes()).unwrap_err();
        assert!(err.description().contains("end of document"));
    }

    #[test]
    fn trailing_comma_in_object() {
        let err = validate(r#"{"a": 1,}"#.bytes()).unwrap_err();
        assert!(err.description().contains("object key must be a string"));
    }

    #[test]
    fn unbalanced_brackets() {
        assert!(validate("[1, 2".bytes()).is_err());
        assert!(validate("[1, 2]]".bytes()).is_err());
        assert!(validate("}".bytes()).is_err());
    }

    #[test]
    fn trailing_data_is_rejected() {
        let err = validate("{} {}".bytes()).unwrap_err();
        assert!(err.description().contains("trailing data"));
        assert_eq!(err.location().byte_offset, 3);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = validate("".bytes()).unwrap_err();
        assert!(err.description().contains("end of document"));
    }

    #[test]
    fn non_string_key_is_rejected() {
        let err = validate("{1: 2}".bytes()).unwrap_err();
        assert!(err.description().contains("object key must be a string"));
        assert_eq!(err.location().byte_offset, 1);
    }

    #[test]
    fn missing_colon_is_rejected() {
        let err = validate(r#"{"a" 1}"#.bytes()).unwrap_err();
        assert!(err.description().contains("expected ':'"));
    }
}
