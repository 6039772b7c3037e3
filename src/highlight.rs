//! ANSI syntax highlighting for JSON text.

use json_stream::{JsonSyntaxError, JsonToken, JsonTokenizer};

const KEY: &str = "\x1b[36m";
const STRING: &str = "\x1b[32m";
const NUMBER: &str = "\x1b[33m";
const LITERAL: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, PartialEq)]
enum Container {
    Object,
    Array,
}

/// Re-tokenizes `source` and wraps each token in a color escape by class:
/// object keys cyan, strings green, numbers yellow, `true`/`false`/`null`
/// magenta. Inter-token whitespace is copied through untouched, so the text
/// layout stays exactly the input's.
pub fn highlight(source: &str) -> Result<String, JsonSyntaxError> {
    let mut tokenizer = JsonTokenizer::new(source.bytes());
    let mut out = String::with_capacity(source.len() * 2);
    let mut stack: Vec<Container> = Vec::new();
    let mut expect_key = false;
    let mut copied = 0usize;

    while let Some(spanned) = tokenizer.next_token()? {
        let start = spanned.start.byte_offset as usize;
        let end = spanned.end.byte_offset as usize;
        out.push_str(&source[copied..start]);
        let text = &source[start..end];

        let color = match &spanned.token {
            JsonToken::ObjOpen => {
                stack.push(Container::Object);
                expect_key = true;
                None
            }
            JsonToken::ArrayOpen => {
                stack.push(Container::Array);
                expect_key = false;
                None
            }
            JsonToken::ObjClose | JsonToken::ArrayClose => {
                stack.pop();
                expect_key = false;
                None
            }
            JsonToken::Colon => {
                expect_key = false;
                None
            }
            JsonToken::Comma => {
                expect_key = stack.last() == Some(&Container::Object);
                None
            }
            JsonToken::String(_) => Some(if expect_key { KEY } else { STRING }),
            JsonToken::Number(_) => Some(NUMBER),
            JsonToken::True | JsonToken::False | JsonToken::Null => Some(LITERAL),
        };

        match color {
            Some(color) => {
                out.push_str(color);
                out.push_str(text);
                out.push_str(RESET);
            }
            None => out.push_str(text),
        }
        copied = end;
    }
    out.push_str(&source[copied..]);
    Ok(out)
}
