use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::value::JsonValue;

/// Serializes a value to JSON text bytes.
///
/// An indent width of 0 selects compact output with no whitespace between
/// tokens; any other width pretty-prints with that many spaces per nesting
/// level. Key order is emitted exactly as held by the value.
pub fn write_value(value: &JsonValue, indent: usize) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    if indent == 0 {
        let mut ser = serde_json::Serializer::new(&mut out);
        value.serialize(&mut ser)?;
    } else {
        let step = vec![b' '; indent];
        let formatter = PrettyFormatter::with_indent(&step);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut ser)?;
    }
    Ok(out)
}
