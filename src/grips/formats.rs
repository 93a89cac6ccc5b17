//! Serialization formats for token streams
//!
//! Token streams cross tool boundaries: the conversion stage can be inspected
//! from editors and test harnesses that want the stream as data rather than
//! as rendered template text. JSON is the one interchange format this crate
//! carries; the token types themselves stay serialization-agnostic behind
//! serde derives.

use crate::grips::tokens::Token;

/// Serialize a token stream to compact JSON.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tokens)
}

/// Serialize a token stream to human-readable JSON.
pub fn to_json_pretty(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Deserialize a token stream from JSON.
pub fn from_json(json: &str) -> Result<Vec<Token>, serde_json::Error> {
    serde_json::from_str(json)
}
