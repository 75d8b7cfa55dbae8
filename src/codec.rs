//! Share token: the assignment as JSON, lz-string compressed into a
//! URI-component-safe string (interchangeable with `compressToEncodedURIComponent`).

use thiserror::Error;

use crate::model::Assignment;
use crate::util::clog;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("empty token")]
    Empty,
    #[error("token is not valid lz-string data")]
    Decompress,
    #[error("decompressed token is not valid UTF-16")]
    Utf16(#[from] std::string::FromUtf16Error),
    #[error("token payload is not a region→party object: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode_assignment(a: &Assignment) -> String {
    // BTreeMap<String, Party> always serializes
    let json = serde_json::to_string(a).unwrap_or_else(|_| "{}".to_string());
    lz_str::compress_to_encoded_uri_component(json.as_str())
}

pub fn try_decode_assignment(token: &str) -> Result<Assignment, CodecError> {
    if token.is_empty() {
        return Err(CodecError::Empty);
    }
    let raw = lz_str::decompress_from_encoded_uri_component(token).ok_or(CodecError::Decompress)?;
    if raw.is_empty() {
        return Err(CodecError::Decompress);
    }
    let json = String::from_utf16(&raw)?;
    Ok(serde_json::from_str::<Assignment>(&json)?)
}

/// `None` for a missing or undecodable token; failures never propagate.
pub fn decode_assignment(token: Option<&str>) -> Option<Assignment> {
    let token = token?;
    match try_decode_assignment(token) {
        Ok(a) => Some(a),
        Err(err) => {
            clog(&format!("share token ignored: {err}"));
            None
        }
    }
}
