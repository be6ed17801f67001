//! Text decoding for uploaded exports
//!
//! Platform exports are UTF-8 or Shift-JIS depending on the platform and on
//! whether an operator re-saved the file in a spreadsheet. Decoding is tried
//! as UTF-8 first; a replacement character in the result triggers a
//! Shift-JIS re-decode of the same bytes.

use encoding_rs::{SHIFT_JIS, UTF_8};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Encoding actually used to produce the decoded text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectedEncoding {
    Utf8,
    ShiftJis,
}

impl fmt::Display for DetectedEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedEncoding::Utf8 => f.write_str("UTF-8"),
            DetectedEncoding::ShiftJis => f.write_str("Shift_JIS"),
        }
    }
}

/// Decoded file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: DetectedEncoding,
}

/// Decode raw file bytes, falling back to Shift-JIS when UTF-8 is lossy
///
/// The UTF-8 result (BOM removed) is returned unchanged when it is clean, or
/// when the Shift-JIS attempt is itself malformed.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let (utf8, _) = UTF_8.decode_with_bom_removal(bytes);

    if !utf8.contains(char::REPLACEMENT_CHARACTER) {
        return DecodedText {
            text: utf8.into_owned(),
            encoding: DetectedEncoding::Utf8,
        };
    }

    debug!("UTF-8 decode produced replacement characters, retrying as Shift_JIS");

    let (sjis, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("Shift_JIS decode is also malformed, keeping lossy UTF-8 text");
        return DecodedText {
            text: utf8.into_owned(),
            encoding: DetectedEncoding::Utf8,
        };
    }

    DecodedText {
        text: sjis.into_owned(),
        encoding: DetectedEncoding::ShiftJis,
    }
}
