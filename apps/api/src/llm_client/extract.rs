//! Response extraction — turns raw completion text into typed values.
//!
//! Models frequently wrap JSON in markdown code fences despite the
//! format directives in the prompts. Fences are stripped before parsing;
//! anything that still fails to parse is a `MalformedResponse`, a terminal
//! error class the completion retry never sees.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("completion is not valid JSON of the expected shape: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Strips code-fence wrappers from `raw` and parses the remainder as `T`.
pub fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let cleaned = strip_fences(raw);
    Ok(serde_json::from_str(&cleaned)?)
}

/// Removes markdown code-fence markers from completion output.
///
/// Only applied when the text actually contains fences: all ``` markers are
/// removed and a leading literal "json" language tag is dropped.
fn strip_fences(raw: &str) -> String {
    if !raw.contains("```") {
        return raw.trim().to_string();
    }
    let without_fences = raw.replace("```", "");
    let trimmed = without_fences.trim();
    let without_tag = trimmed.strip_prefix("json").unwrap_or(trimmed);
    without_tag.trim().to_string()
}
