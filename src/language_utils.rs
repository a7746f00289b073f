//! Language utilities for translation keys.
//!
//! Translation maps are keyed by ISO 639-1 (2-letter, lowercase) codes.
//! These helpers validate and normalize such keys.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Normalize a language code for lookup: trimmed and lowercased
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Check that a code has the shape of a translation key (two lowercase ASCII letters)
pub fn is_translation_key_shape(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// Validate a translation key exactly as stored
///
/// The key must already be lowercase and must name a known ISO 639-1 language.
pub fn validate_translation_key(code: &str) -> Result<Language> {
    if !is_translation_key_shape(code) {
        return Err(anyhow!(
            "Language code must be two lowercase letters: '{}'",
            code
        ));
    }

    Language::from_639_1(code).ok_or_else(|| anyhow!("Unknown ISO 639-1 language code: {}", code))
}

/// Get the English language name for a translation key
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = validate_translation_key(&normalize_code(code))?;
    Ok(lang.to_name().to_string())
}
