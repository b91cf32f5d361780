//! Translation file input definitions

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::Path;
use std::sync::LazyLock;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to read translation file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Translation file {path} must contain a JSON object")]
    NotAnObject { path: String },

    #[error("Could not detect a locale from the path {path}")]
    UnknownLocale { path: String },
}

/// Translations of one locale, loaded from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub locale: String,
    pub file_path: String,

    /// Flattened message id to template map.
    pub keys: HashMap<String, String>,
}

/// ISO 639-1 language codes, plus the ISO 639-2/3 codes of languages with
/// no two-letter code that US federal sites translate into.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be",
        "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs",
        "cu", "cv", "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu",
        "fa", "ff", "fi", "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha",
        "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik",
        "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
        "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo", "lt",
        "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
        "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os",
        "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd",
        "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv",
        "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
        "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo", "za",
        "zh", "zu", "ceb", "chr", "fil", "haw", "hmn", "yue",
    ]
    .into_iter()
    .collect()
});

/// Returns true if the segment is a locale tag with a known language.
///
/// The language subtag must be a known code; it may be followed by `-` or
/// `_` and a script (4 letters) or region (2 letters or 3 digits) subtag.
///
/// # Examples
/// - `es`, `en-US`, `es_419`, `zh-Hant` → true
/// - `about`, `map`, `faq`, `locales` → false
fn is_locale_tag(segment: &str) -> bool {
    let mut subtags = segment.split(['-', '_']);
    let Some(language) = subtags.next() else {
        return false;
    };
    if !LANGUAGE_CODES.contains(language) {
        return false;
    }

    subtags.all(|subtag| {
        let is_region = (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
            || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()));
        let is_script = subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic());
        is_region || is_script
    })
}

/// Detect locale from file path
///
/// The parent directory is checked first, so a namespace file inside a
/// locale directory (`messages/es/map.json`) belongs to that locale. The
/// file name is checked next.
///
/// # Examples
/// - `locales/es.json` → `es`
/// - `messages/es-MX/about.json` → `es-MX`
/// - `messages/es/map.json` → `es`
/// - `app/locales/about.json` → `None`
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<String> {
    let parent_name =
        file_path.parent().and_then(Path::file_name).map(|name| name.to_string_lossy());
    let file_stem = file_path.file_stem().map(|stem| stem.to_string_lossy());

    [parent_name, file_stem]
        .into_iter()
        .flatten()
        .find(|segment| is_locale_tag(segment))
        .map(|segment| segment.to_string())
}

/// Flatten nested JSON object into a separator-joined key map.
///
/// Only string leaves are kept; other leaves cannot be templates.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use about_copy::input::translation::flatten_json;
///
/// let json = json!({ "about": { "page": { "title": { "text": "Acerca de" } } } });
///
/// let flattened = flatten_json(&json, ".");
/// assert_eq!(flattened.get("about.page.title.text"), Some(&"Acerca de".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, separator: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, None, &mut result);
    result
}

/// Recursive step of [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        other => {
            tracing::debug!(key = ?prefix, kind = ?other, "Skipping non-string translation value");
        }
    }
}

/// Parses translation file content (JSON with comments and trailing commas allowed).
///
/// # Errors
/// Returns error if the content is not a JSON object.
pub fn parse_translation(
    content: &str,
    file_path: &str,
    locale: &str,
    separator: &str,
) -> Result<Translation, TranslationError> {
    let json = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| TranslationError::Parse { path: file_path.to_string(), message: e.to_string() })?;

    let Some(json @ Value::Object(_)) = json else {
        return Err(TranslationError::NotAnObject { path: file_path.to_string() });
    };

    Ok(Translation {
        locale: locale.to_string(),
        file_path: file_path.to_string(),
        keys: flatten_json(&json, separator),
    })
}

/// Load translation file; the locale comes from the path.
///
/// # Errors
/// Returns error if the locale cannot be detected, or file read or parse fails.
pub fn load_translation_file(
    file_path: &Path,
    separator: &str,
) -> Result<Translation, TranslationError> {
    let path = file_path.to_string_lossy().to_string();
    let locale = detect_locale_from_path(file_path)
        .ok_or_else(|| TranslationError::UnknownLocale { path: path.clone() })?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| TranslationError::Read { path: path.clone(), source })?;

    parse_translation(&content, &path, &locale, separator)
}
