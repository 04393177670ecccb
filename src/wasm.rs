//! WebAssembly bindings for devtoolbox
//!
//! Provides a JavaScript-friendly API over the codecs. Structured results are
//! returned as JSON strings.

use wasm_bindgen::prelude::*;

use crate::codecs::{base64, color, count, date, escape, url, uuid};
use crate::codecs::color::ColorFormat;
use crate::codecs::date::DateFormatKey;
use crate::codecs::escape::EscapeType;
use crate::codecs::uuid::{UuidOptions, UuidVersion};
use crate::{DigestEncoding, HashAlgorithm, UnknownNameError};

/// Error type for WASM operations
#[wasm_bindgen]
pub struct WasmError {
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for WasmError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<UnknownNameError> for WasmError {
    fn from(err: UnknownNameError) -> Self {
        let mut message = format!("unknown {} '{}'", err.kind, err.name);
        if let Some(suggestion) = err.suggestion {
            message.push_str(&format!(", did you mean '{}'?", suggestion));
        }
        Self { message }
    }
}

impl From<serde_json::Error> for WasmError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("Failed to serialize result: {}", err),
        }
    }
}

/// Encode every character of `text` in the named notation
///
/// # Arguments
///
/// * `text` - Text to encode
/// * `format` - `code-point`, `escape-sequence`, `css-escape`, `html-code` or `html-entity`
#[wasm_bindgen]
pub fn encode_characters(text: &str, format: &str) -> Result<String, WasmError> {
    let format: EscapeType = format.parse()?;
    Ok(escape::encode(text, format))
}

/// Decode escapes, detecting the notation when `format` is not given
#[wasm_bindgen]
pub fn decode_characters(text: &str, format: Option<String>) -> Result<String, WasmError> {
    let format = format.as_deref().map(str::parse::<EscapeType>).transpose()?;
    escape::decode(text, format)
        .ok_or_else(|| WasmError::from("Input is not a recognized escape notation"))
}

/// Name of the escape notation `text` uses, if any
#[wasm_bindgen]
pub fn detect_escape_type(text: &str) -> Option<String> {
    escape::detect(text).map(|t| t.as_str().to_string())
}

#[wasm_bindgen]
pub fn encode_url(text: &str) -> String {
    url::encode_to_url(text)
}

#[wasm_bindgen]
pub fn decode_url(text: &str) -> Result<String, WasmError> {
    url::decode_from_url(text).ok_or_else(|| WasmError::from("Malformed percent-encoding"))
}

#[wasm_bindgen]
pub fn is_url_encoded(text: &str) -> bool {
    url::is_valid_url_encoded(text)
}

/// Encode bytes to a base64 string
///
/// # Arguments
///
/// * `data` - The binary data to encode
///
/// # Returns
///
/// Base64-encoded string
#[wasm_bindgen]
pub fn encode_base64(data: &[u8]) -> String {
    base64::bytes_to_base64(data)
}

/// Decode a base64 string back to bytes
///
/// Accepts both the standard and URL-safe alphabets, padded or not.
#[wasm_bindgen]
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, WasmError> {
    if !base64::is_valid_base64(encoded) {
        return Err(WasmError::from("Invalid Base64"));
    }
    base64::decode_bytes(encoded).ok_or_else(|| WasmError::from("Invalid Base64"))
}

#[wasm_bindgen]
pub fn is_valid_base64(text: &str) -> bool {
    base64::is_valid_base64(text)
}

#[wasm_bindgen]
pub fn standardize_base64(text: &str) -> String {
    base64::standardize_base64(text)
}

#[wasm_bindgen]
pub fn url_safe_base64(text: &str) -> String {
    base64::convert_to_url_safe(text)
}

/// Validity, content heuristic and sniffed file type as JSON
#[wasm_bindgen]
pub fn inspect_base64(text: &str) -> Result<String, WasmError> {
    Ok(serde_json::to_string(&base64::inspect(text))?)
}

/// Convert a date to every supported format
///
/// # Arguments
///
/// * `input` - Date text in any supported format
/// * `from` - Input format key (auto-detected if not provided)
/// * `timezone` - IANA zone used for rendering (UTC if not provided)
///
/// # Returns
///
/// JSON array of `{ "format": key, "value": rendered }`
#[wasm_bindgen]
pub fn convert_date(
    input: &str,
    from: Option<String>,
    timezone: Option<String>,
) -> Result<String, WasmError> {
    let key = from.as_deref().map(str::parse::<DateFormatKey>).transpose()?;
    let tz = timezone.as_deref().map(date::resolve_timezone).transpose()?;
    let parsed = date::parse_date(input, key).ok_or_else(|| WasmError::from("Unrecognized date"))?;

    let rendered: Vec<_> = date::convert_all(&parsed, tz)
        .into_iter()
        .map(|(format, value)| {
            serde_json::json!({ "format": format.as_str(), "value": value })
        })
        .collect();
    Ok(serde_json::to_string(&rendered)?)
}

/// Generate `quantity` UUIDs
///
/// `namespace` and `name` are only used for v3 and v5.
#[wasm_bindgen]
pub fn generate_uuids(
    version: &str,
    namespace: Option<String>,
    name: Option<String>,
    quantity: usize,
    hyphens: bool,
    uppercase: bool,
) -> Result<Vec<String>, WasmError> {
    let version: UuidVersion = version.parse()?;
    let options = UuidOptions {
        version,
        namespace,
        name,
        quantity,
        hyphens,
        uppercase,
        ..UuidOptions::default()
    };
    Ok(uuid::generate_many(&options))
}

#[wasm_bindgen]
pub fn validate_uuid(text: &str) -> bool {
    uuid::validate(text)
}

/// Convert a CSS color to the named format
#[wasm_bindgen]
pub fn convert_color(text: &str, target: &str) -> Result<String, WasmError> {
    let target: ColorFormat = target.parse()?;
    color::convert_color(text, target).ok_or_else(|| WasmError::from("Unrecognized color"))
}

/// Format of a color string, or nothing for names and unparseable input
#[wasm_bindgen]
pub fn color_format(text: &str) -> Option<String> {
    color::get_color_format(text).map(|f| f.as_str().to_string())
}

/// Character class counts as JSON
#[wasm_bindgen]
pub fn count_text(text: &str) -> Result<String, WasmError> {
    Ok(serde_json::to_string(&count::count(text))?)
}

/// Hash the UTF-8 bytes of `text`
#[wasm_bindgen]
pub fn hash_text(text: &str, algorithm: &str, encoding: &str) -> Result<String, WasmError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let encoding: DigestEncoding = encoding.parse()?;
    Ok(crate::hash_text(text, algorithm, encoding))
}
