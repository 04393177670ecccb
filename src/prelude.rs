//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in devtoolbox.
//!
//! # Example
//!
//! ```
//! use devtoolbox::prelude::*;
//!
//! let counts = count("Hello, world!");
//! assert_eq!(counts.words, 2);
//! assert_eq!(hash_text("abc", HashAlgorithm::Md5, DigestEncoding::Hex), "900150983cd24fb0d6963f7d28e17f72");
//! ```

pub use crate::{
    // Config
    ToolboxConfig,

    // Errors
    InvalidInputError,
    UnknownNameError,

    // Auto/manual selection
    FormatSelector,
    SelectionMode,

    // Hashing
    DigestEncoding,
    HashAlgorithm,
    hash,
    hash_text,
};

pub use crate::codecs::{
    base64::{Base64Report, Blob, base64_to_text, is_valid_base64, standardize_base64, text_to_base64},
    color::{ColorFormat, Rgba, convert_color, parse_color},
    count::{TextCount, count},
    date::{DateFormatKey, convert_all as convert_date, parse_date},
    escape::EscapeType,
    url::{decode_from_url, encode_to_url},
    uuid::{UuidOptions, UuidVersion, generate as generate_uuid},
};
