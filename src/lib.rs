//! Developer text utilities.
//!
//! Each tool lives in [`codecs`] as a set of pure functions: character escapes, URL
//! percent-encoding, Base64 inspection, multi-format dates, UUIDs, CSS colors and
//! character counts. Expected failures come back as `None`, `false` or an empty value,
//! never as a panic. Text hashing sits in [`features`].
//!
//! # Example
//!
//! ```
//! use devtoolbox::codecs::escape::{self, EscapeType};
//!
//! assert_eq!(escape::encode("A", EscapeType::CodePoint), "U+0041");
//! assert_eq!(escape::decode("U+1F600", None).as_deref(), Some("😀"));
//! ```

pub mod codecs;
pub mod core;
pub mod features;
pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use core::config::ToolboxConfig;
pub use core::errors::{InvalidInputError, UnknownNameError, disable_color, find_closest_name};
pub use core::selector::{FormatSelector, SelectionMode};

// Features
pub use features::{DigestEncoding, HashAlgorithm, hash, hash_text};

#[cfg(test)]
mod tests;
