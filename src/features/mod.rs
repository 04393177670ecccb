//! Optional features module.
//!
//! Tools that sit beside the codecs rather than inside them. Currently text
//! and file hashing.

pub mod hashing;

pub use hashing::{DigestEncoding, HashAlgorithm, hash, hash_text};
