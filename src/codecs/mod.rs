//! Text codecs. Each module is a set of pure functions over input strings; failures
//! are reported as `None`, `false` or an empty result, never as a panic.

pub mod base64;
pub mod color;
pub mod color_names;
pub mod count;
pub mod date;
pub mod entities;
pub mod escape;
pub mod signatures;
pub mod url;
pub mod uuid;
