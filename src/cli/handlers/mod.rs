pub mod base64;
pub mod color;
pub mod config;
pub mod count;
pub mod date;
pub mod escape;
pub mod hash;
pub mod url;
pub mod uuid;
