use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::input::InputArgs;

/// Character escape actions
#[derive(Subcommand, Debug)]
pub enum EscapeAction {
    /// Encode every character in one notation
    Encode {
        /// code-point, escape-sequence, css-escape, html-code or html-entity
        #[arg(short = 'F', long)]
        format: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Decode escapes, detecting the notation unless --format is given
    Decode {
        /// Notation to decode (auto-detected if not provided)
        #[arg(short = 'F', long)]
        format: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Print which notation the input uses
    Detect {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// URL encoding actions
#[derive(Subcommand, Debug)]
pub enum UrlAction {
    /// Percent-encode like encodeURIComponent
    Encode {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode percent-escapes
    Decode {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Report whether the input looks percent-encoded
    Detect {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode if the input looks encoded, encode otherwise
    Auto {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Base64 actions
#[derive(Subcommand, Debug)]
pub enum Base64Action {
    /// Encode text, or a file's bytes with --file
    Encode {
        /// Use the URL-safe alphabet without padding
        #[arg(long)]
        url_safe: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Decode to raw bytes
    Decode {
        /// Output file (writes to stdout if not provided)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Strict syntax check; exits non-zero when invalid
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validity, content heuristic and file type
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Convert to the standard alphabet with padding
    Standardize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Convert to the URL-safe alphabet without padding
    UrlSafe {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Arguments for date conversion
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Date to convert (current time if not provided)
    pub input: Option<String>,

    /// Input format (auto-detected if not provided)
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<String>,

    /// IANA timezone for rendering [default: from config]
    #[arg(long, value_name = "ZONE")]
    pub tz: Option<String>,
}

/// Arguments for UUID generation
#[derive(Args, Debug)]
pub struct UuidArgs {
    /// v1, v3, v4, v5 or nil [default: from config]
    #[arg(long = "version", id = "uuid_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Namespace UUID or preset (dns, url, oid, x500) for v3/v5
    #[arg(long)]
    pub namespace: Option<String>,

    /// Name to hash for v3/v5
    #[arg(long)]
    pub name: Option<String>,

    /// How many UUIDs to generate
    #[arg(short = 'n', long)]
    pub quantity: Option<usize>,

    /// Strip hyphens
    #[arg(long)]
    pub no_hyphens: bool,

    /// Uppercase hex digits
    #[arg(long)]
    pub uppercase: bool,

    /// Wrap in braces
    #[arg(long)]
    pub braces: bool,

    /// Wrap in double quotes
    #[arg(long)]
    pub quotes: bool,

    /// Append a trailing comma
    #[arg(long)]
    pub commas: bool,

    /// Validate this UUID instead of generating
    #[arg(long, value_name = "UUID", conflicts_with_all = ["namespace", "name", "quantity"])]
    pub validate: Option<String>,
}

/// Arguments for color conversion
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Color in hex, rgb(), hsl(), hwb(), lch(), device-cmyk() or a CSS name
    pub input: String,

    /// Only print this format
    #[arg(long, value_name = "FORMAT")]
    pub to: Option<String>,
}

/// Arguments for hashing text
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Hash algorithm to use [default: from config]
    #[arg(short = 'a', long)]
    pub algorithm: Option<String>,

    /// hex, base64, base64url or binary [default: from config]
    #[arg(short = 'e', long)]
    pub encoding: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available options
    List {
        /// What to list: dates, uuids, hashes, escapes, colors
        #[arg(value_name = "TYPE")]
        category: Option<ConfigCategory>,
    },

    /// Print the effective configuration as TOML
    Show,
}

/// Categories for config list command
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum ConfigCategory {
    Dates,
    Uuids,
    Hashes,
    Escapes,
    Colors,
}
