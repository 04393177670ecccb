//! UUID validation, generation and output formatting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::errors::UnknownNameError;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-8][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000|ffffffff-ffff-ffff-ffff-ffffffffffff)$",
    )
    .unwrap()
});

/// Which UUID to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Timestamp and node id
    V1,
    /// MD5 of namespace and name
    V3,
    #[default]
    V4,
    /// SHA-1 of namespace and name
    V5,
    Nil,
}

impl UuidVersion {
    pub const ALL: [UuidVersion; 5] = [
        UuidVersion::V1,
        UuidVersion::V3,
        UuidVersion::V4,
        UuidVersion::V5,
        UuidVersion::Nil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "v1",
            UuidVersion::V3 => "v3",
            UuidVersion::V4 => "v4",
            UuidVersion::V5 => "v5",
            UuidVersion::Nil => "nil",
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UuidVersion {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(UuidVersion::V1),
            "v3" | "3" => Ok(UuidVersion::V3),
            "v4" | "4" => Ok(UuidVersion::V4),
            "v5" | "5" => Ok(UuidVersion::V5),
            "nil" | "empty" => Ok(UuidVersion::Nil),
            _ => Err(UnknownNameError::with_candidates(
                "uuid version",
                s,
                &UuidVersion::ALL.map(|v| v.as_str()),
            )),
        }
    }
}

/// Generation parameters and output formatting flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidOptions {
    pub version: UuidVersion,
    /// UUID or preset name (`dns`, `url`, `oid`, `x500`); v3/v5 only
    pub namespace: Option<String>,
    /// v3/v5 only
    pub name: Option<String>,
    pub quantity: usize,
    pub hyphens: bool,
    pub uppercase: bool,
    pub braces: bool,
    pub quotes: bool,
    pub commas: bool,
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            version: UuidVersion::V4,
            namespace: None,
            name: None,
            quantity: 1,
            hyphens: true,
            uppercase: false,
            braces: false,
            quotes: false,
            commas: false,
        }
    }
}

/// RFC 4122 namespace presets.
pub const NAMESPACE_PRESETS: [(&str, Uuid); 4] = [
    ("dns", Uuid::NAMESPACE_DNS),
    ("url", Uuid::NAMESPACE_URL),
    ("oid", Uuid::NAMESPACE_OID),
    ("x500", Uuid::NAMESPACE_X500),
];

/// Canonical UUID check. Nil and max UUIDs are accepted too.
pub fn validate(uuid: &str) -> bool {
    UUID_PATTERN.is_match(uuid)
}

pub fn requires_namespace(version: UuidVersion) -> bool {
    matches!(version, UuidVersion::V3 | UuidVersion::V5)
}

/// A preset name or a UUID in canonical hyphenated form.
///
/// Simple, braced and `urn:uuid:` spellings are rejected, matching [`validate`].
pub fn resolve_namespace(namespace: &str) -> Option<Uuid> {
    let namespace = namespace.trim();
    NAMESPACE_PRESETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(namespace))
        .map(|(_, uuid)| *uuid)
        .or_else(|| {
            validate(namespace)
                .then(|| Uuid::parse_str(namespace).ok())
                .flatten()
        })
}

fn namespace_and_name(options: &UuidOptions) -> Option<(Uuid, &str)> {
    let namespace = resolve_namespace(options.namespace.as_deref()?)?;
    let name = options.name.as_deref().filter(|n| !n.is_empty())?;
    Some((namespace, name))
}

/// Generate one UUID and apply the formatting flags.
///
/// v3/v5 without a usable namespace and name yield an empty string.
pub fn generate(options: &UuidOptions) -> String {
    let uuid = match options.version {
        UuidVersion::V1 => Uuid::now_v1(&rand::random::<[u8; 6]>()),
        UuidVersion::V3 => match namespace_and_name(options) {
            Some((namespace, name)) => Uuid::new_v3(&namespace, name.as_bytes()),
            None => {
                log::debug!("v3 requested without namespace and name");
                return String::new();
            }
        },
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V5 => match namespace_and_name(options) {
            Some((namespace, name)) => Uuid::new_v5(&namespace, name.as_bytes()),
            None => {
                log::debug!("v5 requested without namespace and name");
                return String::new();
            }
        },
        UuidVersion::Nil => Uuid::nil(),
    };

    format_uuid(&uuid.hyphenated().to_string(), options)
}

/// Generate `quantity` UUIDs (at least one), dropping empty results.
pub fn generate_many(options: &UuidOptions) -> Vec<String> {
    (0..options.quantity.max(1))
        .map(|_| generate(options))
        .filter(|uuid| !uuid.is_empty())
        .collect()
}

/// Hyphens, then case, then braces, then quotes, then the trailing comma.
pub fn format_uuid(uuid: &str, options: &UuidOptions) -> String {
    let mut out = if options.hyphens {
        uuid.to_string()
    } else {
        uuid.replace('-', "")
    };
    if options.uppercase {
        out = out.to_uppercase();
    }
    if options.braces {
        out = format!("{{{out}}}");
    }
    if options.quotes {
        out = format!("\"{out}\"");
    }
    if options.commas {
        out.push(',');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(version: UuidVersion) -> UuidOptions {
        UuidOptions {
            version,
            ..UuidOptions::default()
        }
    }

    #[test]
    fn test_nil() {
        assert_eq!(
            generate(&options(UuidVersion::Nil)),
            "00000000-0000-0000-0000-000000000000"
        );
        let fancy = UuidOptions {
            uppercase: true,
            braces: true,
            ..options(UuidVersion::Nil)
        };
        assert_eq!(generate(&fancy), "{00000000-0000-0000-0000-000000000000}");
    }

    #[test]
    fn test_v5_deterministic() {
        let opts = UuidOptions {
            namespace: Some("dns".to_string()),
            name: Some("example.com".to_string()),
            ..options(UuidVersion::V5)
        };
        let first = generate(&opts);
        assert_eq!(first, generate(&opts));
        assert_eq!(first, "cfbff0d1-9375-5685-968c-48ce8b15ae17");
    }

    #[test]
    fn test_v3_deterministic() {
        let opts = UuidOptions {
            namespace: Some(Uuid::NAMESPACE_DNS.to_string()),
            name: Some("example.com".to_string()),
            ..options(UuidVersion::V3)
        };
        assert_eq!(generate(&opts), "9073926b-929f-31c2-abc9-fad77ae3e8eb");
    }

    #[test]
    fn test_namespace_must_be_canonical() {
        for namespace in [
            "6ba7b8109dad11d180b400c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        ] {
            assert!(!validate(namespace));
            assert_eq!(resolve_namespace(namespace), None);
            let opts = UuidOptions {
                namespace: Some(namespace.to_string()),
                name: Some("example.com".to_string()),
                ..options(UuidVersion::V5)
            };
            assert_eq!(generate(&opts), "", "namespace {}", namespace);
        }
        assert_eq!(
            resolve_namespace("6BA7B810-9DAD-11D1-80B4-00C04FD430C8"),
            Some(Uuid::NAMESPACE_DNS)
        );
    }

    #[test]
    fn test_v3_v5_missing_inputs() {
        for version in [UuidVersion::V3, UuidVersion::V5] {
            assert_eq!(generate(&options(version)), "");
            let no_name = UuidOptions {
                namespace: Some("url".to_string()),
                name: Some(String::new()),
                ..options(version)
            };
            assert_eq!(generate(&no_name), "");
            let bad_namespace = UuidOptions {
                namespace: Some("not-a-uuid".to_string()),
                name: Some("x".to_string()),
                quantity: 5,
                ..options(version)
            };
            assert!(generate_many(&bad_namespace).is_empty());
        }
    }

    #[test]
    fn test_v4_and_v1_unique() {
        for version in [UuidVersion::V1, UuidVersion::V4] {
            let batch = generate_many(&UuidOptions {
                quantity: 10,
                ..options(version)
            });
            let unique: std::collections::HashSet<_> = batch.iter().collect();
            assert_eq!(unique.len(), 10);
            assert!(batch.iter().all(|u| validate(u)));
        }
    }

    #[test]
    fn test_quantity_clamped() {
        let batch = generate_many(&UuidOptions {
            quantity: 0,
            ..options(UuidVersion::V4)
        });
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_format_order() {
        let opts = UuidOptions {
            hyphens: false,
            uppercase: true,
            braces: true,
            quotes: true,
            commas: true,
            ..UuidOptions::default()
        };
        assert_eq!(
            format_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8", &opts),
            "\"{6BA7B8109DAD11D180B400C04FD430C8}\","
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
        assert!(validate("6BA7B810-9DAD-11D1-80B4-00C04FD430C8"));
        assert!(validate("00000000-0000-0000-0000-000000000000"));
        assert!(validate("ffffffff-ffff-ffff-ffff-ffffffffffff"));
        assert!(!validate("6ba7b8109dad11d180b400c04fd430c8"));
        assert!(!validate("6ba7b810-9dad-01d1-80b4-00c04fd430c8"));
        assert!(!validate("6ba7b810-9dad-11d1-c0b4-00c04fd430c8"));
        assert!(!validate(""));
    }

    #[test]
    fn test_requires_namespace() {
        assert!(requires_namespace(UuidVersion::V3));
        assert!(requires_namespace(UuidVersion::V5));
        assert!(!requires_namespace(UuidVersion::V4));
        assert!(!requires_namespace(UuidVersion::Nil));
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("V5".parse::<UuidVersion>().unwrap(), UuidVersion::V5);
        assert_eq!("4".parse::<UuidVersion>().unwrap(), UuidVersion::V4);
        let err = "nill".parse::<UuidVersion>().unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("nil"));
    }
}
