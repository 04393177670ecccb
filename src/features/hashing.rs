use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::UnknownNameError;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
    Blake2b,
    Blake2s,
    Blake3,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 16] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Keccak224,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Keccak384,
        HashAlgorithm::Keccak512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
        HashAlgorithm::Blake3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_224 => "sha3-224",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Keccak224 => "keccak224",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Keccak384 => "keccak384",
            HashAlgorithm::Keccak512 => "keccak512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Get the output size in bytes for this algorithm.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha3_224 | HashAlgorithm::Keccak224 => 28,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Keccak256
            | HashAlgorithm::Blake2s
            | HashAlgorithm::Blake3 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 | HashAlgorithm::Keccak384 => 48,
            HashAlgorithm::Sha512
            | HashAlgorithm::Sha3_512
            | HashAlgorithm::Keccak512
            | HashAlgorithm::Blake2b => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha224" | "sha-224" => Ok(HashAlgorithm::Sha224),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgorithm::Sha384),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            "sha3-224" | "sha3_224" => Ok(HashAlgorithm::Sha3_224),
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "sha3-384" | "sha3_384" => Ok(HashAlgorithm::Sha3_384),
            "sha3-512" | "sha3_512" => Ok(HashAlgorithm::Sha3_512),
            "keccak224" | "keccak-224" => Ok(HashAlgorithm::Keccak224),
            "keccak256" | "keccak-256" => Ok(HashAlgorithm::Keccak256),
            "keccak384" | "keccak-384" => Ok(HashAlgorithm::Keccak384),
            "keccak512" | "keccak-512" => Ok(HashAlgorithm::Keccak512),
            "blake2b" | "blake2b-512" => Ok(HashAlgorithm::Blake2b),
            "blake2s" | "blake2s-256" => Ok(HashAlgorithm::Blake2s),
            "blake3" => Ok(HashAlgorithm::Blake3),
            _ => Err(UnknownNameError::with_candidates(
                "hash algorithm",
                s,
                &HashAlgorithm::ALL.map(|a| a.as_str()),
            )),
        }
    }
}

/// Text form of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestEncoding {
    #[default]
    Hex,
    Base64,
    /// URL-safe alphabet, unpadded
    Base64Url,
    /// One `0`/`1` per bit, most significant first
    Binary,
}

impl DigestEncoding {
    pub const ALL: [DigestEncoding; 4] = [
        DigestEncoding::Hex,
        DigestEncoding::Base64,
        DigestEncoding::Base64Url,
        DigestEncoding::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestEncoding::Hex => "hex",
            DigestEncoding::Base64 => "base64",
            DigestEncoding::Base64Url => "base64url",
            DigestEncoding::Binary => "binary",
        }
    }

    pub fn encode(&self, digest: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => hex::encode(digest),
            DigestEncoding::Base64 => STANDARD.encode(digest),
            DigestEncoding::Base64Url => URL_SAFE_NO_PAD.encode(digest),
            DigestEncoding::Binary => digest.iter().map(|b| format!("{:08b}", b)).collect(),
        }
    }
}

impl fmt::Display for DigestEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestEncoding {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" | "base16" => Ok(DigestEncoding::Hex),
            "base64" => Ok(DigestEncoding::Base64),
            "base64url" | "base64-url" => Ok(DigestEncoding::Base64Url),
            "binary" | "bin" | "base2" => Ok(DigestEncoding::Binary),
            _ => Err(UnknownNameError::with_candidates(
                "digest encoding",
                s,
                &DigestEncoding::ALL.map(|e| e.as_str()),
            )),
        }
    }
}

fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute hash of data using the specified algorithm.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => digest::<Md5>(data),
        HashAlgorithm::Sha224 => digest::<Sha224>(data),
        HashAlgorithm::Sha256 => digest::<Sha256>(data),
        HashAlgorithm::Sha384 => digest::<Sha384>(data),
        HashAlgorithm::Sha512 => digest::<Sha512>(data),
        HashAlgorithm::Sha3_224 => digest::<Sha3_224>(data),
        HashAlgorithm::Sha3_256 => digest::<Sha3_256>(data),
        HashAlgorithm::Sha3_384 => digest::<Sha3_384>(data),
        HashAlgorithm::Sha3_512 => digest::<Sha3_512>(data),
        HashAlgorithm::Keccak224 => digest::<Keccak224>(data),
        HashAlgorithm::Keccak256 => digest::<Keccak256>(data),
        HashAlgorithm::Keccak384 => digest::<Keccak384>(data),
        HashAlgorithm::Keccak512 => digest::<Keccak512>(data),
        HashAlgorithm::Blake2b => digest::<Blake2b512>(data),
        HashAlgorithm::Blake2s => digest::<Blake2s256>(data),
        HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
    }
}

/// Hash the UTF-8 bytes of `text` and render the digest.
pub fn hash_text(text: &str, algorithm: HashAlgorithm, encoding: DigestEncoding) -> String {
    encoding.encode(&hash(text.as_bytes(), algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5() {
        assert_eq!(
            hash_text("hello world", HashAlgorithm::Md5, DigestEncoding::Hex),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_sha256() {
        assert_eq!(
            hash_text("hello world", HashAlgorithm::Sha256, DigestEncoding::Hex),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_empty_input() {
        // SHA-256 of empty string
        assert_eq!(
            hash_text("", HashAlgorithm::Sha256, DigestEncoding::Hex),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_output_sizes_match_digests() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(
                hash(b"hello world", algorithm).len(),
                algorithm.output_size(),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_encodings() {
        let md5 = hash(b"hello world", HashAlgorithm::Md5);
        assert_eq!(DigestEncoding::Base64.encode(&md5), "XrY7u+Ae7tCTyyK7j1rNww==");
        assert_eq!(DigestEncoding::Base64Url.encode(&md5), "XrY7u-Ae7tCTyyK7j1rNww");
        let bits = DigestEncoding::Binary.encode(&md5);
        assert_eq!(bits.len(), 128);
        assert!(bits.starts_with("01011110"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "SHA-256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha256
        );
        let err = "sha265".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err.kind, "hash algorithm");
        assert!(err.suggestion.is_some());
        assert_eq!(
            "base16".parse::<DigestEncoding>().unwrap(),
            DigestEncoding::Hex
        );
        assert!("base58".parse::<DigestEncoding>().is_err());
    }
}
