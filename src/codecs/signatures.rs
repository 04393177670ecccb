//! Binary file signatures ("magic numbers").

use serde::Serialize;

/// A recognised file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileSignature {
    pub extension: &'static str,
    pub mime: &'static str,
}

struct Magic {
    offset: usize,
    bytes: &'static [u8],
    /// Secondary check at another offset (RIFF containers, ISO media)
    and: Option<(usize, &'static [u8])>,
    signature: FileSignature,
}

const fn magic(
    offset: usize,
    bytes: &'static [u8],
    extension: &'static str,
    mime: &'static str,
) -> Magic {
    Magic {
        offset,
        bytes,
        and: None,
        signature: FileSignature { extension, mime },
    }
}

const fn magic_and(
    bytes: &'static [u8],
    at: usize,
    also: &'static [u8],
    extension: &'static str,
    mime: &'static str,
) -> Magic {
    Magic {
        offset: 0,
        bytes,
        and: Some((at, also)),
        signature: FileSignature { extension, mime },
    }
}

// More specific entries come before the generic ones they share a prefix with.
const SIGNATURES: &[Magic] = &[
    // Images
    magic(0, b"\x89PNG\r\n\x1a\n", "png", "image/png"),
    magic(0, b"\xff\xd8\xff", "jpg", "image/jpeg"),
    magic(0, b"GIF87a", "gif", "image/gif"),
    magic(0, b"GIF89a", "gif", "image/gif"),
    magic_and(b"RIFF", 8, b"WEBP", "webp", "image/webp"),
    magic(0, b"BM", "bmp", "image/bmp"),
    magic(0, b"\x00\x00\x01\x00", "ico", "image/vnd.microsoft.icon"),
    magic(0, b"II*\x00", "tif", "image/tiff"),
    magic(0, b"MM\x00*", "tif", "image/tiff"),
    magic(0, b"8BPS", "psd", "image/vnd.adobe.photoshop"),
    magic_and(b"\x00\x00\x00", 4, b"ftypavif", "avif", "image/avif"),
    magic_and(b"\x00\x00\x00", 4, b"ftypheic", "heic", "image/heic"),
    // Audio and video
    magic_and(b"RIFF", 8, b"WAVE", "wav", "audio/wav"),
    magic_and(b"RIFF", 8, b"AVI ", "avi", "video/x-msvideo"),
    magic(0, b"ID3", "mp3", "audio/mpeg"),
    magic(0, b"OggS", "ogg", "audio/ogg"),
    magic(0, b"fLaC", "flac", "audio/flac"),
    magic(0, b"\x1a\x45\xdf\xa3", "webm", "video/webm"),
    magic_and(b"\x00\x00\x00", 4, b"ftypqt", "mov", "video/quicktime"),
    magic(4, b"ftyp", "mp4", "video/mp4"),
    // Documents
    magic(0, b"%PDF-", "pdf", "application/pdf"),
    magic(0, b"{\\rtf", "rtf", "application/rtf"),
    magic(0, b"SQLite format 3\x00", "sqlite", "application/vnd.sqlite3"),
    // Archives and compression
    magic(0, b"PK\x03\x04", "zip", "application/zip"),
    magic(0, b"PK\x05\x06", "zip", "application/zip"),
    magic(0, b"\x1f\x8b", "gz", "application/gzip"),
    magic(0, b"BZh", "bz2", "application/x-bzip2"),
    magic(0, b"\xfd7zXZ\x00", "xz", "application/x-xz"),
    magic(0, b"\x28\xb5\x2f\xfd", "zst", "application/zstd"),
    magic(0, b"7z\xbc\xaf\x27\x1c", "7z", "application/x-7z-compressed"),
    magic(0, b"Rar!\x1a\x07", "rar", "application/vnd.rar"),
    magic(257, b"ustar", "tar", "application/x-tar"),
    // Executables and bytecode
    magic(0, b"\x7fELF", "elf", "application/x-elf"),
    magic(0, b"MZ", "exe", "application/vnd.microsoft.portable-executable"),
    magic(0, b"\x00asm", "wasm", "application/wasm"),
    magic(0, b"\xca\xfe\xba\xbe", "class", "application/java-vm"),
    // Fonts
    magic(0, b"wOFF", "woff", "font/woff"),
    magic(0, b"wOF2", "woff2", "font/woff2"),
    magic(0, b"\x00\x01\x00\x00\x00", "ttf", "font/ttf"),
    magic(0, b"OTTO", "otf", "font/otf"),
];

fn has_at(data: &[u8], offset: usize, bytes: &[u8]) -> bool {
    data.get(offset..offset + bytes.len()) == Some(bytes)
}

/// Identify a file type from its leading bytes.
pub fn detect_file_type(data: &[u8]) -> Option<FileSignature> {
    SIGNATURES
        .iter()
        .find(|m| {
            has_at(data, m.offset, m.bytes)
                && m.and.is_none_or(|(at, also)| has_at(data, at, also))
        })
        .map(|m| m.signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
        let sig = detect_file_type(data).unwrap();
        assert_eq!(sig.extension, "png");
        assert_eq!(sig.mime, "image/png");
    }

    #[test]
    fn test_riff_containers_need_subtype() {
        assert_eq!(
            detect_file_type(b"RIFF\x24\x00\x00\x00WAVEfmt ").map(|s| s.extension),
            Some("wav")
        );
        assert_eq!(
            detect_file_type(b"RIFF\x24\x00\x00\x00WEBPVP8 ").map(|s| s.extension),
            Some("webp")
        );
        assert_eq!(detect_file_type(b"RIFF\x24\x00\x00\x00XXXX"), None);
    }

    #[test]
    fn test_iso_media() {
        assert_eq!(
            detect_file_type(b"\x00\x00\x00\x20ftypisom\x00\x00").map(|s| s.extension),
            Some("mp4")
        );
        assert_eq!(
            detect_file_type(b"\x00\x00\x00\x1cftypavif").map(|s| s.extension),
            Some("avif")
        );
    }

    #[test]
    fn test_short_or_unknown() {
        assert_eq!(detect_file_type(b""), None);
        assert_eq!(detect_file_type(b"\x89P"), None);
        assert_eq!(detect_file_type(&[0x13, 0x37, 0x42, 0x00]), None);
    }
}
