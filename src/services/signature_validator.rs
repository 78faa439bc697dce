use crate::{
    application::services::{FormatValidator, FormatVerdict},
    domain::models::file::UploadRequest,
};

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF87A: &[u8] = b"GIF87a";
const GIF89A: &[u8] = b"GIF89a";
const BMP: &[u8] = b"BM";
const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];
const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];
const ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00];

const PREFIXES: &[(&str, &[u8])] = &[
    ("PNG", PNG),
    ("JPEG", JPEG),
    ("GIF", GIF87A),
    ("GIF", GIF89A),
    ("TIFF", TIFF_LE),
    ("TIFF", TIFF_BE),
    ("ICO", ICO),
];

/// Rejects content that starts with a known image signature.
/// Anything unrecognised, including empty content, is accepted.
pub struct SignatureValidator;

impl SignatureValidator {
    fn detect(content: &[u8]) -> Option<&'static str> {
        if let Some((kind, _)) = PREFIXES.iter().find(|(_, sig)| content.starts_with(sig)) {
            return Some(*kind);
        }

        // RIFF....WEBP
        if content.len() >= 12 && &content[..4] == b"RIFF" && &content[8..12] == b"WEBP" {
            return Some("WEBP");
        }

        // "BM" alone is too common at the start of text; require the header's
        // reserved words to be zero as well.
        if content.len() >= 14 && content.starts_with(BMP) && content[6..10] == [0, 0, 0, 0] {
            return Some("BMP");
        }

        None
    }
}

impl FormatValidator for SignatureValidator {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn check(&self, request: &UploadRequest) -> FormatVerdict {
        match Self::detect(&request.content) {
            Some(kind) => FormatVerdict::rejected(format!("{} image content", kind)),
            None => FormatVerdict::Accepted,
        }
    }
}
