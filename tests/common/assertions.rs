//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use tone_stretch::decode::decode_raw;
use tone_stretch::RgbBuffer;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert file exists and is a PNG
pub fn assert_png_file(path: &Path) {
    let bytes = read(path);
    assert!(
        bytes.starts_with(PNG_MAGIC),
        "Expected PNG at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert file exists and is a TIFF (either byte order)
pub fn assert_tiff_file(path: &Path) {
    let bytes = read(path);
    assert!(
        bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"),
        "Expected TIFF at {}, got {:?}",
        path.display(),
        &bytes[..4.min(bytes.len())]
    );
}

/// Decode an 8-bit output file without normalizing, samples as 0..=255
pub fn decode_output(path: &Path) -> RgbBuffer {
    decode_raw(&read(path)).unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
}

/// Assert an output file has the given dimensions
pub fn assert_dimensions(path: &Path, width: usize, height: usize) {
    let buffer = decode_output(path);
    assert_eq!(
        (buffer.width(), buffer.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
}

fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
