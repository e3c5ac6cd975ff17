//! PNG container header reading.
//!
//! The TMX image attributes are editor-maintained and can disagree with the
//! actual file, so the exporter reads the pixel size straight from the PNG
//! IHDR chunk. Only the header is touched; pixel data is never decoded.

use byteorder::{BigEndian, ByteOrder};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use thiserror::Error;

/// First 8 bytes of every PNG file.
const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Chunk type of the image header chunk, which must come first.
const IHDR_TAG: [u8; 4] = *b"IHDR";

/// Pixel dimensions read from a PNG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
}

/// Errors from reading a PNG header.
///
/// Short reads are reported as format mismatches, not I/O failures: a
/// truncated file is not a PNG we can use either way.
#[derive(Debug, Error)]
pub enum PngHeaderError {
    #[error("not a PNG file (bad signature)")]
    BadSignature,

    #[error("IHDR chunk not found where expected")]
    MissingHeaderChunk,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads pixel width and height from the IHDR chunk of a PNG file.
///
/// The file handle is scoped to this call and closed on every exit path.
pub fn read_png_header(path: &Path) -> Result<PngInfo, PngHeaderError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut signature = [0u8; 8];
    read_or(&mut reader, &mut signature, PngHeaderError::BadSignature)?;
    if signature != PNG_SIGNATURE {
        return Err(PngHeaderError::BadSignature);
    }

    // Chunk length, unused.
    let mut length = [0u8; 4];
    read_or(&mut reader, &mut length, PngHeaderError::MissingHeaderChunk)?;

    let mut chunk_type = [0u8; 4];
    read_or(&mut reader, &mut chunk_type, PngHeaderError::MissingHeaderChunk)?;
    if chunk_type != IHDR_TAG {
        return Err(PngHeaderError::MissingHeaderChunk);
    }

    // Two big-endian u32 dimensions; the trailing bit-depth byte is read
    // along with them and discarded.
    let mut header = [0u8; 9];
    read_or(&mut reader, &mut header, PngHeaderError::MissingHeaderChunk)?;
    let width = BigEndian::read_u32(&header[0..4]);
    let height = BigEndian::read_u32(&header[4..8]);

    Ok(PngInfo { width, height })
}

/// `read_exact` that maps a short read to the given format error.
fn read_or<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    short: PngHeaderError,
) -> Result<(), PngHeaderError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(short),
        Err(e) => Err(PngHeaderError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture_png(path: &Path, width: u32, height: u32) {
        let file = fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![0u8; (width * height * 4) as usize])
            .unwrap();
    }

    #[test]
    fn test_reads_dimensions_from_real_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiles.png");
        write_fixture_png(&path, 128, 64);

        let info = read_png_header(&path).unwrap();
        assert_eq!(info, PngInfo { width: 128, height: 64 });
    }

    #[test]
    fn test_rejects_bad_signature() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-png.png");
        fs::write(&path, b"GIF89a...............").unwrap();

        let err = read_png_header(&path).unwrap_err();
        assert!(matches!(err, PngHeaderError::BadSignature));
    }

    #[test]
    fn test_empty_file_is_a_signature_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.png");
        fs::write(&path, b"").unwrap();

        let err = read_png_header(&path).unwrap_err();
        assert!(matches!(err, PngHeaderError::BadSignature));
    }

    #[test]
    fn test_truncated_after_signature() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truncated.png");
        fs::write(&path, PNG_SIGNATURE).unwrap();

        let err = read_png_header(&path).unwrap_err();
        assert!(matches!(err, PngHeaderError::MissingHeaderChunk));
    }

    #[test]
    fn test_rejects_wrong_first_chunk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong-chunk.png");
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(&[0, 0, 0, 13]);
        data.extend_from_slice(b"IDAT");
        data.extend_from_slice(&[0u8; 13]);
        fs::write(&path, data).unwrap();

        let err = read_png_header(&path).unwrap_err();
        assert!(matches!(err, PngHeaderError::MissingHeaderChunk));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_png_header(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, PngHeaderError::Io(_)));
    }
}
