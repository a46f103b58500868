// Automaton binary format: header parsing, validation and writing

use crate::FsaError;

/// Header magic constants (little-endian).
const COOKIE1: u32 = 0x4643_4644;
const COOKIE2: u32 = 0x0001_D3C0;

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the binary header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Parsed automaton file header.
///
/// The header occupies the first 16 bytes of an automaton file:
/// - bytes 0..4: cookie1 (magic number)
/// - bytes 4..8: cookie2 (magic number)
/// - byte 8: format version
/// - bytes 9..16: reserved (zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsaHeader {
    pub version: u8,
}

/// Parses and validates the 16-byte header.
///
/// Byte-swapped files are rejected as having an invalid magic number; artifacts
/// are always written little-endian.
pub fn parse_header(data: &[u8]) -> Result<FsaHeader, FsaError> {
    if data.len() < HEADER_SIZE {
        return Err(FsaError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let cookie1 = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let cookie2 = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    if cookie1 != COOKIE1 || cookie2 != COOKIE2 {
        return Err(FsaError::InvalidMagic);
    }

    let version = data[8];
    if version != FORMAT_VERSION {
        return Err(FsaError::UnsupportedVersion(version));
    }

    Ok(FsaHeader { version })
}

/// Appends a header for the current format version to `out`.
pub fn write_header(out: &mut Vec<u8>) {
    let start = out.len();
    out.extend_from_slice(&COOKIE1.to_le_bytes());
    out.extend_from_slice(&COOKIE2.to_le_bytes());
    out.push(FORMAT_VERSION);
    out.resize(start + HEADER_SIZE, 0);
}
