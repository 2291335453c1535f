//! # NMEA 0183 Framing
//!
//! Primitives shared by the receiver and the transmitter for the standard
//! NMEA 0183 frame: `$HHHHH,D1,D2,...,Dn*CC\r\n`.
//!
//! The checksum `CC` is the XOR of every byte strictly between `$` and `*`,
//! written as two uppercase hex digits.

use heapless::String;

/// Sentence-start delimiter.
pub const START: u8 = b'$';
/// Field terminator.
pub const FIELD: u8 = b',';
/// Checksum delimiter.
pub const CHECKSUM: u8 = b'*';
/// Carriage return.
pub const CR: u8 = b'\r';
/// Line feed.
pub const LF: u8 = b'\n';

/// Defines how the receiver treats sentences that end without a checksum.
///
/// A sentence that does carry `*CC` is always verified, whatever the mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// A line terminator arriving before `*` closes the sentence with
    /// [`Error::MissingChecksum`](crate::Error::MissingChecksum).
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// A line terminator arriving before `*` closes the sentence successfully.
    #[default]
    Optional,
}

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The body excludes the `$` prefix and the `*` delimiter.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(body: &[u8]) -> u8 {
    body.iter().fold(0u8, |acc, &byte| acc ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::format_checksum;
///
/// assert_eq!(format_checksum(0x41).as_str(), "41");
/// assert_eq!(format_checksum(0x0A).as_str(), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String<2> {
    let mut text = String::new();
    for nibble in [checksum >> 4, checksum] {
        // Exactly two digits, capacity cannot be exceeded.
        let _ = text.push(char::from(to_hex_digit(nibble)));
    }
    text
}

/// Uppercase ASCII hex digit of the low nibble of `value`.
pub(crate) fn to_hex_digit(value: u8) -> u8 {
    match value & 0x0F {
        n @ 0..=9 => b'0' + n,
        n => b'A' + (n - 10),
    }
}

/// Value of an ASCII hex digit, either case.
pub(crate) fn parse_hex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Whether `c` may appear inside a sentence body.
pub(crate) fn is_printable(c: u8) -> bool {
    (b' '..=b'~').contains(&c)
}
