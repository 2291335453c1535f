//! # Error Types
//!
//! This module defines the two failure levels of the decoder:
//!
//! - [`Error`] closes a whole frame: the sentence is dropped and no
//!   notification fires.
//! - [`FieldError`] is produced by a single field sub-decoder for a single
//!   character. Most are local and the sentence keeps going; only the ones
//!   reported by [`FieldError::is_fatal`] force the receiver back to idle.

use thiserror::Error;

use crate::SentenceType;

/// Represents all frame-level failures of the sentence receiver.
///
/// None of these are propagated out of [`NmeaGps::putchar`](crate::NmeaGps::putchar);
/// they are only reported by [`NmeaGps::decode`](crate::NmeaGps::decode) for
/// callers that want to know why a sentence was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte outside printable ASCII appeared inside the sentence body.
    #[error("unexpected control byte {0:#04x} inside sentence")]
    Framing(u8),

    /// The transmitted checksum does not match the XOR of the sentence body.
    ///
    /// Contains the checksum computed by the receiver and the first
    /// transmitted hex digit that disagreed with it.
    #[error("checksum mismatch: computed {expected:02X}, received digit {digit:?}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The offending checksum character
        digit: char,
    },

    /// The sentence ended without `*CC` while checksums are required.
    #[error("sentence ended without a checksum")]
    MissingChecksum,

    /// The sentence was intact but reports that the receiver has no fix.
    #[error("{0} sentence reports no fix")]
    NoFix(SentenceType),

    /// A ZDA sentence closed without a structurally complete date and time.
    #[error("ZDA sentence carries an incomplete date/time")]
    IncompleteDateTime,

    /// A field sub-decoder rejected a character in a way that aborts the frame.
    #[error("field {field} of {sentence} sentence is malformed")]
    InvalidField {
        /// Sentence being decoded when the field was rejected
        sentence: SentenceType,
        /// Index of the rejected field
        field: u8,
    },
}

/// A failure of a field sub-decoder on one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A digit was expected.
    #[error("expected a digit, found {0:?}")]
    NotDigit(char),

    /// A fixed punctuation character was expected at this offset.
    #[error("expected {expected:?}, found {found:?}")]
    Unexpected {
        /// Character required at this offset
        expected: char,
        /// Character actually received
        found: char,
    },

    /// The character is not a known fix status or quality indicator.
    #[error("unknown fix status {0:?}")]
    Status(char),

    /// The talker or sentence code is not one this decoder handles.
    #[error("sentence name rejected at {0:?}")]
    Name(char),

    /// A fixed-width field continued past its last position.
    #[error("field continues with {0:?} past its fixed width")]
    Unterminated(char),

    /// Fields of an unrecognised sentence are never decoded.
    #[error("sentence is not of interest")]
    Unrecognized,
}

impl FieldError {
    /// Whether this failure abandons the current sentence.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FieldError::Name(_) | FieldError::Unterminated(_))
    }
}
