//! # NMEA 0183 Fix Decoder
//!
//! This library decodes a stream of NMEA 0183 sentences of the format
//! `$HHHHH,D1,D2,...,Dn*CC\r\n` into a single navigation fix, one byte at a
//! time, with constant memory and fixed-point arithmetic only.
//!
//! The decoder handles:
//! - Framing, with required or optional checksum validation
//! - `GGA`, `GLL`, `RMC`, `VTG` and `ZDA` sentences from the `GP` talker
//! - Recognising and skipping `GSA` and `GSV`
//! - Poll requests, asking the receiver to repeat a sentence
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fix::{Config, Fix, NmeaGps, SentenceType};
//!
//! let mut positions = 0;
//! let mut gps = NmeaGps::with_notify(Config::default(), |_: SentenceType, fix: &Fix| {
//!     if fix.valid.location() {
//!         positions += 1;
//!     }
//! });
//!
//! for b in "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n".bytes() {
//!     gps.putchar(b);
//! }
//!
//! assert_eq!(gps.fix().satellites, 8);
//! drop(gps);
//! assert_eq!(positions, 1);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod field;
pub mod fix;
mod nmea0183;
pub mod parsing;
mod receiver;
mod sentence;
pub mod transmitter;

pub use error::{Error, FieldError};
pub use fix::{DateTime, Fix, Status, Valid, WholeFrac};
pub use nmea0183::{ChecksumMode, checksum, format_checksum};
#[cfg(feature = "stats")]
pub use receiver::Statistics;
pub use receiver::{Config, NmeaGps, Notify, RxState, Silent};
pub use sentence::{SentenceType, UnknownSentence};
