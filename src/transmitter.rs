//! # Sentence Transmitter
//!
//! Frames and checksums outgoing sentences, one byte at a time, into a
//! [`ByteSink`]. Besides free-form [`send`], the receiver can be asked to
//! repeat any recognised sentence with a `GPQ` poll request ([`poll`]).
//!
//! ```rust
//! use nmea0183_fix::{SentenceType, transmitter::{PollTalker, poll}};
//!
//! let mut out: heapless::Vec<u8, 32> = heapless::Vec::new();
//! poll(&mut out, PollTalker::Ii, SentenceType::GGA);
//! assert_eq!(&out[..], b"$IIGPQ,GGA*2B\r\n");
//! ```

use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    error::{ErrorKind, ParseError},
};

use crate::{
    SentenceType,
    nmea0183::{CHECKSUM, CR, LF, START, checksum, to_hex_digit},
    parsing::hex_u8,
};

/// An outbound byte stream, written one byte at a time.
pub trait ByteSink {
    fn putchar(&mut self, c: u8);
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn putchar(&mut self, c: u8) {
        (**self).putchar(c);
    }
}

/// Bytes past the capacity are dropped.
impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    fn putchar(&mut self, c: u8) {
        let _ = self.push(c);
    }
}

#[cfg(feature = "std")]
impl ByteSink for std::vec::Vec<u8> {
    fn putchar(&mut self, c: u8) {
        self.push(c);
    }
}

/// Talker ID used for poll requests.
///
/// `GP` belongs to the GPS device itself, so requests aimed at it use another
/// talker. Most receivers answer `II`; u-blox documents `EI`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PollTalker {
    /// `II` - Integrated Instrumentation
    #[default]
    Ii,
    /// `EI` - Electronic Chart Display & Information System
    Ei,
}

impl PollTalker {
    pub fn id(self) -> &'static str {
        match self {
            PollTalker::Ii => "II",
            PollTalker::Ei => "EI",
        }
    }

    fn requests(self) -> &'static [&'static str; 7] {
        match self {
            PollTalker::Ii => &POLL_II,
            PollTalker::Ei => &POLL_EI,
        }
    }
}

/// Poll request bodies, indexed like [`SentenceType::ALL`].
macro_rules! poll_requests {
    ($talker:literal) => {
        [
            concat!($talker, "GPQ,GGA"),
            concat!($talker, "GPQ,GLL"),
            concat!($talker, "GPQ,GSA"),
            concat!($talker, "GPQ,GSV"),
            concat!($talker, "GPQ,RMC"),
            concat!($talker, "GPQ,VTG"),
            concat!($talker, "GPQ,ZDA"),
        ]
    };
}

static POLL_II: [&str; 7] = poll_requests!("II");
static POLL_EI: [&str; 7] = poll_requests!("EI");

/// Sends `text` as a complete sentence: `$`, the text, `*`, the checksum
/// and CR LF.
///
/// A leading `$` in `text` is not repeated. Empty text sends nothing.
pub fn send<S: ByteSink + ?Sized>(sink: &mut S, text: &[u8]) {
    let body = match text {
        [] => return,
        [START, body @ ..] => body,
        body => body,
    };

    sink.putchar(START);
    for &c in body {
        sink.putchar(c);
    }
    send_trailer(sink, checksum(body));
}

fn send_trailer<S: ByteSink + ?Sized>(sink: &mut S, crc: u8) {
    sink.putchar(CHECKSUM);
    sink.putchar(to_hex_digit(crc >> 4));
    sink.putchar(to_hex_digit(crc));
    sink.putchar(CR);
    sink.putchar(LF);
}

/// Asks the receiver to send a `sentence` now. [`SentenceType::Unknown`] is a
/// no-op.
pub fn poll<S: ByteSink + ?Sized>(sink: &mut S, talker: PollTalker, sentence: SentenceType) {
    if let Some(index) = sentence.index() {
        poll_index(sink, talker, index);
    }
}

/// Like [`poll`], with the sentence given by its index in
/// [`SentenceType::ALL`]. Out-of-range indices are a no-op.
pub fn poll_index<S: ByteSink + ?Sized>(sink: &mut S, talker: PollTalker, index: usize) {
    if let Some(request) = talker.requests().get(index) {
        send(sink, request.as_bytes());
    }
}

/// A decoded poll request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollRequest {
    pub talker: PollTalker,
    pub sentence: SentenceType,
    pub checksum: u8,
}

/// Parses a framed poll request, `$IIGPQ,RMC*hh\r\n`, verifying its checksum.
///
/// A checksum mismatch is reported as a `nom::Err::Failure` with
/// [`ErrorKind::Verify`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{SentenceType, transmitter::{PollTalker, parse_poll}};
/// use nom::IResult;
///
/// let result: IResult<_, _> = parse_poll("$EIGPQ,RMC*3A\r\n");
/// let (_, request) = result.unwrap();
/// assert_eq!(request.talker, PollTalker::Ei);
/// assert_eq!(request.sentence, SentenceType::RMC);
/// ```
pub fn parse_poll<'a, E: ParseError<&'a str>>(i: &'a str) -> nom::IResult<&'a str, PollRequest, E> {
    let (i, _) = char('$').parse(i)?;
    let body = i;

    let (i, talker) = alt((
        value(PollTalker::Ii, tag("II")),
        value(PollTalker::Ei, tag("EI")),
    ))
    .parse(i)?;
    let (i, _) = tag("GPQ,").parse(i)?;
    let (i, sentence) = SentenceType::parser(i)?;
    let body = &body.as_bytes()[..body.len() - i.len()];

    let (i, _) = char('*').parse(i)?;
    let (i, found) = hex_u8(i)?;
    let (i, _) = tag("\r\n").parse(i)?;

    if found != checksum(body) {
        return Err(nom::Err::Failure(E::from_error_kind(i, ErrorKind::Verify)));
    }

    Ok((
        i,
        PollRequest {
            talker,
            sentence,
            checksum: found,
        },
    ))
}
