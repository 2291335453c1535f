//! # Sentence Types
//!
//! The closed set of sentences the decoder recognises. The receiver resolves
//! the type incrementally from the sentence name; this module also offers a
//! nom parser over the three-letter code for text that is already at hand,
//! such as configuration or logged poll requests.

use core::{fmt, str::FromStr};

use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, value},
    error::ParseError,
};

/// Sentence type, as identified from the sentence name.
///
/// The discriminants of the known variants index the poll request tables,
/// see [`SentenceType::index`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS DOP and active satellites
    GSA,
    /// Satellites in View
    GSV,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Track made good and Ground speed
    VTG,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
    /// Not (yet) identified
    #[default]
    Unknown,
}

impl SentenceType {
    /// Every recognised type, in index order.
    pub const ALL: [SentenceType; 7] = [
        SentenceType::GGA,
        SentenceType::GLL,
        SentenceType::GSA,
        SentenceType::GSV,
        SentenceType::RMC,
        SentenceType::VTG,
        SentenceType::ZDA,
    ];

    /// Position in [`SentenceType::ALL`], `None` for [`SentenceType::Unknown`].
    pub fn index(self) -> Option<usize> {
        match self {
            SentenceType::Unknown => None,
            known => Some(known as usize),
        }
    }

    /// The three-letter sentence code, e.g. `"RMC"`.
    pub fn code(self) -> &'static str {
        match self {
            SentenceType::GGA => "GGA",
            SentenceType::GLL => "GLL",
            SentenceType::GSA => "GSA",
            SentenceType::GSV => "GSV",
            SentenceType::RMC => "RMC",
            SentenceType::VTG => "VTG",
            SentenceType::ZDA => "ZDA",
            SentenceType::Unknown => "???",
        }
    }

    /// Parses a three-letter sentence code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_fix::SentenceType;
    /// use nom::IResult;
    ///
    /// let result: IResult<_, _> = SentenceType::parser("GSV,1");
    /// assert_eq!(result, Ok((",1", SentenceType::GSV)));
    /// ```
    pub fn parser<'a, E: ParseError<&'a str>>(i: &'a str) -> nom::IResult<&'a str, Self, E> {
        alt((
            value(SentenceType::GGA, tag("GGA")),
            value(SentenceType::GLL, tag("GLL")),
            value(SentenceType::GSA, tag("GSA")),
            value(SentenceType::GSV, tag("GSV")),
            value(SentenceType::RMC, tag("RMC")),
            value(SentenceType::VTG, tag("VTG")),
            value(SentenceType::ZDA, tag("ZDA")),
        ))
        .parse(i)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The text is not one of the recognised three-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized sentence code")]
pub struct UnknownSentence;

impl FromStr for SentenceType {
    type Err = UnknownSentence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(SentenceType::parser::<nom::error::Error<&str>>)
            .parse(s)
            .map(|(_, sentence)| sentence)
            .map_err(|_| UnknownSentence)
    }
}
