//! # Parsing Utilities
//!
//! Small nom parsers used where a whole line is already at hand, such as
//! decoding poll requests. The streaming decoder itself never goes through
//! nom.

use nom::{Parser, bytes::complete::take_while_m_n, error::ParseError};

use crate::nmea0183::parse_hex;

/// Parses exactly two hex digits (either case) into a byte.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::hex_u8;
/// use nom::IResult;
///
/// let result: IResult<_, _> = hex_u8("6A\r\n");
/// assert_eq!(result, Ok(("\r\n", 0x6A)));
///
/// let result: IResult<_, _> = hex_u8("6");
/// assert!(result.is_err());
/// ```
pub fn hex_u8<'a, E: ParseError<&'a str>>(i: &'a str) -> nom::IResult<&'a str, u8, E> {
    let (i, digits) = take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()).parse(i)?;
    let value = digits
        .bytes()
        .filter_map(parse_hex)
        .fold(0u8, |acc, nibble| (acc << 4) | nibble);

    Ok((i, value))
}
