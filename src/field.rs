//! # Field Decoder
//!
//! Consumes one character of a sentence body at a time, given the sentence
//! type, the field index and the offset of the character within its field.
//!
//! Field 0 is the sentence name and feeds the name sub-decoder, which resolves
//! the [`SentenceType`] from its first five characters. Every other field is
//! routed through a fixed table ([`field_kind`]) to one of the shared
//! sub-decoders below. Sub-decoders receive the field terminator `,` as their
//! last character, which is where fixed-point values are scaled and committed.

use crate::{
    FieldError, SentenceType,
    fix::{DateTime, Fix, Status, WholeFrac},
    nmea0183::FIELD,
};

/// Fractional digits kept for altitude.
const ALTITUDE_DIGITS: u8 = 2;
/// Fractional digits kept for course over ground.
const HEADING_DIGITS: u8 = 2;
/// Fractional digits kept for speed over ground.
const SPEED_DIGITS: u8 = 3;
/// Implied decimals of HDOP.
const HDOP_DIGITS: u8 = 2;
/// Fractional digits kept for the minutes of a `DDMM.mmmm` coordinate.
const MINUTE_DIGITS: u8 = 4;

/// What a field of a recognised sentence carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Accepted, never decoded
    Ignored,
    /// `hhmmss.cc`
    Time,
    /// ZDA time, which also restarts the date
    ZdaTime,
    /// Status or mode letter
    Status,
    /// GGA quality digit
    Quality,
    Latitude,
    NorthSouth,
    Longitude,
    EastWest,
    Speed,
    Heading,
    Altitude,
    Satellites,
    Hdop,
    /// RMC `DDMMYY`
    Date,
    Day,
    Month,
    /// ZDA four-digit year, century dropped
    Year,
    /// A unit letter that may only appear at offset 0
    Unit(u8),
}

/// Maps a field of a sentence to its sub-decoder.
///
/// Returns `None` for [`SentenceType::Unknown`], whose fields are never decoded.
pub(crate) fn field_kind(sentence: SentenceType, field: u8) -> Option<FieldKind> {
    use FieldKind::*;
    use SentenceType::*;

    let kind = match (sentence, field) {
        (Unknown, _) => return None,

        (RMC, 1) => Time,
        (RMC, 2) => Status,
        (RMC, 3) => Latitude,
        (RMC, 4) => NorthSouth,
        (RMC, 5) => Longitude,
        (RMC, 6) => EastWest,
        (RMC, 7) => Speed,
        (RMC, 8) => Heading,
        (RMC, 9) => Date,
        (RMC, 10) => Status,

        (GGA, 1) => Time,
        (GGA, 2) => Latitude,
        (GGA, 3) => NorthSouth,
        (GGA, 4) => Longitude,
        (GGA, 5) => EastWest,
        (GGA, 6) => Quality,
        (GGA, 7) => Satellites,
        (GGA, 8) => Hdop,
        (GGA, 9) => Altitude,

        (GLL, 1) => Latitude,
        (GLL, 2) => NorthSouth,
        (GLL, 3) => Longitude,
        (GLL, 4) => EastWest,
        (GLL, 5) => Time,
        (GLL, 6 | 7) => Status,

        (VTG, 1) => Heading,
        (VTG, 2) => Unit(b'T'),
        (VTG, 5) => Speed,
        (VTG, 6) => Unit(b'N'),
        (VTG, 9) => Status,

        (ZDA, 1) => ZdaTime,
        (ZDA, 2) => Day,
        (ZDA, 3) => Month,
        (ZDA, 4) => Year,

        _ => Ignored,
    };

    Some(kind)
}

/// Sign and fractional-digit bookkeeping of the fixed-point decoder.
#[derive(Debug, Default, Clone, Copy)]
struct Numeric {
    /// 0 before the decimal point, then the position of the next fractional digit
    decimal: u8,
    negative: bool,
}

impl Numeric {
    /// Accumulates `whole.frac` with at most `max_decimal` fractional digits.
    fn parse(
        &mut self,
        val: &mut WholeFrac,
        offset: u8,
        chr: u8,
        max_decimal: u8,
    ) -> Result<(), FieldError> {
        if offset == 0 {
            *val = WholeFrac::default();
            self.decimal = 0;
            self.negative = chr == b'-';
            if self.negative {
                return Ok(());
            }
        }

        match chr {
            FIELD => {
                if self.decimal == 0 {
                    self.decimal = 1;
                }
                while self.decimal <= max_decimal {
                    val.frac = val.frac.saturating_mul(10);
                    self.decimal += 1;
                }
                if self.negative {
                    val.whole = -val.whole;
                    val.frac = -val.frac;
                }
            }
            b'.' if self.decimal == 0 => self.decimal = 1,
            // Only one decimal point per field
            b'.' => return Err(FieldError::NotDigit('.')),
            _ => {
                let d = digit(chr)?;
                if self.decimal == 0 {
                    val.whole = val.whole.saturating_mul(10).saturating_add(d as i32);
                } else if self.decimal <= max_decimal {
                    val.frac = val.frac.saturating_mul(10).saturating_add(d as i16);
                    self.decimal += 1;
                }
            }
        }

        Ok(())
    }
}

/// Transient per-field state of the decoder.
///
/// Only meaningful while a field is being decoded; every sub-decoder
/// reinitialises what it uses at offset 0.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FieldDecoder {
    numeric: Numeric,
    /// Accumulator for values that are converted when the field ends
    scratch: WholeFrac,
}

impl FieldDecoder {
    /// Consumes one character of field `field` at `offset`.
    ///
    /// The sentence type is updated while field 0 is decoded.
    pub(crate) fn parse_field(
        &mut self,
        fix: &mut Fix,
        sentence: &mut SentenceType,
        field: u8,
        offset: u8,
        chr: u8,
    ) -> Result<(), FieldError> {
        if field == 0 {
            return parse_name(fix, sentence, offset, chr);
        }

        let kind = field_kind(*sentence, field).ok_or(FieldError::Unrecognized)?;
        let dt = &mut fix.date_time;

        match kind {
            FieldKind::Ignored => Ok(()),
            FieldKind::Time => parse_time(dt, &mut fix.centiseconds, offset, chr),
            FieldKind::ZdaTime => {
                if offset == 0 {
                    dt.date = 0;
                    dt.month = 0;
                    dt.year = 0;
                }
                parse_time(dt, &mut fix.centiseconds, offset, chr)
            }
            FieldKind::Status => parse_status(&mut fix.status, offset, chr),
            FieldKind::Quality => parse_quality(&mut fix.status, chr),
            FieldKind::Latitude => self.parse_ddmm(&mut fix.lat, offset, chr),
            FieldKind::Longitude => self.parse_ddmm(&mut fix.lon, offset, chr),
            FieldKind::NorthSouth => {
                if chr == b'S' {
                    fix.lat = -fix.lat;
                }
                Ok(())
            }
            FieldKind::EastWest => {
                if chr == b'W' {
                    fix.lon = -fix.lon;
                }
                Ok(())
            }
            FieldKind::Speed => self.numeric.parse(&mut fix.spd, offset, chr, SPEED_DIGITS),
            FieldKind::Heading => self.numeric.parse(&mut fix.hdg, offset, chr, HEADING_DIGITS),
            FieldKind::Altitude => self.numeric.parse(&mut fix.alt, offset, chr, ALTITUDE_DIGITS),
            FieldKind::Satellites => {
                if offset == 0 {
                    fix.satellites = 0;
                }
                if chr != FIELD {
                    fix.satellites = accumulate(fix.satellites, chr)?;
                }
                Ok(())
            }
            FieldKind::Hdop => {
                self.numeric.parse(&mut self.scratch, offset, chr, HDOP_DIGITS)?;
                if chr == FIELD {
                    let hdop = self.scratch.scaled(HDOP_DIGITS as u32);
                    fix.hdop = hdop.clamp(0, u16::MAX as i64) as u16;
                }
                Ok(())
            }
            FieldKind::Date => parse_date(dt, offset, chr),
            FieldKind::Day => {
                if chr != FIELD {
                    dt.date = accumulate(dt.date, chr)?;
                }
                Ok(())
            }
            FieldKind::Month => {
                if chr != FIELD {
                    dt.month = accumulate(dt.month, chr)?;
                }
                Ok(())
            }
            FieldKind::Year => {
                if (2..=3).contains(&offset) {
                    dt.year = accumulate(dt.year, chr)?;
                }
                Ok(())
            }
            FieldKind::Unit(unit) => {
                if chr == FIELD || (chr == unit && offset == 0) {
                    Ok(())
                } else {
                    Err(FieldError::Unexpected {
                        expected: unit as char,
                        found: chr as char,
                    })
                }
            }
        }
    }

    /// Decodes `DDMM.mmmm` / `DDDMM.mmmm` into degrees × 10^7.
    ///
    /// The target is only written once the field terminator arrives.
    fn parse_ddmm(&mut self, target: &mut i32, offset: u8, chr: u8) -> Result<(), FieldError> {
        self.numeric.parse(&mut self.scratch, offset, chr, MINUTE_DIGITS)?;
        if chr == FIELD {
            *target = ddmm_to_degrees(self.scratch);
        }
        Ok(())
    }
}

/// Resolves the sentence type from the talker and sentence code.
///
/// Only the `GP` talker is accepted. Any rejection is reported as
/// [`FieldError::Name`], which abandons the sentence.
fn parse_name(
    fix: &mut Fix,
    sentence: &mut SentenceType,
    offset: u8,
    chr: u8,
) -> Result<(), FieldError> {
    use SentenceType::*;

    // A complete name: whatever the record held belongs to older sentences.
    if chr == FIELD && offset == 5 && *sentence != Unknown {
        fix.valid.clear();
        return Ok(());
    }

    let rejected = Err(FieldError::Name(chr as char));

    match (offset, chr) {
        (0, b'G') | (1, b'P') => Ok(()),
        // GGA, GLL, GSA and GSV are told apart later
        (2, b'G') => Ok(()),
        (2, b'R') => {
            *sentence = RMC;
            Ok(())
        }
        (2, b'V') => {
            *sentence = VTG;
            Ok(())
        }
        (2, b'Z') => {
            *sentence = ZDA;
            Ok(())
        }
        (3, _) => match (*sentence, chr) {
            (RMC, b'M') | (VTG, b'T') | (ZDA, b'D') => Ok(()),
            (Unknown, b'G') => {
                *sentence = GGA;
                Ok(())
            }
            (Unknown, b'L') => {
                *sentence = GLL;
                Ok(())
            }
            (Unknown, b'S') => {
                *sentence = GSA;
                Ok(())
            }
            _ => rejected,
        },
        (4, _) => match (*sentence, chr) {
            (GGA | GSA | ZDA, b'A') | (RMC, b'C') | (GLL, b'L') | (VTG, b'G') => Ok(()),
            (GSA, b'V') => {
                *sentence = GSV;
                Ok(())
            }
            _ => rejected,
        },
        _ => rejected,
    }
}

/// Decodes `hhmmss.cc`.
fn parse_time(dt: &mut DateTime, cs: &mut u8, offset: u8, chr: u8) -> Result<(), FieldError> {
    match offset {
        0 => {
            *cs = 0;
            dt.hours = digit(chr)? * 10;
        }
        1 => dt.hours = dt.hours.saturating_add(digit(chr)?),
        2 => dt.minutes = digit(chr)? * 10,
        3 => dt.minutes = dt.minutes.saturating_add(digit(chr)?),
        4 => dt.seconds = digit(chr)? * 10,
        5 => dt.seconds = dt.seconds.saturating_add(digit(chr)?),
        6 => expect(b'.', chr)?,
        7 => *cs = digit(chr)? * 10,
        8 => *cs = cs.saturating_add(digit(chr)?),
        9 => expect(FIELD, chr)?,
        _ => {}
    }
    Ok(())
}

/// Decodes RMC `DDMMYY`, which must end right after the sixth digit.
fn parse_date(dt: &mut DateTime, offset: u8, chr: u8) -> Result<(), FieldError> {
    match offset {
        0 => dt.date = digit(chr)? * 10,
        1 => dt.date = dt.date.saturating_add(digit(chr)?),
        2 => dt.month = digit(chr)? * 10,
        3 => dt.month = dt.month.saturating_add(digit(chr)?),
        4 => dt.year = digit(chr)? * 10,
        5 => dt.year = dt.year.saturating_add(digit(chr)?),
        6 if chr == FIELD => {}
        _ => return Err(FieldError::Unterminated(chr as char)),
    }
    Ok(())
}

/// Decodes a status or mode letter, which must be the whole field.
fn parse_status(status: &mut Status, offset: u8, chr: u8) -> Result<(), FieldError> {
    match offset {
        0 => {
            *status = match chr {
                b'A' => Status::Std,
                b'N' | b'V' => Status::None,
                b'D' => Status::Dgps,
                b'E' => Status::Estimated,
                _ => return Err(FieldError::Status(chr as char)),
            }
        }
        1 => expect(FIELD, chr)?,
        _ => {}
    }
    Ok(())
}

/// Decodes the GGA fix quality digit.
fn parse_quality(status: &mut Status, chr: u8) -> Result<(), FieldError> {
    *status = match chr {
        FIELD => return Ok(()),
        b'0' => Status::None,
        b'1' | b'3' | b'4' | b'5' => Status::Std,
        b'2' => Status::Dgps,
        b'6' => Status::Estimated,
        _ => return Err(FieldError::Status(chr as char)),
    };
    Ok(())
}

fn ddmm_to_degrees(ddmm: WholeFrac) -> i32 {
    let degrees = (ddmm.whole / 100) as i64;
    let minutes = (ddmm.whole % 100) as i64 * 10i64.pow(MINUTE_DIGITS as u32) + ddmm.frac as i64;

    // (minutes × 10^4) / 60 × 10^3 = degrees × 10^7
    let scaled = degrees * Fix::DEGREES_SCALE as i64 + minutes * 100 / 6;
    scaled.clamp(-(i32::MAX as i64), i32::MAX as i64) as i32
}

fn accumulate(value: u8, chr: u8) -> Result<u8, FieldError> {
    Ok(value.saturating_mul(10).saturating_add(digit(chr)?))
}

fn digit(chr: u8) -> Result<u8, FieldError> {
    if chr.is_ascii_digit() {
        Ok(chr - b'0')
    } else {
        Err(FieldError::NotDigit(chr as char))
    }
}

fn expect(expected: u8, chr: u8) -> Result<(), FieldError> {
    if chr == expected {
        Ok(())
    } else {
        Err(FieldError::Unexpected {
            expected: expected as char,
            found: chr as char,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `text` as one field, terminator included.
    fn feed_numeric(text: &str, max_decimal: u8) -> WholeFrac {
        let mut numeric = Numeric::default();
        let mut val = WholeFrac::new(7, 7);
        for (offset, chr) in text.bytes().enumerate() {
            numeric.parse(&mut val, offset as u8, chr, max_decimal).unwrap();
        }
        val
    }

    fn feed_field(
        decoder: &mut FieldDecoder,
        fix: &mut Fix,
        sentence: SentenceType,
        field: u8,
        text: &str,
    ) -> Result<(), FieldError> {
        let mut sentence = sentence;
        let mut result = Ok(());
        for (offset, chr) in text.bytes().enumerate() {
            let r = decoder.parse_field(fix, &mut sentence, field, offset as u8, chr);
            if result.is_ok() {
                result = r;
            }
        }
        result
    }

    fn resolve(name: &str) -> Result<SentenceType, FieldError> {
        let mut fix = Fix::default();
        let mut sentence = SentenceType::Unknown;
        for (offset, chr) in name.bytes().enumerate() {
            parse_name(&mut fix, &mut sentence, offset as u8, chr)?;
        }
        Ok(sentence)
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(feed_numeric("123.45,", 2), WholeFrac::new(123, 45));
        assert_eq!(feed_numeric("123.4,", 2), WholeFrac::new(123, 40));
        assert_eq!(feed_numeric("-5.0,", 2), WholeFrac::new(-5, 0));
        assert_eq!(feed_numeric("-0.5,", 2), WholeFrac::new(0, -50));
        assert_eq!(feed_numeric("123,", 2), WholeFrac::new(123, 0));
        assert_eq!(feed_numeric("123.,", 2), WholeFrac::new(123, 0));
        assert_eq!(feed_numeric("022.4,", 3), WholeFrac::new(22, 400));
        assert_eq!(feed_numeric(",", 2), WholeFrac::new(0, 0));
    }

    #[test]
    fn test_fixed_point_drops_extra_digits() {
        assert_eq!(feed_numeric("1.23456,", 2), WholeFrac::new(1, 23));
        assert_eq!(feed_numeric("1.23456,", 3), WholeFrac::new(1, 234));
    }

    #[test]
    fn test_fixed_point_second_decimal_point() {
        let mut numeric = Numeric::default();
        let mut val = WholeFrac::default();
        let mut errors = 0;
        for (offset, chr) in "1.99.99.99,".bytes().enumerate() {
            if numeric.parse(&mut val, offset as u8, chr, ALTITUDE_DIGITS).is_err() {
                errors += 1;
            }
        }
        assert_eq!(errors, 2);
        assert_eq!(val, WholeFrac::new(1, 99));

        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();
        assert_eq!(
            feed_field(&mut decoder, &mut fix, SentenceType::GLL, 1, "4916.4545.4545,"),
            Err(FieldError::NotDigit('.'))
        );
        assert_eq!(fix.lat, 492_742_416);
    }

    #[test]
    fn test_fixed_point_rejects_letters() {
        let mut numeric = Numeric::default();
        let mut val = WholeFrac::default();
        numeric.parse(&mut val, 0, b'4', 2).unwrap();
        assert_eq!(
            numeric.parse(&mut val, 1, b'x', 2),
            Err(FieldError::NotDigit('x'))
        );
        numeric.parse(&mut val, 2, b',', 2).unwrap();
        assert_eq!(val, WholeFrac::new(4, 0));
    }

    #[test]
    fn test_time() {
        let mut dt = DateTime::default();
        let mut cs = 99;
        for (offset, chr) in "123519.00,".bytes().enumerate() {
            parse_time(&mut dt, &mut cs, offset as u8, chr).unwrap();
        }
        assert_eq!((dt.hours, dt.minutes, dt.seconds, cs), (12, 35, 19, 0));

        for (offset, chr) in "092725.47,".bytes().enumerate() {
            parse_time(&mut dt, &mut cs, offset as u8, chr).unwrap();
        }
        assert_eq!((dt.hours, dt.minutes, dt.seconds, cs), (9, 27, 25, 47));
    }

    #[test]
    fn test_time_punctuation() {
        let mut dt = DateTime::default();
        let mut cs = 0;
        assert_eq!(
            parse_time(&mut dt, &mut cs, 6, b','),
            Err(FieldError::Unexpected {
                expected: '.',
                found: ','
            })
        );
        assert_eq!(
            parse_time(&mut dt, &mut cs, 9, b'0'),
            Err(FieldError::Unexpected {
                expected: ',',
                found: '0'
            })
        );
        assert!(!FieldError::Unexpected {
            expected: '.',
            found: ','
        }
        .is_fatal());
    }

    #[test]
    fn test_latitude_hemisphere() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();

        feed_field(&mut decoder, &mut fix, SentenceType::RMC, 3, "4807.038,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::RMC, 4, "N,").unwrap();
        let north = fix.lat;
        assert_eq!(north, 481_173_000);

        feed_field(&mut decoder, &mut fix, SentenceType::RMC, 3, "4807.038,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::RMC, 4, "S,").unwrap();
        assert_eq!(fix.lat, -north);
    }

    #[test]
    fn test_longitude_hemisphere() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();

        feed_field(&mut decoder, &mut fix, SentenceType::GLL, 3, "12311.12,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::GLL, 4, "W,").unwrap();
        assert_eq!(fix.lon, -1_231_853_333);
        assert_eq!(fix.lon, -(123 * Fix::DEGREES_SCALE + 1_853_333));

        feed_field(&mut decoder, &mut fix, SentenceType::GLL, 3, "00000.000,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::GLL, 4, "E,").unwrap();
        assert_eq!(fix.lon, 0);
    }

    #[test]
    fn test_status() {
        let mut status = Status::None;
        for (chr, expected) in [
            (b'A', Status::Std),
            (b'V', Status::None),
            (b'D', Status::Dgps),
            (b'N', Status::None),
            (b'E', Status::Estimated),
        ] {
            parse_status(&mut status, 0, chr).unwrap();
            assert_eq!(status, expected);
        }

        assert_eq!(parse_status(&mut status, 0, b'X'), Err(FieldError::Status('X')));
        assert_eq!(status, Status::Estimated);
        assert!(parse_status(&mut status, 1, b',').is_ok());
        assert!(parse_status(&mut status, 1, b'A').is_err());
    }

    #[test]
    fn test_quality() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();

        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 6, "2,").unwrap();
        assert_eq!(fix.status, Status::Dgps);
        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 6, "0,").unwrap();
        assert_eq!(fix.status, Status::None);
        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 6, "6,").unwrap();
        assert_eq!(fix.status, Status::Estimated);
        assert_eq!(
            feed_field(&mut decoder, &mut fix, SentenceType::GGA, 6, "9,"),
            Err(FieldError::Status('9'))
        );
        assert_eq!(fix.status, Status::Estimated);
    }

    #[test]
    fn test_gga_counters() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix {
            satellites: 3,
            ..Default::default()
        };

        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 7, "08,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 8, "0.9,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::GGA, 9, "-12.5,").unwrap();

        assert_eq!(fix.satellites, 8);
        assert_eq!(fix.hdop, 90);
        assert_eq!(fix.alt, WholeFrac::new(-12, -50));
    }

    #[test]
    fn test_rmc_date() {
        let mut dt = DateTime::default();
        for (offset, chr) in "230394,".bytes().enumerate() {
            parse_date(&mut dt, offset as u8, chr).unwrap();
        }
        assert_eq!((dt.date, dt.month, dt.year), (23, 3, 94));

        let err = parse_date(&mut dt, 6, b'5').unwrap_err();
        assert_eq!(err, FieldError::Unterminated('5'));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_zda_fields() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();
        fix.date_time.date = 31;
        fix.date_time.month = 12;
        fix.date_time.year = 99;

        feed_field(&mut decoder, &mut fix, SentenceType::ZDA, 1, "201530.00,").unwrap();
        assert_eq!(
            (fix.date_time.date, fix.date_time.month, fix.date_time.year),
            (0, 0, 0)
        );

        feed_field(&mut decoder, &mut fix, SentenceType::ZDA, 2, "04,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::ZDA, 3, "07,").unwrap();
        feed_field(&mut decoder, &mut fix, SentenceType::ZDA, 4, "2002,").unwrap();

        let dt = fix.date_time;
        assert_eq!((dt.date, dt.month, dt.year), (4, 7, 2));
        assert_eq!((dt.hours, dt.minutes, dt.seconds), (20, 15, 30));
        assert_eq!(dt.full_year(), 2002);
    }

    #[test]
    fn test_vtg_units() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();

        assert!(feed_field(&mut decoder, &mut fix, SentenceType::VTG, 2, "T,").is_ok());
        assert!(feed_field(&mut decoder, &mut fix, SentenceType::VTG, 2, ",").is_ok());
        assert!(feed_field(&mut decoder, &mut fix, SentenceType::VTG, 6, "N,").is_ok());
        assert_eq!(
            feed_field(&mut decoder, &mut fix, SentenceType::VTG, 6, "K,"),
            Err(FieldError::Unexpected {
                expected: 'N',
                found: 'K'
            })
        );
        assert!(feed_field(&mut decoder, &mut fix, SentenceType::VTG, 3, "034.4,").is_ok());
        assert_eq!(fix, Fix::default());
    }

    #[test]
    fn test_sentence_names() {
        assert_eq!(resolve("GPRMC"), Ok(SentenceType::RMC));
        assert_eq!(resolve("GPGGA"), Ok(SentenceType::GGA));
        assert_eq!(resolve("GPGLL"), Ok(SentenceType::GLL));
        assert_eq!(resolve("GPVTG"), Ok(SentenceType::VTG));
        assert_eq!(resolve("GPZDA"), Ok(SentenceType::ZDA));
        assert_eq!(resolve("GPGSA"), Ok(SentenceType::GSA));
        assert_eq!(resolve("GPGSV"), Ok(SentenceType::GSV));
    }

    #[test]
    fn test_rejected_names() {
        assert_eq!(resolve("GNRMC"), Err(FieldError::Name('N')));
        assert_eq!(resolve("XPRMC"), Err(FieldError::Name('X')));
        assert_eq!(resolve("GPXYZ"), Err(FieldError::Name('X')));
        assert_eq!(resolve("GPGGV"), Err(FieldError::Name('V')));
        assert_eq!(resolve("GPZDL"), Err(FieldError::Name('L')));
        assert_eq!(resolve("GPRMCX"), Err(FieldError::Name('X')));
        assert_eq!(resolve("GPG,"), Err(FieldError::Name(',')));
        assert!(FieldError::Name('X').is_fatal());
    }

    #[test]
    fn test_name_terminator_clears_validity() {
        let mut fix = Fix::default();
        fix.valid.set_location(true);
        fix.valid.set_speed(true);

        let mut sentence = SentenceType::GSV;
        parse_name(&mut fix, &mut sentence, 5, b',').unwrap();
        assert!(fix.valid.is_empty());
        assert_eq!(sentence, SentenceType::GSV);
    }

    #[test]
    fn test_unknown_sentence_fields() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();
        assert_eq!(
            feed_field(&mut decoder, &mut fix, SentenceType::Unknown, 1, "12,"),
            Err(FieldError::Unrecognized)
        );
        assert!(!FieldError::Unrecognized.is_fatal());
    }

    #[test]
    fn test_ignored_sentences() {
        let mut decoder = FieldDecoder::default();
        let mut fix = Fix::default();
        for field in 1..20 {
            feed_field(&mut decoder, &mut fix, SentenceType::GSV, field, "65,123,").unwrap();
            feed_field(&mut decoder, &mut fix, SentenceType::GSA, field, "A,3,").unwrap();
        }
        assert_eq!(fix, Fix::default());
    }
}
