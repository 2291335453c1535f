//! # Fix Record
//!
//! The single output of the decoder. A [`Fix`] accumulates values from every
//! sentence type the receiver decodes; it is never reset wholesale, and its
//! [`Valid`] flags tell which groups of fields were confirmed by the last
//! successfully closed sentence.
//!
//! All numbers are fixed point. No field of the record is ever a float.

/// GPS fix status, as reported by the status or quality fields.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No fix: `N`/`V` status letters, GGA quality `0`
    #[default]
    None,
    /// Estimated (dead-reckoning) fix: `E`, GGA quality `6`
    Estimated,
    /// Standard GPS fix: `A`, GGA quality `1`
    Std,
    /// Differential GPS fix: `D`, GGA quality `2`
    Dgps,
}

/// A signed decimal value split into whole and fractional parts.
///
/// `frac` is scaled to the field's maximum number of fractional digits, so
/// with two digits `12.5` is `{ whole: 12, frac: 50 }`. Both parts carry the
/// sign: `-0.5` is `{ whole: 0, frac: -50 }`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WholeFrac {
    pub whole: i32,
    pub frac: i16,
}

impl WholeFrac {
    pub const fn new(whole: i32, frac: i16) -> Self {
        Self { whole, frac }
    }

    /// Value scaled by `10^digits`, where `digits` is the scale of `frac`.
    ///
    /// ```rust
    /// use nmea0183_fix::WholeFrac;
    ///
    /// assert_eq!(WholeFrac::new(545, 40).scaled(2), 54540);
    /// assert_eq!(WholeFrac::new(-5, -25).scaled(2), -525);
    /// ```
    pub fn scaled(&self, digits: u32) -> i64 {
        self.whole as i64 * 10i64.pow(digits) + self.frac as i64
    }
}

/// UTC date and time, as sent by the receiver.
///
/// `year` is the two-digit NMEA year; see [`DateTime::full_year`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u8,
    pub month: u8,
    pub date: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl DateTime {
    /// Two-digit years below 80 are in the 21st century.
    pub const PIVOT_YEAR: u8 = 80;

    /// Calendar year, pivoting the two-digit year on [`DateTime::PIVOT_YEAR`].
    pub fn full_year(&self) -> u16 {
        if self.year < Self::PIVOT_YEAR {
            2000 + self.year as u16
        } else {
            1900 + self.year as u16
        }
    }

    /// Whether every component is in range and the day exists in the month.
    pub fn is_valid(&self) -> bool {
        self.year <= 99
            && (1..=12).contains(&self.month)
            && (1..=self.days_in_month()).contains(&self.date)
            && self.hours <= 23
            && self.minutes <= 59
            && self.seconds <= 59
    }

    fn days_in_month(&self) -> u8 {
        match self.month {
            2 if self.full_year() % 4 == 0 => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }
}

/// Validity flags of the fix record.
///
/// Set by the receiver when a sentence closes successfully, and cleared all
/// at once when the name of the next sentence has been read.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Valid(u8);

macro_rules! valid_flags {
    ($($(#[$meta:meta])* $bit:literal => $get:ident, $set:ident;)*) => {
        impl Valid {
            $(
                $(#[$meta])*
                pub fn $get(&self) -> bool {
                    self.0 & (1 << $bit) != 0
                }

                pub fn $set(&mut self, valid: bool) {
                    if valid {
                        self.0 |= 1 << $bit;
                    } else {
                        self.0 &= !(1 << $bit);
                    }
                }
            )*
        }
    };
}

valid_flags! {
    /// Latitude and longitude
    0 => location, set_location;
    /// Date and time of day
    1 => date_time, set_date_time;
    /// Speed over ground
    2 => speed, set_speed;
    /// Course over ground
    3 => heading, set_heading;
    /// Altitude above mean sea level
    4 => altitude, set_altitude;
}

impl Valid {
    /// All flags as one byte, bit 0 being `location`.
    pub fn as_byte(&self) -> u8 {
        self.0
    }

    /// Clears every flag.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// The accumulated navigation fix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fix {
    /// Fix status from RMC, GGA, GLL or VTG
    pub status: Status,
    /// Latitude in degrees × 10^7, negative south
    pub lat: i32,
    /// Longitude in degrees × 10^7, negative west
    pub lon: i32,
    /// Altitude above mean sea level in meters, 2 fractional digits
    pub alt: WholeFrac,
    /// Speed over ground in knots, 3 fractional digits
    pub spd: WholeFrac,
    /// Course over ground in degrees, 2 fractional digits
    pub hdg: WholeFrac,
    /// Number of satellites in use
    pub satellites: u8,
    /// Horizontal dilution of precision × 100
    pub hdop: u16,
    /// UTC date and time
    pub date_time: DateTime,
    /// Hundredths of the current UTC second
    pub centiseconds: u8,
    pub valid: Valid,
}

impl Fix {
    /// Scale of [`Fix::lat`] and [`Fix::lon`].
    pub const DEGREES_SCALE: i32 = 10_000_000;

    /// UTC date and time as a [`time::PrimitiveDateTime`], if structurally valid.
    #[cfg(feature = "time")]
    pub fn utc(&self) -> Option<time::PrimitiveDateTime> {
        let dt = &self.date_time;
        if !dt.is_valid() {
            return None;
        }

        let month = time::Month::try_from(dt.month).ok()?;
        let date = time::Date::from_calendar_date(dt.full_year() as i32, month, dt.date).ok()?;
        let time = time::Time::from_hms_milli(
            dt.hours,
            dt.minutes,
            dt.seconds,
            self.centiseconds as u16 * 10,
        )
        .ok()?;

        Some(time::PrimitiveDateTime::new(date, time))
    }
}
