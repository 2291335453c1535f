//! # Sentence Receiver
//!
//! The byte-level state machine. Every byte of the stream goes through
//! [`NmeaGps::putchar`] (or [`NmeaGps::decode`]); the receiver keeps the
//! running checksum and the field position, hands body characters to the
//! field decoder and validates the sentence when its frame closes.
//!
//! ```text
//!            '$' (from any state)
//!   Idle ─────────────────────────> ReceivingData ──'*'──> ReceivingCrcHi ──hex──> ReceivingCrcLo
//!    ^                                   │                       │                      │
//!    └─────── CR/LF, control byte, rejected name, checksum digit, last digit ───────────┘
//! ```

use log::{debug, trace};

use crate::{
    ChecksumMode, Error, FieldError, SentenceType,
    field::FieldDecoder,
    fix::{Fix, Status},
    nmea0183::{CHECKSUM, CR, FIELD, LF, START, is_printable, parse_hex},
    transmitter::{self, ByteSink, PollTalker},
};

/// Receiver state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RxState {
    /// Waiting for `$`
    #[default]
    Idle,
    /// Inside the sentence body
    ReceivingData,
    /// Expecting the high checksum digit
    ReceivingCrcHi,
    /// Expecting the low checksum digit
    ReceivingCrcLo,
}

/// Receiver configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether sentences without `*CC` are accepted
    pub checksum: ChecksumMode,
    /// Talker ID of outgoing poll requests
    pub poll_talker: PollTalker,
}

/// Collaborator told about every successfully decoded sentence.
///
/// It runs after the receiver has returned to [`RxState::Idle`], and should
/// read what it needs from the fix right away: the next byte may change it.
pub trait Notify {
    fn completed(&mut self, sentence: SentenceType, fix: &Fix);
}

/// A [`Notify`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Notify for Silent {
    fn completed(&mut self, _: SentenceType, _: &Fix) {}
}

impl<F> Notify for F
where
    F: FnMut(SentenceType, &Fix),
{
    fn completed(&mut self, sentence: SentenceType, fix: &Fix) {
        self(sentence, fix)
    }
}

/// Parser counters.
#[cfg(feature = "stats")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Sentences decoded successfully
    pub ok: u32,
    /// Sentences dropped on a checksum mismatch
    pub checksum_errors: u32,
}

/// Streaming NMEA 0183 decoder.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Config, NmeaGps, SentenceType, Status};
///
/// let mut gps = NmeaGps::new(Config::default());
/// let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
///
/// let mut decoded = None;
/// for b in line.bytes() {
///     if let Some(result) = gps.decode(b) {
///         decoded = Some(result);
///     }
/// }
///
/// assert_eq!(decoded, Some(Ok(SentenceType::RMC)));
/// assert_eq!(gps.fix().status, Status::Std);
/// assert!(gps.fix().valid.location());
/// ```
#[derive(Debug)]
pub struct NmeaGps<N = Silent> {
    config: Config,
    state: RxState,
    crc: u8,
    sentence: SentenceType,
    field_index: u8,
    chr_count: u8,
    decoder: FieldDecoder,
    fix: Fix,
    notify: N,
    #[cfg(feature = "stats")]
    statistics: Statistics,
}

impl NmeaGps<Silent> {
    pub fn new(config: Config) -> Self {
        Self::with_notify(config, Silent)
    }
}

impl Default for NmeaGps<Silent> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<N: Notify> NmeaGps<N> {
    pub fn with_notify(config: Config, notify: N) -> Self {
        Self {
            config,
            state: RxState::Idle,
            crc: 0,
            sentence: SentenceType::Unknown,
            field_index: 0,
            chr_count: 0,
            decoder: FieldDecoder::default(),
            fix: Fix::default(),
            notify,
            #[cfg(feature = "stats")]
            statistics: Statistics::default(),
        }
    }

    /// Feeds one byte and hands it back, so the decoder can sit inside a
    /// byte pipeline.
    pub fn putchar(&mut self, c: u8) -> u8 {
        let _ = self.decode(c);
        c
    }

    /// Feeds one byte.
    ///
    /// Returns `Some` when the byte closed a frame: the decoded sentence
    /// type, or the reason the sentence was dropped. Returns `None` for
    /// every other byte, including those of a sentence whose name was not
    /// recognised.
    pub fn decode(&mut self, c: u8) -> Option<Result<SentenceType, Error>> {
        // Always restarts
        if c == START {
            self.rx_begin();
            return None;
        }

        match self.state {
            RxState::Idle => None,

            RxState::ReceivingData => match c {
                CHECKSUM => {
                    self.state = RxState::ReceivingCrcHi;
                    None
                }
                CR | LF => match self.config.checksum {
                    ChecksumMode::Optional => self.rx_end(Ok(())),
                    ChecksumMode::Required => self.rx_end(Err(Error::MissingChecksum)),
                },
                c if !is_printable(c) => self.rx_end(Err(Error::Framing(c))),
                c => {
                    self.crc ^= c;

                    let field = self.field_index;
                    let parsed = self.decoder.parse_field(
                        &mut self.fix,
                        &mut self.sentence,
                        field,
                        self.chr_count,
                        c,
                    );

                    if c == FIELD {
                        self.field_index = self.field_index.saturating_add(1);
                        self.chr_count = 0;
                    } else {
                        self.chr_count = self.chr_count.saturating_add(1);
                    }

                    match parsed {
                        Err(e) if e.is_fatal() => self.abandon(field, e),
                        Err(e) => {
                            trace!("{} field {field}: {e}", self.sentence);
                            None
                        }
                        Ok(()) => None,
                    }
                }
            },

            RxState::ReceivingCrcHi => match parse_hex(c) {
                Some(nibble) if nibble == self.crc >> 4 => {
                    self.state = RxState::ReceivingCrcLo;
                    None
                }
                _ => self.checksum_error(c),
            },

            RxState::ReceivingCrcLo => match parse_hex(c) {
                Some(nibble) if nibble == self.crc & 0x0F => self.rx_end(Ok(())),
                _ => self.checksum_error(c),
            },
        }
    }

    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    pub fn state(&self) -> RxState {
        self.state
    }

    /// Type of the sentence being received, or of the last one if idle.
    pub fn sentence(&self) -> SentenceType {
        self.sentence
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notify
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notify
    }

    pub fn into_notifier(self) -> N {
        self.notify
    }

    #[cfg(feature = "stats")]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Sends `text` as a sentence. See [`transmitter::send`].
    pub fn send<S: ByteSink + ?Sized>(&self, sink: &mut S, text: &[u8]) {
        transmitter::send(sink, text);
    }

    /// Requests `sentence` from the receiver, using the configured talker.
    pub fn poll<S: ByteSink + ?Sized>(&self, sink: &mut S, sentence: SentenceType) {
        transmitter::poll(sink, self.config.poll_talker, sentence);
    }

    fn rx_begin(&mut self) {
        self.crc = 0;
        self.sentence = SentenceType::Unknown;
        self.state = RxState::ReceivingData;
        self.field_index = 0;
        self.chr_count = 0;
    }

    fn rx_end(&mut self, result: Result<(), Error>) -> Option<Result<SentenceType, Error>> {
        self.state = RxState::Idle;
        let sentence = self.sentence;

        match result.and_then(|()| self.mark_valid()) {
            // Not a sentence of interest
            Ok(()) if sentence == SentenceType::Unknown => None,
            Ok(()) => {
                #[cfg(feature = "stats")]
                {
                    self.statistics.ok = self.statistics.ok.saturating_add(1);
                }
                trace!("{sentence} sentence decoded");

                self.notify.completed(sentence, &self.fix);
                Some(Ok(sentence))
            }
            Err(e) => {
                debug!("{sentence} sentence dropped: {e}");
                Some(Err(e))
            }
        }
    }

    /// Marks what a successfully framed sentence confirmed, unless its
    /// content contradicts a usable fix.
    fn mark_valid(&mut self) -> Result<(), Error> {
        let fix = &mut self.fix;

        match self.sentence {
            SentenceType::RMC | SentenceType::GGA | SentenceType::GLL | SentenceType::VTG
                if fix.status == Status::None =>
            {
                return Err(Error::NoFix(self.sentence));
            }
            SentenceType::RMC => {
                fix.valid.set_location(true);
                fix.valid.set_date_time(true);
                fix.valid.set_speed(true);
                fix.valid.set_heading(true);
            }
            SentenceType::GGA => {
                fix.valid.set_altitude(true);
                fix.valid.set_location(true);
                fix.valid.set_date_time(true);
            }
            SentenceType::GLL => {
                fix.valid.set_location(true);
                fix.valid.set_date_time(true);
            }
            SentenceType::VTG => {
                fix.valid.set_speed(true);
                fix.valid.set_heading(true);
            }
            SentenceType::ZDA if !fix.date_time.is_valid() => {
                return Err(Error::IncompleteDateTime);
            }
            SentenceType::ZDA => fix.valid.set_date_time(true),
            SentenceType::GSA | SentenceType::GSV | SentenceType::Unknown => {}
        }

        Ok(())
    }

    fn checksum_error(&mut self, c: u8) -> Option<Result<SentenceType, Error>> {
        #[cfg(feature = "stats")]
        {
            self.statistics.checksum_errors = self.statistics.checksum_errors.saturating_add(1);
        }

        self.rx_end(Err(Error::ChecksumMismatch {
            expected: self.crc,
            digit: c as char,
        }))
    }

    /// Drops the sentence after a fatal field error, without running the
    /// completion checks.
    fn abandon(&mut self, field: u8, e: FieldError) -> Option<Result<SentenceType, Error>> {
        self.state = RxState::Idle;

        match e {
            FieldError::Name(_) => {
                trace!("ignoring sentence: {e}");
                None
            }
            _ => {
                debug!("{} sentence dropped at field {field}: {e}", self.sentence);
                Some(Err(Error::InvalidField {
                    sentence: self.sentence,
                    field,
                }))
            }
        }
    }
}
