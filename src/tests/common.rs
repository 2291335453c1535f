use heapless::Vec;

use crate::{Error, Fix, NmeaGps, Notify, SentenceType};

/// Keeps a copy of the fix at every notification.
#[derive(Debug, Default)]
pub struct Recorder {
    pub seen: Vec<(SentenceType, Fix), 16>,
}

impl Notify for Recorder {
    fn completed(&mut self, sentence: SentenceType, fix: &Fix) {
        self.seen.push((sentence, *fix)).unwrap();
    }
}

impl Recorder {
    pub fn sentences(&self) -> Vec<SentenceType, 16> {
        self.seen.iter().map(|(sentence, _)| *sentence).collect()
    }
}

/// Feeds `text` and collects every frame outcome.
pub fn decode_all<N: Notify>(
    gps: &mut NmeaGps<N>,
    text: &str,
) -> Vec<Result<SentenceType, Error>, 16> {
    text.bytes()
        .filter_map(|b| gps.decode(b))
        .collect()
}

pub fn recording() -> NmeaGps<Recorder> {
    NmeaGps::with_notify(Default::default(), Recorder::default())
}
