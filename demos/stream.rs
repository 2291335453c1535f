use nmea0183_fix::{Config, Fix, NmeaGps, SentenceType};

const LOG: &str = concat!(
    "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n",
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B\r\n",
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n",
    "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25\r\n",
    "$GPZDA,201530.00,04,07,2002,00,00*60\r\n",
);

fn print(sentence: SentenceType, fix: &Fix) {
    let scale = Fix::DEGREES_SCALE;
    print!("{sentence}: {:?}", fix.status);

    if fix.valid.location() {
        print!(
            ", {}.{:07} {}.{:07}",
            fix.lat / scale,
            (fix.lat % scale).abs(),
            fix.lon / scale,
            (fix.lon % scale).abs()
        );
    }
    if fix.valid.altitude() {
        print!(", {}.{:02} m", fix.alt.whole, fix.alt.frac.abs());
    }
    if fix.valid.speed() {
        print!(", {}.{:03} kn", fix.spd.whole, fix.spd.frac.abs());
    }
    if fix.valid.date_time() {
        let dt = &fix.date_time;
        print!(
            ", {:02}:{:02}:{:02}.{:02}",
            dt.hours, dt.minutes, dt.seconds, fix.centiseconds
        );
    }
    println!();
}

fn main() {
    let mut gps = NmeaGps::with_notify(Config::default(), print);

    for b in LOG.bytes() {
        if let Some(Err(e)) = gps.decode(b) {
            println!("dropped: {e}");
        }
    }

    let mut request = Vec::new();
    gps.poll(&mut request, SentenceType::RMC);
    print!("poll: {}", String::from_utf8_lossy(&request));
}
