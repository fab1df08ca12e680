use crate::{
    Error, FixRecord, Framer, FramingMode, NMEA_MAX_LENGTH, NmeaParser, checksum,
    format_checksum,
};

/// Feeds `input` and collects every completed sentence and every discard reason.
fn feed_all(framer: &mut Framer, input: &[u8]) -> (Vec<String>, Vec<Error>) {
    let mut sentences = Vec::new();
    let mut errors = Vec::new();

    for &byte in input {
        match framer.feed(byte) {
            Ok(Some(sentence)) => sentences.push(sentence.to_string()),
            Ok(None) => {}
            Err(error) => errors.push(error),
        }
    }

    (sentences, errors)
}

fn with_checksum(body: &str) -> String {
    format!("${body}*{}\r\n", format_checksum(checksum(body).1))
}

const BODIES: [&str; 4] = [
    "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
    "GPZDA,201530.00,04,07,2002,00,00",
    "GPTXT,01,01,02,ANTENNA OK",
    "GPGSV,1,1,01,01,90,100,50",
];

#[test]
fn test_generated_sentences_validate() {
    for body in BODIES {
        let mut framer = Framer::new();
        let (sentences, errors) = feed_all(&mut framer, with_checksum(body).as_bytes());

        assert_eq!(sentences, [format!("${body}*")], "Failed: {body:?}");
        assert!(errors.is_empty(), "Failed: {body:?}");
    }
}

#[test]
fn test_flipped_bit_fails_validation() {
    for body in BODIES {
        let sentence = with_checksum(body).into_bytes();

        for index in 1..=body.len() {
            for bit in 0..7 {
                let mut corrupted = sentence.clone();
                corrupted[index] ^= 1 << bit;

                // A flip into `*` or a control byte changes the framing, not just the payload.
                if !(32..=126).contains(&corrupted[index]) || corrupted[index] == b'*' {
                    continue;
                }

                let mut parser = NmeaParser::new();
                for &byte in &corrupted {
                    assert!(
                        !parser.process_byte(byte),
                        "Failed: {:?}",
                        String::from_utf8_lossy(&corrupted)
                    );
                }

                assert_eq!(parser.record(), &FixRecord::default());
                assert!(matches!(
                    parser.last_error(),
                    Some(Error::ChecksumMismatch { .. })
                ));
            }
        }
    }
}

#[test]
fn test_overflow_resets() {
    let mut framer = Framer::new();
    let mut input = vec![b'$'];
    input.extend(std::iter::repeat_n(b'A', NMEA_MAX_LENGTH - 2));

    let (sentences, errors) = feed_all(&mut framer, &input);
    assert!(sentences.is_empty());
    assert!(errors.is_empty());
    assert_eq!(framer.len(), NMEA_MAX_LENGTH - 1);

    assert_eq!(
        framer.feed(b'A'),
        Err(Error::BufferOverflow {
            capacity: NMEA_MAX_LENGTH
        })
    );
    assert!(framer.is_empty());

    // The next sentence is framed normally.
    let (sentences, errors) = feed_all(&mut framer, b"$GPGGA,data*6A\r\n");
    assert_eq!(sentences, ["$GPGGA,data*"]);
    assert!(errors.is_empty());
}

#[test]
fn test_long_noise_never_decodes() {
    let mut parser = NmeaParser::new();
    let noise = [b'7'; 3 * NMEA_MAX_LENGTH];

    for &byte in &noise {
        assert!(!parser.process_byte(byte));
    }
    assert!(parser.framer().len() < NMEA_MAX_LENGTH);
}

#[test]
fn test_checksum_digits() {
    let cases = [
        (b"$GPGGA,data*6A", Ok("$GPGGA,data*")),
        (b"$GPGGA,data*6a", Ok("$GPGGA,data*")),
        (
            b"$GPGGA,data*6Z",
            Err(Error::InvalidChecksum { found: *b"6Z" }),
        ),
        (
            b"$GPGGA,data*99",
            Err(Error::ChecksumMismatch {
                expected: 0x6A,
                found: 0x99,
            }),
        ),
        (
            b"$GPGGA,data*\r\n",
            Err(Error::InvalidChecksum { found: *b"\r\n" }),
        ),
    ];

    for (input, expected) in cases {
        let mut framer = Framer::new();
        let (sentences, errors) = feed_all(&mut framer, input);

        match expected {
            Ok(sentence) => {
                assert_eq!(sentences, [sentence], "Failed: {input:?}");
                assert!(errors.is_empty(), "Failed: {input:?}");
            }
            Err(error) => {
                assert!(sentences.is_empty(), "Failed: {input:?}");
                assert_eq!(errors, [error], "Failed: {input:?}");
            }
        }
        assert!(framer.is_empty(), "Failed: {input:?}");
    }
}

#[test]
fn test_control_bytes_are_dropped() {
    let mut framer = Framer::new();
    let (sentences, _) = feed_all(&mut framer, b"$GP\tGGA,\x00data\x7F*6A\r\n");

    assert_eq!(sentences, ["$GPGGA,data*"]);
}

#[test]
fn test_raw_mode_noise_breaks_sentence() {
    let mut framer = Framer::new();
    let (sentences, errors) = feed_all(&mut framer, b"xx$GPGGA,data*6A\r\n");

    assert!(sentences.is_empty());
    assert!(matches!(errors[..], [Error::ChecksumMismatch { .. }]));
}

#[test]
fn test_resync_mode() {
    let cases = [
        // (input, sentences, errors)
        (&b"xx$GPGGA,data*6A\r\n"[..], 1, 0),
        (&b"$GPGGA,da$GPGGA,data*6A\r\n"[..], 1, 0),
        (&b"$GPGGA,data*$GPGGA,data*6A\r\n"[..], 1, 1),
        (&b"$GPGGA,data*6$GPGGA,data*6A\r\n"[..], 1, 1),
        (&b"GPGGA,data*6A\r\n"[..], 0, 0),
    ];

    for (input, expected_sentences, expected_errors) in cases {
        let mut framer = Framer::with_mode(FramingMode::Resync);
        let (sentences, errors) = feed_all(&mut framer, input);

        assert_eq!(sentences.len(), expected_sentences, "Failed: {input:?}");
        assert_eq!(errors.len(), expected_errors, "Failed: {input:?}");
        if expected_sentences > 0 {
            assert_eq!(sentences[0], "$GPGGA,data*", "Failed: {input:?}");
        }
    }

    let mut framer = Framer::with_mode(FramingMode::Resync);
    let (_, errors) = feed_all(&mut framer, b"$GPGGA,data*6$");
    assert_eq!(errors, [Error::InvalidChecksum { found: *b"6$" }]);
    assert_eq!(framer.len(), 1);
}

#[test]
fn test_resync_at_capacity() {
    let mut input = vec![b'$'];
    input.extend(std::iter::repeat_n(b'A', NMEA_MAX_LENGTH - 2));

    let mut framer = Framer::with_mode(FramingMode::Resync);
    let (_, errors) = feed_all(&mut framer, &input);
    assert!(errors.is_empty());
    assert_eq!(framer.len(), NMEA_MAX_LENGTH - 1);

    // A `$` on a full buffer starts the next sentence instead of overflowing.
    let (sentences, errors) = feed_all(&mut framer, b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n");
    assert_eq!(sentences, ["$GPZDA,201530.00,04,07,2002,00,00*"]);
    assert!(errors.is_empty());

    // In raw mode the same `$` overflows.
    let mut framer = Framer::new();
    feed_all(&mut framer, &input);
    let (sentences, errors) = feed_all(&mut framer, b"$");
    assert!(sentences.is_empty());
    assert_eq!(
        errors,
        [Error::BufferOverflow {
            capacity: NMEA_MAX_LENGTH
        }]
    );
}

#[test]
fn test_resync_parser_recovers_after_long_sentence() {
    let mut input = vec![b'$'];
    input.extend(std::iter::repeat_n(b'A', NMEA_MAX_LENGTH - 2));
    input.extend_from_slice(b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n");

    let mut parser = NmeaParser::builder()
        .framing_mode(FramingMode::Resync)
        .build();
    let mut source = input.into_iter().peekable();

    assert_eq!(parser.read_from(&mut source), 1);
    assert_eq!(parser.last_error(), None);
    assert_eq!(parser.record().utc_time, "201530.00");
}

#[test]
fn test_reset() {
    let mut framer = Framer::with_mode(FramingMode::Resync);
    feed_all(&mut framer, b"$GPGGA,data*6");
    framer.reset();

    assert!(framer.is_empty());
    assert!(!framer.is_complete());
    assert_eq!(framer.mode(), FramingMode::Resync);

    let (sentences, _) = feed_all(&mut framer, b"$GPGGA,data*6A");
    assert_eq!(sentences, ["$GPGGA,data*"]);
}
