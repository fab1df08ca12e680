//! # Byte Sources
//!
//! Anything a [`NmeaParser`](crate::NmeaParser) can drain bytes from.

use std::{
    collections::VecDeque,
    io::{ErrorKind, Read},
    iter::Peekable,
};

use log::warn;

/// A stream of bytes that can be polled without blocking on an empty stream.
pub trait ByteSource {
    /// Whether a byte can be read right now.
    fn available(&mut self) -> bool;

    /// Takes the next byte, or [`None`] if the source is exhausted.
    fn read(&mut self) -> Option<u8>;
}

impl ByteSource for VecDeque<u8> {
    fn available(&mut self) -> bool {
        !self.is_empty()
    }

    fn read(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

impl<I> ByteSource for Peekable<I>
where
    I: Iterator<Item = u8>,
{
    fn available(&mut self) -> bool {
        self.peek().is_some()
    }

    fn read(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// A non-blocking reader that returns [`ErrorKind::WouldBlock`] reports no bytes available.
/// Other I/O errors are logged and end the current drain.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{NmeaParser, ReadSource};
///
/// let input: &[u8] = b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n";
/// let mut source = ReadSource::new(input);
///
/// let mut parser = NmeaParser::new();
/// assert_eq!(parser.read_from(&mut source), 1);
/// assert_eq!(parser.record().utc_time, "201530.00");
/// ```
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    peeked: Option<u8>,
}

impl<R: Read> ReadSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
        }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Returns the underlying reader. A byte already peeked by
    /// [`ByteSource::available`] is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return false,
                Ok(_) => {
                    self.peeked = Some(byte[0]);
                    return true;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::WouldBlock => return false,
                Err(e) => {
                    warn!("Failed to read from byte source: {e}");
                    return false;
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn available(&mut self) -> bool {
        self.fill()
    }

    fn read(&mut self) -> Option<u8> {
        self.fill();
        self.peeked.take()
    }
}
