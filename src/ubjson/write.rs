use super::Tag;
use crate::bytes;
use crate::io::{Container, Nesting, NestingError, StructuredWriter};
use crate::WriterError;

use std::io::Write;

/// The scratch buffer never grows by less than this many bytes.
pub const MIN_BUFFER_CHUNK: usize = 256;

/// The number of bytes needed to encode `value` as an integer, tag included.
fn integer_len(value: i64) -> usize {
    if value >= i64::from(std::i32::MIN) && value <= i64::from(std::i32::MAX) {
        5
    } else {
        9
    }
}

/// Encode `value` as an integer at the start of `buf`, tag included.
///
/// Returns the number of bytes used. `buf` must hold at least
/// `integer_len(value)` bytes.
fn put_integer(buf: &mut [u8], value: i64) -> usize {
    if integer_len(value) == 5 {
        buf[0] = Tag::Int32 as u8;
        buf[1..5].copy_from_slice(&bytes::int::bytes_of_i32(value as i32));
        5
    } else {
        buf[0] = Tag::Int64 as u8;
        buf[1..9].copy_from_slice(&bytes::int::bytes_of_i64(value));
        9
    }
}

/// A `StructuredWriter` producing UBJSON.
///
/// Each event is encoded into a scratch buffer, then handed to the sink
/// with a single `write_all`. Nothing else is buffered: the size of the
/// scratch buffer is that of the largest single scalar written so far.
///
/// A writer is meant to be used by one serialization at a time.
pub struct UbjsonWriter<W>
where
    W: Write,
{
    sink: W,

    /// Scratch buffer. Grows on demand, never shrinks.
    buffer: Vec<u8>,

    /// `None` if the writer trusts its caller.
    nesting: Option<Nesting>,
}

impl<W> UbjsonWriter<W>
where
    W: Write,
{
    /// Create a writer that rejects malformed event sequences.
    pub fn new(sink: W) -> Self {
        UbjsonWriter {
            sink,
            buffer: Vec::new(),
            nesting: Some(Nesting::new()),
        }
    }

    /// Create a writer that does not check the event sequence.
    ///
    /// Well-formed sequences produce exactly the same bytes as with `new`.
    pub fn unchecked(sink: W) -> Self {
        UbjsonWriter {
            sink,
            buffer: Vec::new(),
            nesting: None,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Give back the sink, without any check.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Finish writing, flush the sink and give it back.
    ///
    /// Fails if the writer checks nesting and the stream does not hold
    /// exactly one complete value.
    pub fn done(mut self) -> Result<W, WriterError> {
        if let Some(ref nesting) = self.nesting {
            nesting.finish()?;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// The current size of the scratch buffer.
    pub fn scratch_len(&self) -> usize {
        self.buffer.len()
    }

    /// Check an event, then write it.
    ///
    /// If the sink fails, the event is not recorded by the nesting checks,
    /// so that the caller may retry it. Bytes already accepted by the sink
    /// are not taken back.
    fn event<F, G>(&mut self, check: F, write: G) -> Result<(), WriterError>
    where
        F: FnOnce(&mut Nesting) -> Result<(), NestingError>,
        G: FnOnce(&mut Self) -> Result<(), WriterError>,
    {
        let checkpoint = match self.nesting {
            Some(ref mut nesting) => {
                let checkpoint = nesting.checkpoint();
                check(nesting)?;
                Some(checkpoint)
            }
            None => None,
        };
        let result = write(self);
        if let (Err(_), Some(checkpoint)) = (&result, checkpoint) {
            if let Some(ref mut nesting) = self.nesting {
                debug!(target: "ubjson_writer", "write failed, event dropped");
                nesting.rollback(checkpoint);
            }
        }
        result
    }

    /// Make sure that the scratch buffer holds at least `capacity` bytes.
    fn reserve(&mut self, capacity: usize) {
        debug_assert!(capacity > 0);
        if capacity > self.buffer.len() {
            let len = std::cmp::max(capacity, self.buffer.len() + MIN_BUFFER_CHUNK);
            debug!(target: "ubjson_writer", "growing scratch buffer to {} bytes", len);
            self.buffer.resize(len, 0);
        }
    }

    /// Send the first `len` bytes of the scratch buffer.
    fn send(&mut self, len: usize) -> Result<(), WriterError> {
        self.sink.write_all(&self.buffer[..len])?;
        Ok(())
    }

    fn write_tag(&mut self, tag: Tag) -> Result<(), WriterError> {
        self.reserve(1);
        self.buffer[0] = tag as u8;
        self.send(1)
    }

    fn write_integer(&mut self, value: i64) -> Result<(), WriterError> {
        self.reserve(integer_len(value));
        let len = put_integer(&mut self.buffer, value);
        self.send(len)
    }

    fn write_float(&mut self, value: f64) -> Result<(), WriterError> {
        if !value.is_finite() {
            // Infinities are null in UBJSON. So is NaN, for lack of a better representation.
            return self.write_tag(Tag::Null);
        }
        self.reserve(9);
        self.buffer[0] = Tag::Float64 as u8;
        self.buffer[1..9].copy_from_slice(&bytes::float::bytes_of_float(value));
        self.send(9)
    }

    /// Strings of exactly one byte are ASCII, encoded as `C` + byte.
    /// Anything else is `S` + length + UTF-8 bytes.
    fn write_string(&mut self, value: &str) -> Result<(), WriterError> {
        let data = value.as_bytes();
        if data.len() == 1 {
            debug_assert!(data[0] < 0x80);
            self.reserve(2);
            self.buffer[0] = Tag::Char as u8;
            self.buffer[1] = data[0];
            return self.send(2);
        }

        let byte_len = data.len() as i64;
        let header_len = 1 + integer_len(byte_len);
        let total_len = header_len + data.len();
        self.reserve(total_len);
        self.buffer[0] = Tag::String as u8;
        put_integer(&mut self.buffer[1..], byte_len);
        self.buffer[header_len..total_len].copy_from_slice(data);
        self.send(total_len)
    }
}

impl<W> StructuredWriter for UbjsonWriter<W>
where
    W: Write,
{
    fn null(&mut self) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "null");
        self.event(Nesting::scalar, |writer| writer.write_tag(Tag::Null))
    }

    fn boolean(&mut self, value: bool) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "boolean {}", value);
        self.event(Nesting::scalar, |writer| writer.write_tag(if value { Tag::True } else { Tag::False }))
    }

    fn integer(&mut self, value: i64) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "integer {}", value);
        self.event(Nesting::scalar, |writer| writer.write_integer(value))
    }

    fn float(&mut self, value: f64) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "float {}", value);
        self.event(Nesting::scalar, |writer| writer.write_float(value))
    }

    fn string(&mut self, value: &str) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "string {:?}", value);
        self.event(Nesting::scalar, |writer| writer.write_string(value))
    }

    fn start_array(&mut self) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "start_array");
        self.event(|nesting| nesting.start(Container::Array), |writer| writer.write_tag(Tag::ArrayStart))
    }

    fn end_array(&mut self) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "end_array");
        self.event(|nesting| nesting.end(Container::Array), |writer| writer.write_tag(Tag::ArrayEnd))
    }

    fn start_object(&mut self) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "start_object");
        self.event(|nesting| nesting.start(Container::Object), |writer| writer.write_tag(Tag::ObjectStart))
    }

    fn end_object(&mut self) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "end_object");
        self.event(|nesting| nesting.end(Container::Object), |writer| writer.write_tag(Tag::ObjectEnd))
    }

    fn member(&mut self, name: &str) -> Result<(), WriterError> {
        debug!(target: "ubjson_writer", "member {:?}", name);
        self.event(Nesting::member, |writer| writer.write_string(name))
    }

    fn flush(&mut self) -> Result<(), WriterError> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<F>(f: F) -> Vec<u8>
    where
        F: FnOnce(&mut UbjsonWriter<Vec<u8>>) -> Result<(), WriterError>,
    {
        let mut writer = UbjsonWriter::new(Vec::new());
        f(&mut writer).expect("Could not write");
        writer.done().expect("Could not finish")
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode(|w| w.null()), b"Z");
        assert_eq!(encode(|w| w.boolean(true)), b"T");
        assert_eq!(encode(|w| w.boolean(false)), b"F");
        assert_eq!(encode(|w| w.integer(5)), [b'l', 5, 0, 0, 0]);
        assert_eq!(encode(|w| w.integer(-2)), [b'l', 0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            encode(|w| w.float(1.5)),
            [b'D', 0, 0, 0, 0, 0, 0, 0xF8, 0x3F]
        );
    }

    #[test]
    fn test_integer_boundaries() {
        let max = i64::from(std::i32::MAX);
        let min = i64::from(std::i32::MIN);
        assert_eq!(encode(|w| w.integer(max)), [b'l', 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(encode(|w| w.integer(min)), [b'l', 0, 0, 0, 0x80]);
        assert_eq!(
            encode(|w| w.integer(max + 1)),
            [b'L', 0, 0, 0, 0x80, 0, 0, 0, 0]
        );
        assert_eq!(
            encode(|w| w.integer(min - 1)),
            [b'L', 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(encode(|w| w.float(std::f64::INFINITY)), b"Z");
        assert_eq!(encode(|w| w.float(std::f64::NEG_INFINITY)), b"Z");
        assert_eq!(encode(|w| w.float(std::f64::NAN)), b"Z");
    }

    #[test]
    fn test_strings() {
        assert_eq!(encode(|w| w.string("a")), [b'C', b'a']);
        assert_eq!(encode(|w| w.string("\u{0}")), [b'C', 0]);
        assert_eq!(encode(|w| w.string("\u{7f}")), [b'C', 0x7F]);
        assert_eq!(
            encode(|w| w.string("hi")),
            [b'S', b'l', 2, 0, 0, 0, b'h', b'i']
        );
        assert_eq!(encode(|w| w.string("")), [b'S', b'l', 0, 0, 0, 0]);
        // One character, two UTF-8 bytes.
        assert_eq!(
            encode(|w| w.string("é")),
            [b'S', b'l', 2, 0, 0, 0, 0xC3, 0xA9]
        );
    }

    #[test]
    fn test_containers() {
        let bytes = encode(|w| {
            w.start_object()?;
            w.member("a")?;
            w.start_array()?;
            w.integer(1)?;
            w.null()?;
            w.end_array()?;
            w.member("bc")?;
            w.boolean(true)?;
            w.end_object()
        });
        let mut expected = vec![b'{', b'C', b'a', b'[', b'l', 1, 0, 0, 0, b'Z', b']'];
        expected.extend_from_slice(&[b'S', b'l', 2, 0, 0, 0, b'b', b'c', b'T', b'}']);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_scratch_buffer_growth() {
        let mut writer = UbjsonWriter::new(Vec::new());
        writer.start_array().unwrap();
        assert_eq!(writer.scratch_len(), MIN_BUFFER_CHUNK);

        let long = "x".repeat(1000);
        writer.string(&long).unwrap();
        assert_eq!(writer.scratch_len(), 1006);

        writer.null().unwrap();
        assert_eq!(writer.scratch_len(), 1006);

        writer.end_array().unwrap();
        let bytes = writer.done().unwrap();
        assert_eq!(bytes.len(), 1 + 1006 + 1 + 1);
        assert_eq!(&bytes[1..7], &[b'S', b'l', 0xE8, 0x03, 0, 0]);
    }

    #[test]
    fn test_rejected_events_are_not_written() {
        let mut writer = UbjsonWriter::new(Vec::new());
        writer.start_array().unwrap();
        match writer.member("oops") {
            Err(WriterError::InvalidNesting(NestingError::MemberOutsideObject)) => {}
            other => panic!("Unexpected result {:?}", other),
        }
        match writer.end_object() {
            Err(WriterError::InvalidNesting(NestingError::MismatchedEnd { .. })) => {}
            other => panic!("Unexpected result {:?}", other),
        }
        writer.end_array().unwrap();
        assert_eq!(writer.get_ref(), b"[]");
    }

    #[test]
    fn test_done_requires_complete_value() {
        let mut writer = UbjsonWriter::new(Vec::new());
        writer.start_object().unwrap();
        match writer.done() {
            Err(WriterError::InvalidNesting(NestingError::Unfinished { depth: 1 })) => {}
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unchecked_writer() {
        let mut writer = UbjsonWriter::unchecked(Vec::new());
        writer.integer(1).unwrap();
        writer.end_array().unwrap();
        writer.member("x").unwrap();
        assert_eq!(writer.done().unwrap(), [b'l', 1, 0, 0, 0, b']', b'C', b'x']);
    }

    struct BrokenSink;
    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink is gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_propagated() {
        let mut writer = UbjsonWriter::new(BrokenSink);
        match writer.string("hello") {
            Err(WriterError::WriteError(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
                assert_eq!(err.to_string(), "sink is gone");
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    /// Fails its first `failures` writes, then keeps everything.
    struct FlakySink {
        failures: usize,
        data: Vec<u8>,
    }
    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "try again"));
            }
            self.data.write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_event_can_be_retried() {
        let mut writer = UbjsonWriter::new(FlakySink {
            failures: 1,
            data: vec![],
        });
        match writer.start_array() {
            Err(WriterError::WriteError(ref err)) => assert_eq!(err.to_string(), "try again"),
            other => panic!("Unexpected result {:?}", other),
        }
        writer.start_array().expect("Retry should succeed");
        writer.end_array().expect("Array should close");
        let sink = writer.done().expect("The array is a complete value");
        assert_eq!(sink.data, b"[]");

        // A failed `end_array` leaves the array open.
        let mut writer = UbjsonWriter::new(FlakySink {
            failures: 0,
            data: vec![],
        });
        writer.start_array().unwrap();
        writer.sink.failures = 1;
        assert!(writer.end_array().is_err());
        writer.null().expect("The array is still open");
        writer.end_array().unwrap();
        assert_eq!(writer.done().unwrap().data, b"[Z]");
    }
}
