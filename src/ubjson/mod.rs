//! An encoding of structured values in the Universal Binary JSON format
//! (http://ubjson.org/).
//!
//! Every value starts with a one-byte ASCII tag:
//!
//! | Tag       | Value                     | Payload                          |
//! |-----------|---------------------------|----------------------------------|
//! | `Z`       | null, infinities, NaN     | none                             |
//! | `T` / `F` | true / false              | none                             |
//! | `l`       | integer in the i32 range  | 4 bytes                          |
//! | `L`       | other integer             | 8 bytes                          |
//! | `D`       | finite float              | 8 bytes, IEEE-754                |
//! | `C`       | one-byte ASCII string     | 1 byte                           |
//! | `S`       | other string              | length (as `l`/`L`), UTF-8 bytes |
//! | `[` / `]` | array start / end         | none                             |
//! | `{` / `}` | object start / end        | none                             |
//!
//! Unlike standard UBJSON, multi-byte payloads are little-endian.
//! Containers are not length-prefixed, so readers track nesting depth.
//! Object member names are encoded as strings.

mod read;
pub use self::read::{UbjsonReader, DEFAULT_MAX_DEPTH};

mod write;
pub use self::write::{UbjsonWriter, MIN_BUFFER_CHUNK};

use crate::value::Value;
use crate::WriterError;

/// Tag bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Null = b'Z',
    True = b'T',
    False = b'F',
    Int32 = b'l',
    Int64 = b'L',
    Float64 = b'D',
    Char = b'C',
    String = b'S',
    ObjectStart = b'{',
    ObjectEnd = b'}',
    ArrayStart = b'[',
    ArrayEnd = b']',
}
impl Tag {
    pub fn from_byte(byte: u8) -> Option<Tag> {
        let tag = match byte {
            b'Z' => Tag::Null,
            b'T' => Tag::True,
            b'F' => Tag::False,
            b'l' => Tag::Int32,
            b'L' => Tag::Int64,
            b'D' => Tag::Float64,
            b'C' => Tag::Char,
            b'S' => Tag::String,
            b'{' => Tag::ObjectStart,
            b'}' => Tag::ObjectEnd,
            b'[' => Tag::ArrayStart,
            b']' => Tag::ArrayEnd,
            _ => return None,
        };
        Some(tag)
    }
}

/// Encode a single value into a fresh buffer.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, WriterError> {
    let mut writer = UbjsonWriter::new(Vec::new());
    value.write_to(&mut writer)?;
    writer.done()
}

/// Decode a single value from a buffer.
pub fn from_slice(data: &[u8]) -> Result<Value, crate::ReaderError> {
    UbjsonReader::new(data).read_value()
}
