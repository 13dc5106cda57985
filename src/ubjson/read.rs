use super::Tag;
use crate::bytes;
use crate::value::Value;
use crate::ReaderError;

use std::io::Read;

/// The default bound on container nesting of `UbjsonReader`.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// A decoder for the output of `UbjsonWriter`.
///
/// Integers are decoded as `Value::Integer`, whatever their width.
/// `Z` is decoded as `Value::Null`, including where the writer was
/// handed a non-finite float.
///
/// Containers are decoded with an explicit stack, bounded by `max_depth`.
pub struct UbjsonReader<R>
where
    R: Read,
{
    source: R,
    max_depth: usize,
}

/// A container being decoded.
enum Frame {
    Array(Vec<Value>),
    Object {
        members: Vec<(String, Value)>,
        /// The name of the member whose value comes next, if read.
        name: Option<String>,
    },
}

/// What a tag starts.
enum Start {
    Value(Value),
    Container(Frame),
}

impl<R> UbjsonReader<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        Self::with_max_depth(source, DEFAULT_MAX_DEPTH)
    }

    /// A reader rejecting values with more than `max_depth` nested
    /// containers with `ReaderError::TooDeep`.
    pub fn with_max_depth(source: R, max_depth: usize) -> Self {
        UbjsonReader { source, max_depth }
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read one complete value.
    pub fn read_value(&mut self) -> Result<Value, ReaderError> {
        let mut stack: Vec<Frame> = Vec::new();
        loop {
            let byte = self.read_byte()?;
            let value = match stack.pop() {
                Some(Frame::Array(items)) if byte == Tag::ArrayEnd as u8 => {
                    debug!(target: "ubjson_reader", "ArrayEnd");
                    Value::Array(items)
                }
                Some(Frame::Object {
                    members,
                    name: None,
                }) => {
                    if byte == Tag::ObjectEnd as u8 {
                        debug!(target: "ubjson_reader", "ObjectEnd");
                        Value::Object(members)
                    } else {
                        let name = self.string_of_tag(byte)?;
                        stack.push(Frame::Object {
                            members,
                            name: Some(name),
                        });
                        continue;
                    }
                }
                frame => {
                    stack.extend(frame);
                    match self.start_of_tag(byte)? {
                        Start::Value(value) => value,
                        Start::Container(frame) => {
                            if stack.len() >= self.max_depth {
                                return Err(ReaderError::TooDeep(self.max_depth));
                            }
                            stack.push(frame);
                            continue;
                        }
                    }
                }
            };
            match stack.last_mut() {
                None => return Ok(value),
                Some(Frame::Array(items)) => items.push(value),
                Some(Frame::Object { members, name }) => {
                    // A value inside an object always follows its name.
                    if let Some(name) = name.take() {
                        members.push((name, value));
                    }
                }
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8, ReaderError> {
        let mut buf: [u8; 1] = [0];
        self.source.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_i32(&mut self) -> Result<i32, ReaderError> {
        let mut buf: [u8; 4] = [0; 4];
        self.source.read_exact(&mut buf)?;
        Ok(bytes::int::i32_of_bytes(&buf))
    }

    fn read_i64(&mut self) -> Result<i64, ReaderError> {
        let mut buf: [u8; 8] = [0; 8];
        self.source.read_exact(&mut buf)?;
        Ok(bytes::int::i64_of_bytes(&buf))
    }

    fn read_f64(&mut self) -> Result<f64, ReaderError> {
        let mut buf: [u8; 8] = [0; 8];
        self.source.read_exact(&mut buf)?;
        Ok(bytes::float::float_of_bytes(&buf))
    }

    /// Read the byte length of a `S` string, itself an `l` or `L` integer.
    fn read_length(&mut self) -> Result<usize, ReaderError> {
        let byte = self.read_byte()?;
        let len = match Tag::from_byte(byte) {
            Some(Tag::Int32) => i64::from(self.read_i32()?),
            Some(Tag::Int64) => self.read_i64()?,
            _ => {
                return Err(ReaderError::UnexpectedTag {
                    expected: "a string length",
                    found: byte,
                })
            }
        };
        if len < 0 {
            return Err(ReaderError::InvalidLength(len));
        }
        Ok(len as usize)
    }

    /// Read the payload of a string, once its tag has been read.
    fn string_of_tag(&mut self, byte: u8) -> Result<String, ReaderError> {
        let data = match Tag::from_byte(byte) {
            Some(Tag::Char) => vec![self.read_byte()?],
            Some(Tag::String) => {
                let len = self.read_length()?;
                let mut data = Vec::new();
                // Do not trust `len` for pre-allocation.
                (&mut self.source)
                    .take(len as u64)
                    .read_to_end(&mut data)?;
                if data.len() != len {
                    return Err(ReaderError::UnexpectedEof);
                }
                data
            }
            _ => {
                return Err(ReaderError::UnexpectedTag {
                    expected: "a string",
                    found: byte,
                })
            }
        };
        Ok(String::from_utf8(data)?)
    }

    /// Read the payload of a scalar, or open a container, once its tag
    /// has been read.
    fn start_of_tag(&mut self, byte: u8) -> Result<Start, ReaderError> {
        let tag = Tag::from_byte(byte).ok_or(ReaderError::InvalidTag(byte))?;
        debug!(target: "ubjson_reader", "{:?}", tag);
        let value = match tag {
            Tag::Null => Value::Null,
            Tag::True => Value::Bool(true),
            Tag::False => Value::Bool(false),
            Tag::Int32 => Value::Integer(i64::from(self.read_i32()?)),
            Tag::Int64 => Value::Integer(self.read_i64()?),
            Tag::Float64 => Value::Float(self.read_f64()?),
            Tag::Char | Tag::String => Value::String(self.string_of_tag(byte)?),
            Tag::ArrayStart => return Ok(Start::Container(Frame::Array(Vec::new()))),
            Tag::ObjectStart => {
                return Ok(Start::Container(Frame::Object {
                    members: Vec::new(),
                    name: None,
                }))
            }
            Tag::ArrayEnd | Tag::ObjectEnd => {
                return Err(ReaderError::UnexpectedTag {
                    expected: "a value",
                    found: byte,
                })
            }
        };
        Ok(Start::Value(value))
    }
}
