//! Syntax tree, diagnostics collection and binary output for an
//! ECMAScript parser.
//!
//! The parser itself lives elsewhere. It builds `ast::Node` trees,
//! reports problems through an `error::ErrorReporter`, and hands the tree
//! to a tree-walker (see `ast::emit`) which drives an `io::StructuredWriter`,
//! typically the `ubjson::UbjsonWriter`.

#[macro_use]
extern crate derive_more;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_json;
extern crate smallvec;

/// An error while writing an event stream.
#[derive(Debug, Display, From)]
pub enum WriterError {
    /// The underlying sink failed. The error is reported as is.
    #[display(fmt = "write error: {}", _0)]
    WriteError(std::io::Error),

    /// The sequence of events does not encode a single well-formed value.
    #[display(fmt = "invalid event sequence: {}", _0)]
    InvalidNesting(io::NestingError),
}
impl std::error::Error for WriterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            WriterError::WriteError(ref err) => Some(err),
            WriterError::InvalidNesting(_) => None,
        }
    }
}

/// An error while decoding a byte stream.
#[derive(Debug, Display)]
pub enum ReaderError {
    #[display(fmt = "read error: {}", _0)]
    ReadError(std::io::Error),

    /// The stream ended in the middle of a value.
    #[display(fmt = "unexpected end of stream")]
    UnexpectedEof,

    /// A byte that is not a tag of the format.
    #[display(fmt = "invalid tag 0x{:02x}", _0)]
    InvalidTag(u8),

    /// A valid tag, in a position where it makes no sense.
    #[display(fmt = "expected {}, found tag 0x{:02x}", expected, found)]
    UnexpectedTag { expected: &'static str, found: u8 },

    /// A negative string length.
    #[display(fmt = "invalid length {}", _0)]
    InvalidLength(i64),

    #[display(fmt = "invalid UTF-8: {}", _0)]
    Encoding(std::string::FromUtf8Error),

    /// Containers nested beyond the bound of the reader.
    #[display(fmt = "nesting deeper than {} containers", _0)]
    TooDeep(usize),
}
impl From<std::io::Error> for ReaderError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            ReaderError::UnexpectedEof
        } else {
            ReaderError::ReadError(err)
        }
    }
}
impl From<std::string::FromUtf8Error> for ReaderError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ReaderError::Encoding(err)
    }
}
impl std::error::Error for ReaderError {}

/// The syntax tree.
pub mod ast;

/// Byte-level utilities for writing and reading binary formats.
pub mod bytes;

/// Diagnostics raised while parsing.
pub mod error;

/// Definition of the StructuredWriter trait.
pub mod io;
pub use io::StructuredWriter;

/// Declarations hoisted to the top of a scope.
pub mod scope;

/// Universal Binary JSON, with fixed little-endian payloads.
pub mod ubjson;

/// In-memory structured values.
pub mod value;
