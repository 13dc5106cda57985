//! Mid-level API used to write a structured value (typically an AST)
//! as a depth-first stream of events.
//!
//! Simple implementations may write bytes as they come. The API is kept
//! as a trait so that the same tree-walker may drive any output format.

use crate::WriterError;

use smallvec::SmallVec;

/// The two kinds of containers of the event stream.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Container {
    #[display(fmt = "array")]
    Array,
    #[display(fmt = "object")]
    Object,
}

/// A malformed sequence of calls to a `StructuredWriter`.
///
/// This is always a bug in the caller, never a property of the data.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum NestingError {
    /// `end_array`/`end_object` without any open container.
    #[display(fmt = "end of {} without a matching start", _0)]
    UnbalancedEnd(Container),

    /// `end_array` closing an object, or the other way around.
    #[display(fmt = "end of {} while the innermost open container is an {}", found, expected)]
    MismatchedEnd { expected: Container, found: Container },

    /// `member` called outside of an object.
    #[display(fmt = "member name outside of an object")]
    MemberOutsideObject,

    /// A value written directly inside an object, without a member name.
    #[display(fmt = "value inside an object without a preceding member name")]
    MissingMember,

    /// A member name followed by another member name or by the end of the object.
    #[display(fmt = "member name without a value")]
    MissingValue,

    /// A second value at top-level.
    #[display(fmt = "more than one top-level value")]
    TrailingValue,

    /// The stream ended while containers were still open, or before any value.
    #[display(fmt = "stream finished with {} open container(s)", depth)]
    Unfinished { depth: usize },
}

/// An output sink for the event stream of a depth-first serialization.
///
/// The sequence of calls MUST encode exactly one value:
///
/// - a top-level call is `null`, `boolean`, `integer`, `float`, `string`,
///   or a `start_array`/`start_object` matched by the corresponding end;
/// - inside an array, any number of values follow until `end_array`;
/// - inside an object, `member` and a value strictly alternate until
///   `end_object`.
///
/// The protocol is single-pass and write-only. Implementations never
/// need to look ahead, and may flush after each event.
///
/// Sink failures are reported as `WriterError::WriteError`, untouched.
/// Contract violations, if detected, are reported as
/// `WriterError::InvalidNesting`.
pub trait StructuredWriter {
    /// Write `null`.
    fn null(&mut self) -> Result<(), WriterError>;

    /// Write `true` or `false`.
    fn boolean(&mut self, value: bool) -> Result<(), WriterError>;

    /// Write an integral number.
    fn integer(&mut self, value: i64) -> Result<(), WriterError>;

    /// Write a floating-point number.
    fn float(&mut self, value: f64) -> Result<(), WriterError>;

    /// Write a string.
    fn string(&mut self, value: &str) -> Result<(), WriterError>;

    fn start_array(&mut self) -> Result<(), WriterError>;
    fn end_array(&mut self) -> Result<(), WriterError>;

    fn start_object(&mut self) -> Result<(), WriterError>;
    fn end_object(&mut self) -> Result<(), WriterError>;

    /// Write the name of the next member of the current object.
    fn member(&mut self, name: &str) -> Result<(), WriterError>;

    /// Flush any data held by the writer.
    fn flush(&mut self) -> Result<(), WriterError> {
        Ok(())
    }

    /// Write `null` for `None`, otherwise a string.
    fn maybe_string(&mut self, value: Option<&str>) -> Result<(), WriterError> {
        match value {
            Some(value) => self.string(value),
            None => self.null(),
        }
    }
}

impl<'a, W> StructuredWriter for &'a mut W
where
    W: StructuredWriter + ?Sized,
{
    fn null(&mut self) -> Result<(), WriterError> {
        (**self).null()
    }
    fn boolean(&mut self, value: bool) -> Result<(), WriterError> {
        (**self).boolean(value)
    }
    fn integer(&mut self, value: i64) -> Result<(), WriterError> {
        (**self).integer(value)
    }
    fn float(&mut self, value: f64) -> Result<(), WriterError> {
        (**self).float(value)
    }
    fn string(&mut self, value: &str) -> Result<(), WriterError> {
        (**self).string(value)
    }
    fn start_array(&mut self) -> Result<(), WriterError> {
        (**self).start_array()
    }
    fn end_array(&mut self) -> Result<(), WriterError> {
        (**self).end_array()
    }
    fn start_object(&mut self) -> Result<(), WriterError> {
        (**self).start_object()
    }
    fn end_object(&mut self) -> Result<(), WriterError> {
        (**self).end_object()
    }
    fn member(&mut self, name: &str) -> Result<(), WriterError> {
        (**self).member(name)
    }
    fn flush(&mut self) -> Result<(), WriterError> {
        (**self).flush()
    }
}

/// An open container, as seen by `Nesting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    Array,
    Object {
        /// `true` between a `member` and its value.
        awaiting_value: bool,
    },
}
impl Context {
    fn container(self) -> Container {
        match self {
            Context::Array => Container::Array,
            Context::Object { .. } => Container::Object,
        }
    }
}

/// The state of a `Nesting` before an event.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    depth: usize,
    last: Option<Context>,
    root_written: bool,
}

/// A validator for the event stream of a `StructuredWriter`.
///
/// Each check is performed *before* the corresponding event is written,
/// so that a rejected call never reaches the output. Memory use is
/// proportional to the nesting depth, never to the size of the value.
#[derive(Clone, Debug, Default)]
pub struct Nesting {
    /// The context stack.
    contexts: SmallVec<[Context; 16]>,

    /// `true` once a complete top-level value has been written.
    root_written: bool,
}
impl Nesting {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of containers currently open.
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    /// `true` once exactly one complete top-level value has been written.
    pub fn is_complete(&self) -> bool {
        self.root_written && self.contexts.is_empty()
    }

    /// Check that a value may be written now.
    fn enter_value(&mut self) -> Result<(), NestingError> {
        match self.contexts.last_mut() {
            None if self.root_written => Err(NestingError::TrailingValue),
            None | Some(Context::Array) => Ok(()),
            Some(Context::Object { awaiting_value }) => {
                if *awaiting_value {
                    *awaiting_value = false;
                    Ok(())
                } else {
                    Err(NestingError::MissingMember)
                }
            }
        }
    }

    fn exit_value(&mut self) {
        if self.contexts.is_empty() {
            self.root_written = true;
        }
    }

    /// Check a `null`, `boolean`, number or string event.
    pub fn scalar(&mut self) -> Result<(), NestingError> {
        self.enter_value()?;
        self.exit_value();
        Ok(())
    }

    /// Check a `start_array` or `start_object` event.
    pub fn start(&mut self, container: Container) -> Result<(), NestingError> {
        self.enter_value()?;
        self.contexts.push(match container {
            Container::Array => Context::Array,
            Container::Object => Context::Object {
                awaiting_value: false,
            },
        });
        Ok(())
    }

    /// Check an `end_array` or `end_object` event.
    pub fn end(&mut self, container: Container) -> Result<(), NestingError> {
        match self.contexts.last() {
            None => return Err(NestingError::UnbalancedEnd(container)),
            Some(context) if context.container() != container => {
                return Err(NestingError::MismatchedEnd {
                    expected: context.container(),
                    found: container,
                })
            }
            Some(Context::Object {
                awaiting_value: true,
            }) => return Err(NestingError::MissingValue),
            Some(_) => {}
        }
        self.contexts.pop();
        self.exit_value();
        Ok(())
    }

    /// Check a `member` event.
    pub fn member(&mut self) -> Result<(), NestingError> {
        match self.contexts.last_mut() {
            Some(Context::Object { awaiting_value }) => {
                if *awaiting_value {
                    return Err(NestingError::MissingValue);
                }
                *awaiting_value = true;
                Ok(())
            }
            _ => Err(NestingError::MemberOutsideObject),
        }
    }

    /// The current state, to be restored by `rollback` if the event that
    /// follows cannot be written.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            depth: self.contexts.len(),
            last: self.contexts.last().cloned(),
            root_written: self.root_written,
        }
    }

    /// Undo every transition since `checkpoint`. Only valid across a single
    /// event.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.contexts.truncate(checkpoint.depth.saturating_sub(1));
        if let Some(last) = checkpoint.last {
            self.contexts.push(last);
        }
        self.root_written = checkpoint.root_written;
    }

    /// Check that the stream holds exactly one complete value.
    pub fn finish(&self) -> Result<(), NestingError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(NestingError::Unfinished {
                depth: self.depth(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_accepts_well_formed() {
        let mut nesting = Nesting::new();
        nesting.start(Container::Object).unwrap();
        nesting.member().unwrap();
        nesting.start(Container::Array).unwrap();
        nesting.scalar().unwrap();
        nesting.start(Container::Object).unwrap();
        nesting.end(Container::Object).unwrap();
        nesting.end(Container::Array).unwrap();
        nesting.member().unwrap();
        nesting.scalar().unwrap();
        assert!(!nesting.is_complete());
        nesting.end(Container::Object).unwrap();
        assert!(nesting.is_complete());
        nesting.finish().unwrap();
    }

    #[test]
    fn test_nesting_rejects_malformed() {
        let mut nesting = Nesting::new();
        assert_eq!(
            nesting.end(Container::Array),
            Err(NestingError::UnbalancedEnd(Container::Array))
        );
        assert_eq!(nesting.member(), Err(NestingError::MemberOutsideObject));

        nesting.start(Container::Array).unwrap();
        assert_eq!(nesting.member(), Err(NestingError::MemberOutsideObject));
        assert_eq!(
            nesting.end(Container::Object),
            Err(NestingError::MismatchedEnd {
                expected: Container::Array,
                found: Container::Object,
            })
        );
        nesting.start(Container::Object).unwrap();
        assert_eq!(nesting.scalar(), Err(NestingError::MissingMember));
        nesting.member().unwrap();
        assert_eq!(nesting.member(), Err(NestingError::MissingValue));
        assert_eq!(
            nesting.end(Container::Object),
            Err(NestingError::MissingValue)
        );
        assert_eq!(nesting.finish(), Err(NestingError::Unfinished { depth: 2 }));
    }

    #[test]
    fn test_nesting_single_root() {
        let mut nesting = Nesting::new();
        assert_eq!(nesting.finish(), Err(NestingError::Unfinished { depth: 0 }));
        nesting.scalar().unwrap();
        assert_eq!(nesting.scalar(), Err(NestingError::TrailingValue));
        assert_eq!(
            nesting.start(Container::Array),
            Err(NestingError::TrailingValue)
        );
    }

    #[test]
    fn test_nesting_rollback() {
        let mut nesting = Nesting::new();

        // Undo a start, an end, a member and the last value of the stream.
        let checkpoint = nesting.checkpoint();
        nesting.start(Container::Object).unwrap();
        nesting.rollback(checkpoint);
        assert_eq!(nesting.depth(), 0);

        nesting.start(Container::Object).unwrap();
        let checkpoint = nesting.checkpoint();
        nesting.member().unwrap();
        nesting.rollback(checkpoint);
        assert_eq!(nesting.scalar(), Err(NestingError::MissingMember));

        nesting.member().unwrap();
        nesting.scalar().unwrap();
        let checkpoint = nesting.checkpoint();
        nesting.end(Container::Object).unwrap();
        assert!(nesting.is_complete());
        nesting.rollback(checkpoint);
        assert!(!nesting.is_complete());
        assert_eq!(nesting.depth(), 1);

        nesting.end(Container::Object).unwrap();
        nesting.finish().unwrap();
    }
}
