//! Serializing a tree as ESTree, through any `StructuredWriter`.
//!
//! Each node is an object, starting with a `"type"` member holding the
//! name of its kind, followed by its fields in declaration order. Absent
//! optional fields and holes are emitted as `null`, except for the fields
//! ESTree leaves out when absent, such as `ExpressionStatement.directive`.

use super::{Node, Syntax};
use crate::io::StructuredWriter;
use crate::WriterError;

/// A value that may be written as structured data.
pub trait Emit {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized;
}

impl Emit for String {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        out.string(self)
    }
}

impl Emit for bool {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        out.boolean(*self)
    }
}

impl<T> Emit for Option<T>
where
    T: Emit,
{
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        match *self {
            None => out.null(),
            Some(ref value) => value.emit(out),
        }
    }
}

impl<T> Emit for Vec<T>
where
    T: Emit,
{
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        out.start_array()?;
        for item in self {
            item.emit(out)?;
        }
        out.end_array()
    }
}

impl<T> Emit for Box<T>
where
    T: Emit + ?Sized,
{
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        (**self).emit(out)
    }
}

impl Emit for Node {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        self.as_node_ref().emit(out)
    }
}

/// Write `node` and its descendants as a single value, then flush.
pub fn write_node<T, W>(node: &T, out: &mut W) -> Result<(), WriterError>
where
    T: Emit + ?Sized,
    W: StructuredWriter + ?Sized,
{
    node.emit(out)?;
    out.flush()
}
