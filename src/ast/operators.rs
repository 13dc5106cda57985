//! Operators, keywords and literal values, i.e. the non-node content of nodes.

use super::emit::Emit;
use crate::io::StructuredWriter;
use crate::WriterError;

string_enum! {
    SourceType {
        Script => "script",
        Module => "module",
    }
}

string_enum! {
    VariableDeclarationKind {
        Var => "var",
        Let => "let",
        Const => "const",
    }
}

string_enum! {
    PropertyKind {
        Init => "init",
        Get => "get",
        Set => "set",
    }
}

string_enum! {
    MethodKind {
        Constructor => "constructor",
        Method => "method",
        Get => "get",
        Set => "set",
    }
}

string_enum! {
    UnaryOperator {
        Minus => "-",
        Plus => "+",
        LogicalNot => "!",
        BitwiseNot => "~",
        Typeof => "typeof",
        Void => "void",
        Delete => "delete",
    }
}

string_enum! {
    UpdateOperator {
        Increment => "++",
        Decrement => "--",
    }
}

string_enum! {
    BinaryOperator {
        Equal => "==",
        NotEqual => "!=",
        StrictEqual => "===",
        StrictNotEqual => "!==",
        Less => "<",
        LessOrEqual => "<=",
        Greater => ">",
        GreaterOrEqual => ">=",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        Plus => "+",
        Minus => "-",
        Times => "*",
        Divide => "/",
        Modulo => "%",
        Exponent => "**",
        BitwiseOr => "|",
        BitwiseXor => "^",
        BitwiseAnd => "&",
        In => "in",
        InstanceOf => "instanceof",
    }
}

string_enum! {
    LogicalOperator {
        Or => "||",
        And => "&&",
    }
}

string_enum! {
    AssignmentOperator {
        Assign => "=",
        PlusAssign => "+=",
        MinusAssign => "-=",
        TimesAssign => "*=",
        DivideAssign => "/=",
        ModuloAssign => "%=",
        ExponentAssign => "**=",
        LeftShiftAssign => "<<=",
        RightShiftAssign => ">>=",
        UnsignedRightShiftAssign => ">>>=",
        BitwiseOrAssign => "|=",
        BitwiseXorAssign => "^=",
        BitwiseAndAssign => "&=",
    }
}

/// The value of a `Literal`.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    RegExp { pattern: String, flags: String },
}

/// Numbers with an exact `i64` representation are emitted as integers,
/// others as floats. Regular expressions are emitted as
/// `{"pattern": ..., "flags": ...}`.
impl Emit for LiteralValue {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        match *self {
            LiteralValue::Null => out.null(),
            LiteralValue::Boolean(value) => out.boolean(value),
            LiteralValue::Number(value) => {
                let as_integer = value as i64;
                if as_integer as f64 == value
                    && value.is_sign_positive() == (as_integer >= 0)
                    && value.abs() < 9_223_372_036_854_775_808.0
                {
                    out.integer(as_integer)
                } else {
                    out.float(value)
                }
            }
            LiteralValue::String(ref value) => out.string(value),
            LiteralValue::RegExp {
                ref pattern,
                ref flags,
            } => {
                out.start_object()?;
                out.member("pattern")?;
                out.string(pattern)?;
                out.member("flags")?;
                out.string(flags)?;
                out.end_object()
            }
        }
    }
}

/// The value of a `TemplateElement`.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateValue {
    /// `None` if the raw text contains an invalid escape sequence.
    pub cooked: Option<String>,
    pub raw: String,
}
impl Emit for TemplateValue {
    fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
    where
        W: StructuredWriter + ?Sized,
    {
        out.start_object()?;
        out.member("cooked")?;
        out.maybe_string(self.cooked.as_ref().map(String::as_str))?;
        out.member("raw")?;
        out.string(&self.raw)?;
        out.end_object()
    }
}

#[test]
fn test_string_enums() {
    assert_eq!(BinaryOperator::from_name(">>>"), Some(BinaryOperator::UnsignedRightShift));
    assert_eq!(BinaryOperator::InstanceOf.as_str(), "instanceof");
    assert_eq!(AssignmentOperator::from_name("=>"), None);
    assert_eq!(VariableDeclarationKind::Let.to_string(), "let");
}
