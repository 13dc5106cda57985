//! Roles that a node may play, independently of its kind.

use super::{Kind, Node, NodeRef, Syntax};
use crate::io::StructuredWriter;
use crate::WriterError;

use itertools::Itertools;
use serde::Serialize;

/// A role that a node may play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    Expression,
    Statement,
    PatternElement,
    FunctionParameter,
    PropertyValue,
    ArgumentListElement,
    ModuleItem,
    Declaration,
    ImportDeclarationSpecifier,
}
impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::Expression,
        Capability::Statement,
        Capability::PatternElement,
        Capability::FunctionParameter,
        Capability::PropertyValue,
        Capability::ArgumentListElement,
        Capability::ModuleItem,
        Capability::Declaration,
        Capability::ImportDeclarationSpecifier,
    ];
}

/// A set of capabilities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u16);
impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);

    pub const fn with(self, capability: Capability) -> Self {
        Capabilities(self.0 | (1 << capability as u16))
    }

    pub fn contains(self, capability: Capability) -> bool {
        (self.0 & (1 << capability as u16)) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .iter()
            .cloned()
            .filter(move |capability| self.contains(*capability))
    }
}
impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().map(|c| format!("{:?}", c)).format(", "))
    }
}

capability! {
    /// Usable anywhere an expression is expected.
    ///
    /// Every `Expression` is also a `PropertyValue` and an
    /// `ArgumentListElement`.
    Expression => Expr
}

capability! {
    /// Usable anywhere a statement is expected.
    ///
    /// Every `Statement` is also a `ModuleItem`.
    Statement => Stmt
}

capability! {
    /// Usable as an element of an array destructuring pattern, or more
    /// generally as an assignment or binding target.
    PatternElement => PatternElem
}

capability! {
    /// Usable as a function parameter.
    FunctionParameter => Param
}

capability! {
    /// Usable as the value of an object literal or object pattern property.
    PropertyValue => PropValue
}

capability! {
    /// Usable as an argument of a call, or as an element of an array literal.
    ArgumentListElement => Arg
}

capability! {
    /// Usable at the top-level of a program.
    ModuleItem => Item
}

capability! {
    /// A function, class or variable declaration.
    Declaration => Decl
}

capability! {
    /// Usable in the list of specifiers of an import declaration.
    ImportDeclarationSpecifier => ImportSpec
}

impl PropertyValue for Expr {}
impl ArgumentListElement for Expr {}
impl ModuleItem for Stmt {}
impl Statement for Decl {}
impl ModuleItem for Decl {}

#[test]
fn test_capabilities_set() {
    let set = Capabilities::NONE
        .with(Capability::Expression)
        .with(Capability::PropertyValue);
    assert!(set.contains(Capability::Expression));
    assert!(set.contains(Capability::PropertyValue));
    assert!(!set.contains(Capability::Statement));
    assert!(!set.is_empty());
    assert!(Capabilities::NONE.is_empty());
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![Capability::Expression, Capability::PropertyValue]
    );
    assert_eq!(format!("{:?}", set), "{Expression, PropertyValue}");
}

/// Slots accept wider roles than the node they are built from, so the
/// role inclusions must hold for every kind.
#[test]
fn test_capability_inclusions() {
    for kind in Kind::ALL {
        let capabilities = kind.capabilities();
        if capabilities.contains(Capability::Expression) {
            assert!(capabilities.contains(Capability::PropertyValue), "{}", kind);
            assert!(capabilities.contains(Capability::ArgumentListElement), "{}", kind);
        }
        if capabilities.contains(Capability::Statement) {
            assert!(capabilities.contains(Capability::ModuleItem), "{}", kind);
        }
        if capabilities.contains(Capability::Declaration) {
            assert!(capabilities.contains(Capability::Statement), "{}", kind);
        }
    }
}
