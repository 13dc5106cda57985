//! A strongly-typed ESTree syntax tree.
//!
//! Each kind of node is a struct. `Node` owns a node of any kind, and
//! `NodeRef` borrows one. Both are closed sum types, so every `match` over
//! them is checked for exhaustiveness.
//!
//! Independently of its kind, a node may play several roles (see
//! `Capability`): e.g. an `AssignmentPattern` is at the same time an
//! `Expression`, a `PatternElement`, a `FunctionParameter` and a
//! `PropertyValue`. Each role is a trait, and each child slot is typed by
//! the role it expects, so that a misplaced node is a compile-time error.
//!
//! Nodes are immutable: all fields are set by `new`, once.

#[macro_use]
mod macros;

mod capability;
pub use self::capability::*;

pub mod emit;

mod nodes;
pub use self::nodes::*;

mod operators;
pub use self::operators::*;

use crate::io::StructuredWriter;
use crate::WriterError;

use serde::Serialize;

/// Behavior shared by all nodes, and by the child slots holding them.
pub trait Syntax {
    fn kind(&self) -> Kind;

    fn as_node_ref(&self) -> NodeRef<'_>;

    fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    /// The children of this node, in order, skipping absent children.
    ///
    /// The sequence is lazy and may be restarted by calling `children` again.
    fn children(&self) -> Children<'_> {
        Children::new(self.as_node_ref())
    }
}

impl<T> Syntax for Box<T>
where
    T: Syntax + ?Sized,
{
    fn kind(&self) -> Kind {
        (**self).kind()
    }
    fn as_node_ref(&self) -> NodeRef<'_> {
        (**self).as_node_ref()
    }
}

nodes! {
    ArrayExpression,
    ArrayPattern,
    ArrowFunctionExpression,
    AssignmentExpression,
    AssignmentPattern,
    AwaitExpression,
    BinaryExpression,
    BlockStatement,
    BreakStatement,
    CallExpression,
    CatchClause,
    ClassBody,
    ClassDeclaration,
    ClassExpression,
    ConditionalExpression,
    ContinueStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExpressionStatement,
    ForInStatement,
    ForOfStatement,
    ForStatement,
    FunctionDeclaration,
    FunctionExpression,
    Identifier,
    IfStatement,
    Import,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    LabeledStatement,
    Literal,
    LogicalExpression,
    MemberExpression,
    MetaProperty,
    MethodDefinition,
    NewExpression,
    ObjectExpression,
    ObjectPattern,
    Program,
    Property,
    RestElement,
    ReturnStatement,
    SequenceExpression,
    SpreadElement,
    Super,
    SwitchCase,
    SwitchStatement,
    TaggedTemplateExpression,
    TemplateElement,
    TemplateLiteral,
    ThisExpression,
    ThrowStatement,
    TryStatement,
    UnaryExpression,
    UpdateExpression,
    VariableDeclaration,
    VariableDeclarator,
    WhileStatement,
    WithStatement,
    YieldExpression,
}

/// One step of `Children`, as computed by a node from a position
/// `(slot, item)`: `slot` designates a field holding children, `item` a
/// position within this field.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Step<'a> {
    /// A child. The next position is `(slot, item + 1)`.
    Item(NodeRef<'a>),

    /// An absent list item. The next position is `(slot, item + 1)`.
    Hole,

    /// No more children in this slot. The next position is `(slot + 1, 0)`.
    EndOfSlot,

    /// No more slots.
    End,
}
impl<'a> Step<'a> {
    pub(crate) fn one<T>(child: &'a T, item: usize) -> Self
    where
        T: Syntax,
    {
        if item == 0 {
            Step::Item(child.as_node_ref())
        } else {
            Step::EndOfSlot
        }
    }

    pub(crate) fn maybe<T>(child: &'a Option<T>, item: usize) -> Self
    where
        T: Syntax,
    {
        match *child {
            Some(ref child) if item == 0 => Step::Item(child.as_node_ref()),
            _ => Step::EndOfSlot,
        }
    }

    #[allow(clippy::ptr_arg)]
    pub(crate) fn many<T>(children: &'a Vec<T>, item: usize) -> Self
    where
        T: Syntax,
    {
        match children.get(item) {
            Some(child) => Step::Item(child.as_node_ref()),
            None => Step::EndOfSlot,
        }
    }

    #[allow(clippy::ptr_arg)]
    pub(crate) fn holes<T>(children: &'a Vec<Option<T>>, item: usize) -> Self
    where
        T: Syntax,
    {
        match children.get(item) {
            Some(Some(child)) => Step::Item(child.as_node_ref()),
            Some(None) => Step::Hole,
            None => Step::EndOfSlot,
        }
    }
}

/// The children of a node, in declaration order.
///
/// Absent optional children and holes in lists are skipped. Iterating
/// allocates nothing.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    node: NodeRef<'a>,
    slot: usize,
    item: usize,
}
impl<'a> Children<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Children {
            node,
            slot: 0,
            item: 0,
        }
    }
}
impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;
    fn next(&mut self) -> Option<NodeRef<'a>> {
        loop {
            match self.node.step(self.slot, self.item) {
                Step::Item(child) => {
                    self.item += 1;
                    return Some(child);
                }
                Step::Hole => {
                    self.item += 1;
                }
                Step::EndOfSlot => {
                    self.slot += 1;
                    self.item = 0;
                }
                Step::End => return None,
            }
        }
    }
}
impl<'a> std::iter::FusedIterator for Children<'a> {}
