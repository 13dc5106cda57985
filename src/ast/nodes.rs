//! The node kinds of ES2017, as produced by the parser.
//!
//! Fields are named after ESTree, except where the name is a Rust keyword
//! or clashes with `Syntax::kind`. The ESTree name is then kept for
//! serialization.

use super::{
    Arg, AssignmentOperator, BinaryOperator, Decl, Expr, ImportSpec, Item, LiteralValue,
    LogicalOperator, MethodKind, Node, Param, PatternElem, PropValue, PropertyKind, SourceType,
    Stmt, TemplateValue, UnaryOperator, UpdateOperator, VariableDeclarationKind,
};

node! {
    /// `[a, , ...b]`
    ArrayExpression: [Expression, PropertyValue, ArgumentListElement] {
        /// `None` for a hole.
        elements: Vec<Option<Arg>>,
    }
    children [holes elements]
}

node! {
    /// `[a, , ...b] = ...`
    ArrayPattern: [PatternElement, FunctionParameter, PropertyValue] {
        /// `None` for a hole.
        elements: Vec<Option<PatternElem>>,
    }
    children [holes elements]
}

node! {
    ArrowFunctionExpression: [Expression, PropertyValue, ArgumentListElement] {
        id: Option<Identifier>,
        params: Vec<Param>,

        /// A `BlockStatement`, or any expression if `expression` is set.
        body: Box<Node>,
        generator: bool,
        expression: bool,
        is_async as "async": bool,
    }
    children [maybe id, many params, one body]
}

node! {
    AssignmentExpression: [Expression, PropertyValue, ArgumentListElement] {
        operator: AssignmentOperator,
        left: PatternElem,
        right: Expr,
    }
    children [one left, one right]
}

node! {
    /// A target with a default value, e.g. `x = 1` in `function f(x = 1) {}`
    /// or in `[x = 1] = []`.
    AssignmentPattern: [
        Expression,
        Statement,
        PatternElement,
        FunctionParameter,
        PropertyValue,
        ArgumentListElement,
        ModuleItem
    ] {
        left: PatternElem,
        right: Expr,
    }
    children [one left, one right]
}

node! {
    AwaitExpression: [Expression, PropertyValue, ArgumentListElement] {
        argument: Expr,
    }
    children [one argument]
}

node! {
    BinaryExpression: [Expression, PropertyValue, ArgumentListElement] {
        operator: BinaryOperator,
        left: Expr,
        right: Expr,
    }
    children [one left, one right]
}

node! {
    BlockStatement: [Statement, ModuleItem] {
        body: Vec<Stmt>,
    }
    children [many body]
}

node! {
    BreakStatement: [Statement, ModuleItem] {
        label: Option<Identifier>,
    }
    children [maybe label]
}

node! {
    CallExpression: [Expression, PropertyValue, ArgumentListElement] {
        callee: Expr,
        arguments: Vec<Arg>,
    }
    children [one callee, many arguments]
}

node! {
    /// `catch (param) body`. The binding is optional since ES2019.
    CatchClause: [Statement, ModuleItem] {
        param: Option<PatternElem>,
        body: BlockStatement,
    }
    children [maybe param, one body]
}

node! {
    ClassBody: [] {
        body: Vec<MethodDefinition>,
    }
    children [many body]
}

node! {
    ClassDeclaration: [Statement, ModuleItem, Declaration] {
        /// `None` only in `export default class {}`.
        id: Option<Identifier>,
        super_class as "superClass": Option<Expr>,
        body: ClassBody,
    }
    children [maybe id, maybe super_class, one body]
}

node! {
    ClassExpression: [Expression, PropertyValue, ArgumentListElement] {
        id: Option<Identifier>,
        super_class as "superClass": Option<Expr>,
        body: ClassBody,
    }
    children [maybe id, maybe super_class, one body]
}

node! {
    ConditionalExpression: [Expression, PropertyValue, ArgumentListElement] {
        test: Expr,
        consequent: Expr,
        alternate: Expr,
    }
    children [one test, one consequent, one alternate]
}

node! {
    ContinueStatement: [Statement, ModuleItem] {
        label: Option<Identifier>,
    }
    children [maybe label]
}

node! {
    DebuggerStatement: [Statement, ModuleItem] {}
    children []
}

node! {
    DoWhileStatement: [Statement, ModuleItem] {
        body: Stmt,
        test: Expr,
    }
    children [one body, one test]
}

node! {
    EmptyStatement: [Statement, ModuleItem] {}
    children []
}

node! {
    /// `export * from "source"`
    ExportAllDeclaration: [ModuleItem] {
        source: Literal,
    }
    children [one source]
}

node! {
    ExportDefaultDeclaration: [ModuleItem] {
        /// A declaration or an expression.
        declaration: Box<Node>,
    }
    children [one declaration]
}

node! {
    ExportNamedDeclaration: [ModuleItem] {
        declaration: Option<Decl>,
        specifiers: Vec<ExportSpecifier>,
        source: Option<Literal>,
    }
    children [maybe declaration, many specifiers, maybe source]
}

node! {
    ExportSpecifier: [] {
        local: Identifier,
        exported: Identifier,
    }
    children [one local, one exported]
}

node! {
    ExpressionStatement: [Statement, ModuleItem] {
        expression: Expr,

        /// The raw text of the string literal, for directives such as
        /// `"use strict"`. Omitted from the ESTree output when absent.
        directive: Option<String> [skip_if_none],
    }
    children [one expression]
}

node! {
    ForInStatement: [Statement, ModuleItem] {
        /// A `VariableDeclaration` or a pattern.
        left: Box<Node>,
        right: Expr,
        body: Stmt,
    }
    children [one left, one right, one body]
}

node! {
    ForOfStatement: [Statement, ModuleItem] {
        /// A `VariableDeclaration` or a pattern.
        left: Box<Node>,
        right: Expr,
        body: Stmt,
    }
    children [one left, one right, one body]
}

node! {
    ForStatement: [Statement, ModuleItem] {
        /// A `VariableDeclaration` or an expression.
        init: Option<Box<Node>>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Stmt,
    }
    children [maybe init, maybe test, maybe update, one body]
}

node! {
    FunctionDeclaration: [Statement, ModuleItem, Declaration] {
        /// `None` only in `export default function () {}`.
        id: Option<Identifier>,
        params: Vec<Param>,
        body: BlockStatement,
        generator: bool,
        is_async as "async": bool,
    }
    children [maybe id, many params, one body]
}

node! {
    FunctionExpression: [Expression, PropertyValue, ArgumentListElement] {
        id: Option<Identifier>,
        params: Vec<Param>,
        body: BlockStatement,
        generator: bool,
        is_async as "async": bool,
    }
    children [maybe id, many params, one body]
}

node! {
    Identifier: [
        Expression,
        PatternElement,
        FunctionParameter,
        PropertyValue,
        ArgumentListElement
    ] {
        name: String,
    }
    children []
}

node! {
    IfStatement: [Statement, ModuleItem] {
        test: Expr,
        consequent: Stmt,
        alternate: Option<Stmt>,
    }
    children [one test, one consequent, maybe alternate]
}

node! {
    /// The callee of a dynamic `import(...)`.
    Import: [Expression, PropertyValue, ArgumentListElement] {}
    children []
}

node! {
    ImportDeclaration: [ModuleItem] {
        specifiers: Vec<ImportSpec>,
        source: Literal,
    }
    children [many specifiers, one source]
}

node! {
    /// `import local from ...`
    ImportDefaultSpecifier: [ImportDeclarationSpecifier] {
        local: Identifier,
    }
    children [one local]
}

node! {
    /// `import * as local from ...`
    ImportNamespaceSpecifier: [ImportDeclarationSpecifier] {
        local: Identifier,
    }
    children [one local]
}

node! {
    /// `import { imported as local } from ...`
    ImportSpecifier: [ImportDeclarationSpecifier] {
        local: Identifier,
        imported: Identifier,
    }
    children [one local, one imported]
}

node! {
    LabeledStatement: [Statement, ModuleItem] {
        label: Identifier,
        body: Stmt,
    }
    children [one label, one body]
}

node! {
    Literal: [Expression, PropertyValue, ArgumentListElement] {
        value: LiteralValue,

        /// The literal as written in the source.
        raw: String,
    }
    children []
}

node! {
    LogicalExpression: [Expression, PropertyValue, ArgumentListElement] {
        operator: LogicalOperator,
        left: Expr,
        right: Expr,
    }
    children [one left, one right]
}

node! {
    /// `object.property` or `object[property]`.
    MemberExpression: [
        Expression,
        PatternElement,
        PropertyValue,
        ArgumentListElement
    ] {
        object: Expr,
        property: Expr,
        computed: bool,
    }
    children [one object, one property]
}

node! {
    /// `new.target`
    MetaProperty: [Expression, PropertyValue, ArgumentListElement] {
        meta: Identifier,
        property: Identifier,
    }
    children [one meta, one property]
}

node! {
    MethodDefinition: [] {
        key: Expr,
        computed: bool,
        value: FunctionExpression,
        method_kind as "kind": MethodKind,
        is_static as "static": bool,
    }
    children [one key, one value]
}

node! {
    NewExpression: [Expression, PropertyValue, ArgumentListElement] {
        callee: Expr,
        arguments: Vec<Arg>,
    }
    children [one callee, many arguments]
}

node! {
    ObjectExpression: [Expression, PropertyValue, ArgumentListElement] {
        properties: Vec<Property>,
    }
    children [many properties]
}

node! {
    ObjectPattern: [PatternElement, FunctionParameter, PropertyValue] {
        properties: Vec<Property>,
    }
    children [many properties]
}

node! {
    /// The root of a tree.
    Program: [] {
        body: Vec<Item>,
        source_type as "sourceType": SourceType,
    }
    children [many body]
}

node! {
    /// A property of an `ObjectExpression` or of an `ObjectPattern`.
    Property: [] {
        key: Expr,
        computed: bool,
        value: PropValue,
        property_kind as "kind": PropertyKind,
        method: bool,
        shorthand: bool,
    }
    children [one key, one value]
}

node! {
    /// `...argument`, in a pattern or a parameter list.
    RestElement: [PatternElement, FunctionParameter] {
        argument: PatternElem,
    }
    children [one argument]
}

node! {
    ReturnStatement: [Statement, ModuleItem] {
        argument: Option<Expr>,
    }
    children [maybe argument]
}

node! {
    SequenceExpression: [Expression, PropertyValue, ArgumentListElement] {
        expressions: Vec<Expr>,
    }
    children [many expressions]
}

node! {
    /// `...argument`, in a call or an array literal.
    SpreadElement: [ArgumentListElement] {
        argument: Expr,
    }
    children [one argument]
}

node! {
    Super: [Expression, PropertyValue, ArgumentListElement] {}
    children []
}

node! {
    SwitchCase: [] {
        /// `None` for `default:`.
        test: Option<Expr>,
        consequent: Vec<Stmt>,
    }
    children [maybe test, many consequent]
}

node! {
    SwitchStatement: [Statement, ModuleItem] {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
    }
    children [one discriminant, many cases]
}

node! {
    TaggedTemplateExpression: [Expression, PropertyValue, ArgumentListElement] {
        tag: Expr,
        quasi: TemplateLiteral,
    }
    children [one tag, one quasi]
}

node! {
    TemplateElement: [] {
        value: TemplateValue,
        tail: bool,
    }
    children []
}

node! {
    /// Quasis and expressions alternate, starting and ending with a quasi.
    TemplateLiteral: [Expression, PropertyValue, ArgumentListElement] {
        quasis: Vec<TemplateElement>,
        expressions: Vec<Expr>,
    }
    children [many quasis, many expressions]
}

node! {
    ThisExpression: [Expression, PropertyValue, ArgumentListElement] {}
    children []
}

node! {
    ThrowStatement: [Statement, ModuleItem] {
        argument: Expr,
    }
    children [one argument]
}

node! {
    TryStatement: [Statement, ModuleItem] {
        block: BlockStatement,
        handler: Option<CatchClause>,
        finalizer: Option<BlockStatement>,
    }
    children [one block, maybe handler, maybe finalizer]
}

node! {
    UnaryExpression: [Expression, PropertyValue, ArgumentListElement] {
        operator: UnaryOperator,
        argument: Expr,
    }
    children [one argument]
}

node! {
    UpdateExpression: [Expression, PropertyValue, ArgumentListElement] {
        operator: UpdateOperator,
        argument: Expr,
        prefix: bool,
    }
    children [one argument]
}

node! {
    VariableDeclaration: [Statement, ModuleItem, Declaration] {
        declarations: Vec<VariableDeclarator>,
        declaration_kind as "kind": VariableDeclarationKind,
    }
    children [many declarations]
}

node! {
    VariableDeclarator: [] {
        id: PatternElem,
        init: Option<Expr>,
    }
    children [one id, maybe init]
}

node! {
    WhileStatement: [Statement, ModuleItem] {
        test: Expr,
        body: Stmt,
    }
    children [one test, one body]
}

node! {
    WithStatement: [Statement, ModuleItem] {
        object: Expr,
        body: Stmt,
    }
    children [one object, one body]
}

node! {
    YieldExpression: [Expression, PropertyValue, ArgumentListElement] {
        argument: Option<Expr>,
        delegate: bool,
    }
    children [maybe argument]
}
