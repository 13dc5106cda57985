//! Declarations hoisted to the top of a scope.

use crate::ast::{
    Children, FunctionDeclaration, NodeRef, Syntax, VariableDeclaration, VariableDeclarationKind,
};

/// The function and `var` declarations of a single function or program
/// body, in source order.
///
/// Built once per scope, read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoistingScope<'a> {
    function_declarations: Vec<&'a FunctionDeclaration>,
    variable_declarations: Vec<&'a VariableDeclaration>,
}
impl<'a> HoistingScope<'a> {
    pub fn new(
        function_declarations: Vec<&'a FunctionDeclaration>,
        variable_declarations: Vec<&'a VariableDeclaration>,
    ) -> Self {
        HoistingScope {
            function_declarations,
            variable_declarations,
        }
    }

    pub fn function_declarations(&self) -> &[&'a FunctionDeclaration] {
        &self.function_declarations
    }

    pub fn variable_declarations(&self) -> &[&'a VariableDeclaration] {
        &self.variable_declarations
    }

    /// Collect the declarations hoisted to the scope of `root`, typically a
    /// `Program` or the body of a function.
    ///
    /// Nested functions are not entered: a nested `FunctionDeclaration` is
    /// collected but its contents belong to its own scope. `let` and `const`
    /// are block-scoped and are not collected.
    pub fn collect<T>(root: &'a T) -> Self
    where
        T: Syntax + ?Sized,
    {
        let mut scope = HoistingScope::default();
        let mut stack: Vec<Children<'a>> = vec![root.children()];
        while let Some(children) = stack.last_mut() {
            let node = match children.next() {
                Some(node) => node,
                None => {
                    stack.pop();
                    continue;
                }
            };
            match node {
                NodeRef::FunctionDeclaration(declaration) => {
                    debug!(target: "hoisting", "function {:?}", declaration.id().as_ref().map(|id| id.name()));
                    scope.function_declarations.push(declaration);
                }
                NodeRef::FunctionExpression(_) | NodeRef::ArrowFunctionExpression(_) => {}
                NodeRef::VariableDeclaration(declaration) => {
                    if *declaration.declaration_kind() == VariableDeclarationKind::Var {
                        debug!(target: "hoisting", "var with {} declarators", declaration.declarations().len());
                        scope.variable_declarations.push(declaration);
                    }
                    stack.push(node.children());
                }
                _ => stack.push(node.children()),
            }
        }
        scope
    }
}
