/// Use the ESTree name if one was provided, the field name otherwise.
macro_rules! member_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $member:literal) => {
        $member
    };
}

/// Emit a member of a node. A field marked `skip_if_none` is left out
/// of the object when absent.
macro_rules! emit_member {
    ($out:ident, $value:expr, $name:expr, skip_if_none) => {
        if let Some(ref value) = $value {
            emit_member!($out, *value, $name);
        }
    };
    ($out:ident, $value:expr, $name:expr) => {{
        $out.member($name)?;
        $crate::ast::emit::Emit::emit(&$value, $out)?;
    }};
}

/// Define the struct of a node kind.
///
/// ```ignore
/// node! {
///     /// Documentation.
///     Name: [Capability, ...] {
///         field: Type,
///         other_field as "estreeName": Type,
///         optional_field: Option<Type> [skip_if_none],
///     }
///     children [one field, maybe optional, many list, holes sparse_list]
/// }
/// ```
///
/// Fields are private. They are all set by `new`, in declaration order,
/// and exposed through getters. The `children` list states which fields
/// hold child nodes, in traversal order:
///
/// - `one` for a required child;
/// - `maybe` for an `Option`;
/// - `many` for a `Vec`;
/// - `holes` for a `Vec<Option<_>>`, skipping the `None`s.
///
/// Fields marked `[skip_if_none]` are omitted from the ESTree output when
/// absent, instead of being emitted as `null`.
macro_rules! node {
    (
        $(#[$meta:meta])*
        $name:ident : [$($capability:ident),*] {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $member:literal)? : $ty:ty $([$skip:ident])?
            ),* $(,)?
        }
        children [$($mode:ident $child:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $($field: $ty,)*
        }

        impl $name {
            pub const CAPABILITIES: $crate::ast::Capabilities =
                $crate::ast::Capabilities::NONE$(.with($crate::ast::Capability::$capability))*;

            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            pub fn new($($field: $ty),*) -> Self {
                $name {
                    $($field,)*
                }
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )*

            #[allow(unused_mut, unused_variables, unused_assignments)]
            pub(crate) fn step(&self, slot: usize, item: usize) -> $crate::ast::Step<'_> {
                let mut index = 0;
                $(
                    if slot == index {
                        return $crate::ast::Step::$mode(&self.$child, item);
                    }
                    index += 1;
                )*
                $crate::ast::Step::End
            }
        }

        $(impl $crate::ast::$capability for $name {})*

        impl $crate::ast::Syntax for $name {
            fn kind(&self) -> $crate::ast::Kind {
                $crate::ast::Kind::$name
            }
            fn as_node_ref(&self) -> $crate::ast::NodeRef<'_> {
                $crate::ast::NodeRef::$name(self)
            }
        }

        impl $crate::ast::emit::Emit for $name {
            #[allow(unused_variables)]
            fn emit<W>(&self, out: &mut W) -> Result<(), $crate::WriterError>
            where
                W: $crate::io::StructuredWriter + ?Sized,
            {
                out.start_object()?;
                out.member("type")?;
                out.string(stringify!($name))?;
                $(
                    emit_member!(out, self.$field, member_name!($field $(, $member)?) $(, $skip)?);
                )*
                out.end_object()
            }
        }
    };
}

/// Define the closed set of node kinds, along with the owned and borrowed
/// sum types over them.
macro_rules! nodes {
    ($($name:ident),* $(,)?) => {
        /// The kind of a node.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum Kind {
            $($name,)*
        }
        impl Kind {
            /// All kinds, in alphabetical order.
            pub const ALL: &'static [Kind] = &[$(Kind::$name,)*];

            /// The ESTree name of this kind.
            pub fn name(self) -> &'static str {
                match self {
                    $(Kind::$name => stringify!($name),)*
                }
            }

            /// The roles a node of this kind may play.
            pub fn capabilities(self) -> Capabilities {
                match self {
                    $(Kind::$name => $name::CAPABILITIES,)*
                }
            }
        }
        impl std::fmt::Display for Kind {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        /// A node of any kind, owning its children.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Node {
            $($name($name),)*
        }

        /// A reference to a node of any kind.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum NodeRef<'a> {
            $($name(&'a $name),)*
        }

        $(
            impl From<$name> for Node {
                fn from(node: $name) -> Self {
                    Node::$name(node)
                }
            }
            impl<'a> From<&'a $name> for NodeRef<'a> {
                fn from(node: &'a $name) -> Self {
                    NodeRef::$name(node)
                }
            }
        )*

        impl Syntax for Node {
            fn kind(&self) -> Kind {
                match *self {
                    $(Node::$name(_) => Kind::$name,)*
                }
            }
            fn as_node_ref(&self) -> NodeRef<'_> {
                match *self {
                    $(Node::$name(ref node) => NodeRef::$name(node),)*
                }
            }
        }

        impl<'a> NodeRef<'a> {
            pub fn kind(self) -> Kind {
                match self {
                    $(NodeRef::$name(_) => Kind::$name,)*
                }
            }

            /// The children of this node, in order, with a lifetime that
            /// outlives the `NodeRef`.
            pub fn children(self) -> Children<'a> {
                Children::new(self)
            }

            /// Clone the node behind this reference.
            pub fn to_node(self) -> Node {
                match self {
                    $(NodeRef::$name(node) => Node::$name(node.clone()),)*
                }
            }

            pub(crate) fn step(self, slot: usize, item: usize) -> Step<'a> {
                match self {
                    $(NodeRef::$name(node) => node.step(slot, item),)*
                }
            }
        }

        impl<'a> $crate::ast::emit::Emit for NodeRef<'a> {
            fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
            where
                W: StructuredWriter + ?Sized,
            {
                match *self {
                    $(NodeRef::$name(node) => $crate::ast::emit::Emit::emit(node, out),)*
                }
            }
        }
    };
}

/// Define an enumeration of keywords or operators, represented as strings.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }
        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
        impl $crate::ast::emit::Emit for $name {
            fn emit<W>(&self, out: &mut W) -> Result<(), $crate::WriterError>
            where
                W: $crate::io::StructuredWriter + ?Sized,
            {
                out.string(self.as_str())
            }
        }
    };
}

/// Define a capability trait, and the child slot that accepts any node
/// implementing it.
macro_rules! capability {
    (
        $(#[$meta:meta])*
        $capability:ident => $slot:ident
    ) => {
        $(#[$meta])*
        pub trait $capability: Syntax + Into<Node> {}

        #[doc = concat!("A child slot holding any `", stringify!($capability), "`.")]
        #[derive(Clone, Debug, PartialEq)]
        pub struct $slot(Box<Node>);

        impl $slot {
            pub fn node(&self) -> &Node {
                &self.0
            }

            pub fn into_node(self) -> Node {
                *self.0
            }

            /// Check the capability at runtime. On failure, the node is
            /// handed back.
            pub fn from_node(node: Node) -> Result<Self, Node> {
                if node.capabilities().contains(Capability::$capability) {
                    Ok($slot(Box::new(node)))
                } else {
                    Err(node)
                }
            }
        }

        impl<T> From<T> for $slot
        where
            T: $capability,
        {
            fn from(node: T) -> Self {
                $slot(Box::new(node.into()))
            }
        }

        impl From<$slot> for Node {
            fn from(slot: $slot) -> Self {
                *slot.0
            }
        }

        impl AsRef<Node> for $slot {
            fn as_ref(&self) -> &Node {
                &self.0
            }
        }

        impl Syntax for $slot {
            fn kind(&self) -> Kind {
                self.0.kind()
            }
            fn as_node_ref(&self) -> NodeRef<'_> {
                self.0.as_node_ref()
            }
        }

        impl $crate::ast::emit::Emit for $slot {
            fn emit<W>(&self, out: &mut W) -> Result<(), WriterError>
            where
                W: StructuredWriter + ?Sized,
            {
                $crate::ast::emit::Emit::emit(&self.0, out)
            }
        }
    };
}
