use crate::ByteSpan;
use crate::SmallVec;
use crate::SourcePosition;
use crate::syntax_tree::SyntaxNodeType;

/// A generation-tagged index of a node within a
/// [`SyntaxTree`](crate::syntax_tree::SyntaxTree).
///
/// Resetting a tree (including returning it to a pool) bumps its generation,
/// so ids handed out before the reset can never silently address nodes of a
/// later parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SyntaxNodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl SyntaxNodeId {
    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// How a `ScalarValue` node's lexeme should be read.
///
/// Integers and floats share the `Number` kind; consumers that care about the
/// difference inspect the lexeme for `.`, `e` or `E`.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum ScalarValueKind {
    Boolean,
    Number,
    String,
}

/// One node of a syntax tree.
///
/// Text is stored as [`ByteSpan`]s into the parsed source. What the primary
/// and secondary texts hold depends on the node type:
///
/// | node type        | primary text                 | secondary text   |
/// |------------------|------------------------------|------------------|
/// | `Operation`      | `query`/`mutation`/... (absent for `{ ... }`) | operation name |
/// | `Variable`       | name (without `$`)           | declared type, e.g. `[Int!]!` |
/// | `Directive`      | name (without `@`)           |                  |
/// | `Field`          | field name                   | alias            |
/// | `FragmentSpread` | fragment name                |                  |
/// | `InlineFragment` | type condition               |                  |
/// | `NamedFragment`  | fragment name                | type condition   |
/// | `InputItem`      | argument or input-field name |                  |
/// | `ScalarValue`    | raw lexeme (strings keep their quotes) |        |
/// | `EnumValue`, `NullValue` | lexeme               |                  |
/// | `VariableValue`  | variable name (without `$`)  |                  |
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub(crate) node_type: SyntaxNodeType,
    pub(crate) primary_text: Option<ByteSpan>,
    pub(crate) primary_value_kind: Option<ScalarValueKind>,
    pub(crate) secondary_text: Option<ByteSpan>,
    pub(crate) location: SourcePosition,
    pub(crate) parent: Option<SyntaxNodeId>,
    pub(crate) children: SmallVec<[SyntaxNodeId; 4]>,
}

impl SyntaxNode {
    pub(crate) fn new(
        node_type: SyntaxNodeType,
        location: SourcePosition,
        parent: Option<SyntaxNodeId>,
    ) -> Self {
        Self {
            node_type,
            primary_text: None,
            primary_value_kind: None,
            secondary_text: None,
            location,
            parent,
            children: SmallVec::new(),
        }
    }

    pub fn node_type(&self) -> SyntaxNodeType {
        self.node_type
    }

    pub fn primary_text(&self) -> Option<ByteSpan> {
        self.primary_text
    }

    /// Set only on `ScalarValue` nodes.
    pub fn primary_value_kind(&self) -> Option<ScalarValueKind> {
        self.primary_value_kind
    }

    pub fn secondary_text(&self) -> Option<ByteSpan> {
        self.secondary_text
    }

    /// Position of the node's first token.
    pub fn location(&self) -> &SourcePosition {
        &self.location
    }

    /// `None` only for the tree's root.
    pub fn parent(&self) -> Option<SyntaxNodeId> {
        self.parent
    }

    /// Child ids in source order.
    pub fn children(&self) -> &[SyntaxNodeId] {
        &self.children
    }
}
