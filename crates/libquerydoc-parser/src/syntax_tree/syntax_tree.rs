use crate::ByteSpan;
use crate::SourcePosition;
use crate::syntax_tree::ScalarValueKind;
use crate::syntax_tree::SyntaxNode;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxNodeType;

/// An n-ary tree of [`SyntaxNode`]s stored in a single arena.
///
/// Nodes are addressed by [`SyntaxNodeId`]. Index `0` is always an `Empty`
/// root; a successful parse appends one `Document` child to it.
///
/// The tree only ever grows, except through [`rollback`](Self::rollback)
/// (which undoes a failed builder's appends) and [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    generation: u32,
}

/// A snapshot of the tree taken before a builder runs.
#[derive(Clone, Copy, Debug)]
pub struct TreeCheckpoint {
    node_count: usize,
    parent: SyntaxNodeId,
    parent_child_count: usize,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::with_generation(0)
    }

    fn with_generation(generation: u32) -> Self {
        Self {
            nodes: vec![SyntaxNode::new(
                SyntaxNodeType::Empty,
                SourcePosition::default(),
                None,
            )],
            generation,
        }
    }

    pub fn root(&self) -> SyntaxNodeId {
        SyntaxNodeId {
            index: 0,
            generation: self.generation,
        }
    }

    /// The `Document` node, once a parse has succeeded.
    pub fn document(&self) -> Option<SyntaxNodeId> {
        self.node(self.root())
            .children()
            .iter()
            .copied()
            .find(|id| self.node(*id).node_type() == SyntaxNodeType::Document)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// If `id` belongs to another generation of this tree or is out of
    /// bounds. Either means an id outlived the parse that produced it.
    pub fn node(&self, id: SyntaxNodeId) -> &SyntaxNode {
        self.check_id(id);
        &self.nodes[id.index()]
    }

    pub fn children(&self, id: SyntaxNodeId) -> &[SyntaxNodeId] {
        self.node(id).children()
    }

    /// Children of `id` with the given node type, in source order.
    pub fn children_of_type(
        &self,
        id: SyntaxNodeId,
        node_type: SyntaxNodeType,
    ) -> impl Iterator<Item = SyntaxNodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.node(*child).node_type() == node_type)
    }

    /// The first child of `id` with the given node type.
    pub fn first_child_of_type(
        &self,
        id: SyntaxNodeId,
        node_type: SyntaxNodeType,
    ) -> Option<SyntaxNodeId> {
        self.children_of_type(id, node_type).next()
    }

    /// Pre-order walk of `id` and all of its descendants.
    pub fn descendants(&self, id: SyntaxNodeId) -> impl Iterator<Item = SyntaxNodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    /// Depth of `id` below the root (the root is at depth `0`).
    pub fn depth(&self, id: SyntaxNodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.node(id).parent();
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.node(parent).parent();
        }
        depth
    }

    /// Appends a new node as the last child of `parent` and returns its id.
    pub fn append_child(
        &mut self,
        parent: SyntaxNodeId,
        node_type: SyntaxNodeType,
        location: SourcePosition,
    ) -> SyntaxNodeId {
        self.check_id(parent);
        let id = SyntaxNodeId {
            index: self.nodes.len() as u32,
            generation: self.generation,
        };
        self.nodes
            .push(SyntaxNode::new(node_type, location, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn set_primary_text(&mut self, id: SyntaxNodeId, span: ByteSpan) {
        self.node_mut(id).primary_text = Some(span);
    }

    pub fn set_scalar_text(&mut self, id: SyntaxNodeId, span: ByteSpan, kind: ScalarValueKind) {
        let node = self.node_mut(id);
        node.primary_text = Some(span);
        node.primary_value_kind = Some(kind);
    }

    pub fn set_secondary_text(&mut self, id: SyntaxNodeId, span: ByteSpan) {
        self.node_mut(id).secondary_text = Some(span);
    }

    /// Records the current shape of the tree as seen from `parent`, the node
    /// a builder is about to append under.
    pub fn checkpoint(&self, parent: SyntaxNodeId) -> TreeCheckpoint {
        TreeCheckpoint {
            node_count: self.nodes.len(),
            parent,
            parent_child_count: self.node(parent).children().len(),
        }
    }

    /// Discards every node appended since `checkpoint` was taken.
    ///
    /// Builders only ever append beneath the parent they were handed (or
    /// beneath nodes they created themselves), so truncating the arena and
    /// the parent's child list restores the exact prior shape.
    pub fn rollback(&mut self, checkpoint: TreeCheckpoint) {
        self.nodes.truncate(checkpoint.node_count);
        self.node_mut(checkpoint.parent)
            .children
            .truncate(checkpoint.parent_child_count);
    }

    /// Clears the tree back to a lone root and bumps its generation.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        let generation = self.generation.wrapping_add(1);
        let root = &mut self.nodes[0];
        root.children.clear();
        self.generation = generation;
    }

    fn node_mut(&mut self, id: SyntaxNodeId) -> &mut SyntaxNode {
        self.check_id(id);
        &mut self.nodes[id.index()]
    }

    fn check_id(&self, id: SyntaxNodeId) {
        assert!(
            id.generation == self.generation && id.index() < self.nodes.len(),
            "stale or foreign SyntaxNodeId {id:?} (tree generation {}, {} nodes)",
            self.generation,
            self.nodes.len(),
        );
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}
