//! The arena-backed syntax tree produced by the node builders.

mod syntax_node;
mod syntax_node_type;
mod syntax_tree;
mod syntax_tree_pool;

pub use syntax_node::ScalarValueKind;
pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodeId;
pub use syntax_node_type::SyntaxNodeType;
pub use syntax_tree::SyntaxTree;
pub use syntax_tree::TreeCheckpoint;
pub use syntax_tree_pool::PooledSyntaxTree;
pub use syntax_tree_pool::SyntaxTreePool;

#[cfg(test)]
mod tests;
