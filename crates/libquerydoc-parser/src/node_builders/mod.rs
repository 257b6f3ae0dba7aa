//! One builder per grammar production.
//!
//! Each builder is a stateless unit struct implementing [`SyntaxNodeBuilder`].
//! All mutable state lives in the [`SyntaxTree`] and the
//! [`GraphQLTokenStream`] passed in, so a single `&'static` instance of each
//! builder is shared by every parse on every thread.
//!
//! Builders expect the stream to be primed and positioned on the first token
//! of their production. On success the cursor rests on the first token after
//! the production.

mod directive;
mod document;
pub(crate) mod helpers;
mod input_items;
mod operation;
mod selections;
mod values;
mod variables;

pub use directive::DirectiveBuilder;
pub use document::DocumentBuilder;
pub use input_items::InputItemBuilder;
pub use input_items::InputItemCollectionBuilder;
pub use operation::OperationBuilder;
pub use selections::FieldBuilder;
pub use selections::FieldCollectionBuilder;
pub use selections::FragmentSpreadBuilder;
pub use selections::InlineFragmentBuilder;
pub use selections::NamedFragmentBuilder;
pub use values::ComplexValueBuilder;
pub use values::EnumValueBuilder;
pub use values::ListValueBuilder;
pub use values::NullValueBuilder;
pub use values::ScalarValueBuilder;
pub use values::VariableValueBuilder;
pub use values::select_value_builder;
pub use variables::VariableBuilder;
pub use variables::VariableCollectionBuilder;

use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxTree;

/// A builder for one grammar production.
pub trait SyntaxNodeBuilder: Sync {
    /// Consumes the production's tokens and appends its node(s) beneath
    /// `parent`. Called through [`build_node`](Self::build_node).
    fn build(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError>;

    /// Runs [`build`](Self::build) atomically: if it fails, every node it
    /// appended is removed before the error is returned.
    fn build_node(
        &self,
        tree: &mut SyntaxTree,
        parent: SyntaxNodeId,
        stream: &mut GraphQLTokenStream<'_>,
    ) -> Result<(), GraphQLParseError> {
        let checkpoint = tree.checkpoint(parent);
        let result = self.build(tree, parent, stream);
        if result.is_err() {
            tree.rollback(checkpoint);
        }
        result
    }
}

/// Appends zero or more `Directive` nodes for consecutive `@name(...)`
/// occurrences.
pub(crate) fn build_directives(
    tree: &mut SyntaxTree,
    parent: SyntaxNodeId,
    stream: &mut GraphQLTokenStream<'_>,
) -> Result<(), GraphQLParseError> {
    while stream.matches(&crate::token::GraphQLTokenKind::At) {
        DirectiveBuilder.build_node(tree, parent, stream)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
