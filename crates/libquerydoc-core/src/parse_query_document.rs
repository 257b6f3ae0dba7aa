use std::sync::LazyLock;

use libquerydoc_parser::GraphQLParser;
use libquerydoc_parser::SourceText;
use libquerydoc_parser::syntax_tree::SyntaxTreePool;

use crate::PartAddedObserver;
use crate::QueryDocument;
use crate::QueryDocumentBuilder;
use crate::QueryDocumentError;

/// Syntax trees only live until their document is assembled, so every parse
/// in the process borrows from this one pool.
static SYNTAX_TREE_POOL: LazyLock<SyntaxTreePool> = LazyLock::new(SyntaxTreePool::new);

/// Parses `source` and assembles the resulting tree into a [`QueryDocument`].
///
/// The intermediate syntax tree is returned to a shared pool before this
/// function returns, whether or not it succeeds.
///
/// ```rust
/// use libquerydoc_core::parse_query_document;
/// use libquerydoc_parser::SourceText;
///
/// let source = SourceText::new("query Q($id: ID!) { node(id: $id) { id } }");
/// let document = parse_query_document(&source).unwrap();
/// assert_eq!(document.operations().len(), 1);
/// ```
pub fn parse_query_document(source: &SourceText<'_>) -> Result<QueryDocument, QueryDocumentError> {
    parse_query_document_with_observer(source, &mut ())
}

/// Like [`parse_query_document`], reporting each assembled part to
/// `observer`.
pub fn parse_query_document_with_observer(
    source: &SourceText<'_>,
    observer: &mut dyn PartAddedObserver,
) -> Result<QueryDocument, QueryDocumentError> {
    let tree = GraphQLParser::new(source).parse_pooled(&SYNTAX_TREE_POOL)?;
    let document = QueryDocumentBuilder::new(&tree, source).build_with_observer(observer)?;
    Ok(document)
}
