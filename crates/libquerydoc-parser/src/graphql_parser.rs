use crate::GraphQLParseError;
use crate::GraphQLTokenStream;
use crate::SourceText;
use crate::node_builders::DocumentBuilder;
use crate::node_builders::SyntaxNodeBuilder;
use crate::syntax_tree::PooledSyntaxTree;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxTree;
use crate::syntax_tree::SyntaxTreePool;

/// Parses a GraphQL query document into a [`SyntaxTree`].
///
/// Parsing is fail-fast: the first syntax error aborts the parse and no
/// partial tree is returned. Errors carry the [`SourceText`]'s file path,
/// when it has one.
///
/// # Example
///
/// ```rust
/// use libquerydoc_parser::GraphQLParser;
/// use libquerydoc_parser::SourceText;
/// use libquerydoc_parser::syntax_tree::SyntaxNodeType;
///
/// let source = SourceText::new("query Hero { hero { name } }");
/// let tree = GraphQLParser::new(&source).parse().unwrap();
///
/// let document = tree.document().unwrap();
/// let operation = tree.children(document)[0];
/// assert_eq!(tree.node(operation).node_type(), SyntaxNodeType::Operation);
/// ```
pub struct GraphQLParser<'a, 'src> {
    source: &'a SourceText<'src>,
}

impl<'a, 'src> GraphQLParser<'a, 'src> {
    pub fn new(source: &'a SourceText<'src>) -> Self {
        Self { source }
    }

    /// Parses into a freshly allocated tree.
    pub fn parse(&self) -> Result<SyntaxTree, GraphQLParseError> {
        let mut tree = SyntaxTree::new();
        self.parse_into(&mut tree)?;
        Ok(tree)
    }

    /// Parses into a tree on loan from `pool`. The tree goes back to the pool
    /// when the returned guard drops, or immediately if the parse fails.
    pub fn parse_pooled<'pool>(
        &self,
        pool: &'pool SyntaxTreePool,
    ) -> Result<PooledSyntaxTree<'pool>, GraphQLParseError> {
        let mut tree = pool.acquire();
        self.parse_into(&mut tree)?;
        Ok(tree)
    }

    /// Parses into `tree`, discarding anything it already held, and returns
    /// the id of the `Document` node.
    ///
    /// On error `tree` is left holding only its root.
    pub fn parse_into(&self, tree: &mut SyntaxTree) -> Result<SyntaxNodeId, GraphQLParseError> {
        if !tree.is_empty() {
            tree.reset();
        }
        log::trace!(
            "parsing {} bytes{}",
            self.source.len(),
            self.source
                .file_path()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default(),
        );

        let file_path = self.source.file_path();
        let mut stream = GraphQLTokenStream::new(self.source.as_str());
        stream
            .prime()
            .map_err(|err| err.with_file_path(file_path))?;

        let root = tree.root();
        DocumentBuilder
            .build_node(tree, root, &mut stream)
            .map_err(|err| {
                log::debug!("parse failed: {}", err.message());
                err.with_file_path(file_path)
            })?;

        let document = tree.children(root)[0];
        log::debug!(
            "parsed {} bytes into {} syntax nodes",
            self.source.len(),
            tree.len(),
        );
        Ok(document)
    }
}
