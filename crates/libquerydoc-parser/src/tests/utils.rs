//! Various test utils.

use crate::node_builders::SyntaxNodeBuilder;
use crate::syntax_tree::SyntaxNodeId;
use crate::syntax_tree::SyntaxTree;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::SourceText;

/// Creates a token over `start..end` of a single-line ASCII source.
pub fn mock_token(kind: GraphQLTokenKind, start: usize, end: usize) -> GraphQLToken {
    GraphQLToken::new(
        kind,
        GraphQLSourceSpan::new(
            SourcePosition::new(0, start, start, start),
            SourcePosition::new(0, end, end, end),
        ),
    )
}

pub fn primed_stream(source: &str) -> GraphQLTokenStream<'_> {
    let mut stream = GraphQLTokenStream::new(source);
    stream.prime().unwrap();
    stream
}

/// Runs one builder against `source` beneath the root of a fresh tree.
///
/// Returns the tree, the build result, and the text of the token the cursor
/// stopped on.
pub fn build_with<'src>(
    builder: &dyn SyntaxNodeBuilder,
    source: &'src str,
) -> (SyntaxTree, Result<(), GraphQLParseError>, &'src str) {
    let mut tree = SyntaxTree::new();
    let mut stream = primed_stream(source);
    let root = tree.root();
    let result = builder.build_node(&mut tree, root, &mut stream);
    let rest = stream.current_text();
    (tree, result, rest)
}

pub fn parse(source: &str) -> SyntaxTree {
    let source_text = SourceText::new(source);
    match GraphQLParser::new(&source_text).parse() {
        Ok(tree) => tree,
        Err(err) => panic!("unexpected parse error:\n{}", err.format_detailed(Some(source))),
    }
}

pub fn parse_err(source: &str) -> GraphQLParseError {
    let source_text = SourceText::new(source);
    match GraphQLParser::new(&source_text).parse() {
        Ok(_) => panic!("expected a parse error for {source:?}"),
        Err(err) => err,
    }
}

/// Renders the subtree under `id` (excluding `id` itself) one node per line:
/// `<indent><NodeType>[ primary][ / secondary][ :ScalarKind]`.
pub fn outline(tree: &SyntaxTree, source: &str, id: SyntaxNodeId) -> Vec<String> {
    let source_text = SourceText::new(source);
    let base_depth = tree.depth(id);
    tree.descendants(id)
        .skip(1)
        .map(|node_id| {
            let node = tree.node(node_id);
            let mut line = "  ".repeat(tree.depth(node_id) - base_depth - 1);
            line.push_str(node.node_type().as_str());
            if let Some(primary) = node.primary_text() {
                line.push(' ');
                line.push_str(source_text.slice(primary));
            }
            if let Some(secondary) = node.secondary_text() {
                line.push_str(" / ");
                line.push_str(source_text.slice(secondary));
            }
            if let Some(kind) = node.primary_value_kind() {
                line.push_str(&format!(" :{kind:?}"));
            }
            line
        })
        .collect()
}

/// [`outline`] of a whole parsed document, starting below the `Document`
/// node.
pub fn document_outline(source: &str) -> Vec<String> {
    let tree = parse(source);
    let document = tree.document().unwrap();
    outline(&tree, source, document)
}
