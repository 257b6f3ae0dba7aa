use crate::source_files;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libquerydoc_parser::GraphQLParser;
use libquerydoc_parser::SourceText;
use libquerydoc_parser::syntax_tree::SyntaxTree;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TreeCmd {
    #[arg(
        help="Path to the query file whose syntax tree should be printed.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

/// One line per node below the invisible root: type, texts, then the
/// 1-based `line:col` of its first token.
fn render_tree(tree: &SyntaxTree, source: &SourceText<'_>) -> String {
    let mut rendered = String::new();
    for id in tree.descendants(tree.root()).skip(1) {
        let node = tree.node(id);
        let indent = "  ".repeat(tree.depth(id).saturating_sub(1));
        let _ = write!(rendered, "{indent}{}", node.node_type());
        if let Some(primary) = node.primary_text() {
            let _ = write!(rendered, " `{}`", source.slice(primary));
        }
        if let Some(secondary) = node.secondary_text() {
            let _ = write!(rendered, " (`{}`)", source.slice(secondary));
        }
        let location = node.location();
        let _ = writeln!(
            rendered,
            " @ {}:{}",
            location.line() + 1,
            location.col_utf8() + 1,
        );
    }
    rendered
}

#[inherent::inherent]
impl RunnableCommand for TreeCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let text = match source_files::read_source(&self.file_path, cli.max_source_bytes) {
            Ok(text) => text,
            Err(err) => return CommandResult::from_error(err),
        };
        let source = SourceText::with_file_path(&text, &self.file_path);

        match GraphQLParser::new(&source).parse() {
            Ok(tree) => {
                let rendered = render_tree(&tree, &source);
                CommandResult::stdout(format_args!("{}", rendered.trim_end()))
            },
            Err(err) => CommandResult::stderr(format_args!(
                "{}",
                err.format_detailed(Some(&text)),
            )),
        }
    }
}
