use crate::output_utils;
use crate::source_files;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libquerydoc_core::parse_query_document;
use libquerydoc_core::QueryDocumentError;
use libquerydoc_parser::SourceText;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more query files or directories containing \
             query files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What checking one file produced.
#[derive(Debug)]
enum FileOutcome {
    Assembled {
        num_operations: usize,
        num_named_fragments: usize,
        num_parts: usize,
    },
    Failed(String),
}

fn check_file(path: PathBuf, max_source_bytes: u64) -> FileOutcome {
    let text = match source_files::read_source(&path, max_source_bytes) {
        Ok(text) => text,
        Err(err) => return FileOutcome::Failed(format!("{err:#}")),
    };
    let source = SourceText::with_file_path(&text, &path);
    match parse_query_document(&source) {
        Ok(document) => {
            log::debug!(
                "{path:#?}: {} parts",
                document.part_count(),
            );
            FileOutcome::Assembled {
                num_operations: document.operations().len(),
                num_named_fragments: document.named_fragments().len(),
                num_parts: document.part_count(),
            }
        },
        Err(QueryDocumentError::Syntax(err)) => {
            FileOutcome::Failed(err.format_detailed(Some(&text)))
        },
        Err(err @ QueryDocumentError::Construction(_)) => {
            log::error!("{path:#?}: {err}");
            FileOutcome::Failed(format!("{}: {err}", path.display()))
        },
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let exts = source_files::normalize_exts(&self.graphql_file_exts);
        let discovered = source_files::discover(&self.file_or_dir_paths, &exts);

        if !discovered.walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while scanning input paths: {:#?}",
                output_utils::RED_X,
                discovered.walk_errors,
            ));
        }

        // Parsing is CPU-bound; each file gets its own blocking worker.
        let tasks: Vec<_> = discovered.file_paths
            .iter()
            .cloned()
            .map(|path| {
                let max_source_bytes = cli.max_source_bytes;
                tokio::task::spawn_blocking(move || check_file(path, max_source_bytes))
            })
            .collect();

        let mut failures = vec![];
        let mut num_operations = 0;
        let mut num_named_fragments = 0;
        let mut num_parts = 0;
        for (path, task) in discovered.file_paths.iter().zip(tasks) {
            match task.await {
                Ok(FileOutcome::Assembled {
                    num_operations: ops,
                    num_named_fragments: frags,
                    num_parts: parts,
                }) => {
                    num_operations += ops;
                    num_named_fragments += frags;
                    num_parts += parts;
                },
                Ok(FileOutcome::Failed(diagnostic)) => failures.push(diagnostic),
                Err(join_err) => failures.push(format!(
                    "{}: worker failed: {join_err}",
                    path.display(),
                )),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{}\n\n{} {} of {} failed to parse.",
                failures.join("\n\n"),
                output_utils::RED_X,
                output_utils::counted(failures.len(), "file"),
                discovered.file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All query documents parsed successfully:\n",
                "  * Checked {}.\n",
                "  * Skipped {}.\n",
                "  * Assembled {} and {} into {}.",
            ),
            output_utils::GREEN_CHECK,
            output_utils::counted(discovered.file_paths.len(), "file"),
            output_utils::counted(discovered.num_skipped_entries, "non-query file"),
            output_utils::counted(num_operations, "operation"),
            output_utils::counted(num_named_fragments, "named fragment"),
            output_utils::counted(num_parts, "document part"),
        ))
    }
}
