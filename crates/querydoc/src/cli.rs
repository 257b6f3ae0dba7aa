use clap::CommandFactory;
use crate::commands;

/// 1 MiB.
pub(crate) const DEFAULT_MAX_SOURCE_BYTES: u64 = 1024 * 1024;

#[derive(clap::Parser, Debug)]
#[command(name = "querydoc", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value_t=DEFAULT_MAX_SOURCE_BYTES,
        global=true,
        help="Refuse to parse any file larger than this many bytes.",
        long,
    )]
    pub max_source_bytes: u64,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
