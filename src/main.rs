use anyhow::Result;
use ceaiscore::cli::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
        } => ceaiscore::commands::handle_analyze(&path, format, output),
        Commands::Sample { output } => ceaiscore::commands::handle_sample(output),
    }
}
