use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Post-generation hooks for scaffolded full-stack projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the post-generation hook in the current directory
    Run {
        /// Path to a postgen.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Project name (overrides the config file)
        #[arg(long)]
        project_name: Option<String>,

        /// Skip npm dependency installation after frontend generation
        #[arg(long)]
        skip_install: bool,
    },

    /// Check that the required external tools are available
    Check {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            project_name,
            skip_install,
        } => {
            commands::run::execute(config, project_name, skip_install)?;
        }
        Commands::Check { json } => {
            let exit_code = commands::check::execute(json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
