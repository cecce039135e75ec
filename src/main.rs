mod repl;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// log evaluation steps (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// run a file, one statement per line
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// evaluate a single expression
    Eval {
        #[arg(value_name = "EXPR", allow_hyphen_values = true)]
        expression: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Run { file }) => run_file(&file),
        Some(Commands::Eval { expression }) => {
            let mut engine = calc_rs::new_interpreter();
            println!("{}", engine.run(&expression)?);
            Ok(())
        }
        None => repl::start(),
    }
}

fn run_file(file: &Path) -> Result<()> {
    let source =
        fs::read_to_string(file).with_context(|| format!("could not read {}", file.display()))?;

    log::info!("running {}", file.display());

    let mut engine = calc_rs::new_interpreter();
    for (index, line) in source.lines().enumerate() {
        let output = engine
            .run(line)
            .with_context(|| format!("{}:{}", file.display(), index + 1))?;
        if !output.is_empty() {
            println!("{}", output);
        }
    }
    Ok(())
}
