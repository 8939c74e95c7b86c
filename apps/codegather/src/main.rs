use anyhow::Result;
use clap::{Parser, Subcommand};
use codegather_collect::{CollectConfig, DepsConfig};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "codegather")]
#[command(
    about = "Gather the source files a Python or JS/TS entry point depends on",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the files reachable from the targets through their imports
    Deps(DepsConfig),
    /// Collect the contents of the reachable files into chunks
    Collect(CollectConfig),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Deps(cfg) => {
            info!("Listing dependencies of {} targets", cfg.targets.len());
            let json = cfg.json;
            let report = codegather_collect::run_deps(cfg)?;
            debug!("Found {} files", report.files.len());

            codegather_collect::print_dependency_report(&mut stdout, &report, json)?;
            Ok(())
        }
        Commands::Collect(cfg) => {
            info!(
                "Collecting from {} targets with depth {}, {} characters and {} tokens per chunk",
                cfg.targets.len(),
                cfg.depth,
                cfg.max_char,
                cfg.max_token
            );
            let result = codegather_collect::run_collect(cfg.clone())?;
            debug!(
                "Collected {} files into {} chunks",
                result.files.len(),
                result.chunks.len()
            );

            match &cfg.output {
                Some(path) => {
                    codegather_collect::write_chunks(path, &result.chunks)?;
                    codegather_collect::print_saved(&mut stdout, path)?;
                }
                None => codegather_collect::print_chunks(&mut stdout, &result)?,
            }
            codegather_collect::print_result(&mut stdout, &result, cfg.max_char, cfg.max_token)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files.len().to_string().cyan()
            )?;
            stdout.flush()?;
            Ok(())
        }
    }
}
