//! Scaffolder CLI.
//!
//! Writes the starter `kitter.toml` into the target project unless one
//! already exists. Both outcomes succeed; the status line tells them
//! apart.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use colored::Colorize;
use kitter::scaffold::{ScaffoldOutcome, config_path, scaffold_config};

#[derive(Parser)]
#[command(
    name = "kitter-init",
    about = "Scaffold a starter kitter.toml configuration file",
    version
)]
struct Cli {
    /// Project root to scaffold into.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let target = config_path(&cli.dir);
    match scaffold_config(&cli.dir) {
        Ok(ScaffoldOutcome::Created) => {
            println!("{} {}", "created".green(), target.display());
        }
        Ok(ScaffoldOutcome::AlreadyExists) => {
            println!(
                "{} {} already exists, skipping",
                "skipped".yellow(),
                target.display()
            );
        }
        Err(err) => {
            log::error!("scaffolding failed: {err}");
            eprintln!("{} {}", "error".red(), err);
            exit(1);
        }
    }
}
