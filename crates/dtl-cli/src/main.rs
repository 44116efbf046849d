use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dtl_runner::{render_json, render_text, Runner};

#[derive(Parser)]
#[command(name = "dtl", version, about = "Check HTML prototypes against the design-token palette")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(clap::Args, Clone)]
struct CheckArgs {
    /// Directory holding the token stylesheet and pages (default: current dir)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Lint every page (the default when no command is given)
    Check,

    /// Print the allowed color set derived from the token stylesheet
    Tokens,

    /// Write a default dtl.toml into the root
    Init,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(run(cli)))
}

/// Process status for a command result; errors are printed to stderr.
fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error: {:#}", e);
            1
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let root = match cli.check.root.clone() {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    tracing::debug!(root = %root.display(), "resolved root");

    match cli.cmd.unwrap_or(Command::Check) {
        Command::Check => {
            let runner = Runner::open(root)?;
            let report = runner.run()?;
            match cli.check.format {
                Format::Text => print!("{}", render_text(&report)),
                Format::Json => println!("{}", render_json(&report)?),
            }
            Ok(report.exit_code())
        }
        Command::Tokens => {
            let runner = Runner::open(root)?;
            for color in runner.tokens()?.colors() {
                println!("{}", color);
            }
            Ok(0)
        }
        Command::Init => {
            let path = Runner::init_root(&root)?;
            println!("Config at {}", path.display());
            Ok(0)
        }
    }
}
