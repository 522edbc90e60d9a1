mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use calc_core::session::prelude::{Session, SessionConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS};
use clap::{Parser, Subcommand};
use cli::{print_finished, print_io_error, print_running};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Integer calculator with variables.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    /// Maximum number of nested parentheses in one line
    #[arg(long, global = true, env = "CALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Maximum number of binary operators in one line
    #[arg(long, global = true, env = "CALC_MAX_OPERATORS", default_value_t = DEFAULT_MAX_OPERATORS)]
    max_operators: usize,
    /// Log every evaluated line to stderr (`CALC_LOG` takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Runs the interactive calculator (the default)
    Repl,
    /// Evaluates every line of a file in a single session
    Run {
        /// Path of source file
        path: PathBuf,
    },
    /// Runs Read Lex Print Loop
    Lex,
    /// Runs Read Parse Print Loop
    Parse,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = SessionConfig::default()
        .with_max_depth(args.max_depth)
        .with_max_operators(args.max_operators);

    let result = match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            if let Err(err) = ctrlc::set_handler(|| {
                println!();
                std::process::exit(0);
            }) {
                warn!(%err, "could not install the Ctrl-C handler");
            }

            let mut session = Session::with_config(config);
            repl::start(&mut session)
        },
        Command::Run { path } => {
            let name = path.display().to_string();

            print_running(&name);
            let start = std::time::Instant::now();

            let mut session = Session::with_config(config);

            match repl::run_file(&mut session, &path) {
                Ok(()) => {
                    print_finished(start.elapsed());
                    Ok(())
                },
                Err(err) => Err(err)
            }
        },
        Command::Lex => rlpl::start(),
        Command::Parse => rppl::start(config),
    };

    if let Err(err) = result {
        print_io_error(&err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CALC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
