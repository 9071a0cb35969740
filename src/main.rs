use std::{
    env, fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

use anyhow::Context as _;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// quill is a small, statically checked scripting language.
///
/// Runs a script file, or asks for script paths one at a time when no file is
/// given. Set `RUST_LOG` (for example `RUST_LOG=quill=debug`) to see what the
/// interpreter is doing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Without it, quill prompts for paths until an empty
    /// line.
    file: Option<PathBuf>,

    /// Print the token stream as JSON instead of running the script.
    #[arg(long, conflicts_with_all = ["ast", "check"])]
    tokens: bool,

    /// Print the syntax tree as JSON instead of running the script.
    #[arg(long, conflicts_with = "check")]
    ast: bool,

    /// Check the script for errors without running it.
    #[arg(long)]
    check: bool,
}

/// What to do with each script.
#[derive(Debug, Copy, Clone)]
enum Mode {
    Run,
    Tokens,
    Ast,
    Check,
}

impl Args {
    const fn mode(&self) -> Mode {
        if self.tokens {
            Mode::Tokens
        } else if self.ast {
            Mode::Ast
        } else if self.check {
            Mode::Check
        } else {
            Mode::Run
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    initialize_logging()?;

    let args = Args::parse();
    let mode = args.mode();
    debug!(?mode, file = ?args.file, "starting");

    let Some(path) = &args.file else {
        prompt_loop(mode)?;
        return Ok(ExitCode::SUCCESS);
    };

    if let Err(e) = process_file(path, mode) {
        eprintln!("error: {e:#}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Asks for a script path, processes it, and repeats until an empty line or
/// the end of input.
fn prompt_loop(mode: Mode) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("File Path: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let path = line.trim();
        if path.is_empty() {
            return Ok(());
        }

        if let Err(e) = process_file(Path::new(path), mode) {
            eprintln!("error: {e:#}");
        }
    }
}

fn process_file(path: &Path, mode: Mode) -> anyhow::Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "read script");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Run => quill::run(&source, &mut out)?,
        Mode::Tokens => {
            let tokens = quill::tokenize(&source)?;
            serde_json::to_writer_pretty(&mut out, &tokens)?;
            writeln!(out)?;
        },
        Mode::Ast => {
            let program = quill::parse(&source)?;
            serde_json::to_writer_pretty(&mut out, &program)?;
            writeln!(out)?;
        },
        Mode::Check => {
            quill::check(&source)?;
            writeln!(out, "ok")?;
        },
    }

    Ok(())
}

fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_filter(EnvFilter::from_str(&env_filter)?))
                                  .init();
    Ok(())
}
