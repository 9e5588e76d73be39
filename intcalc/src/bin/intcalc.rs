use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use intcalc::{Config, Session};

#[derive(Parser, Debug)]
#[command(name = "intcalc", version, about = "Evaluate integer infix expressions")]
struct Args {
    /// Expression to evaluate, starts a REPL when missing
    expr: Vec<String>,

    /// Evaluate every line of a file, stopping at the first error
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Longest expression accepted, in tokens
    #[arg(long, default_value_t = intcalc::DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

mod repl {
    use intcalc::Session;
    use log::info;
    use rustyline::error::ReadlineError;

    pub fn evalexpr(session: &Session, input: &str) -> anyhow::Result<()> {
        if let Some(outcome) = session.eval_line(input)? {
            println!("{} = {}", outcome.postfix, outcome.value);
        }
        Ok(())
    }

    pub fn run(session: &Session) -> anyhow::Result<()> {
        let mut rl = rustyline::DefaultEditor::new()?;
        let histpath = session.config().history_path.clone();
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                info!("no history yet at {}", path.display());
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match session.eval_line(&line) {
                        Err(e) => println!("{}", e),
                        Ok(Some(outcome)) => println!("{}", outcome.value),
                        Ok(None) => (),
                    }
                }
            }
        }
        if let Some(path) = &histpath {
            rl.save_history(path)?;
        }
        Ok(())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let session = Session::new(Config::default().with_max_tokens(args.max_tokens));

    if !args.expr.is_empty() {
        return repl::evalexpr(&session, &args.expr.join(" "));
    }
    if let Some(path) = &args.file {
        let file = File::open(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        session.run_batch(BufReader::new(file), io::stdout().lock())?;
        return Ok(());
    }
    if !io::stdin().is_terminal() {
        session.run_batch(io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }
    repl::run(&session)
}
