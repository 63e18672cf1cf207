//! gavel: interactive fuzzy-logic bidder for a two-party sealed-bid auction.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gavel_core::agent::BiddingAgent;
use gavel_core::app::AuctionSession;
use gavel_core::ports::Console;

/// Bids against you round by round; type `quit` to stop trading.
#[derive(Debug, Parser)]
#[command(name = "gavel", version, about)]
struct Args {
    /// Monetary units available for the whole session.
    #[arg(long)]
    mu: i64,

    /// Quantity units on store to trade.
    #[arg(long)]
    qu: i64,

    /// Print the end-of-session summary as JSON.
    #[arg(long)]
    json: bool,

    /// Show the engine's per-round reasoning.
    #[arg(long)]
    verbose: bool,
}

/// Console backed by this process's stdin/stdout.
struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::StdoutLock<'static>,
}

impl StdConsole {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout().lock(),
        }
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{text}")?;
        self.stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("gavel: logging was already initialised");
    }

    let agent = match BiddingAgent::new(args.qu, args.mu) {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("gavel: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("started with MU/QU : {}/{}", args.mu, args.qu);

    let mut session = AuctionSession::new(agent, StdConsole::new());
    match session.run() {
        Ok(summary) => {
            if args.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("gavel: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!(
                    "I bought QU {}, MU left {}",
                    summary.units_acquired, summary.money_remaining
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("gavel: {err}");
            ExitCode::FAILURE
        }
    }
}
