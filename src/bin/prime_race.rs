//! Terminal front end: type 1-5 to move, `n` for a new game, `q` to quit.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use prime_race::display::{describe_entry, scoreboard, status_line, sum_line};
use prime_race::{MoveOutcome, Session, SessionConfig, MAX_ADDEND, MIN_ADDEND, TARGET_SCORE};

#[derive(Parser, Debug)]
#[command(version, about = "Race to 100 points by landing the running sum on primes")]
struct Args {
    /// Seed for the computer's random fallback moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = SessionConfig::default().with_opponent_delay(Duration::from_millis(args.delay_ms));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!("starting session with {config:?}");

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "Add {MIN_ADDEND}-{MAX_ADDEND} to the sum. Land on a prime to score it. First to {TARGET_SCORE} wins."
    )?;
    render(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_game();
            }
            input => match input.parse::<u32>() {
                Ok(addend) => match session.human_move(addend) {
                    Ok(outcome) => {
                        print_outcome(&mut out, &outcome)?;
                        if session.is_opponent_turn() {
                            out.flush()?;
                            thread::sleep(session.opponent_delay());
                            let reply = session.opponent_move()?;
                            print_outcome(&mut out, &reply)?;
                        }
                    }
                    Err(err) => writeln!(out, "Can't play that: {err}")?,
                },
                Err(_) => writeln!(out, "Enter a number {MIN_ADDEND}-{MAX_ADDEND}, `n` or `q`")?,
            },
        }
        render(&mut out, &session)?;
    }

    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &MoveOutcome) -> io::Result<()> {
    for line in describe_entry(&outcome.entry) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn render(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let state = session.state();
    writeln!(out, "{}", sum_line(&state))?;
    writeln!(out, "{}", scoreboard(&state))?;
    writeln!(out, "{}", status_line(&state))?;
    if state.is_finished() {
        writeln!(out, "Type `n` for a new game or `q` to quit.")?;
    }
    write!(out, "> ")?;
    out.flush()
}
