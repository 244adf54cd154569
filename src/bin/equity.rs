use std::process::ExitCode;

use clap::Parser;
use holdem_equity::core::parse_hand_and_board;
use holdem_equity::holdem::{
    BetDecision, Decision, EquitySimulator, EquityTally, ValidationError, check_stakes, decide,
};
use rand::{SeedableRng, rng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "equity",
    about = "Hold'em equity and call/fold calculator",
    long_about = "Estimate the equity of two hole cards against random opponent hands \
                  with Monte Carlo simulation and compare it with the pot odds of a bet."
)]
struct Args {
    /// Your two hole cards (e.g. "As Kd" or "AsKd")
    #[arg(long)]
    hand: String,

    /// Known board cards, 0, 3, 4 or 5 of them (e.g. "Qh Jh Th")
    #[arg(long, default_value = "")]
    board: String,

    /// Number of opponents
    #[arg(short = 'o', long, default_value_t = 1)]
    opponents: usize,

    /// Number of simulated hands
    #[arg(short = 'n', long, default_value_t = 30_000)]
    iterations: u64,

    /// Pot size before facing the bet
    #[arg(long, default_value_t = 0.0)]
    pot: f64,

    /// Amount to call
    #[arg(long, default_value_t = 0.0)]
    bet: f64,

    /// Seed the random source for a repeatable run
    #[arg(long)]
    seed: Option<u64>,

    /// Split the run into this many batches (run in parallel when available)
    #[arg(long)]
    batches: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG isn't set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(serde::Serialize, Debug)]
struct Report {
    equity: f64,
    tally: EquityTally,
    #[serde(flatten)]
    bet: Option<BetDecision>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_batches(
    sim: &EquitySimulator,
    trials: u64,
    batches: usize,
    seed: u64,
) -> Result<EquityTally, ValidationError> {
    #[cfg(feature = "parallel")]
    {
        sim.run_parallel(trials, batches, seed)
    }
    #[cfg(not(feature = "parallel"))]
    {
        sim.run_batches_sequential(trials, batches, seed)
    }
}

fn calculate(args: &Args) -> Result<Report, ValidationError> {
    let (hand, board) = parse_hand_and_board(&args.hand, &args.board)?;
    // Check the stakes before spending time on the simulation.
    check_stakes(args.pot, args.bet)?;

    let sim = EquitySimulator::new(&hand, &board, args.opponents)?;
    let tally = match (args.batches, args.seed) {
        (Some(batches), seed) => run_batches(
            &sim,
            args.iterations,
            batches,
            seed.unwrap_or_else(rand::random),
        )?,
        (None, Some(seed)) => sim.run(&mut StdRng::seed_from_u64(seed), args.iterations)?,
        (None, None) => sim.run(&mut rng(), args.iterations)?,
    };
    let equity = tally.equity().ok_or(ValidationError::NoTrials)?;
    let bet = decide(equity, args.pot, args.bet)?;

    Ok(Report { equity, tally, bet })
}

fn print_report(report: &Report) {
    println!("Win equity: {:.2}%", report.equity * 100.0);
    match report.bet {
        Some(bet) => {
            println!("Pot odds: {:.2}%", bet.pot_odds * 100.0);
            match bet.decision {
                Decision::Call => println!("{} (+EV)", bet.decision),
                Decision::Fold => println!("{} (-EV)", bet.decision),
            }
        }
        None => println!("No bet to call - equity shown for reference."),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let report = match calculate(&args) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Input error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Unable to write report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report);
    }
    ExitCode::SUCCESS
}
