//! Simulator CLI - fast in-memory games against the rules engine.
//!
//! Runs complete games with scripted seat policies, useful for
//! exercising the engine end to end and for eyeballing score
//! distributions across many deals.

mod simulator;

use clap::Parser;
use simulator::{GameResult, Simulator, Strategy};
use std::time::Instant;
use tracing::{info, warn};

use tricks_engine::domain::rules::max_number_of_rounds;

#[derive(Parser)]
#[command(name = "tricks-simulator")]
#[command(about = "Fast in-memory simulator for the tricks rules engine")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of players at the table
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Rounds per game (round 1 of the countdown is always played last)
    #[arg(short, long, default_value = "7")]
    rounds: u8,

    /// Game seed for deterministic dealing; omit for a random seed per game
    #[arg(long)]
    seed: Option<u64>,

    /// Decision policy for every seat
    #[arg(long, value_enum, default_value = "random")]
    strategy: Strategy,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print one JSON line per completed game
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let max_rounds = max_number_of_rounds(args.players);
    if args.rounds == 0 || args.rounds > max_rounds {
        return Err(format!(
            "rounds must be between 1 and {} for {} players",
            max_rounds, args.players
        )
        .into());
    }

    info!(
        games = args.games,
        players = args.players,
        rounds = args.rounds,
        strategy = ?args.strategy,
        "starting simulator"
    );

    let simulator = Simulator::new(args.players, args.rounds, args.strategy);
    let mut rng = rand::rng();

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let seed = args.seed.unwrap_or_else(rand::random);
        match simulator.run(game_num, seed, &mut rng) {
            Ok(result) => {
                if args.json {
                    println!("{}", serde_json::to_string(&result)?);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("game {} failed: {}", game_num, e);
            }
        }
    }

    print_summary(&results, errors, start.elapsed(), args.games, args.players);
    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    players: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let mut wins = vec![0u32; players];
    let mut total_scores = vec![0i64; players];
    let mut max_scores = vec![i32::MIN; players];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += score as i64;
            max_scores[seat] = max_scores[seat].max(score);
        }
        for &w in &result.winners {
            wins[w as usize] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..players {
        let avg = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, max={}, wins={} ({:.1}%)",
            seat, avg, max_scores[seat], wins[seat], win_rate
        );
    }
}
