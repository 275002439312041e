use sea_battle::{
    init_logging, ui, AutomatedPlayer, GameEngine, GameState, HumanPlayer, Side, NUM_SHIPS,
};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let computer = AutomatedPlayer::new(SmallRng::from_rng(&mut rng));
            let mut engine = GameEngine::with_random_boards(
                &mut rng,
                Box::new(HumanPlayer::stdio()),
                Box::new(computer),
            );
            println!("{}", ui::greeting());
            run(&mut engine, false)
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let user = AutomatedPlayer::new(SmallRng::from_rng(&mut rng));
            let computer = AutomatedPlayer::new(SmallRng::from_rng(&mut rng));
            let mut engine =
                GameEngine::with_random_boards(&mut rng, Box::new(user), Box::new(computer));
            run(&mut engine, true)
        }
    }
}

fn run(engine: &mut GameEngine, narrate: bool) -> anyhow::Result<()> {
    while let GameState::Turn(_) = engine.state() {
        println!("{}", ui::render_boards(engine));
        println!("{}", ui::status_line(engine.state()));
        let report = engine.step().map_err(|e| anyhow!(e))?;
        if narrate {
            println!(
                "{:?} fires at {} -> {:?} ({} refused)",
                report.shooter, report.target, report.outcome, report.rejected
            );
        }
    }
    println!("{}", ui::render_boards(engine));
    println!("{}", "-".repeat(20));
    println!("{}", ui::status_line(engine.state()));
    if let Some(winner) = engine.winner() {
        println!(
            "Shots fired: user {}, computer {}; {:?} sank all {} ships.",
            engine.shots_fired(Side::User),
            engine.shots_fired(Side::Computer),
            winner,
            NUM_SHIPS
        );
    }
    Ok(())
}
