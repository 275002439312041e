use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{generate_board, AutomatedPlayer, GameEngine, Side, GRID_SIZE};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    ships_lost: usize,
}

#[derive(Serialize)]
struct Summary {
    winner: Side,
    turns: usize,
    user: SideSummary,
    computer: SideSummary,
}

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let user_board = generate_board(&mut rng1, GRID_SIZE);
    let mut computer_board = generate_board(&mut rng2, GRID_SIZE);
    computer_board.set_concealed(true);

    let mut engine = GameEngine::new(
        user_board,
        Box::new(AutomatedPlayer::new(rng1)),
        computer_board,
        Box::new(AutomatedPlayer::new(rng2)),
    );

    let mut turns = 0usize;
    let winner = loop {
        let report = engine.step().map_err(|e| anyhow::anyhow!(e))?;
        turns += 1;
        if let Some(winner) = engine.winner() {
            log::debug!("final shot {:?}", report);
            break winner;
        }
    };

    let side = |s: Side| SideSummary {
        shots: engine.shots_fired(s),
        ships_lost: engine.board(s).sunk_count(),
    };
    let summary = Summary {
        winner,
        turns,
        user: side(Side::User),
        computer: side(Side::Computer),
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
