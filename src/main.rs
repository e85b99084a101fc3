#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging, GameState, HuntPlayer, InMemoryMatches, Match, MatchApi, PlayerId, Player,
    RandomPlayer, SalvoRequest, SideId,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Random,
    Hunt,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a match between two automated players and print the outcome as JSON.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5, help = "Shots per salvo")]
        shots: usize,
        #[arg(long, default_value_t = 100, help = "Give up after this many rounds")]
        max_rounds: usize,
        #[arg(long, value_enum, default_value_t = PlayerType::Hunt)]
        first: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Random)]
        second: PlayerType,
        #[arg(long, help = "Write the finished match as JSON to this file")]
        out: Option<PathBuf>,
    },
    /// Print both sides' summaries of a match saved with `simulate --out`.
    Inspect { file: PathBuf },
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType, shots: usize) -> Box<dyn Player> {
    match kind {
        PlayerType::Random => Box::new(RandomPlayer::new(shots)),
        PlayerType::Hunt => Box::new(HuntPlayer::new(shots)),
    }
}

#[cfg(feature = "std")]
fn seeded(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
struct Seat {
    player: PlayerId,
    side: SideId,
    brain: Box<dyn Player>,
    rng: SmallRng,
}

/// Give `seat` its move if it has one. Returns whether a salvo was accepted.
#[cfg(feature = "std")]
async fn take_turn(api: &InMemoryMatches, seat: &mut Seat) -> anyhow::Result<bool> {
    let view = api.summary(seat.player, seat.side).await?;
    let closing = view.state == GameState::Lost && view.salvoes.len() < view.opponent_salvoes.len();
    if view.state != GameState::YourTurn && !closing {
        return Ok(false);
    }
    let targets = seat.brain.select_salvo(&mut seat.rng, &view);
    if targets.is_empty() {
        return Ok(false);
    }
    let turn = api
        .submit_salvo(seat.player, seat.side, SalvoRequest::new(targets))
        .await?;
    log::debug!("side {} fired turn {}", seat.side, turn);
    Ok(true)
}

#[cfg(feature = "std")]
async fn simulate(
    seed: Option<u64>,
    shots: usize,
    max_rounds: usize,
    kinds: [PlayerType; 2],
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(s) = seed {
        log::info!("using fixed seed {} (match will be reproducible)", s);
    }
    let api = InMemoryMatches::new();

    let (match_id, first_side) = api.create_match(PlayerId(1)).await?;
    let second_side = api.join_match(match_id, PlayerId(2)).await?;
    let mut seats = [
        Seat {
            player: PlayerId(1),
            side: first_side,
            brain: make_player(kinds[0], shots),
            rng: seeded(seed, 0),
        },
        Seat {
            player: PlayerId(2),
            side: second_side,
            brain: make_player(kinds[1], shots),
            rng: seeded(seed, 1),
        },
    ];

    for seat in seats.iter_mut() {
        let ships = seat
            .brain
            .place_fleet(&mut seat.rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        api.place_fleet(seat.player, seat.side, ships).await?;
    }

    let mut rounds = 0;
    while rounds < max_rounds {
        let mut progressed = false;
        for seat in seats.iter_mut() {
            progressed |= take_turn(&api, seat).await?;
        }
        if !progressed {
            break;
        }
        rounds += 1;
    }

    let mut sides = Vec::new();
    for seat in &seats {
        let view = api.summary(seat.player, seat.side).await?;
        sides.push(json!({
            "side": seat.side,
            "player": seat.player,
            "state": view.state,
            "salvoes": view.salvoes.len(),
            "sunk": view.sunk.opponent,
        }));
    }
    let winner = sides
        .iter()
        .find(|s| s["state"] == json!(GameState::Won))
        .map(|s| s["player"].clone());

    let result = json!({
        "match": match_id,
        "rounds": rounds,
        "sides": sides,
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);

    if let Some(path) = out {
        let snapshot = api.snapshot(match_id).await?;
        let text = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

#[cfg(feature = "std")]
fn inspect(file: PathBuf) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
    let saved: Match = serde_json::from_str(&text).context("parsing saved match")?;
    let mut summaries = Vec::new();
    for side in saved.sides() {
        summaries.push(saved.summary(side.id())?);
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            seed,
            shots,
            max_rounds,
            first,
            second,
            out,
        } => simulate(seed, shots, max_rounds, [first, second], out).await,
        Commands::Inspect { file } => inspect(file),
    }
}
