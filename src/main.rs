//! Search-Labs: graph search and game-tree search demos.
//!
//! ## Usage
//!
//! - `search-labs grid --start 1,1 --goal 8,8 --algorithm astar` - Plan a path across a walled room
//! - `search-labs kalah --player0 alphabeta --player1 random` - Play one Kalah match

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use search_labs::alphabeta::AlphaBeta;
use search_labs::astar::AStarSearch;
use search_labs::constants::{DEFAULT_GAME_DEPTH, PITS_PER_PLAYER, SEEDS};
use search_labs::game::{GameEngine, RandomPlayer};
use search_labs::grid::{Grid, GridPos};
use search_labs::kalah::{Kalah, Outcome};
use search_labs::minimax::Minimax;
use search_labs::play::play_match;
use search_labs::problem::SearchProblem;
use search_labs::random_walk::RandomSearch;
use search_labs::search::{SearchStrategy, plan};
use search_labs::uninformed::{BreadthFirstSearch, DepthFirstSearch};

/// Search-Labs: classic search algorithms on grids and Kalah
#[derive(Parser)]
#[command(name = "search-labs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path on a grid surrounded by walls
    Grid {
        #[arg(long, default_value_t = 10)]
        width: i32,
        #[arg(long, default_value_t = 10)]
        height: i32,
        /// Start cell as `x,y`
        #[arg(long, value_parser = parse_pos, default_value = "1,1")]
        start: GridPos,
        /// Goal cell as `x,y`
        #[arg(long, value_parser = parse_pos, default_value = "8,8")]
        goal: GridPos,
        #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
        algorithm: Algorithm,
        /// Seed for the random walk
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play one Kalah match between two engines
    Kalah {
        #[arg(long, value_enum, default_value_t = Engine::Alphabeta)]
        player0: Engine,
        #[arg(long, value_enum, default_value_t = Engine::Random)]
        player1: Engine,
        /// Plies searched below each candidate move
        #[arg(long, default_value_t = DEFAULT_GAME_DEPTH)]
        depth: usize,
        #[arg(long, default_value_t = PITS_PER_PLAYER)]
        pits: usize,
        #[arg(long, default_value_t = SEEDS)]
        seeds: u32,
        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Random,
    Astar,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Engine {
    Minimax,
    Alphabeta,
    Random,
}

fn parse_pos(s: &str) -> Result<GridPos, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: i32 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: i32 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y).into())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level `{level}`"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Grid {
            width,
            height,
            start,
            goal,
            algorithm,
            seed,
        } => run_grid(width, height, start, goal, algorithm, seed),
        Commands::Kalah {
            player0,
            player1,
            depth,
            pits,
            seeds,
            seed,
        } => run_kalah(player0, player1, depth, pits, seeds, seed),
    }
}

fn run_grid(
    width: i32,
    height: i32,
    start: GridPos,
    goal: GridPos,
    algorithm: Algorithm,
    seed: Option<u64>,
) -> Result<()> {
    if width < 3 || height < 3 {
        bail!("grid must be at least 3x3, got {width}x{height}");
    }
    let mut grid = Grid::with_border(width, height);
    for (label, pos) in [("start", start), ("goal", goal)] {
        if !grid.is_valid_position(&pos) {
            bail!("{label} {pos} is outside the grid or on a wall");
        }
    }
    grid.start = Some(start);
    grid.goal = Some(goal);

    let mut strategy: Box<dyn SearchStrategy<GridPos>> = match algorithm {
        Algorithm::Dfs => Box::new(DepthFirstSearch::<GridPos>::new()),
        Algorithm::Bfs => Box::new(BreadthFirstSearch::<GridPos>::new()),
        Algorithm::Astar => Box::new(AStarSearch::<GridPos>::new()),
        Algorithm::Random => Box::new(match seed {
            Some(seed) => RandomSearch::<GridPos>::with_seed(seed),
            None => RandomSearch::<GridPos>::new(),
        }),
    };

    let problem = SearchProblem::new(&grid, start, goal);
    let report = plan(strategy.as_mut(), &problem);

    print!("{}", grid.render_path(&report.path));
    if report.found() {
        println!("{}: {} steps, cost {:.1}", strategy.name(), report.steps(), report.cost);
    } else {
        println!("{}: no path from {start} to {goal}", strategy.name());
    }
    println!(
        "expanded {}, frontier {}, explored {}",
        report.expanded, report.frontier, report.explored
    );
    Ok(())
}

fn make_engine(engine: Engine, depth: usize, seed: Option<u64>) -> Box<dyn GameEngine<Kalah>> {
    match engine {
        Engine::Minimax => Box::new(Minimax::new(Some(depth))),
        Engine::Alphabeta => Box::new(AlphaBeta::new(Some(depth))),
        Engine::Random => Box::new(match seed {
            Some(seed) => RandomPlayer::with_seed(seed),
            None => RandomPlayer::new(),
        }),
    }
}

fn run_kalah(
    player0: Engine,
    player1: Engine,
    depth: usize,
    pits: usize,
    seeds: u32,
    seed: Option<u64>,
) -> Result<()> {
    if pits == 0 {
        bail!("need at least one pit per player");
    }
    let mut p0 = make_engine(player0, depth, seed);
    // Player 1 draws from the next seed
    let mut p1 = make_engine(player1, depth, seed.map(|s| s.wrapping_add(1)));
    info!(player0 = p0.name(), player1 = p1.name(), depth, pits, seeds, "starting match");

    let initial = Kalah::with_config(pits, seeds);
    println!("{initial}");
    let record = play_match(p0.as_mut(), p1.as_mut(), initial);

    for (i, turn) in record.turns.iter().enumerate() {
        if let Some(pit) = turn.decision.best_move {
            println!(
                "{:>3}. {} sows pit {pit} (expanded {}, pruned {})",
                i + 1,
                turn.player,
                turn.decision.expanded,
                turn.decision.pruned
            );
        }
    }
    println!();
    println!("{}", record.final_state);

    match record.final_state.outcome() {
        Some(Outcome::Winner(player)) => println!("{player} wins, score {}", record.final_score()),
        Some(Outcome::Tie) => println!("tie"),
        None => println!("stopped without a result, score {}", record.final_score()),
    }
    Ok(())
}
