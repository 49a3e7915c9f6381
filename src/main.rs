use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use connect_four_search::ai::{compare_pruning, Algorithm, MAX_DEPTH};
use connect_four_search::config::AppConfig;
use connect_four_search::game::{Board, Side};
use connect_four_search::session::play_match;

/// Search Connect Four positions and benchmark pruning.
#[derive(Parser)]
#[command(name = "c4-search", about = "Connect Four adversarial search engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "c4-search.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a column for one position
    Analyze {
        /// Board rows top to bottom ('.', 'X', 'O'; rows split by '/' or newlines), or @FILE
        #[arg(long)]
        board: String,

        /// Override search depth
        #[arg(long)]
        depth: Option<u32>,

        /// Override algorithm: minimax, alpha-beta, expectiminimax, expectiminimax-pruned
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// Override side to search for: a or b
        #[arg(long)]
        side: Option<Side>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare unpruned and pruned search at every depth up to --max-depth
    Compare {
        /// Board rows or @FILE, as for analyze
        #[arg(long)]
        board: String,

        #[arg(long, default_value_t = 5)]
        max_depth: u32,

        /// Compare the expectiminimax pair instead of minimax/alpha-beta
        #[arg(long)]
        stochastic: bool,

        #[arg(long)]
        side: Option<Side>,
    },

    /// Play the engine against a random opponent
    Play {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Seed for the opponent and for drift
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        depth: Option<u32>,

        #[arg(long)]
        algorithm: Option<Algorithm>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            board,
            depth,
            algorithm,
            side,
            json,
        } => {
            let mut config = load_config(&cli.config)?;
            if let Some(depth) = depth {
                config.search.depth = depth;
            }
            if let Some(algorithm) = algorithm {
                config.search.algorithm = algorithm;
            }
            if let Some(side) = side {
                config.search.side = side;
            }
            config.validate().context("invalid search settings")?;

            let board = read_board(&board)?;
            let report = config.search.run(&board);

            if json {
                let out = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{out}");
            } else {
                print!("{board}");
                println!("Algorithm:     {}", report.algorithm);
                println!("Depth:         {}", report.depth);
                println!("Side:          {}", config.search.side);
                match report.chosen_move {
                    Some(col) => println!("Chosen column: {col}"),
                    None => println!("Chosen column: none (board is full)"),
                }
                println!("Score:         {}", report.score);
                println!("Nodes visited: {}", report.nodes_visited);
                println!("Elapsed:       {:.3} ms", report.elapsed.as_secs_f64() * 1000.0);
            }
            Ok(())
        }
        Command::Compare {
            board,
            max_depth,
            stochastic,
            side,
        } => {
            if max_depth == 0 || max_depth > MAX_DEPTH {
                bail!("--max-depth must be in 1..={MAX_DEPTH}, got {max_depth}");
            }
            let config = load_config(&cli.config)?;
            let side = side.unwrap_or(config.search.side);
            let board = read_board(&board)?;

            print!("{board}");
            println!(
                "{:>5}  {:>12}  {:>12}  {:>9}  {:>8}  {:>5}",
                "depth", "unpruned", "pruned", "saved", "speedup", "agree"
            );
            for depth in 1..=max_depth {
                let cmp = compare_pruning(&board, depth, side, stochastic);
                println!(
                    "{:>5}  {:>12}  {:>12}  {:>8.1}%  {:>7.2}x  {:>5}",
                    depth,
                    cmp.unpruned.nodes_visited,
                    cmp.pruned.nodes_visited,
                    cmp.node_reduction(),
                    cmp.speedup(),
                    if cmp.agrees() { "yes" } else { "NO" }
                );
            }
            Ok(())
        }
        Command::Play {
            games,
            seed,
            depth,
            algorithm,
        } => {
            let mut config = load_config(&cli.config)?;
            if let Some(games) = games {
                config.session.games = games;
            }
            if seed.is_some() {
                config.session.seed = seed;
            }
            if let Some(depth) = depth {
                config.search.depth = depth;
            }
            if let Some(algorithm) = algorithm {
                config.search.algorithm = algorithm;
            }
            config.validate().context("invalid match settings")?;

            let stats = play_match(config.search, &config.session).context("playing match")?;

            println!(
                "{} vs Random, {} games",
                config.search.algorithm,
                stats.games()
            );
            println!(
                "Engine wins: {}  Random wins: {}  Ties: {}  Draws: {}",
                stats.engine_wins(),
                stats.opponent_wins(),
                stats.ties(),
                stats.draws()
            );
            println!("Win rate:            {:.1}%", stats.win_rate() * 100.0);
            println!("Avg game length:     {:.1}", stats.average_game_length());
            println!("Drifted engine moves: {}", stats.drifted_moves());
            println!(
                "Engine nodes:        {} ({:.1} per move)",
                stats.engine_nodes(),
                stats.average_nodes_per_move()
            );
            Ok(())
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load_or_default(path)
        .with_context(|| format!("loading config from {}", path.display()))
}

/// Parse a board given inline or, with a leading '@', from a file.
fn read_board(arg: &str) -> Result<Board> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading board from {path}"))?,
        None => arg.to_string(),
    };
    text.trim()
        .parse::<Board>()
        .with_context(|| format!("parsing board {:?}", text.trim()))
}
