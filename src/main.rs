//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or on the command line, or let the minimax solver
//! break codes for you.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_code, print_test_all_statistics, run_assist, run_benchmark, run_simple,
        run_test_all, solve_code,
    },
    config::{DEFAULT_MAX_GUESSES, DEFAULT_NUM_CHOICES, DEFAULT_SECRET_LENGTH, GameConfig},
    core::{Code, CodeSpace},
    game::Game,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind game and minimax code-breaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of symbols; codes use 1..=max
    #[arg(short, long, global = true, default_value_t = DEFAULT_NUM_CHOICES)]
    max: u8,

    /// Code length
    #[arg(short, long, global = true, default_value_t = DEFAULT_SECRET_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Explicit secret, e.g. 2,1,2,2 (random if omitted)
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Strategy: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Seed for random secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Solver suggests guesses for a game played elsewhere
    Assist,

    /// Let the solver crack a secret
    Solve {
        /// Show candidate counts and worst cases
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the code space
    Analyze {
        /// Code to analyze, e.g. 1122 or "1 1 2 2"
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on every possible secret
    TestAll,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.max, cli.length, cli.guesses)?;
    let secret = cli
        .secret
        .as_deref()
        .map(|text| Code::parse(text, &config))
        .transpose()
        .context("invalid --secret")?;
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, secret, cli.seed),
        Commands::Simple => run_simple_command(config, secret, cli.seed),
        Commands::Assist => run_assist_command(strategy, config),
        Commands::Solve { verbose } => {
            run_solve_command(strategy, config, secret, cli.seed, verbose)
        }
        Commands::Analyze { code } => run_analyze_command(config, &code),
        Commands::Benchmark { count } => run_benchmark_command(strategy, config, count, cli.seed),
        Commands::TestAll => run_test_all_command(strategy, config),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn run_solve_command(
    strategy: StrategyType,
    config: GameConfig,
    secret: Option<Code>,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let secret = secret.unwrap_or_else(|| Code::random(&config, &mut rng_from(seed)));
    let mut solver = Solver::new(strategy, config, None)?;

    let result = solve_code(&mut solver, secret)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: GameConfig, code: &str) -> Result<()> {
    let probe = Code::parse(code, &config)?;
    let space = CodeSpace::new(&config)?;

    let result = analyze_code(&space, &probe);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    strategy: StrategyType,
    config: GameConfig,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random secrets with the {} strategy...",
        strategy.name()
    );

    let result = run_benchmark(&strategy, config, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(strategy: StrategyType, config: GameConfig) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSymbols 1-{}, length {}, {} guesses allowed",
        config.num_choices, config.secret_length, config.max_guesses
    );
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(strategy, config, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_simple_command(config: GameConfig, secret: Option<Code>, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(config, secret, &mut rng_from(seed))?;
    run_simple(&mut game, io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

fn run_assist_command(strategy: StrategyType, config: GameConfig) -> Result<()> {
    let mut solver = Solver::new(strategy, config, None)?;
    run_assist(&mut solver, io::stdin().lock(), &mut io::stdout())
}

fn run_play_command(config: GameConfig, secret: Option<Code>, seed: Option<u64>) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(config, secret, rng_from(seed))?;
    run_tui(app)
}
