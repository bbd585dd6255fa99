use clap::Parser;
use sokobot::levels::Levels;
use sokobot::solver::{self, SolveOutcome, Solver, SolverOpts};
use std::time::{Duration, Instant};

struct LevelStats {
    solved: bool,
    steps: usize,
    states_explored: usize,
    elapsed_ms: u128,
}

fn solve_level(levels: &Levels, level_num: usize, time_budget_ms: u64) -> LevelStats {
    let level = levels.get(level_num - 1).expect("level index already validated");
    let board = sokobot::Board::new(level.width, level.height, &level.map_refs())
        .unwrap_or_else(|e| panic!("level {} has an invalid map: {}", level_num, e));
    let (pusher, crates) = solver::parse_items(&board, &level.items_refs())
        .unwrap_or_else(|e| panic!("level {} has invalid items: {}", level_num, e));

    let solver = Solver::new(board);
    let opts = SolverOpts {
        time_budget: Some(Duration::from_millis(time_budget_ms)),
    };

    let start = Instant::now();
    let (outcome, states_explored) = solver.solve_with_stats(pusher, crates, opts);
    let elapsed_ms = start.elapsed().as_millis();

    let (solved_char, solution_len, solved) = match &outcome {
        SolveOutcome::Solved(path) => ('Y', path.len(), true),
        SolveOutcome::NoSolution => ('X', 0, false),
        SolveOutcome::TimedOut => ('N', 0, false),
    };

    println!(
        "level: {:<3}  solved: {}  steps: {:<5}  states: {:<12}  elapsed: {} ms",
        level_num, solved_char, solution_len, states_explored, elapsed_ms
    );

    LevelStats {
        solved,
        steps: solution_len,
        states_explored,
        elapsed_ms,
    }
}

#[derive(Parser)]
#[command(name = "sokobot")]
#[command(about = "A Sokoban solver", long_about = None)]
struct Args {
    /// Path to the levels file (XSB format)
    #[arg(value_name = "FILE")]
    levels_file: String,

    /// Level number to solve (1-indexed), or start of range
    #[arg(value_name = "LEVEL")]
    level_start: usize,

    /// Optional end of level range (inclusive, 1-indexed)
    #[arg(value_name = "LEVEL_END")]
    level_end: Option<usize>,

    /// Wall-clock budget per level, in milliseconds
    #[arg(short = 't', long, default_value = "15000")]
    time_budget_ms: u64,
}

fn main() {
    let args = Args::parse();

    let levels = match Levels::from_file(&args.levels_file) {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("Error loading levels: {}", e);
            std::process::exit(1);
        }
    };

    let level_end = args.level_end.unwrap_or(args.level_start);

    if args.level_start == 0 {
        eprintln!("Error: level numbers must be at least 1");
        std::process::exit(1);
    }
    if level_end < args.level_start {
        eprintln!("Error: level end must be >= level start");
        std::process::exit(1);
    }
    if level_end > levels.len() {
        eprintln!(
            "Error: level {} not found (file contains {} levels)",
            level_end,
            levels.len()
        );
        std::process::exit(1);
    }

    let num_levels = level_end - args.level_start + 1;
    let mut total_solved = 0;
    let mut total_steps = 0;
    let mut total_states = 0;
    let mut total_time_ms = 0;

    for level_num in args.level_start..=level_end {
        let stats = solve_level(&levels, level_num, args.time_budget_ms);
        if stats.solved {
            total_solved += 1;
        }
        total_steps += stats.steps;
        total_states += stats.states_explored;
        total_time_ms += stats.elapsed_ms;
    }

    if num_levels > 1 {
        println!("---");
        println!(
            "solved: {:>3}/{:<3}        steps: {:<5}  states: {:<12}  elapsed: {} ms",
            total_solved, num_levels, total_steps, total_states, total_time_ms
        );
    }
}
