use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use qsel_solver::{
    knapsack::{
        generate_instance, max_value, request_items, solve_request, verify_solution_data, Track,
    },
    limits::check_limits,
    recommend::recommend,
    validate::validate_request,
};
use qsel_structs::{
    api::RecommendReq,
    config::SolverConfig,
    core::{QuizBank, SolutionData},
};
use qsel_utils::{jsonify_pretty, load_json};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("qsel")
        .about("Selects the quiz questions worth the most points within a time budget")
        .arg_required_else_help(true)
        .arg(
            arg!(--config [CONFIG] "Solver config json string or path to json file")
                .global(true)
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(-v --verbose "Log solver progress to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves a knapsack request")
                .arg(
                    arg!(<REQUEST> "Request json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("recommend")
                .about("Recommends questions from a quiz bank")
                .arg(
                    arg!(<BANK> "Quiz bank json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<QUIZ_ID> "Id of the quiz").value_parser(clap::value_parser!(String)))
                .arg(arg!(<MINUTES> "Minutes available").value_parser(clap::value_parser!(u32))),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against its request")
                .arg(
                    arg!(<REQUEST> "Request json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--optimal "Also require the solution to reach the optimal value")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random request")
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(<BUDGET_PERCENT> "Capacity as a percentage of the total item weight")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random generator")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches.get_one::<String>("config"))?;
    debug!(?config, "loaded config");

    match matches.subcommand() {
        Some(("solve", sub_m)) => solve(&config, required::<String>(sub_m, "REQUEST")?),
        Some(("recommend", sub_m)) => recommend_questions(
            &config,
            required::<String>(sub_m, "BANK")?,
            required::<String>(sub_m, "QUIZ_ID")?.clone(),
            *required::<u32>(sub_m, "MINUTES")?,
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            &config,
            required::<String>(sub_m, "REQUEST")?,
            required::<String>(sub_m, "SOLUTION")?,
            sub_m.get_flag("optimal"),
        ),
        Some(("generate", sub_m)) => generate(
            *required::<usize>(sub_m, "NUM_ITEMS")?,
            *required::<u32>(sub_m, "BUDGET_PERCENT")?,
            *required::<u64>(sub_m, "seed")?,
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing argument '{}'", id))
}

fn load_config(config: Option<&String>) -> Result<SolverConfig> {
    match config {
        Some(config) => load_json::<SolverConfig>(config),
        None => Ok(SolverConfig::default()),
    }
}

pub fn solve(config: &SolverConfig, request: &str) -> Result<()> {
    let doc = load_json::<Value>(request)?;
    let request = validate_request(&doc, config)?;
    check_limits(request.items.len(), request.capacity, config)?;
    let solution = solve_request(&request);
    println!("{}", jsonify_pretty(&solution)?);
    Ok(())
}

pub fn recommend_questions(
    config: &SolverConfig,
    bank: &str,
    quiz_id: String,
    minutes: u32,
) -> Result<()> {
    let bank = load_json::<QuizBank>(bank)?;
    let resp = recommend(&bank, &RecommendReq { quiz_id, minutes }, config)?;
    println!("{}", jsonify_pretty(&resp)?);
    Ok(())
}

pub fn verify_solution(
    config: &SolverConfig,
    request: &str,
    solution: &str,
    optimal: bool,
) -> Result<()> {
    let doc = load_json::<Value>(request)?;
    let request = validate_request(&doc, config)?;
    let solution = load_json::<SolutionData>(solution)?;
    verify_solution_data(&request, &solution)?;

    if optimal {
        check_limits(request.items.len(), request.capacity, config)?;
        let best = max_value(&request_items(&request), request.capacity);
        if solution.total_value < best {
            return Err(anyhow!(
                "Solution is feasible but not optimal. Value: '{}', Optimal: '{}'",
                solution.total_value,
                best
            ));
        }
    }
    println!("Solution is valid");
    Ok(())
}

pub fn generate(num_items: usize, budget_percent: u32, seed: u64) -> Result<()> {
    let track = Track {
        num_items,
        budget_percent,
    };
    let request = generate_instance(&expand_seed(seed), &track);
    println!("{}", jsonify_pretty(&request)?);
    Ok(())
}

fn expand_seed(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for chunk in bytes.chunks_mut(8) {
        chunk.copy_from_slice(&seed.to_le_bytes());
    }
    bytes
}
