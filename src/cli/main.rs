#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::{BufRead, BufReader};

use clap::Parser;
use otter_mcsat::{
    context::Context,
    dispatch::library::report::Report,
    structures::value::Value,
};

mod args;

use args::Args;

fn main() {
    let args = Args::parse();

    #[cfg(feature = "logging")]
    env_logger::Builder::new()
        .filter_level(args.level_filter())
        .parse_default_env()
        .init();

    let mut the_context = Context::from_config(args.config(), None);

    let parse_time = std::time::Instant::now();
    let reader: Box<dyn BufRead> = match &args.formula_file {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                println!("c Error opening {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    if let Err(e) = the_context.read_dimacs(reader) {
        println!("c Error loading DIMACS: {e:?}");
        std::process::exit(1);
    }
    eprintln!("c Parsed in {:.3}s", parse_time.elapsed().as_secs_f64());

    let solve_time = std::time::Instant::now();
    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Context error: {e:?}");
            std::process::exit(1);
        }
    };
    eprintln!("c Solved in {:.3}s", solve_time.elapsed().as_secs_f64());

    println!("s {report}");

    if args.model && report == Report::Satisfiable {
        print_model(&the_context);
    }

    if args.stats {
        print_stats(&the_context);
    }

    match report {
        Report::Satisfiable => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::TimeUp | Report::Unknown => std::process::exit(0),
    }
}

/// Prints the valuation, with variables named as in a DIMACS file as DIMACS literals.
fn print_model(context: &Context) {
    let mut literals = Vec::default();
    for (name, value) in context.valuation() {
        let dimacs_index = name
            .strip_prefix("var")
            .and_then(|index| index.parse::<isize>().ok());

        match (dimacs_index, value) {
            (Some(index), Some(Value::Bool(true))) => literals.push(index.to_string()),
            (Some(index), Some(Value::Bool(false))) => literals.push((-index).to_string()),
            (_, Some(value)) => println!("v {name}={value}"),
            (_, None) => println!("v {name}=?"),
        }
    }
    if !literals.is_empty() {
        println!("v {} 0", literals.join(" "));
    }
}

fn print_stats(context: &Context) {
    let counters = &context.counters;
    println!("c Variables: {}", counters.variables);
    println!("c Clauses: {}", counters.original_clauses);
    println!("c Learned clauses: {}", counters.learned_clauses);
    println!("c Decisions: {}", counters.decisions);
    println!("c Conflicts: {}", counters.conflicts);
    println!("c Clausal propagations: {}", counters.clausal_propagations);
    println!("c Semantic propagations: {}", counters.semantic_propagations);
    println!("c Semantic evaluations: {}", counters.semantic_evaluations);
    println!("c Iterations: {}", counters.iterations);
    println!("c Time: {:.3}s", counters.time.as_secs_f64());
}
