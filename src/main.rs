mod benchmark;

use benchmark::run_benchmark;
use clap::{Parser, ValueEnum};
use knapsack::{io, solve_bi, solve_tri, Instance, OrderName};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
struct CommandArgs {
    #[arg(short, long, value_name = "INSTANCE_FILE", value_hint = clap::ValueHint::FilePath)]
    input_file: PathBuf,

    #[arg(short, long, value_name = "OUTPUT_FILE", default_value = "out.json")]
    output_file: PathBuf,

    #[arg()]
    /// Action to perform
    action: KnapsackAction,

    /// Item order used by the tri-objective A* search; ignored for
    /// bi-objective instances.
    #[arg(short = 'd', long, default_value = "topological")]
    order: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KnapsackAction {
    Run,
    Benchmark,
}

fn parse_instance(args: &CommandArgs) -> Instance {
    let file = File::open(&args.input_file).unwrap_or_else(|e| panic!("failed to open {}: {e}", args.input_file.display()));
    io::read_instance(BufReader::new(file)).unwrap_or_else(|e| panic!("malformed instance: {e}"))
}

fn solve(instance: &Instance, order: OrderName) -> serde_json::Value {
    let solutions = match instance.nb_objectives() {
        2 => solve_bi(instance),
        3 => solve_tri(instance, order),
        p => panic!("unsupported objective count {p}: only 2 or 3 are supported"),
    }
    .unwrap_or_else(|e| panic!("solver failed: {e}"));
    serde_json::to_value(&solutions).unwrap()
}

fn main() {
    env_logger::init();
    let args = CommandArgs::parse();
    let order = OrderName::from_str(&args.order).unwrap_or_else(|e| panic!("{e}"));
    let instance = parse_instance(&args);

    let output = match args.action {
        KnapsackAction::Run => solve(&instance, order),
        KnapsackAction::Benchmark => {
            let result = run_benchmark(&instance, order).unwrap();
            serde_json::to_value(&result).unwrap()
        }
    };

    let file = File::create(&args.output_file).ok();
    match file {
        Some(file) => serde_json::to_writer(file, &output).unwrap(),
        None => {
            println!("Failed to write output to \"{}\":\n {}", args.output_file.display(), output)
        }
    }
}
