//! Scale-free network demo: generates a random graph by preferential
//! attachment, prints its degree histogram, then greedily covers it.

use std::env;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use u_sample::graph::{degree_frequencies, greedy_cover, scale_free_network};

const USAGE: &str = "\
usage: scale_free [-n <vertices>] [-k <edges-per-vertex>] [--seed <seed>]

  -n <vertices>           number of vertices in the graph (default 1000)
  -k <edges-per-vertex>   minimum number of edges per vertex (default 5)
  --seed <seed>           seed the generator for a reproducible graph";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    n: u64,
    k: u64,
    seed: Option<u64>,
    show_help: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
    let mut options = Options {
        n: 1000,
        k: 5,
        seed: None,
        show_help: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => options.n = parse_value("-n", args.next())?,
            "-k" => options.k = parse_value("-k", args.next())?,
            "--seed" => options.seed = Some(parse_value("--seed", args.next())?),
            "-h" | "--help" => options.show_help = true,
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(options)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    if options.show_help {
        println!("{USAGE}");
        return;
    }

    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    println!("n = {}, k = {}", options.n, options.k);
    println!();

    let edges = match scale_free_network(options.n, options.k, &mut rng) {
        Ok(edges) => edges,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    println!("+--------+-----------+");
    println!("| degree | frequency |");
    println!("+--------+-----------+");
    for (degree, count) in degree_frequencies(options.n, &edges) {
        println!("| {degree:>6} | {count:>9} |");
    }
    println!("+--------+-----------+");

    let cover = greedy_cover(&edges);
    println!();
    println!("{} vertices cover the entire graph:", cover.len());
    for entry in &cover {
        println!(
            "  vertex #{} covers {} endpoints",
            entry.vertex, entry.covered
        );
    }
}
