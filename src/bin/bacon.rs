//! Bacon-number query shell.
//!
//! Loads a credits file, computes shortest costar chains from the reference
//! actor, then answers actor-name queries read from stdin until a blank line.
//!
//! # Usage
//!
//! ```bash
//! # Interactive queries against a full cast list
//! bacon moviedata.txt --expected-actors 2835629 --expected-movies 811167
//!
//! # Measure from someone else
//! bacon moviedata.txt --reference "Hanks, Tom"
//!
//! # One JSON object per query, no prompts
//! bacon moviedata.txt --json
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sixdegrees::{BuildOptions, CostarGraph, Separation};

const PROMPT: &str = "Input the name for the actor in the format \"Bacon, Kevin (I)\". \
                      Press enter without providing a name to quit";

#[derive(Parser)]
#[command(name = "bacon")]
#[command(version = "0.1.0")]
#[command(about = "Six degrees of Kevin Bacon: shortest costar chains from a reference actor")]
struct Cli {
    /// Credits file: `<a>Name` and `<t>Title` lines
    credits: PathBuf,

    /// Actor all distances are measured from
    #[arg(long, default_value = BuildOptions::DEFAULT_REFERENCE_ACTOR)]
    reference: String,

    /// Capacity hint: expected number of distinct actors
    #[arg(long, default_value_t = BuildOptions::DEFAULT_EXPECTED_ACTORS)]
    expected_actors: usize,

    /// Capacity hint: expected number of distinct movies
    #[arg(long, default_value_t = BuildOptions::DEFAULT_EXPECTED_MOVIES)]
    expected_movies: usize,

    /// Answer with one JSON object per query instead of prose
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> sixdegrees::Result<()> {
    let options = BuildOptions::default()
        .with_reference(cli.reference.as_str())
        .with_expected_actors(cli.expected_actors)
        .with_expected_movies(cli.expected_movies);

    let graph = CostarGraph::from_path(&cli.credits, &options)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !cli.json {
            println!("{PROMPT}");
        }

        // EOF quits like a blank line.
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            break;
        }

        if cli.json {
            answer_json(&graph, &line)?;
        } else {
            println!();
            answer(&graph, &line)?;
            println!();
        }
    }

    if !cli.json {
        println!("Goodbye");
    }
    Ok(())
}

fn answer(graph: &CostarGraph, name: &str) -> sixdegrees::Result<()> {
    match graph.separation(name)? {
        Separation::NotFound => println!("\"{name}\" not found"),
        Separation::Unreachable => {
            println!("\"{name}\" is not connected to {}", graph.reference_actor());
        }
        Separation::Degrees(n) => {
            println!(
                "\"{name}\" is {n} steps away from {}. The path is:",
                graph.reference_actor(),
            );
            if let Some(chain) = graph.chain_to(name)? {
                println!("{chain}");
            }
        }
    }
    Ok(())
}

fn answer_json(graph: &CostarGraph, name: &str) -> sixdegrees::Result<()> {
    let output = match graph.separation(name)? {
        Separation::NotFound => serde_json::json!({
            "query": name,
            "status": "not_found",
        }),
        Separation::Unreachable => serde_json::json!({
            "query": name,
            "status": "unreachable",
            "reference": graph.reference_actor(),
        }),
        Separation::Degrees(n) => serde_json::json!({
            "query": name,
            "status": "reached",
            "degrees": n,
            "reference": graph.reference_actor(),
            "chain": graph.chain_to(name)?,
        }),
    };
    println!("{output}");
    Ok(())
}
