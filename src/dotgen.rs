//! Random DOT graph generator.
//!
//! Command-line front end for [`GraphSketch`]: emits a seeded random graph
//! in DOT syntax to stdout or a file. Useful for exercising the dotdeck
//! preview with reproducible inputs.

use anyhow::Result;
use dotdeck::GraphSketch;
use std::env;

struct Config {
    node_min: usize,
    node_max: usize,
    edge_density: f64,
    undirected: bool,
    seed: Option<u64>,
    output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = GraphSketch::default();
        Config {
            node_min: defaults.node_min,
            node_max: defaults.node_max,
            edge_density: defaults.edge_density,
            undirected: false,
            seed: None,
            output_file: None,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-nodes" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-nodes requires at least one argument");
                }
                config.node_min = args[i].parse()?;
                // Check if there's a second number (range)
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    if let Ok(max) = args[i + 1].parse::<usize>() {
                        i += 1;
                        config.node_max = max;
                    } else {
                        config.node_max = config.node_min;
                    }
                } else {
                    config.node_max = config.node_min;
                }
            }
            "-density" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-density requires an argument");
                }
                config.edge_density = args[i].parse()?;
                if !(0.0..=1.0).contains(&config.edge_density) {
                    anyhow::bail!("-density must be between 0.0 and 1.0");
                }
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = Some(args[i].parse()?);
            }
            "-undirected" => {
                config.undirected = true;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("dotdeck Random Graph Generator");
    println!("Usage: dotdeck-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -nodes <N> [M]      Node count (default: 5 12)");
    println!("                      If two numbers provided, picks a random count in [N, M]");
    println!("  -density <F>        Edge probability per node pair, 0.0 to 1.0 (default: 0.25)");
    println!("  -seed <N>           Seed for reproducible output (default: random)");
    println!("  -undirected         Generate an undirected graph");
    println!("  -out <FILE>         Output file path (default: stdout)");
    println!("  -h, -help, --help   Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let sketch = GraphSketch {
        node_min: config.node_min,
        node_max: config.node_max,
        edge_density: config.edge_density,
        directed: !config.undirected,
        seed: config.seed.unwrap_or_else(rand::random),
    };

    let source = sketch.generate();

    match &config.output_file {
        Some(path) => {
            std::fs::write(path, &source)?;
            println!("Graph written to: {}", path);
        }
        None => {
            print!("{}", source);
        }
    }

    Ok(())
}
