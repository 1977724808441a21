mod bench;
mod config;
mod generate;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bubble_core::{parse_tokens, BubbleSorter, PassPolicy, SortStats};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "bubble",
    version,
    about = "Timed bubble sort over random or supplied numbers"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random numbers, sort them and print both sequences
    Run {
        /// How many numbers to generate
        #[arg(short, long)]
        count: Option<usize>,

        /// Smallest value
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i64>,

        /// Largest value (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i64>,

        /// RNG seed for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pass policy (defaults to the config's `sort.early_exit`)
        #[arg(short, long)]
        policy: Option<CliPolicy>,

        /// Only print the elapsed time
        #[arg(short, long)]
        quiet: bool,
    },

    /// Sort the given values, or whitespace/comma separated values from stdin
    Sort {
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Parse values as floats (NaN is rejected)
        #[arg(short, long)]
        float: bool,

        /// Pass policy (defaults to the config's `sort.early_exit`)
        #[arg(short, long)]
        policy: Option<CliPolicy>,

        /// Print pass, comparison and swap counts
        #[arg(long)]
        stats: bool,
    },

    /// Compare bubble sort throughput against the standard library
    Bench {
        /// Input sizes (comma-separated)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// RNG seed for the generated inputs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the config path and the effective settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliPolicy {
    Full,
    EarlyExit,
}

impl From<CliPolicy> for PassPolicy {
    fn from(val: CliPolicy) -> Self {
        match val {
            CliPolicy::Full => PassPolicy::Full,
            CliPolicy::EarlyExit => PassPolicy::EarlyExit,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            count,
            min,
            max,
            seed,
            policy,
            quiet,
        } => {
            if let Some(count) = count {
                config.input.count = count;
            }
            if let Some(min) = min {
                config.input.min = min;
            }
            if let Some(max) = max {
                config.input.max = max;
            }
            if seed.is_some() {
                config.input.seed = seed;
            }
            config.input.validate()?;
            let policy = policy.map_or_else(|| config.sort.policy(), PassPolicy::from);
            cmd_run(&config, policy, quiet)
        }
        Commands::Sort {
            values,
            float,
            policy,
            stats,
        } => {
            let policy = policy.map_or_else(|| config.sort.policy(), PassPolicy::from);
            cmd_sort(values, float, policy, stats)
        }
        Commands::Bench { sizes, seed, json } => {
            if let Some(sizes) = sizes {
                config.bench.sizes = sizes;
            }
            config.bench.validate()?;
            cmd_bench(&config, seed, json)
        }
        Commands::Config => cmd_config(&config, cli.config.as_deref()),
    }
}

fn cmd_run(config: &Config, policy: PassPolicy, quiet: bool) -> Result<()> {
    let mut numbers = generate::random_numbers(&config.input);
    if !quiet {
        println!("Unsorted numbers:  {numbers:?}");
    }

    let stats = BubbleSorter::new(policy).sort_with_stats(&mut numbers);
    println!("{}", stats.elapsed_secs());

    if !quiet {
        println!("Sorted numbers:    {numbers:?}");
    }
    Ok(())
}

fn cmd_sort(values: Vec<String>, float: bool, policy: PassPolicy, show_stats: bool) -> Result<()> {
    let text = if values.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading values from stdin")?;
        buf
    } else {
        values.join(" ")
    };

    let sorter = BubbleSorter::new(policy);
    let stats = if float {
        let mut data: Vec<f64> = parse_tokens(&text)?;
        let stats = sorter.try_sort(&mut data).context("sorting input")?;
        println!("{}", stats.elapsed_secs());
        println!("{data:?}");
        stats
    } else {
        let mut data: Vec<i64> = parse_tokens(&text)?;
        let stats = sorter.sort_with_stats(&mut data);
        println!("{}", stats.elapsed_secs());
        println!("{data:?}");
        stats
    };

    if show_stats {
        print_stats(&stats, policy);
    }
    Ok(())
}

fn print_stats(stats: &SortStats, policy: PassPolicy) {
    println!(
        "len={} policy={} passes={} comparisons={} swaps={}",
        stats.len, policy, stats.passes, stats.comparisons, stats.swaps
    );
}

fn cmd_bench(config: &Config, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cases = generate::bench_cases(&config.bench.sizes, &mut rng);
    let full = bench::run(&config.bench, &cases);

    if json {
        println!("{}", serde_json::to_string(&full)?);
    } else {
        bench::print_table(&full, cases.len());
    }
    Ok(())
}

fn cmd_config(config: &Config, explicit: Option<&std::path::Path>) -> Result<()> {
    println!("Config: {}", config::show_config_path(explicit));
    println!();
    print!(
        "{}",
        toml::to_string_pretty(config).context("serializing config")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_args(args: &[&str]) -> (Vec<String>, bool, bool) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Sort {
                values,
                float,
                stats,
                ..
            } => (values, float, stats),
            _ => panic!("expected the sort command"),
        }
    }

    #[test]
    fn test_sort_accepts_negative_values() {
        let (values, float, _) = sort_args(&["bubble", "sort", "3", "-1", "-2.5"]);
        assert_eq!(values, ["3", "-1", "-2.5"]);
        assert!(!float);
    }

    #[test]
    fn test_sort_flags_after_values() {
        let (values, float, stats) =
            sort_args(&["bubble", "sort", "3", "-1", "--float", "--stats"]);
        assert_eq!(values, ["3", "-1"]);
        assert!(float);
        assert!(stats);
    }

    #[test]
    fn test_sort_policy_after_values() {
        let cli = Cli::try_parse_from(["bubble", "sort", "2", "1", "--policy", "early-exit"]).unwrap();
        match cli.command {
            Commands::Sort { values, policy, .. } => {
                assert_eq!(values, ["2", "1"]);
                assert!(matches!(policy, Some(CliPolicy::EarlyExit)));
            }
            _ => panic!("expected the sort command"),
        }
    }

    #[test]
    fn test_sort_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["bubble", "sort", "1", "--bogus"]).is_err());
    }
}
