use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rangemin::RangeMinTree;

#[derive(Parser, Debug)]
#[command(
    name = "rangemin",
    about = "Drive a range-add / range-min interval tree from command scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a script of commands from a file.
    Replay {
        /// Script file: one command per line, `add <value> <left> <right>`
        /// or `min <left> <right>`; blank lines and `#` comments ignored.
        script: PathBuf,
        /// Initial capacity hint (rounded up to a power of two).
        #[arg(long, default_value_t = 0)]
        size: i64,
        /// Baseline value applied to every index.
        #[arg(long, default_value_t = 0)]
        baseline: i64,
    },
    /// Read commands from standard input, one per line.
    Stdin {
        /// Initial capacity hint (rounded up to a power of two).
        #[arg(long, default_value_t = 0)]
        size: i64,
        /// Baseline value applied to every index.
        #[arg(long, default_value_t = 0)]
        baseline: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            size,
            baseline,
        } => {
            let reader = BufReader::new(File::open(&script).with_context(|| {
                format!("failed to open script {}", script.display())
            })?);
            run_script(reader, size, baseline)
        }
        Commands::Stdin { size, baseline } => run_script(io::stdin().lock(), size, baseline),
    }
}

fn run_script<R: BufRead>(reader: R, size: i64, baseline: i64) -> Result<()> {
    let mut tree = RangeMinTree::new(size, baseline).context("failed to construct tree")?;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        apply_command(&mut tree, line).with_context(|| format!("line {}: `{}`", idx + 1, line))?;
    }

    Ok(())
}

fn apply_command(tree: &mut RangeMinTree, line: &str) -> Result<()> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        ["add", value, left, right] => {
            let (value, left, right) = (parse(value)?, parse(left)?, parse(right)?);
            // The update path leaves edge ordering to its caller.
            if left > right {
                bail!("add range [{left}, {right}] is inverted");
            }
            tree.update(value, left, right)?;
        }
        ["min", left, right] => {
            let (left, right) = (parse(left)?, parse(right)?);
            let lowest = tree.min(left, right)?;
            println!("min [{left}, {right}]\t{lowest}");
        }
        _ => bail!("expected `add <value> <left> <right>` or `min <left> <right>`"),
    }

    Ok(())
}

fn parse(field: &str) -> Result<i64> {
    field
        .parse()
        .with_context(|| format!("`{field}` is not a signed 64-bit integer"))
}
