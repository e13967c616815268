use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use iterops::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "iterops", about = "Apply functional iterator operations to lines of text")]
struct Cli {
    /// Read lines from this file instead of stdin.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Join all lines into one.
    Join {
        /// Text placed between lines.
        #[arg(long, default_value = ", ")]
        separator: String,
        /// Text placed before the first line.
        #[arg(long, default_value = "")]
        prefix: String,
        /// Text placed after everything else.
        #[arg(long, default_value = "")]
        postfix: String,
        /// Render at most this many lines; negative means all.
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        limit: isize,
        /// Marker appended when lines were cut off by --limit.
        #[arg(long, default_value = "...")]
        truncated: String,
        /// Render empty lines as `null`.
        #[arg(long)]
        blank_as_null: bool,
    },
    /// Count lines, or only those containing a pattern.
    Count {
        /// Substring a line must contain to be counted.
        #[arg(long)]
        contains: Option<String>,
    },
    /// Print the first line containing a pattern. Exits with 1 when none does.
    Find {
        /// Substring to look for.
        #[arg(long)]
        contains: String,
    },
    /// Print lines containing a pattern.
    Filter {
        /// Substring to look for.
        #[arg(long)]
        contains: String,
        /// Print lines that do not contain the pattern instead.
        #[arg(long)]
        invert: bool,
    },
    /// Print the leading lines that start with a prefix.
    TakeWhile {
        /// Prefix each printed line starts with.
        #[arg(long)]
        prefix: String,
    },
    /// Group lines by a key, in first-seen key order.
    Group {
        /// Key to group by.
        #[arg(long, value_enum)]
        by: GroupKey,
        /// Field delimiter for `--by field`.
        #[arg(long, default_value = "\t")]
        delimiter: String,
        /// Zero-based field index for `--by field`.
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Print lines in reverse order.
    Reverse,
    /// Print the distinct lines, sorted.
    Sorted,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GroupKey {
    /// Line length in bytes.
    Length,
    /// First character of the line.
    FirstChar,
    /// A delimited field of the line.
    Field,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lines = read_lines(cli.input.as_deref())?;
    tracing::debug!(lines = lines.len(), "read input");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = run(cli.command, &lines, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(status)
}

fn run(command: Commands, lines: &[String], out: &mut impl Write) -> Result<ExitCode> {
    match command {
        Commands::Join {
            separator,
            prefix,
            postfix,
            limit,
            truncated,
            blank_as_null,
        } => {
            let joiner = Joiner::new()
                .with_separator(separator)
                .with_prefix(prefix)
                .with_postfix(postfix)
                .with_limit(limit)
                .with_truncated(truncated);
            run_join(lines, &joiner, blank_as_null, out)?;
        }
        Commands::Count { contains } => {
            let count = match contains {
                Some(pattern) => lines.iter().count_matching(|line| line.contains(&pattern)),
                None => lines.iter().count_matching(|_| true),
            };
            writeln!(out, "{count}")?;
        }
        Commands::Find { contains } => {
            match lines.iter().find_first(|line| line.contains(&contains)) {
                Some(line) => writeln!(out, "{line}")?,
                None => {
                    tracing::debug!(pattern = %contains, "no line matched");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Filter { contains, invert } => {
            let matches = |line: &&String| line.contains(&contains);
            let selected = if invert {
                lines.iter().filter_not_into(Vec::new(), matches)
            } else {
                lines.iter().filter_into(Vec::new(), matches)
            };
            print_lines(out, selected)?;
        }
        Commands::TakeWhile { prefix } => {
            let run = lines
                .iter()
                .take_while_into(Vec::new(), |line| line.starts_with(&prefix));
            print_lines(out, run)?;
        }
        Commands::Group {
            by,
            delimiter,
            index,
        } => run_group(lines, by, &delimiter, index, out)?,
        Commands::Reverse => print_lines(out, lines.iter().reversed())?,
        Commands::Sorted => print_lines(out, lines.iter().to_sorted_set())?,
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    match input {
        Some(path) => collect_lines(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input file {}", path.display())
        })?)),
        None => collect_lines(io::stdin().lock()),
    }
}

fn collect_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read input lines")
}

fn run_join(
    lines: &[String],
    joiner: &Joiner,
    blank_as_null: bool,
    out: &mut impl Write,
) -> Result<()> {
    if blank_as_null {
        let nullable = lines.iter().map(|line| Nullable((!line.is_empty()).then_some(line)));
        nullable.write_string(out, joiner)?;
    } else {
        lines.iter().write_string(out, joiner)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run_group(
    lines: &[String],
    by: GroupKey,
    delimiter: &str,
    index: usize,
    out: &mut impl Write,
) -> Result<()> {
    let groups: Vec<(Option<String>, Vec<&String>)> =
        lines.iter().group_by_into(Vec::new(), |line| match by {
            GroupKey::Length => Some(line.len().to_string()),
            GroupKey::FirstChar => line.chars().next().map(String::from),
            GroupKey::Field => line.split(delimiter).nth(index).map(str::to_string),
        });
    tracing::debug!(groups = groups.len(), ?by, "grouped lines");

    let joiner = Joiner::new();
    for (key, members) in groups {
        writeln!(out, "{}: {}", Nullable(key), members.iter().make_string(&joiner))?;
    }
    Ok(())
}

fn print_lines<C>(out: &mut impl Write, lines: C) -> Result<()>
where
    C: IntoIterator,
    C::Item: std::fmt::Display,
{
    let joiner = Joiner::new().with_separator("\n");
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_some() {
        lines.write_string(out, &joiner)?;
        writeln!(out)?;
    }
    Ok(())
}
