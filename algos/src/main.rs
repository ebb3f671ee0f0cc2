use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use algos::{Algorithm, HashParams, source::load_text, timing};
use clap::Parser;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Unit {
    /// Offsets count UTF-8 bytes
    Bytes,
    /// Offsets count characters
    Chars,
}

/// Example:
/// cargo run --release -- -t data/article1.txt --pattern "логарифмічний пошук" --unit chars
/// cargo run --release -- -t data/article1.txt -t data/article2.txt --pattern NON_EXISTING_TEST_PATTERN -a kmp --measure-time --repeat 100
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Find the first occurrence of one or more patterns in one or more texts"
)]
struct Cli {
    /// Algorithms to run; all of them when omitted
    #[arg(short, long, value_enum)]
    algo: Vec<Algorithm>,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Vec<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    #[arg(short = 'e', long = "encoding", default_value = "utf8")]
    encoding: String,

    #[arg(long, value_enum, default_value = "bytes")]
    unit: Unit,

    /// Radix of the Rabin-Karp rolling hash
    #[arg(long = "rk-base", default_value_t = algos::DEFAULT_BASE)]
    rk_base: u64,

    /// Modulus of the Rabin-Karp rolling hash
    #[arg(
        long = "rk-modulus",
        default_value_t = algos::DEFAULT_MODULUS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    rk_modulus: u64,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,

    /// How many times each search runs when measuring
    #[arg(long, default_value_t = 1, requires = "measure_time")]
    repeat: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let encoding = cli.encoding.to_lowercase();
    if encoding != "utf8" && encoding != "utf-8" {
        return Err(format!(
            "Only UTF-8 encoding is supported at the moment (got {})",
            cli.encoding
        )
        .into());
    }

    let patterns = load_patterns(&cli)?;
    let algorithms: Vec<Algorithm> = if cli.algo.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algo.clone()
    };
    let params = HashParams::new(cli.rk_base, cli.rk_modulus);

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithms={:?}, encoding={}, unit={:?}, patterns={}",
        algorithms,
        encoding,
        cli.unit,
        patterns.len()
    )?;

    for text_path in cli.texts.iter() {
        let text = load_text(text_path)?;
        writeln!(out, "text={:?}", text_path)?;

        for pattern in &patterns {
            for &algo in &algorithms {
                let measured = run_algorithm(&cli, algo, params, &text, pattern);

                writeln!(out, "algorithm={} pattern={:?}", algo.name(), pattern)?;
                if cli.measure_time {
                    writeln!(
                        out,
                        "execution_time: {}ns runs: {} per_run: {}ns",
                        measured.total.as_nanos(),
                        measured.runs,
                        measured.per_run().as_nanos()
                    )?;
                }
                match measured.result {
                    Some(pos) => writeln!(out, "match: {}", pos)?,
                    None => writeln!(out, "match: none")?,
                }
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_patterns(cli: &Cli) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if !cli.pattern.is_empty() {
        Ok(cli.pattern.clone())
    } else if let Some(ref path) = cli.pattern_file {
        let pattern = load_text(path)?;
        Ok(vec![pattern.trim_end_matches(['\r', '\n']).to_string()])
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn run_algorithm(
    cli: &Cli,
    algo: Algorithm,
    params: HashParams,
    text: &str,
    pattern: &str,
) -> timing::Measurement<Option<usize>> {
    let repeat = if cli.measure_time { cli.repeat } else { 1 };

    match cli.unit {
        Unit::Bytes => timing::measure(repeat, || {
            algo.search_with(params, text.as_bytes(), pattern.as_bytes())
        }),
        Unit::Chars => {
            let text: Vec<char> = text.chars().collect();
            let pattern: Vec<char> = pattern.chars().collect();
            timing::measure(repeat, || algo.search_with(params, &text, &pattern))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repeat_without_measure_time_is_rejected() {
        let err = Cli::try_parse_from([
            "string-search",
            "-t",
            "a.txt",
            "--pattern",
            "x",
            "--repeat",
            "5",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn repeat_with_measure_time_is_accepted() {
        let cli = Cli::try_parse_from([
            "string-search",
            "-t",
            "a.txt",
            "--pattern",
            "x",
            "--measure-time",
            "--repeat",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.repeat, 5);
        assert!(cli.measure_time);
    }

    #[test]
    fn repeat_defaults_to_one_without_measuring() {
        let cli = Cli::try_parse_from(["string-search", "-t", "a.txt", "--pattern", "x"]).unwrap();
        assert_eq!(cli.repeat, 1);
        assert!(!cli.measure_time);
    }
}
