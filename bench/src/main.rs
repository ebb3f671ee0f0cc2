use std::path::Path;
use std::time::Duration;

use algos::{Algorithm, source::load_text, timing};

// Configuration
const REPEAT: usize = 100;
const FAKE_PATTERN: &str = "NON_EXISTING_TEST_PATTERN";

/// Each text with a pattern known to occur in it.
const TEXTS: &[(&str, &str)] = &[
    ("data/article1.txt", "логарифмічний пошук"),
    ("data/article2.txt", "наведено результати"),
];

#[derive(Debug)]
struct ResultEntry {
    algo: Algorithm,
    file: String,
    pattern_kind: &'static str,
    found: Option<usize>,
    duration: Duration,
}

#[derive(Debug)]
struct Mismatch {
    file: String,
    pattern_kind: &'static str,
    expected: Option<usize>,
    actual: Option<usize>,
    algo: Algorithm,
}

fn main() {
    env_logger::init();
    println!("--- Starting Search Benchmark ---");

    let mut loaded = Vec::new();
    for (path, real) in TEXTS {
        match load_text(Path::new(path)) {
            Ok(text) => loaded.push((*path, text.chars().collect::<Vec<char>>(), *real)),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let mut results: Vec<ResultEntry> = Vec::new();

    for algo in Algorithm::ALL {
        for (path, text, real) in &loaded {
            for (pattern_kind, pattern) in [("Real", *real), ("Fake", FAKE_PATTERN)] {
                println!("> Running {} on {} ({})", algo.name(), path, pattern_kind);

                let pattern: Vec<char> = pattern.chars().collect();
                let measured = timing::measure(REPEAT, || algo.search(text, &pattern));

                results.push(ResultEntry {
                    algo,
                    file: path.to_string(),
                    pattern_kind,
                    found: measured.result,
                    duration: measured.total,
                });
            }
        }
    }

    print_summary_table(&results);

    let mismatches = find_mismatches(&results);
    if mismatches.is_empty() {
        println!("All algorithms agree on every match position.");
    } else {
        for m in &mismatches {
            eprintln!(
                "  ! {} on {} ({}): expected {:?}, got {:?}",
                m.algo.name(),
                m.file,
                m.pattern_kind,
                m.expected,
                m.actual
            );
        }
        std::process::exit(1);
    }
}

/// KMP is the reference every other algorithm is checked against.
fn find_mismatches(results: &[ResultEntry]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for reference in results.iter().filter(|r| r.algo == Algorithm::Kmp) {
        for other in results.iter().filter(|r| {
            r.algo != Algorithm::Kmp
                && r.file == reference.file
                && r.pattern_kind == reference.pattern_kind
        }) {
            if other.found != reference.found {
                mismatches.push(Mismatch {
                    file: other.file.clone(),
                    pattern_kind: other.pattern_kind,
                    expected: reference.found,
                    actual: other.found,
                    algo: other.algo,
                });
            }
        }
    }

    mismatches
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^60}", " RESULTS SUMMARY ");
    println!(
        "{:<15} | {:<12} | {:<12} | {:<10}",
        "Algorithm", "Article", "Pattern Type", "Time (sec)"
    );
    println!("{:-^60}", "");

    for entry in results {
        let short_file = Path::new(&entry.file)
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<15} | {:<12} | {:<12} | {:.5}",
            entry.algo.name(),
            short_file,
            entry.pattern_kind,
            entry.duration.as_secs_f64()
        );
    }
    println!("{:-^60}", "");

    for (path, _) in TEXTS {
        for kind in ["Real", "Fake"] {
            let fastest = results
                .iter()
                .filter(|r| r.file == *path && r.pattern_kind == kind)
                .min_by_key(|r| r.duration);
            if let Some(best) = fastest {
                println!("fastest on {} ({}): {}", path, kind, best.algo.name());
            }
        }
    }
    println!("{:=^60}", " END ");
}
