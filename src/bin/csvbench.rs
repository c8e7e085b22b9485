//! Offline CSV benchmark
//!
//! Runs the same benchmark as the server's `/sort` route on a local file and
//! prints a Markdown report.
//!
//! Usage:
//!   csvbench [--millis] input.csv column [output.md]
//!
//! Timings are in nanoseconds unless `--millis` is given.
//! If output is not specified, prints to stdout.

use std::env;
use std::fs;
use std::path::Path;

use csv_sort_bench::report::to_markdown_table;
use csv_sort_bench::service::benchmark_csv;
use csv_sort_bench::TimingUnit;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let unit = if take_flag(&mut args, "--millis") {
        TimingUnit::Millis
    } else {
        TimingUnit::Nanos
    };

    if args.len() < 3 {
        eprintln!("Usage: {} [--millis] <input.csv> <column> [output.md]", args[0]);
        eprintln!();
        eprintln!("Benchmarks five sorting algorithms on a numeric CSV column.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  input.csv     Path to a comma-separated file with a header row");
        eprintln!("  column        Header name of the numeric column (case-insensitive)");
        eprintln!("  output.md     Optional output path (prints to stdout if not specified)");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --millis      Report timings in milliseconds (default: nanoseconds)");
        std::process::exit(1);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let input_path = Path::new(&args[1]);
    let column = &args[2];

    let content = match fs::read_to_string(input_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading input file: {}", e);
            std::process::exit(1);
        }
    };

    let report = match benchmark_csv(&content, column, unit) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let markdown = to_markdown_table(&report, &input_path.display().to_string(), column);

    if args.len() >= 4 {
        let output_path = Path::new(&args[3]);
        match fs::write(output_path, &markdown) {
            Ok(()) => {
                println!("Markdown report written to: {}", output_path.display());
            }
            Err(e) => {
                eprintln!("Error writing output file: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", markdown);
    }
}

/// Remove every occurrence of `flag` from `args`, reporting whether it was present.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}
