use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use roman_words::{get_result, run_files};

/// roman-words evaluates Roman numeral arithmetic such as `IV * III` and
/// writes each result in English words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to read expressions from, one per line.
    #[arg(short, long, default_value = "Input.txt")]
    input: PathBuf,

    /// File to write the results to. It is created or truncated.
    #[arg(short, long, default_value = "Output.txt")]
    output: PathBuf,

    /// Evaluates a single expression and prints the result instead of
    /// processing files.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(expression) = args.expression {
        println!("{}", get_result(&expression));
        return;
    }

    if let Err(e) = run_files(&args.input, &args.output) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    println!("Processing complete. Check {} for results.", args.output.display());
}
