use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use jsonfmt::highlight;
use jsonfmt::pipeline::{FormatConfig, Pipeline, EXIT_FAILURE, EXIT_SUCCESS};

/// JSON formatter and validator for large files.
#[derive(Parser)]
#[command(name = "jsonfmt", version, about = "JSON formatter and validator for large files")]
struct Cli {
    /// Input JSON file to process
    input_file: PathBuf,

    /// Output file for formatted JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only validate the JSON without formatting
    #[arg(long)]
    validate: bool,

    /// Display the formatted JSON with syntax highlighting
    #[arg(long)]
    display: bool,

    /// Number of spaces for indentation
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Sort object keys alphabetically
    #[arg(long)]
    sort_keys: bool,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let pipeline = Pipeline::new(FormatConfig {
        indent: cli.indent,
        sort_keys: cli.sort_keys,
    });

    // Validation always runs first; an invalid document never reaches the
    // formatter.
    if let Err(err) = pipeline.validate(&cli.input_file) {
        eprintln!("\x1b[31mJSON validation error: {err}\x1b[0m");
        return EXIT_FAILURE;
    }

    let output = match cli.output {
        Some(ref path) if !cli.validate => path,
        _ => {
            println!("\x1b[32mJSON is valid\x1b[0m");
            return EXIT_SUCCESS;
        }
    };

    match pipeline.format_to_file(&cli.input_file, output) {
        Ok(()) => {
            println!(
                "\x1b[32mJSON formatted successfully and saved to {}\x1b[0m",
                output.display()
            );
            if cli.display {
                display(output);
            }
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("\x1b[31mError during formatting: {err}\x1b[0m");
            EXIT_FAILURE
        }
    }
}

/// Prints the freshly written file with syntax highlighting. Failures here
/// are reported but do not affect the exit status.
fn display(path: &Path) {
    let rendered = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| highlight::highlight(&text).map_err(|e| e.to_string()));
    match rendered {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("\x1b[31mError displaying JSON: {err}\x1b[0m"),
    }
}
