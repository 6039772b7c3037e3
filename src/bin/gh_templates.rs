use std::path::PathBuf;

use clap::Parser;

use jsonfmt::pipeline::EXIT_FAILURE;
use jsonfmt::templates;

/// Generate GitHub issue and PR templates.
#[derive(Parser)]
#[command(
    name = "gh-templates",
    version,
    about = "Generate GitHub issue and PR templates"
)]
struct Cli {
    /// Output directory for templates
    #[arg(long, default_value = ".github")]
    output_dir: PathBuf,

    /// Specific templates to generate (default: all)
    #[arg(long, num_args = 0..)]
    templates: Option<Vec<String>>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();

    let written = match templates::generate(&cli.output_dir, cli.templates.as_deref()) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("\x1b[31mError generating templates: {err}\x1b[0m");
            std::process::exit(EXIT_FAILURE);
        }
    };

    println!("Generated templates:");
    for path in &written {
        println!("- {}", path.display());
    }
}
