use std::path::PathBuf;

use clap::Parser;

use docx::Config;

#[derive(Parser)]
#[command(name = "docx")]
#[command(about = "Convert Markdown files to DOCX")]
struct Cli {
    /// Input Markdown files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output DOCX file (defaults to input name with .docx extension);
    /// only valid with a single input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.output.is_some() && cli.inputs.len() > 1 {
        eprintln!("Error: --output cannot be used with multiple inputs");
        std::process::exit(1);
    }

    let config = cli
        .config
        .map(|path| Config::load(&path))
        .unwrap_or_default();

    let mut failed = false;
    for input in &cli.inputs {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| input.with_extension("docx"));

        match docx::convert_file(input, &output, &config) {
            Ok(()) => println!("Created {}", output.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
