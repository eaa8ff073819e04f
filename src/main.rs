use std::path::PathBuf;

use clap::Parser;
use create_mosaia_tool::{AppError, logging};

#[derive(Parser)]
#[command(name = "create-mosaia-tool")]
#[command(version)]
#[command(about = "Scaffold a new Mosaia tool project from the starter template", long_about = None)]
struct Cli {
    /// Directory to create (defaults to a slug of the tool display name)
    target: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = create_mosaia_tool::create(cli.target).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
