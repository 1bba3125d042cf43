//! Classplot CLI - Compile class hierarchy models into PlantUML

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialised by `run` once flags and environment are known
    let mut app = cli::ClassplotApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
