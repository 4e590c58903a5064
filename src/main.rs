use anyhow::Context;
use clap::Parser;
use employee_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(&args).context("employee_processor failed") {
        Ok(_stats) => {
            // Report and summary have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
