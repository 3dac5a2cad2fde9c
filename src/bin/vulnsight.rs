// src/bin/vulnsight.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use vulnsight_core::cli::{handlers, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    handlers::run(&cli)?;
    Ok(())
}
