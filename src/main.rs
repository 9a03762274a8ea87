//! `ackr` — acknowledgements generator for iOS `Settings.bundle` folders.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the optional config file ([`config::load_config`]).
//! 3. Resolve input and output folders, auto-detecting conventional
//!    Carthage/CocoaPods/Settings.bundle locations when unset ([`detector`]).
//! 4. Run the pipeline ([`pipeline::generate`]): prepare and optionally
//!    clean the `Licenses` folder ([`cleanup`]), scan every input folder for
//!    license files ([`scanner`]), normalize each license text
//!    ([`normalize`]), and write one plist per dependency plus the
//!    `Acknowledgements.plist` index ([`emitter`]).
//! 5. Exit `0` on success, `2` when no usable input or output folder could
//!    be resolved.

mod cleanup;
mod cli;
mod config;
mod detector;
mod emitter;
mod models;
mod normalize;
mod pipeline;
mod scanner;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::load_config;
use emitter::plist::PlistWriter;
use pipeline::Options;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    // CLI arguments win over the config file; anything still unset falls
    // back to auto-detection and the built-in defaults.
    let mut input_folders = if cli.input.is_empty() {
        config.input
    } else {
        cli.input
    };
    if input_folders.is_empty() {
        input_folders = detector::find_input_folders(&cwd);
    }
    if input_folders.is_empty() {
        eprintln!(
            "{} input folder(s) could not be detected, please specify with -i or --input",
            "error:".red()
        );
        std::process::exit(2);
    }
    for folder in &input_folders {
        if !folder.is_dir() {
            eprintln!(
                "{} input folder {} doesn't exist or is not a folder",
                "error:".red(),
                folder.display()
            );
            std::process::exit(2);
        }
    }

    let output_folder = cli
        .output
        .or(config.output)
        .or_else(|| detector::find_output_folder(&cwd));
    let Some(output_folder) = output_folder else {
        eprintln!(
            "{} output folder could not be detected, please specify with -o or --output",
            "error:".red()
        );
        std::process::exit(2);
    };

    if !cli.quiet {
        let folders: Vec<String> = input_folders
            .iter()
            .map(|folder| folder.display().to_string())
            .collect();
        println!("Input folder(s): {}", folders.join(" and "));
        println!("Output folder: {}", output_folder.display());
    }

    let options = Options {
        max_depth: cli.max_depth.or(config.max_depth).unwrap_or(1),
        clean_up: !cli.no_clean && config.clean_up.unwrap_or(true),
        quiet: cli.quiet,
    };

    pipeline::generate(&input_folders, &output_folder, &options, &PlistWriter)?;

    Ok(())
}
