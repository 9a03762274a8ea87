use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ackr",
    about = "Generate Settings.bundle acknowledgement plists from Carthage and CocoaPods checkouts",
    version
)]
pub struct Cli {
    /// Input folder(s) to scan, e.g. Carthage/Checkouts (repeatable)
    #[arg(short, long, value_name = "DIR")]
    pub input: Vec<PathBuf>,

    /// Output folder, e.g. MyProject/Settings.bundle
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Maximum folder depth to look for licenses [default: 1]
    #[arg(short = 'd', long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Do not remove existing license plists before generating
    #[arg(short = 'n', long)]
    pub no_clean: bool,

    /// Config file [default: ./.ackr/config.toml, fallback ~/.config/ackr/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print progress output (errors are still reported)
    #[arg(short, long)]
    pub quiet: bool,
}
