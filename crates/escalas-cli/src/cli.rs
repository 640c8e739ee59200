use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "escalas",
    version,
    about = "Clinical assessment scales: score, interpret and keep a history"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Result log, overriding the config file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available scales by category
    Scales(ScalesCommand),
    /// Show a scale's form with the current selections and live score
    Show(ShowCommand),
    /// Score a scale, optionally saving the result
    Score(ScoreCommand),
    /// List saved results, most recent first
    History(HistoryCommand),
    /// Delete one saved result
    Delete(DeleteCommand),
    /// Delete every saved result
    Clear(ClearCommand),
    /// Print the effective configuration
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct ScalesCommand {
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowCommand {
    pub scale: String,
    /// Selections as key=value
    pub selections: Vec<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub scale: String,
    /// Selections as key=value; unspecified parameters keep their defaults
    pub selections: Vec<String>,
    #[arg(long)]
    pub save: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DeleteCommand {
    pub id: String,
}

#[derive(Args)]
pub struct ClearCommand {
    /// Confirm deleting the whole history
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ConfigCommand {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub init: bool,
}
