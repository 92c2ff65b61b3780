pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// asciify - Convert images into ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
