pub mod demo;
pub mod find;
pub mod total;

use clap::{ArgAction, Parser, Subcommand};
use florist_common::config::{Config, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

#[derive(Parser)]
#[command(name = "florist")]
#[command(about = "A tiny flower shop bouquet inventory.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the version banner first
    #[arg(long, global = true)]
    pub banner: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Shortest stem length to look for, in cm
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH, allow_negative_numbers = true, global = true)]
    pub min_length: f64,

    /// Longest stem length to look for, in cm
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, allow_negative_numbers = true, global = true)]
    pub max_length: f64,
}

#[derive(Subcommand, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Walk through the sample bouquet (default)
    #[default]
    #[command(alias = "d")]
    Demo,
    /// Print the total cost of the sample bouquet
    #[command(alias = "t")]
    Total,
    /// List sample flowers within the stem length range
    #[command(alias = "f")]
    Find,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            banner: self.banner,
            verbose: self.verbose,
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }
}
