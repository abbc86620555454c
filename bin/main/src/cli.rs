use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anekamacam", version, about = "Chess rules engine for the terminal")]
pub struct Cli {
    /// YAML configuration file, overriding ANEKAMACAM_CONFIG
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Starting setup: standard, fischer-random or two-rooks
    #[arg(short, long, global = true)]
    pub setup: Option<String>,

    /// Seed for randomised setups
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Validate promotion specifiers before moving the pawn
    #[arg(long, global = true)]
    pub strict_promotion: bool,

    /// Start from a FEN string instead of a setup
    #[arg(long, global = true)]
    pub fen: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read moves from stdin, one or more per line
    Play,

    /// Replay a PGN-style move list
    Replay {
        file: PathBuf,
    },

    /// Print Fischer-random back ranks
    BackRank {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}
