//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Binary tree laboratory: random tree generation and classic traversal algorithms
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging, multiple flags increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Number of nodes to generate (overrides config)
    #[arg(short, long, global = true)]
    pub nodes: Option<usize>,

    /// Exclusive upper bound for node values (overrides config)
    #[arg(short, long, global = true)]
    pub modulus: Option<u32>,

    /// Seed for a reproducible tree; omit for OS entropy
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the generated tree as an ASCII hierarchy
    Tree,

    /// Run a single traversal and print the visited values
    Traverse {
        /// Traversal algorithm
        #[arg(short, long, value_enum, default_value = "level")]
        order: Order,

        /// Mirror the tree before traversing
        #[arg(long)]
        mirror: bool,
    },

    /// Run every traversal over one generated tree, ending in teardown
    Demo,

    /// Show effective settings
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal algorithms exposed on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Level order grouped by recorded depth
    Level,
    /// Level order grouped by queue-length probing
    LevelQlen,
    /// Recursive pre-order
    Pre,
    /// Iterative pre-order using an explicit stack
    PreIter,
    /// Morris pre-order, O(1) auxiliary space
    MorrisPre,
    /// Recursive in-order
    In,
    /// Morris in-order, O(1) auxiliary space
    MorrisIn,
    /// Leftmost node of each level
    LeftView,
    /// Nodes visible from above, by horizontal offset
    TopView,
    /// Level order with alternating scan direction
    Zigzag,
    /// Two-stack spiral, first level below root right-to-left
    Spiral,
    /// Two-stack spiral with the opposite starting direction
    Rspiral,
}
