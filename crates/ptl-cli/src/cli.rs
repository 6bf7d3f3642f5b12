use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ptl",
    about = "Product Trace Ledger — append-only product histories over a key-value store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State snapshot file (overrides the config file)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the bootstrap value
    Init(InitArgs),
    /// Run a mutating operation
    Invoke(OperationArgs),
    /// Run a read-only operation
    Query(OperationArgs),
    /// List the decoded history of a product
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    pub value: String,
}

#[derive(Args, Debug)]
pub struct OperationArgs {
    pub operation: String,
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub product_id: String,
}
