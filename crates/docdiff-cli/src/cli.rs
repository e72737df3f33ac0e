use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docdiff",
    about = "Structured document comparison with classified differences",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two documents and report classified differences
    Compare(CompareArgs),
    /// Check one document's syntax
    Check(CheckArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    pub input1: String,
    pub input2: String,

    /// Treat the inputs as inline content instead of file paths
    #[arg(long)]
    pub content: bool,

    /// Declared format (json, docx, text); detected when omitted
    #[arg(short = 't', long)]
    pub file_type: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    pub input: String,

    /// Language to check; derived from the file extension when omitted
    #[arg(short, long)]
    pub language: Option<String>,
}
