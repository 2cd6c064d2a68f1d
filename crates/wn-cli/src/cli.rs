use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wnwalk",
    about = "Walk the sense and relation graph of a lexical snapshot",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log lookups and visits to stderr
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

#[derive(Subcommand)]
pub enum Command {
    /// Render the traversal of one or more lemmas
    Walk(WalkArgs),
    /// Show the base forms of an irregular inflection
    Morph(MorphArgs),
    /// List the built-in content types
    ContentTypes,
}

#[derive(Args)]
pub struct WalkArgs {
    /// Snapshot file (.json, or bincode otherwise)
    #[arg(short, long)]
    pub data: PathBuf,
    /// Walk configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Deepest level a recursive branch may reach
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Do not expand a synset already on its branch
    #[arg(long)]
    pub detect_cycles: bool,
    /// Skip senses without a sense entry instead of failing
    #[arg(long)]
    pub skip_inconsistent: bool,
    #[arg(required = true)]
    pub lemmas: Vec<String>,
}

#[derive(Args)]
pub struct MorphArgs {
    /// Snapshot file (.json, or bincode otherwise)
    #[arg(short, long)]
    pub data: PathBuf,
    /// Part of speech (noun, verb, adjective, adverb, or n/v/a/r)
    #[arg(short, long)]
    pub pos: Option<String>,
    pub form: String,
}
