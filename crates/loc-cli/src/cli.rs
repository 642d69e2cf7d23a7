use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use loc_types::LocaleConfig;

#[derive(Parser)]
#[command(
    name = "loc",
    about = "Keep translation files in step with a reference locale",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log each dropped key and other debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with locale settings; flags override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub locales: LocaleArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reorder the target file's keys to follow the reference file
    Align(AlignArgs),
    /// List keys missing from or extra in the target file
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct LocaleArgs {
    /// Directory holding one subdirectory per locale
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
    /// Reference locale code
    #[arg(long, global = true)]
    pub reference: Option<String>,
    /// Target locale code
    #[arg(long, global = true)]
    pub target: Option<String>,
    /// Translation file name inside each locale directory
    #[arg(long, global = true)]
    pub file_name: Option<String>,
}

impl LocaleArgs {
    /// Overwrite the fields of `config` that were given on the command line.
    pub fn apply(self, config: &mut LocaleConfig) {
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(reference) = self.reference {
            config.reference = reference;
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(file_name) = self.file_name {
            config.file_name = file_name;
        }
    }
}

#[derive(Args)]
pub struct AlignArgs {
    /// Output file, relative to the current directory rather than --root
    /// (default: <root>/<target>_aligned.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Show the changes instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Exit with a failure status if any key differs
    #[arg(long)]
    pub strict: bool,
}
